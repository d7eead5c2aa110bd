use std::io::Cursor;

use dagsched::dag::{GeneratorOptions, GraphGenerator};
use dagsched::engine::{Planner, Prompter, Session};
use dagsched::fs::mock::MockFileSystem;
use dagsched::report::ResultsLog;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>, StdRng, MockFileSystem>;

pub const RESULTS_FILE: &str = "results/task_scheduling_results.txt";

pub fn seeded_generator(seed: u64) -> GraphGenerator<StdRng> {
    GraphGenerator::new(StdRng::seed_from_u64(seed))
}

pub fn capped_generator(seed: u64, max_attempts: u64) -> GraphGenerator<StdRng> {
    GraphGenerator::with_options(
        StdRng::seed_from_u64(seed),
        GeneratorOptions {
            max_attempts: Some(max_attempts),
        },
    )
}

/// Session fed from `input` lines, printing into a `Vec<u8>` and saving into
/// `fs` at [`RESULTS_FILE`].
pub fn scripted_session(lines: &[&str], seed: u64, fs: &MockFileSystem) -> ScriptedSession {
    let mut input = lines.join("\n");
    input.push('\n');

    let prompter = Prompter::new(Cursor::new(input.into_bytes()), Vec::new());
    let planner = Planner::new(seeded_generator(seed));
    let log = ResultsLog::new(fs.clone(), RESULTS_FILE);

    Session::new(prompter, planner, Some(log))
}

/// Everything a scripted session printed.
pub fn console_output(session: ScriptedSession) -> String {
    let (_, out) = session.into_prompter().into_inner();
    String::from_utf8(out).expect("console output is UTF-8")
}
