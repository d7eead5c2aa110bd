// tests/integration/session.rs

use dagsched::engine::runtime::{RoundOutcome, SessionSummary};
use dagsched::fs::mock::MockFileSystem;
use dagsched::types::GraphParams;
use dagsched_test_utils::fixtures::{RESULTS_FILE, console_output, scripted_session};

use crate::common::init_tracing;

fn record_count(fs: &MockFileSystem) -> usize {
    fs.contents(RESULTS_FILE)
        .map(|c| c.matches("Task Scheduling Attempt:").count())
        .unwrap_or(0)
}

#[test]
fn single_round_prints_and_saves() {
    init_tracing();
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["3", "2", "n"], 7, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(
        summary,
        SessionSummary {
            completed: 1,
            failed: 0
        }
    );

    let out = console_output(session);
    assert!(out.starts_with("Enter the value of N: \nEnter the value of M: \n"));
    assert!(out.contains("Generated Random Dependency Graph:\nTask 0 -> "));
    assert!(out.contains("Starting Topological Sorting:\nProcessing Task 0\n"));
    assert_eq!(out.matches("Processing Task").count(), 3);
    assert!(out.contains("Topological Order of Execution:\nTask "));
    assert!(out.contains(&format!("Results have been saved to '{RESULTS_FILE}'")));
    assert!(out.ends_with("Exiting the program\n"));

    let log = fs.contents(RESULTS_FILE).unwrap();
    assert_eq!(record_count(&fs), 1);
    assert!(log.contains("Number of Tasks: 3, Number of Dependencies: 2\n"));
}

#[test]
fn malformed_integers_are_asked_again() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["abc", "4", "3.5", "3", "n"], 1, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary.completed, 1);

    let out = console_output(session);
    assert_eq!(
        out.matches("Invalid input. Please enter a valid integer.")
            .count(),
        2
    );
    assert_eq!(out.matches("Enter the value of N: ").count(), 2);
    assert_eq!(out.matches("Enter the value of M: ").count(), 2);
    assert!(fs.contents(RESULTS_FILE).unwrap().contains("Number of Tasks: 4, Number of Dependencies: 3"));
}

#[test]
fn blank_lines_are_skipped() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["", "   ", "3", "", "0", "", "n"], 2, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary.completed, 1);

    let out = console_output(session);
    assert!(!out.contains("Invalid input"));
    assert_eq!(out.matches("Enter the value of N: ").count(), 1);
}

#[test]
fn invalid_parameters_are_reported_and_session_continues() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["0", "1", "y", "2", "1", "n"], 3, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(
        summary,
        SessionSummary {
            completed: 1,
            failed: 1
        }
    );

    let out = console_output(session);
    assert!(out.contains("Exception: Invalid number of tasks or dependencies"));
    assert_eq!(record_count(&fs), 1);
}

#[test]
fn infeasible_request_is_reported() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["2", "5", "n"], 4, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary.failed, 1);

    let out = console_output(session);
    assert!(out.contains("Exception: cannot place 5 dependencies among 2 tasks"));
    assert!(fs.contents(RESULTS_FILE).is_none());
}

#[test]
fn oversized_task_count_is_reported_not_fatal() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["9223372036854775807", "0", "y", "3", "1", "n"], 8, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(
        summary,
        SessionSummary {
            completed: 1,
            failed: 1
        }
    );

    let out = console_output(session);
    assert!(out.contains("Exception: Invalid number of tasks or dependencies: tasks = 9223372036854775807 exceeds the limit"));
    assert!(out.ends_with("Exiting the program\n"));
    assert_eq!(record_count(&fs), 1);
}

#[test]
fn answering_y_runs_another_round() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["2", "1", "Y", "4", "3", "N"], 5, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary.completed, 2);
    assert_eq!(record_count(&fs), 2);

    let out = console_output(session);
    assert_eq!(
        out.matches("Do you want to try another? [y for yes and press any key to exit]: ")
            .count(),
        2
    );
}

#[test]
fn end_of_input_ends_the_session() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&["5"], 6, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary, SessionSummary::default());

    let out = console_output(session);
    assert!(out.ends_with("Exiting the program\n"));
    assert!(fs.contents(RESULTS_FILE).is_none());
}

#[test]
fn play_round_reports_end_of_input() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&[], 6, &fs);

    assert_eq!(session.play_round().unwrap(), RoundOutcome::EndOfInput);
}

#[test]
fn unwritable_log_does_not_fail_the_round() {
    let fs = MockFileSystem::new();
    fs.set_fail_appends(true);
    let mut session = scripted_session(&["3", "1", "n"], 8, &fs);

    let summary = session.run_interactive().unwrap();
    assert_eq!(summary.completed, 1);

    let out = console_output(session);
    assert!(out.contains("Error writing results to"));
    assert!(!out.contains("Results have been saved"));
}

#[test]
fn run_once_plans_and_saves_without_prompting() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&[], 9, &fs);

    let schedule = session
        .run_once(GraphParams::new(5, 4).unwrap())
        .unwrap();

    assert!(schedule.order.is_consistent_with(&schedule.graph));
    assert_eq!(record_count(&fs), 1);

    let out = console_output(session);
    assert!(!out.contains("Enter the value"));
    assert!(out.contains("Topological Order of Execution:"));
}

#[test]
fn run_once_propagates_errors() {
    let fs = MockFileSystem::new();
    let mut session = scripted_session(&[], 10, &fs);

    assert!(session.run_once(GraphParams::new(2, 3).unwrap()).is_err());
}
