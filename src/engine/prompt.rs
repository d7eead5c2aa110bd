// src/engine/prompt.rs

//! Line-oriented prompting for task/dependency counts.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::errors::Result;

/// Asks questions on `output` and reads answers from `input`.
///
/// Blank lines are skipped the way a whitespace-skipping reader would skip
/// them; malformed answers are reported and the question is asked again.
/// End of input is surfaced as `None` / `false` so the caller can wind down.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the prompts go to, for callers that print between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask for an integer, e.g. `Enter the value of N: `.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn ask_integer(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            write!(self.output, "Enter the value of {label}: ")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            writeln!(self.output)?;

            match token.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(%token, %err, "rejected integer input");
                    writeln!(self.output, "Invalid input. Please enter a valid integer.")?;
                }
            }
        }
    }

    /// Ask whether to run another round. Only `y`/`Y` means yes.
    pub fn ask_another(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        write!(
            self.output,
            "Do you want to try another? [y for yes and press any key to exit]: "
        )?;
        self.output.flush()?;

        let Some(token) = self.next_token()? else {
            return Ok(false);
        };
        writeln!(self.output)?;

        Ok(matches!(token.chars().next(), Some('y' | 'Y')))
    }

    /// First whitespace-separated token of the next non-blank line.
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
