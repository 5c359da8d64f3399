//! Interactive checkpoint prompt
//!
//! Protocol: the human answers `yes`/`y`, `no`/`n` or `edit` (any case).
//! Anything else re-prompts. `edit` captures lines until a blank line and
//! returns them joined with newlines.

use crate::pipeline::{Checkpoint, CheckpointDecision, DecisionProvider};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Console I/O failed")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Edit,
}

pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(Choice::Yes),
        "no" | "n" => Some(Choice::No),
        "edit" => Some(Choice::Edit),
        _ => None,
    }
}

pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl ConsolePrompt<StdinLock<'static>, Stderr> {
    /// Prompts on stderr so stdout carries only machine-readable output.
    pub fn stdin_stderr() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input. Invalid UTF-8 is replaced, not rejected.
    fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn ask_choice(&mut self, question: &str) -> Result<Option<Choice>, PromptError> {
        loop {
            write!(self.output, "{} (yes / no / edit) > ", question)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            if let Some(choice) = parse_choice(&line) {
                return Ok(Some(choice));
            }
            writeln!(self.output, "Please enter 'yes', 'no' or 'edit'.")?;
        }
    }

    /// Collects lines until a blank line or end of input.
    pub fn read_multiline(&mut self, header: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{}", header)?;
        writeln!(
            self.output,
            "(Enter your edited text. Finish by entering a blank line on its own.)"
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n").trim().to_string())
    }
}

impl<R: BufRead, W: Write> DecisionProvider for ConsolePrompt<R, W> {
    fn decide(&mut self, checkpoint: &Checkpoint) -> anyhow::Result<CheckpointDecision> {
        writeln!(self.output).map_err(PromptError::from)?;

        let decision = match self.ask_choice(checkpoint.prompt)? {
            Some(Choice::Yes) => CheckpointDecision::Proceed,
            Some(Choice::No) => CheckpointDecision::Abort,
            Some(Choice::Edit) => {
                let text = self.read_multiline(checkpoint.edit_header)?;
                if text.is_empty() {
                    writeln!(self.output, "No text entered, continuing unchanged.")
                        .map_err(PromptError::from)?;
                } else {
                    writeln!(self.output, "Edited text saved for next steps.")
                        .map_err(PromptError::from)?;
                }
                CheckpointDecision::ProceedWithEdit(text)
            }
            None => {
                warn!(stage = checkpoint.stage, "Input closed at checkpoint, stopping");
                CheckpointDecision::Abort
            }
        };
        Ok(decision)
    }
}
