use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fmt::Display;
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::str::FromStr;

/// ConsolePrompter collects required values that were not given on the
/// command line or in the config file.
///
/// Questions go to stderr so an interactive run can still pipe the report.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stderr> {
    /// Prompter reading stdin and writing to stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks `question` and returns the trimmed, non-empty answer
    ///
    /// # Errors
    /// `AuditError::InvalidInput` on end of input, an empty answer or
    /// input that is not UTF-8
    pub fn ask(&mut self, field: &str, question: &str) -> Result<String> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                anyhow::Error::from(invalid(field, "input is not valid UTF-8"))
            }
            _ => anyhow::Error::from(e),
        })?;
        if read == 0 {
            return Err(invalid(field, "no input provided").into());
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Err(invalid(field, "a value is required").into());
        }
        Ok(answer.to_string())
    }

    /// Asks `question` and parses the answer with `FromStr`
    pub fn ask_parsed<T>(&mut self, field: &str, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(field, question)?;
        answer
            .parse()
            .map_err(|e: T::Err| invalid(field, &e.to_string()).into())
    }
}

fn invalid(field: &str, reason: &str) -> AuditError {
    AuditError::InvalidInput {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
