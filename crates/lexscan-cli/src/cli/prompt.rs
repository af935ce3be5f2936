//! Line-oriented prompts over any reader/writer pair.

use anyhow::Result;
use lexscan_core::LexscanError;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` without a newline and reads one line.
    /// End of input is reported as [`LexscanError::UserCancelled`].
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LexscanError::UserCancelled.into());
        }
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    /// Like [`ask`](Self::ask) but maps end of input to `None`.
    pub fn ask_or_eof(&mut self, question: &str) -> Result<Option<String>> {
        match self.ask(question) {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<LexscanError>(),
        Some(LexscanError::UserCancelled)
    )
}
