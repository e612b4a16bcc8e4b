//! Input and output collaborators for the game loop.

use anyhow::{Context, Result, bail};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};
use tracing::{debug, instrument};

/// Where the game reads answers and writes text.
///
/// `prompt` blocks until the user answers; there is no timeout.
pub trait Console {
    /// Shows `text` and waits for one line of input.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Shows a block of text.
    fn show(&mut self, text: &str) -> Result<()>;
}

/// Console on the process's stdin/stdout.
///
/// Interactive terminals get a dialoguer prompt; piped input is read line by
/// line so scripted sessions work too.
#[derive(Debug)]
pub struct StdConsole {
    interactive: bool,
}

impl StdConsole {
    /// Creates a console, detecting whether stdin is a terminal.
    #[instrument]
    pub fn new() -> Self {
        let interactive = std::io::stdin().is_terminal();
        debug!(interactive, "Console attached");
        Self { interactive }
    }

    fn read_piped_line(&self, text: &str) -> Result<String> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}: ", text)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        if !self.interactive {
            return self.read_piped_line(text);
        }
        Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from terminal")
    }

    fn show(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        Ok(())
    }
}

/// Console that answers prompts from a fixed list and records everything.
///
/// Used for unattended play and in tests. Running out of answers is an
/// error, so a game that keeps asking cannot loop forever.
#[derive(Debug, Clone, Default)]
pub struct ReplayConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ReplayConsole {
    /// Creates a console that will give `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and shown text, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ReplayConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        self.transcript.push(text.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("No answer left for prompt {:?}", text),
        }
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_answers_in_order() {
        let mut console = ReplayConsole::new(["A1", ""]);
        assert_eq!(console.prompt("first").unwrap(), "A1");
        assert_eq!(console.prompt("second").unwrap(), "");
        assert_eq!(console.remaining(), 0);
        assert!(console.prompt("third").is_err());
    }

    #[test]
    fn test_replay_records_transcript() {
        let mut console = ReplayConsole::new(["B2"]);
        console.show("hello").unwrap();
        console.prompt("move?").unwrap();
        assert_eq!(console.transcript(), &["hello".to_string(), "move?".to_string()]);
    }
}
