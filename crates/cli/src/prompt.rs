//! Sources of user answers for the menu.
//!
//! On a terminal the answers come from `dialoguer` widgets. When stdin is
//! piped (scripts, tests) they are read line by line instead, with the same
//! re-prompting rules.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::{console::Term, Confirm, Input};

/// Asks the user for one answer at a time. `Ok(None)` means input has ended.
pub trait Prompter {
    /// Free text, possibly blank.
    fn text(&mut self, prompt: &str) -> Result<Option<String>>;

    /// A year; asks again until the answer parses.
    fn year(&mut self, prompt: &str) -> Result<Option<i32>>;

    /// A yes/no question answered "no" by default.
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>>;
}

/// Interactive prompts drawn on the terminal.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .context("prompt failed")?;
        Ok(Some(answer))
    }

    fn year(&mut self, prompt: &str) -> Result<Option<i32>> {
        let year: i32 = Input::new()
            .with_prompt(prompt)
            .interact_text_on(&self.term)
            .context("prompt failed")?;
        Ok(Some(year))
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_on(&self.term)
            .context("prompt failed")?;
        Ok(Some(answer))
    }
}

/// Line-oriented prompts for non-interactive input.
pub struct LinePrompter<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{}: ", prompt)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }

    fn year(&mut self, prompt: &str) -> Result<Option<i32>> {
        while let Some(answer) = self.read_line(prompt)? {
            match answer.trim().parse() {
                Ok(year) => return Ok(Some(year)),
                Err(e) => writeln!(self.echo, "Invalid year '{}': {}", answer.trim(), e)?,
            }
        }
        Ok(None)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let prompt = format!("{} [y/N]", prompt);
        while let Some(answer) = self.read_line(&prompt)? {
            match answer.trim().to_lowercase().as_str() {
                "" | "n" | "no" => return Ok(Some(false)),
                "y" | "yes" => return Ok(Some(true)),
                _ => writeln!(self.echo, "Please answer y or n.")?,
            }
        }
        Ok(None)
    }
}
