
//! Line-oriented prompting over arbitrary input and output streams.
//!
//! Every read returns `Ok(None)` once the input is exhausted, so
//! callers can wind down cleanly on end of input.

use crate::number::Number;

use std::io::{self, BufRead, Write};

pub const INVALID_NUMBER: &str = "Error: enter a correct number (e.g., 3.14).";
pub const NON_FINITE_NUMBER: &str = "Error: Not a Number or Infinity are not allowed. Try again.";

#[derive(Debug)]
pub struct Prompt<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Writes a full line of output.
  pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
    writeln!(self.output, "{}", line.as_ref())
  }

  /// Writes `prompt` (without a newline) and reads one line of input,
  /// with the trailing line terminator removed.
  pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
  }

  /// Asks for a number until a finite one is entered. A comma is
  /// accepted as the decimal separator.
  pub fn ask_number(&mut self, prompt: &str) -> io::Result<Option<Number>> {
    while let Some(line) = self.ask(prompt)? {
      match line.parse::<Number>() {
        Ok(number) if number.is_finite() => return Ok(Some(number)),
        Ok(_) => self.say(NON_FINITE_NUMBER)?,
        Err(_) => self.say(INVALID_NUMBER)?,
      }
    }
    Ok(None)
  }

  /// Asks a yes/no question. Any answer starting with `y` counts as
  /// yes.
  pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
    let answer = self.ask(prompt)?;
    Ok(answer.map(|s| s.trim().to_lowercase().starts_with('y')))
  }

  pub fn into_output(self) -> W {
    self.output
  }
}
