
//! Interactive two-operand calculator session.
//!
//! A session repeatedly reads two operands, lets the user pick one of
//! the four operations from a numbered menu, prints the result, and
//! asks whether to quit.

mod prompt;

pub use prompt::Prompt;

use crate::calculator::Calculator;
use crate::number::Number;
use crate::operation::Operation;

use tracing::{debug, info};

use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "=== WELCOME TO PURE CALCULATOR ===";
pub const GOODBYE: &str = "GOOD BYE! / SEE You Later ALIGATOR!!!";
pub const END_OF_INPUT: &str = "\nExiting gracefully. Bye!";
pub const INCORRECT_SELECTION: &str = "Incorrect selection. Select 1-4.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
  /// The user asked to quit.
  Quit,
  /// The input stream ran out before the user asked to quit.
  EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
  pub outcome: SessionOutcome,
  /// Number of rounds in which a valid operation was selected,
  /// whether or not it produced a value.
  pub calculations: usize,
}

#[derive(Debug)]
pub struct Session<'a, R, W> {
  calculator: &'a Calculator,
  prompt: Prompt<R, W>,
  calculations: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
  pub fn new(calculator: &'a Calculator, input: R, output: W) -> Self {
    Self { calculator, prompt: Prompt::new(input, output), calculations: 0 }
  }

  /// Runs rounds until the user quits or the input ends. Only I/O
  /// failures are returned as errors; calculator errors are reported
  /// to the user and the session carries on.
  pub fn run(&mut self) -> io::Result<SessionSummary> {
    self.prompt.say(WELCOME)?;
    let outcome = self.run_rounds()?;
    match outcome {
      SessionOutcome::Quit => self.prompt.say(GOODBYE)?,
      SessionOutcome::EndOfInput => self.prompt.say(END_OF_INPUT)?,
    }
    info!(?outcome, calculations = self.calculations, "session finished");
    Ok(SessionSummary { outcome, calculations: self.calculations })
  }

  fn run_rounds(&mut self) -> io::Result<SessionOutcome> {
    loop {
      let Some(a) = self.prompt.ask_number("\nEnter the first number: ")? else {
        return Ok(SessionOutcome::EndOfInput);
      };
      let Some(b) = self.prompt.ask_number("Enter the second number: ")? else {
        return Ok(SessionOutcome::EndOfInput);
      };
      let Some(choice) = self.ask_menu()? else {
        return Ok(SessionOutcome::EndOfInput);
      };
      self.run_action(&choice, a, b)?;
      match self.prompt.ask_yes_no("\nDo you want to quit (y/n): ")? {
        Some(true) => return Ok(SessionOutcome::Quit),
        Some(false) => {}
        None => return Ok(SessionOutcome::EndOfInput),
      }
    }
  }

  /// Prints the operation menu and reads the user's selection.
  pub fn ask_menu(&mut self) -> io::Result<Option<String>> {
    self.prompt.say("\nSelect an action by entering the number:")?;
    for op in Operation::ALL {
      self.prompt.say(format!("{}. {} ({})", op.menu_key(), op.label(), op.symbol()))?;
    }
    let choice = self.prompt.ask("Your selection (1-4): ")?;
    Ok(choice.map(|s| s.trim().to_owned()))
  }

  /// Runs the operation selected by `choice` and prints its outcome.
  /// Returns the result, or `None` if the selection was invalid or
  /// the calculator refused the operands.
  pub fn run_action(&mut self, choice: &str, a: Number, b: Number) -> io::Result<Option<Number>> {
    let Some(operation) = Operation::from_menu_key(choice) else {
      debug!(choice, "invalid menu selection");
      self.prompt.say(INCORRECT_SELECTION)?;
      return Ok(None);
    };
    self.calculations += 1;
    match self.calculator.evaluate(operation, a, b) {
      Ok(result) => {
        self.prompt.say(format!("RESULT ({}): {}", operation.symbol(), result))?;
        Ok(Some(result))
      }
      Err(err) => {
        self.prompt.say(format!("ERROR: {err}"))?;
        Ok(None)
      }
    }
  }

  pub fn into_output(self) -> W {
    self.prompt.into_output()
  }
}
