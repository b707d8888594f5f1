
//! A pure two-operand calculator.
//!
//! [`Calculator`](calculator::Calculator) offers addition,
//! subtraction, multiplication, and division over [`Number`]
//! operands, which may be exact integers or IEEE 754 floats
//! (including NaN and infinities). Division by zero is always an
//! explicit [`CalculatorError::DivisionByZero`] rather than a silent
//! infinity.

pub mod calculator;
pub mod config;
pub mod demo;
pub mod error;
pub mod number;
pub mod operation;
pub mod runner;
pub mod session;
pub mod tolerance;

pub use calculator::{Calculator, CalculatorError};
pub use number::Number;
pub use operation::Operation;
