//! Core value types of the calculator engine.
//!
//! This module contains the pure data the engine operates on:
//! - The keypad [`Button`] enumeration and layout
//! - Binary [`Operator`]s with checked integer evaluation
//! - The explicit entry [`Phase`]
//! - Immutable press [`InputHistory`]
//!
//! Everything here is pure (no side effects); the stateful transition
//! function lives in [`crate::engine`].

mod button;
mod history;
mod operator;
mod phase;

pub use button::{Button, ButtonClass, KEYPAD_LAYOUT};
pub use history::{InputHistory, InputRecord};
pub use operator::{ArithmeticError, Operator};
pub use phase::Phase;
