//! Tally: a pure functional calculator input engine
//!
//! Tally is the input/state core of a basic arithmetic calculator, split
//! into a pure core and one small imperative shell. The core is the data:
//! buttons, operators, phases, history. The shell is the [`engine::Engine`],
//! which interprets a sequence of discrete button presses and maintains a
//! running display value that external renderers observe.
//!
//! # Core Concepts
//!
//! - **Button**: the closed keypad enumeration, each key with a fixed glyph
//! - **Phase**: explicit tag for the position in the operand/operator cycle
//! - **Engine**: the single stateful object; presses in, display out
//! - **DisplayHub**: framework-free observer registration for the display
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Button, Phase};
//! use tally::engine::Engine;
//!
//! let mut engine = Engine::new();
//!
//! engine.receive_input(Button::Nine);
//! engine.receive_input(Button::Divide);
//! engine.receive_input(Button::Three);
//! engine.receive_input(Button::Equals);
//!
//! assert_eq!(engine.display(), "3");
//! assert_eq!(engine.phase(), Phase::Evaluated);
//! ```
//!
//! The rendering layer is an external collaborator: it lays out
//! [`core::KEYPAD_LAYOUT`], forwards each visual key's press, and either
//! polls [`engine::Engine::display`] or subscribes for updates.

pub mod core;
pub mod engine;
pub mod notify;

// Re-export commonly used types
pub use core::{ArithmeticError, Button, ButtonClass, Operator, Phase, KEYPAD_LAYOUT};
pub use engine::Engine;
pub use notify::DisplayHub;
