//! The calculator keypad's button enumeration.
//!
//! Buttons are immutable, stateless values. Each variant carries a fixed
//! display glyph and a theming class; the rendering layer lays them out
//! using [`KEYPAD_LAYOUT`] and forwards presses to the engine.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// A logical keypad key.
///
/// This is a closed enumeration of the 19 keys: ten digits, the decimal
/// point, four binary operators, equals, clear, sign toggle, and percent.
///
/// # Example
///
/// ```rust
/// use tally::core::{Button, ButtonClass};
///
/// assert_eq!(Button::Seven.label(), "7");
/// assert_eq!(Button::Divide.label(), "÷");
/// assert_eq!(Button::Clear.class(), ButtonClass::Function);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Button {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Dot,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    SignToggle,
    Percent,
}

/// Theming partition of the keypad, for the rendering layer.
///
/// Digits and the decimal point share one background, the top-row function
/// keys another, and the operator column (including equals) a third.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ButtonClass {
    Digit,
    Function,
    Operator,
}

/// The canonical 5-row keypad grid.
///
/// Every [`Button`] variant appears exactly once. The bottom row has three
/// keys (the rendering layer conventionally gives `0` a double-width cell).
pub const KEYPAD_LAYOUT: [&[Button]; 5] = [
    &[
        Button::Clear,
        Button::SignToggle,
        Button::Percent,
        Button::Divide,
    ],
    &[
        Button::Seven,
        Button::Eight,
        Button::Nine,
        Button::Multiply,
    ],
    &[Button::Four, Button::Five, Button::Six, Button::Subtract],
    &[Button::One, Button::Two, Button::Three, Button::Add],
    &[Button::Zero, Button::Dot, Button::Equals],
];

impl Button {
    /// The button's fixed display glyph.
    ///
    /// This is both the visual label the rendering layer draws and the text
    /// the engine appends when the key acts as a literal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Button;
    ///
    /// assert_eq!(Button::Zero.label(), "0");
    /// assert_eq!(Button::Clear.label(), "AC");
    /// assert_eq!(Button::SignToggle.label(), "+/-");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Dot => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::SignToggle => "+/-",
            Self::Percent => "%",
        }
    }

    /// The theming class this key belongs to.
    pub fn class(&self) -> ButtonClass {
        match self {
            Self::Zero
            | Self::One
            | Self::Two
            | Self::Three
            | Self::Four
            | Self::Five
            | Self::Six
            | Self::Seven
            | Self::Eight
            | Self::Nine
            | Self::Dot => ButtonClass::Digit,
            Self::Clear | Self::SignToggle | Self::Percent => ButtonClass::Function,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Equals => {
                ButtonClass::Operator
            }
        }
    }

    /// The binary operator this key selects, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Button, Operator};
    ///
    /// assert_eq!(Button::Multiply.operator(), Some(Operator::Multiply));
    /// assert_eq!(Button::Equals.operator(), None);
    /// ```
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Add => Some(Operator::Add),
            Self::Subtract => Some(Operator::Subtract),
            Self::Multiply => Some(Operator::Multiply),
            Self::Divide => Some(Operator::Divide),
            _ => None,
        }
    }
}
