//! Binary operators and their integer evaluation.
//!
//! Arithmetic is checked: division by zero and overflow surface as
//! [`ArithmeticError`] values instead of trapping, so no input sequence can
//! take the engine down.

use serde::{Deserialize, Serialize};

/// Errors that can occur when applying an operator.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivideByZero,

    #[error("Arithmetic overflow in {lhs} {op} {rhs}")]
    Overflow { op: &'static str, lhs: i64, rhs: i64 },
}

/// One of the four binary operators on the keypad.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// assert_eq!(Operator::Add.apply(7, 3), Ok(10));
/// assert_eq!(Operator::Divide.apply(9, 3), Ok(3));
/// assert!(Operator::Divide.apply(1, 0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The operator's display glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two integer operands.
    ///
    /// Division truncates toward zero. Division by zero and overflow are
    /// returned as [`ArithmeticError`] rather than panicking.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(ArithmeticError::DivideByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(ArithmeticError::Overflow {
            op: self.glyph(),
            lhs,
            rhs,
        })
    }
}
