//! The engine's entry phase.
//!
//! The position in the operand/operator entry cycle is an explicit tag
//! rather than something implied by which buffers happen to be non-empty,
//! so the transition function can match on it and illegal combinations are
//! unrepresentable.

use serde::{Deserialize, Serialize};

/// Where the engine currently is in the operand/operator entry cycle.
///
/// # Example
///
/// ```rust
/// use tally::core::Phase;
///
/// assert_eq!(Phase::EnteringFirst.name(), "EnteringFirst");
/// assert!(Phase::Faulted.is_error());
/// assert!(!Phase::Evaluated.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Accumulating the first operand. The initial phase.
    EnteringFirst,
    /// An operator is pending; the second operand has not started.
    AwaitingSecond,
    /// Accumulating the second operand.
    EnteringSecond,
    /// An equals press just produced a result.
    Evaluated,
    /// The display shows the error sentinel; only clear recovers.
    Faulted,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringFirst => "EnteringFirst",
            Self::AwaitingSecond => "AwaitingSecond",
            Self::EnteringSecond => "EnteringSecond",
            Self::Evaluated => "Evaluated",
            Self::Faulted => "Faulted",
        }
    }

    /// Check if this is the error phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Faulted)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::EnteringFirst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::EnteringFirst.name(), "EnteringFirst");
        assert_eq!(Phase::AwaitingSecond.name(), "AwaitingSecond");
        assert_eq!(Phase::EnteringSecond.name(), "EnteringSecond");
        assert_eq!(Phase::Evaluated.name(), "Evaluated");
        assert_eq!(Phase::Faulted.name(), "Faulted");
    }

    #[test]
    fn is_error_identifies_the_faulted_phase() {
        assert!(Phase::Faulted.is_error());
        assert!(!Phase::EnteringFirst.is_error());
        assert!(!Phase::AwaitingSecond.is_error());
        assert!(!Phase::EnteringSecond.is_error());
        assert!(!Phase::Evaluated.is_error());
    }

    #[test]
    fn default_phase_is_entering_first() {
        assert_eq!(Phase::default(), Phase::EnteringFirst);
    }

    #[test]
    fn phase_serializes_correctly() {
        let phase = Phase::AwaitingSecond;
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}
