//! Button press history tracking.
//!
//! Provides immutable tracking of presses and the phase transitions they
//! caused. The history is a session log: clearing the calculator resets the
//! arithmetic state but not the log.

use super::button::Button;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single processed button press.
///
/// Records are immutable values: the button, the phase before and after the
/// press, and when it was processed.
///
/// # Example
///
/// ```rust
/// use tally::core::{Button, InputRecord, Phase};
/// use chrono::Utc;
///
/// let record = InputRecord {
///     button: Button::Seven,
///     from: Phase::EnteringFirst,
///     to: Phase::EnteringFirst,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    /// The key that was pressed
    pub button: Button,
    /// The phase before the press was processed
    pub from: Phase,
    /// The phase after the press was processed
    pub to: Phase,
    /// When the press was processed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of processed presses.
///
/// History is immutable - the `record` method returns a new history with
/// the press added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use tally::core::{Button, InputHistory, InputRecord, Phase};
/// use chrono::Utc;
///
/// let history = InputHistory::new();
///
/// let history = history.record(InputRecord {
///     button: Button::Five,
///     from: Phase::EnteringFirst,
///     to: Phase::EnteringFirst,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(InputRecord {
///     button: Button::Add,
///     from: Phase::EnteringFirst,
///     to: Phase::AwaitingSecond,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path().len(), 3); // initial phase + one per press
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputHistory {
    records: Vec<InputRecord>,
}

impl InputHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a press, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    pub fn record(&self, record: InputRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns references to phases in order: the phase before the first
    /// press, then the resulting phase of each press.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last press.
    ///
    /// Returns `None` if there are no recorded presses.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in press order.
    pub fn records(&self) -> &[InputRecord] {
        &self.records
    }

    /// Number of recorded presses.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no presses have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: Button, from: Phase, to: Phase) -> InputRecord {
        InputRecord {
            button,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = InputHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_returns_new_history() {
        let history = InputHistory::new();
        let new_history = history.record(press(
            Button::Seven,
            Phase::EnteringFirst,
            Phase::EnteringFirst,
        ));

        // Original unchanged
        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_starts_at_the_initial_phase() {
        let history = InputHistory::new()
            .record(press(
                Button::Seven,
                Phase::EnteringFirst,
                Phase::EnteringFirst,
            ))
            .record(press(
                Button::Add,
                Phase::EnteringFirst,
                Phase::AwaitingSecond,
            ))
            .record(press(
                Button::Three,
                Phase::AwaitingSecond,
                Phase::EnteringSecond,
            ));

        let path = history.get_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &Phase::EnteringFirst);
        assert_eq!(path[1], &Phase::EnteringFirst);
        assert_eq!(path[2], &Phase::AwaitingSecond);
        assert_eq!(path[3], &Phase::EnteringSecond);
    }

    #[test]
    fn records_preserve_press_order() {
        let history = InputHistory::new()
            .record(press(Button::One, Phase::EnteringFirst, Phase::EnteringFirst))
            .record(press(Button::Two, Phase::EnteringFirst, Phase::EnteringFirst));

        let buttons: Vec<Button> = history.records().iter().map(|r| r.button).collect();
        assert_eq!(buttons, vec![Button::One, Button::Two]);
    }

    #[test]
    fn duration_exists_once_presses_are_recorded() {
        let history = InputHistory::new().record(press(
            Button::Nine,
            Phase::EnteringFirst,
            Phase::EnteringFirst,
        ));
        assert!(history.duration().is_some());
    }

    #[test]
    fn history_roundtrip_serialization() {
        let history = InputHistory::new().record(press(
            Button::Equals,
            Phase::EnteringSecond,
            Phase::Evaluated,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: InputHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.len(), history.len());
        assert_eq!(deserialized.records()[0].button, Button::Equals);
    }
}
