//! The calculator engine: one stateful object over the pure core types.
//!
//! The engine receives symbolic button presses, advances an explicit phase
//! machine, and publishes the display string after every processed press.
//! No operation ever surfaces an error to the caller; arithmetic failures
//! resolve to the `"Error"` display and the [`Phase::Faulted`] phase.

use crate::core::{Button, InputHistory, InputRecord, Operator, Phase};
use crate::notify::DisplayHub;
use chrono::Utc;

/// The display value after construction and after clear.
pub const DEFAULT_DISPLAY: &str = "0";

/// The display sentinel shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Parse an operand buffer. Unparsable buffers coerce to zero.
fn parse_operand(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// Append a glyph to a display buffer.
///
/// The default `"0"` is replaced rather than extended, so the first digit
/// typed never produces `"05"`.
fn append_glyph(buffer: &mut String, glyph: &str) {
    if buffer == DEFAULT_DISPLAY {
        *buffer = glyph.to_string();
    } else {
        buffer.push_str(glyph);
    }
}

/// The calculator input engine.
///
/// State is created at construction with the display at `"0"` and advances
/// exclusively through [`Engine::receive_input`]. The rendering layer polls
/// [`Engine::display`] or registers a listener via [`Engine::subscribe`].
///
/// # Example
///
/// ```rust
/// use tally::core::Button;
/// use tally::engine::Engine;
///
/// let mut engine = Engine::new();
/// for button in [Button::Seven, Button::Add, Button::Three, Button::Equals] {
///     engine.receive_input(button);
/// }
/// assert_eq!(engine.display(), "10");
///
/// engine.receive_input(Button::Clear);
/// assert_eq!(engine.display(), "0");
/// ```
#[derive(Debug)]
pub struct Engine {
    display: String,
    first: String,
    second: String,
    pending: Option<Operator>,
    /// Operator/right-operand pair stored by equals, re-applied on
    /// repeated equals presses.
    last_operation: Option<(Operator, i64)>,
    phase: Phase,
    history: InputHistory,
    hub: DisplayHub,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine at its defaults.
    pub fn new() -> Self {
        Self {
            display: DEFAULT_DISPLAY.to_string(),
            first: String::new(),
            second: String::new(),
            pending: None,
            last_operation: None,
            phase: Phase::EnteringFirst,
            history: InputHistory::new(),
            hub: DisplayHub::new(),
        }
    }

    /// Process one button press to completion.
    ///
    /// Dispatch order: clear, binary operator, equals, literal key. Every
    /// call records a history entry and publishes the display, including
    /// calls that leave the display unchanged, so observers always see the
    /// result of the most recently processed event.
    pub fn receive_input(&mut self, button: Button) {
        let from = self.phase;

        if button == Button::Clear {
            self.reset();
        } else if let Some(operator) = button.operator() {
            self.select_operator(operator);
        } else if button == Button::Equals {
            self.evaluate();
        } else {
            self.append_literal(button);
        }

        self.history = self.history.record(InputRecord {
            button,
            from,
            to: self.phase,
            timestamp: Utc::now(),
        });
        self.hub.publish(&self.display);
    }

    /// The current display string. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The current entry phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The pending binary operator, if one has been selected.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// The first operand buffer. Empty until a literal or operator press
    /// establishes it.
    pub fn first_operand(&self) -> &str {
        &self.first
    }

    /// The second operand buffer.
    pub fn second_operand(&self) -> &str {
        &self.second
    }

    /// The session's press history. Survives clear.
    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    /// Register a display listener.
    ///
    /// Listeners are invoked synchronously after each processed press with
    /// the current display string.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.hub.subscribe(listener);
    }

    /// Clear: back to defaults. Idempotent, reachable from every phase.
    fn reset(&mut self) {
        self.display = DEFAULT_DISPLAY.to_string();
        self.first.clear();
        self.second.clear();
        self.pending = None;
        self.last_operation = None;
        self.phase = Phase::EnteringFirst;
    }

    /// Record a binary operator as pending.
    ///
    /// From [`Phase::EnteringSecond`] a complete operand/operator/operand
    /// triple exists, so the pending operation is evaluated eagerly and its
    /// result carried forward as the first operand. From any other phase
    /// the operator simply (over)writes the pending slot: a repeated
    /// operator press changes the operation without re-evaluating.
    fn select_operator(&mut self, operator: Operator) {
        if self.phase.is_error() {
            return;
        }

        if self.phase == Phase::EnteringSecond {
            let Some(previous) = self.pending else {
                // Unreachable by construction: EnteringSecond is only
                // entered while an operator is pending.
                return;
            };
            let lhs = parse_operand(&self.first);
            let rhs = parse_operand(&self.second);
            match previous.apply(lhs, rhs) {
                Ok(result) => {
                    self.display = result.to_string();
                    self.first = self.display.clone();
                    self.second.clear();
                }
                Err(_) => {
                    self.fault();
                    return;
                }
            }
        } else if self.first.is_empty() {
            self.first = self.display.clone();
        }

        self.pending = Some(operator);
        self.last_operation = None;
        self.phase = Phase::AwaitingSecond;
    }

    /// Equals: apply the pending operation.
    ///
    /// With no pending operator this is a no-op on the display. The result
    /// is carried forward as the first operand, and the operator/operand
    /// pair is retained so repeated equals presses recompute with the same
    /// pair each time.
    fn evaluate(&mut self) {
        if self.phase.is_error() {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };

        // On a repeat press the stored pair is re-applied to the shown
        // result; otherwise the right operand is whatever the display holds.
        let (operator, lhs, rhs) = match (self.phase, self.last_operation) {
            (Phase::Evaluated, Some((stored, rhs))) => (stored, parse_operand(&self.display), rhs),
            _ => (pending, parse_operand(&self.first), parse_operand(&self.display)),
        };

        match operator.apply(lhs, rhs) {
            Ok(result) => {
                self.display = result.to_string();
                self.first = self.display.clone();
                self.last_operation = Some((operator, rhs));
                self.phase = Phase::Evaluated;
            }
            Err(_) => self.fault(),
        }
    }

    /// Literal key (digit, dot, sign toggle, percent): append its glyph to
    /// the active operand buffer and mirror it into the display.
    ///
    /// Sign toggle and percent reach this branch through their label text
    /// only; no sign or percentage arithmetic is performed.
    fn append_literal(&mut self, button: Button) {
        let glyph = button.label();
        match self.phase {
            Phase::EnteringFirst => {
                append_glyph(&mut self.display, glyph);
                self.first = self.display.clone();
            }
            Phase::Evaluated => {
                // A literal after equals starts a fresh calculation.
                self.pending = None;
                self.last_operation = None;
                self.second.clear();
                self.display = glyph.to_string();
                self.first = self.display.clone();
                self.phase = Phase::EnteringFirst;
            }
            Phase::AwaitingSecond => {
                self.display = glyph.to_string();
                self.second = self.display.clone();
                self.phase = Phase::EnteringSecond;
            }
            Phase::EnteringSecond => {
                append_glyph(&mut self.display, glyph);
                self.second = self.display.clone();
            }
            Phase::Faulted => {}
        }
    }

    /// Enter the error state: `"Error"` display, everything else dropped.
    /// Only clear leaves this phase.
    fn fault(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.first.clear();
        self.second.clear();
        self.pending = None;
        self.last_operation = None;
        self.phase = Phase::Faulted;
    }
}
