//! Submit phase machine
//!
//! Every screen drives its one submission through the same cycle:
//!
//! ```text
//! Idle
//!   ↓ submit
//! Submitting
//!   ↓ outcome
//! Succeeded | Failed
//!   ↓ alert dismissed
//! Idle
//! ```
//!
//! Screens do not disable controls while Submitting, so a second submission
//! is representable; the machine only rejects jumps that skip the cycle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    /// Nothing in flight
    Idle,
    /// Request issued, outcome pending
    Submitting,
    /// Outcome arrived and was good
    Succeeded,
    /// Outcome arrived and was an error
    Failed,
}

impl SubmitPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: SubmitPhase) -> bool {
        match (self, target) {
            (SubmitPhase::Idle, SubmitPhase::Submitting) => true,
            (SubmitPhase::Submitting, SubmitPhase::Succeeded) => true,
            (SubmitPhase::Submitting, SubmitPhase::Failed) => true,
            // Surfacing the outcome returns the screen to rest
            (SubmitPhase::Succeeded, SubmitPhase::Idle) => true,
            (SubmitPhase::Failed, SubmitPhase::Idle) => true,
            // Same phase is always valid (no-op)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    /// Returns true once an outcome has arrived
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmitPhase::Succeeded | SubmitPhase::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Submitting => "submitting",
            SubmitPhase::Succeeded => "succeeded",
            SubmitPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmitPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
