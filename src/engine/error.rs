//! Failures and diagnostics produced by the transition engine.

use crate::core::rules::Violations;
use crate::core::{AuditStatus, EventKind};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when applying an event to a state.
///
/// Both variants are deterministic: retrying the same (state, event) pair
/// always fails the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The event is not accepted in the current non-terminal state.
    #[error("Invalid transition: Cannot handle event '{event}' in state '{state}'.")]
    InvalidTransition {
        event: EventKind,
        state: AuditStatus,
    },

    /// The pair is legal but the event payload breaks a business rule.
    #[error(transparent)]
    Validation(#[from] Violations),
}

/// Diagnostic for an event that arrived after the audit finished.
///
/// Not an error: the engine returns the terminal state unchanged alongside
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalStateWarning {
    pub event: EventKind,
    pub state: AuditStatus,
}

impl fmt::Display for TerminalStateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Action '{}' is invalid in terminal state '{}'.",
            self.event, self.state
        )
    }
}
