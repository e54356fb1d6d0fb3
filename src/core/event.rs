//! Events that can be dispatched against an audit state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An event requesting a lifecycle change.
///
/// Payloads are not validated here: a blank `summary` is a legal event
/// value and is only rejected when the engine applies it.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::core::{AuditEvent, EventKind};
///
/// let event = AuditEvent::complete("All screenshots verified.");
/// assert_eq!(event.kind(), EventKind::Complete);
/// assert_eq!(event.kind().to_string(), "COMPLETE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEvent {
    /// Begin work on a pending audit
    Start,
    /// Finish an in-progress audit with a summary
    Complete { summary: String },
    /// Abandon an in-progress audit, optionally saying why
    Cancel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl AuditEvent {
    /// Request that work begins.
    pub fn start() -> Self {
        Self::Start
    }

    /// Request completion with a summary (checked when applied).
    pub fn complete(summary: impl Into<String>) -> Self {
        Self::Complete {
            summary: summary.into(),
        }
    }

    /// A cancellation without a reason.
    pub fn cancel() -> Self {
        Self::Cancel { reason: None }
    }

    /// A cancellation carrying a reason.
    pub fn cancel_with_reason(reason: impl Into<String>) -> Self {
        Self::Cancel {
            reason: Some(reason.into()),
        }
    }

    /// The payload-free discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start => EventKind::Start,
            Self::Complete { .. } => EventKind::Complete,
            Self::Cancel { .. } => EventKind::Cancel,
        }
    }
}

/// Discriminant of an [`AuditEvent`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Start,
    Complete,
    Cancel,
}

impl EventKind {
    /// Upper-case wire name, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Complete => "COMPLETE",
            Self::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
