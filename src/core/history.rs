//! Transition history tracking.
//!
//! The engine itself keeps no history. Callers that want an audit trail of
//! advancing transitions (the [`AuditWorkflow`](crate::workflow::AuditWorkflow)
//! does) record them here as immutable values.

use super::event::EventKind;
use super::state::AuditStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single advancing transition.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::core::{AuditStatus, EventKind, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: AuditStatus::Pending,
///     to: AuditStatus::InProgress,
///     event: EventKind::Start,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.event, EventKind::Start);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The status being transitioned from
    pub from: AuditStatus,
    /// The status being transitioned to
    pub to: AuditStatus,
    /// The event that caused the move
    pub event: EventKind,
    /// When the caller applied the transition
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of advancing transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::core::{AuditHistory, AuditStatus, EventKind, TransitionRecord};
/// use chrono::Utc;
///
/// let history = AuditHistory::new()
///     .record(TransitionRecord {
///         from: AuditStatus::Pending,
///         to: AuditStatus::InProgress,
///         event: EventKind::Start,
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         from: AuditStatus::InProgress,
///         to: AuditStatus::Completed,
///         event: EventKind::Complete,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(
///     history.path(),
///     vec![AuditStatus::Pending, AuditStatus::InProgress, AuditStatus::Completed]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditHistory {
    transitions: Vec<TransitionRecord>,
}

impl AuditHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Statuses traversed: the first `from`, then every `to` in order.
    pub fn path(&self) -> Vec<AuditStatus> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when nothing has been recorded or when the timestamps run
    /// backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
