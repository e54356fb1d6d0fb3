//! Object-style surface over the transition engine.
//!
//! `AuditWorkflow` holds "the current state" so callers can write
//! `audit.start()?` instead of threading state values by hand. Every method
//! delegates to [`transition`](crate::engine::transition); there is no
//! second copy of the rules, so error messages and terminal-state handling
//! are identical to the engine's.

use crate::core::{AuditEvent, AuditHistory, AuditId, AuditState, AuditStatus, TransitionRecord};
use crate::engine::{transition, TerminalStateWarning, TransitionError, TransitionOutcome};
use chrono::{DateTime, Utc};

/// Result of dispatching one event through a workflow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The audit moved to a new status
    Advanced { from: AuditStatus, to: AuditStatus },

    /// The audit is terminal and the event was ignored
    Ignored(TerminalStateWarning),
}

/// A single audit with its current state and transition history.
///
/// Mutation goes through `&mut self`, so one workflow has a single writer at
/// a time. It is not meant to be shared between threads without external
/// serialization: wrap it in a `Mutex` (or own it from one task) if several
/// callers must drive the same audit.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::{AuditStatus, AuditWorkflow};
/// use chrono::Utc;
///
/// let mut audit = AuditWorkflow::new("AUD-001", Utc::now());
/// audit.start().unwrap();
/// audit.complete("All screenshots verified and updated.").unwrap();
///
/// assert_eq!(audit.status(), AuditStatus::Completed);
/// assert_eq!(audit.history().transitions().len(), 2);
///
/// let err = AuditWorkflow::new("AUD-002", Utc::now())
///     .complete("This should fail.")
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid transition: Cannot handle event 'COMPLETE' in state 'Pending'."
/// );
/// ```
#[derive(Clone, Debug)]
pub struct AuditWorkflow {
    current: AuditState,
    history: AuditHistory,
    ignored_count: usize,
    last_warning: Option<TerminalStateWarning>,
}

impl AuditWorkflow {
    /// Create a workflow for a new audit in the Pending state.
    pub fn new(id: impl Into<AuditId>, created_at: DateTime<Utc>) -> Self {
        Self::from_state(AuditState::pending(id, created_at))
    }

    /// Resume a workflow from a previously obtained state.
    pub fn from_state(state: AuditState) -> Self {
        Self {
            current: state,
            history: AuditHistory::new(),
            ignored_count: 0,
            last_warning: None,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &AuditState {
        &self.current
    }

    /// Get the status of the current state (pure)
    pub fn status(&self) -> AuditStatus {
        self.current.status()
    }

    /// Check if the audit has finished (pure)
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Advancing transitions applied through this workflow.
    pub fn history(&self) -> &AuditHistory {
        &self.history
    }

    /// Number of events ignored because the audit had already finished.
    pub fn ignored_count(&self) -> usize {
        self.ignored_count
    }

    /// The most recent ignored-event warning.
    ///
    /// Only the latest one is kept, so a finished audit that keeps
    /// receiving stray events does not grow.
    pub fn last_warning(&self) -> Option<&TerminalStateWarning> {
        self.last_warning.as_ref()
    }

    /// Apply `event` to the current state.
    ///
    /// On error the current state is left exactly as it was.
    pub fn dispatch(&mut self, event: AuditEvent) -> Result<StepResult, TransitionError> {
        match transition(&self.current, &event)? {
            TransitionOutcome::Advanced(next) => {
                let from = self.current.status();
                let to = next.status();
                self.history = self.history.record(TransitionRecord {
                    from,
                    to,
                    event: event.kind(),
                    timestamp: Utc::now(),
                });
                self.current = next;
                Ok(StepResult::Advanced { from, to })
            }
            TransitionOutcome::Ignored { warning, .. } => {
                self.ignored_count = self.ignored_count.saturating_add(1);
                self.last_warning = Some(warning);
                Ok(StepResult::Ignored(warning))
            }
        }
    }

    /// Dispatch START.
    pub fn start(&mut self) -> Result<StepResult, TransitionError> {
        self.dispatch(AuditEvent::start())
    }

    /// Dispatch COMPLETE with `summary`.
    pub fn complete(&mut self, summary: impl Into<String>) -> Result<StepResult, TransitionError> {
        self.dispatch(AuditEvent::complete(summary))
    }

    /// Dispatch CANCEL with an optional reason.
    pub fn cancel(&mut self, reason: Option<String>) -> Result<StepResult, TransitionError> {
        self.dispatch(AuditEvent::Cancel { reason })
    }

    /// Consume the workflow, keeping only its final state.
    pub fn into_state(self) -> AuditState {
        self.current
    }
}
