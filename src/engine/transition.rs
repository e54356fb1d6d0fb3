//! The audit transition function.

use crate::core::{AuditEvent, AuditState};
use crate::engine::error::{TerminalStateWarning, TransitionError};

/// Result of applying an event that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The audit moved to a new state
    Advanced(AuditState),

    /// The audit is terminal; the event was ignored and the state is unchanged
    Ignored {
        state: AuditState,
        warning: TerminalStateWarning,
    },
}

impl TransitionOutcome {
    /// The resulting state, whether advanced or not.
    pub fn state(&self) -> &AuditState {
        match self {
            Self::Advanced(state) | Self::Ignored { state, .. } => state,
        }
    }

    /// Consume the outcome, keeping only the resulting state.
    pub fn into_state(self) -> AuditState {
        match self {
            Self::Advanced(state) | Self::Ignored { state, .. } => state,
        }
    }

    /// The warning, when the event was ignored.
    pub fn warning(&self) -> Option<&TerminalStateWarning> {
        match self {
            Self::Advanced(_) => None,
            Self::Ignored { warning, .. } => Some(warning),
        }
    }

    /// Check if the audit moved to a new state.
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }
}

/// Compute the next audit state for `event`.
///
/// Pure: the input state is never modified, and identical inputs always
/// produce identical results. Terminal states absorb every event and come
/// back unchanged with a [`TerminalStateWarning`], which is also emitted at
/// `warn` level through `tracing`.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::{transition, AuditEvent, AuditState, AuditStatus};
/// use chrono::Utc;
///
/// let state = AuditState::pending("AUD-001", Utc::now());
/// let state = transition(&state, &AuditEvent::start()).unwrap().into_state();
/// assert_eq!(state.status(), AuditStatus::InProgress);
///
/// let err = transition(&state, &AuditEvent::complete(" ")).unwrap_err();
/// assert_eq!(err.to_string(), "A summary is required to complete the audit.");
/// ```
pub fn transition(
    state: &AuditState,
    event: &AuditEvent,
) -> Result<TransitionOutcome, TransitionError> {
    let next = match (state, event) {
        (AuditState::Pending(context), AuditEvent::Start) => {
            AuditState::in_progress(context.clone())
        }
        (AuditState::InProgress(context), AuditEvent::Complete { summary }) => {
            AuditState::completed(context.clone(), summary.clone())?
        }
        (AuditState::InProgress(context), AuditEvent::Cancel { reason }) => {
            AuditState::cancelled(context.clone(), reason.clone())
        }
        (AuditState::Completed(_) | AuditState::Cancelled(_), _) => {
            let warning = TerminalStateWarning {
                event: event.kind(),
                state: state.status(),
            };
            tracing::warn!(
                audit_id = %state.id(),
                event = %warning.event,
                state = %warning.state,
                "{warning}"
            );
            return Ok(TransitionOutcome::Ignored {
                state: state.clone(),
                warning,
            });
        }
        (AuditState::Pending(_) | AuditState::InProgress(_), _) => {
            return Err(TransitionError::InvalidTransition {
                event: event.kind(),
                state: state.status(),
            });
        }
    };

    tracing::debug!(
        audit_id = %state.id(),
        event = %event.kind(),
        from = %state.status(),
        to = %next.status(),
        "audit advanced"
    );
    Ok(TransitionOutcome::Advanced(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AuditContext, AuditStatus, EventKind};
    use crate::engine::ValidationError;
    use chrono::Utc;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a plain-text subscriber and return everything it logged.
    fn capture_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn context() -> AuditContext {
        AuditContext::new("test-audit-123", Utc::now())
    }

    fn all_events() -> Vec<AuditEvent> {
        vec![
            AuditEvent::start(),
            AuditEvent::complete("Done."),
            AuditEvent::complete(" "),
            AuditEvent::cancel(),
            AuditEvent::cancel_with_reason("late retry"),
        ]
    }

    #[test]
    fn start_moves_pending_to_in_progress() {
        let pending = AuditState::Pending(context());
        let outcome = transition(&pending, &AuditEvent::start()).unwrap();

        assert!(outcome.is_advanced());
        assert_eq!(outcome.state().status(), AuditStatus::InProgress);
        assert_eq!(outcome.state().context(), pending.context());
    }

    #[test]
    fn complete_stores_raw_summary() {
        let in_progress = AuditState::in_progress(context());
        let state = transition(&in_progress, &AuditEvent::complete(" ok "))
            .unwrap()
            .into_state();

        assert_eq!(state.status(), AuditStatus::Completed);
        assert_eq!(state.summary(), Some(" ok "));
        assert_eq!(state.context(), in_progress.context());
    }

    #[test]
    fn complete_with_blank_summary_fails_validation() {
        let in_progress = AuditState::in_progress(context());

        for blank in ["", "  "] {
            let err = transition(&in_progress, &AuditEvent::complete(blank)).unwrap_err();
            match &err {
                TransitionError::Validation(violations) => {
                    assert!(violations.contains(&ValidationError::SummaryRequired));
                }
                other => panic!("expected validation error, got {other:?}"),
            }
            assert_eq!(err.to_string(), "A summary is required to complete the audit.");
        }
    }

    #[test]
    fn cancel_moves_in_progress_to_cancelled() {
        let in_progress = AuditState::in_progress(context());

        let state = transition(&in_progress, &AuditEvent::cancel_with_reason("User interrupted"))
            .unwrap()
            .into_state();
        assert_eq!(state.status(), AuditStatus::Cancelled);
        assert_eq!(state.cancellation_reason(), Some("User interrupted"));

        let state = transition(&in_progress, &AuditEvent::cancel())
            .unwrap()
            .into_state();
        assert_eq!(state.status(), AuditStatus::Cancelled);
        assert_eq!(state.cancellation_reason(), None);
    }

    #[test]
    fn pending_rejects_complete_and_cancel() {
        let pending = AuditState::Pending(context());

        for (event, kind) in [
            (AuditEvent::complete("x"), EventKind::Complete),
            (AuditEvent::cancel(), EventKind::Cancel),
        ] {
            let err = transition(&pending, &event).unwrap_err();
            assert_eq!(
                err,
                TransitionError::InvalidTransition {
                    event: kind,
                    state: AuditStatus::Pending,
                }
            );
        }
    }

    #[test]
    fn in_progress_rejects_start() {
        let in_progress = AuditState::in_progress(context());
        let err = transition(&in_progress, &AuditEvent::start()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid transition: Cannot handle event 'START' in state 'InProgress'."
        );
    }

    #[test]
    fn pending_invalid_transition_wins_over_blank_summary() {
        let pending = AuditState::Pending(context());
        let err = transition(&pending, &AuditEvent::complete(" ")).unwrap_err();

        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn terminal_states_ignore_every_event() {
        let terminals = [
            AuditState::completed(context(), "Done.").unwrap(),
            AuditState::cancelled(context(), Some("dup".to_string())),
        ];

        for terminal in &terminals {
            for event in all_events() {
                let outcome = transition(terminal, &event).unwrap();

                assert!(!outcome.is_advanced());
                assert_eq!(outcome.state(), terminal);
                let warning = outcome.warning().unwrap();
                assert_eq!(warning.event, event.kind());
                assert_eq!(warning.state, terminal.status());
            }
        }
    }

    #[test]
    fn transition_is_deterministic() {
        let states = [
            AuditState::Pending(context()),
            AuditState::in_progress(context()),
            AuditState::completed(context(), "Done.").unwrap(),
            AuditState::cancelled(context(), None),
        ];

        for state in &states {
            for event in all_events() {
                assert_eq!(transition(state, &event), transition(state, &event));
            }
        }
    }

    #[test]
    fn input_state_is_untouched() {
        let pending = AuditState::Pending(context());
        let before = pending.clone();

        let _ = transition(&pending, &AuditEvent::start());
        let _ = transition(&pending, &AuditEvent::cancel());

        assert_eq!(pending, before);
    }

    #[test]
    fn ignored_event_logs_one_warning() {
        let completed = AuditState::completed(AuditContext::new("A", Utc::now()), "Done.").unwrap();

        let logs = capture_logs(|| {
            transition(&completed, &AuditEvent::cancel()).unwrap();
        });

        let warnings: Vec<&str> = logs.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "logs: {logs}");
        assert!(warnings[0].contains("Action 'CANCEL' is invalid in terminal state 'Completed'."));
        assert!(warnings[0].contains("audit_id=A"));
    }

    #[test]
    fn advancing_logs_debug_without_warning() {
        let pending = AuditState::pending("A", Utc::now());

        let logs = capture_logs(|| {
            transition(&pending, &AuditEvent::start()).unwrap();
        });

        assert!(logs.contains("audit advanced"), "logs: {logs}");
        assert!(!logs.lines().any(|l| l.contains("WARN")));
    }
}
