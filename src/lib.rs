//! Audit Lifecycle: a pure functional transition engine for audit records
//!
//! An audit moves through Pending → InProgress → {Completed | Cancelled}.
//! The core is a pure function, [`transition`], that maps a (state, event)
//! pair to the next state or a classified failure. States are immutable
//! values; callers hold the current one and replace it with the engine's
//! output.
//!
//! # Core Concepts
//!
//! - **State**: the [`AuditState`] sum type, where each variant carries only
//!   the fields meaningful to it
//! - **Events**: [`AuditEvent`]s dispatched against a state
//! - **Engine**: [`transition`] and its error taxonomy
//! - **Workflow**: [`AuditWorkflow`], a mutable wrapper that delegates to the
//!   engine and keeps a history
//!
//! # Example
//!
//! ```rust
//! use audit_lifecycle::{transition, AuditEvent, AuditState, AuditStatus};
//! use chrono::Utc;
//!
//! let state = AuditState::pending("AUD-001", Utc::now());
//! let state = transition(&state, &AuditEvent::start()).unwrap().into_state();
//! let state = transition(&state, &AuditEvent::complete("All screenshots verified."))
//!     .unwrap()
//!     .into_state();
//!
//! assert_eq!(state.status(), AuditStatus::Completed);
//!
//! // Terminal states ignore stray events instead of failing.
//! let outcome = transition(&state, &AuditEvent::cancel()).unwrap();
//! assert!(!outcome.is_advanced());
//! assert_eq!(outcome.state(), &state);
//! ```

pub mod core;
pub mod engine;
pub mod workflow;

// Re-export commonly used types
pub use crate::core::{AuditContext, AuditEvent, AuditId, AuditState, AuditStatus, EventKind};
pub use engine::{
    transition, TerminalStateWarning, TransitionError, TransitionOutcome, ValidationError,
};
pub use workflow::{AuditWorkflow, StepResult};
