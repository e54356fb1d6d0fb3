//! The audit transition engine.
//!
//! Given an immutable state snapshot and an event, the engine produces
//! either a new snapshot or a classified failure:
//!
//! | Current    | START       | COMPLETE                 | CANCEL      |
//! |------------|-------------|--------------------------|-------------|
//! | Pending    | InProgress  | invalid                  | invalid     |
//! | InProgress | invalid     | Completed (or validation)| Cancelled   |
//! | Completed  | ignored     | ignored                  | ignored     |
//! | Cancelled  | ignored     | ignored                  | ignored     |
//!
//! "Ignored" returns the unchanged state with a [`TerminalStateWarning`].
//! There is no hidden state and no I/O; diagnostics leave through the
//! returned outcome and the `tracing` facade.

mod error;
mod transition;

pub use crate::core::{ValidationError, Violations};
pub use error::{TerminalStateWarning, TransitionError};
pub use transition::{transition, TransitionOutcome};
