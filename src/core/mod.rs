//! Core audit types.
//!
//! This module contains the data model of the audit lifecycle:
//! - Caller-assigned identity via `AuditId` and `AuditContext`
//! - The `AuditState` sum type and its `AuditStatus` discriminant
//! - Dispatchable `AuditEvent`s
//! - Immutable history of advancing transitions
//! - Payload rules and the violations they report
//!
//! Nothing in this module performs I/O or reads a clock.

mod context;
mod event;
mod history;
pub mod rules;
mod state;

pub use context::{AuditContext, AuditId};
pub use event::{AuditEvent, EventKind};
pub use history::{AuditHistory, TransitionRecord};
pub use rules::{ValidationError, Violations};
pub use state::{AuditState, AuditStatus, CancelledContext, CompletedContext};
