//! Audit states and their per-state context.
//!
//! `AuditState` is a sum type: each variant carries exactly the fields that
//! are meaningful in that state. A Pending audit has no place to put a
//! summary, and a Completed audit cannot be built without one.

use super::context::{AuditContext, AuditId};
use super::rules::{self, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Immutable snapshot of an audit at one point in its lifecycle.
///
/// States are never mutated in place. The engine always returns a freshly
/// constructed value (or a clone of the input for terminal no-ops).
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::core::{AuditState, AuditStatus};
/// use chrono::Utc;
///
/// let state = AuditState::pending("AUD-001", Utc::now());
///
/// assert_eq!(state.status(), AuditStatus::Pending);
/// assert_eq!(state.id().as_str(), "AUD-001");
/// assert!(state.summary().is_none());
/// assert!(!state.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "context")]
pub enum AuditState {
    #[serde(deserialize_with = "strict_context")]
    Pending(AuditContext),
    #[serde(deserialize_with = "strict_context")]
    InProgress(AuditContext),
    Completed(CompletedContext),
    Cancelled(CancelledContext),
}

impl AuditState {
    /// Build the initial state of a new audit.
    ///
    /// The identifier and timestamp are supplied by the caller; nothing in
    /// this crate reads a clock on the engine's behalf.
    pub fn pending(id: impl Into<AuditId>, created_at: DateTime<Utc>) -> Self {
        Self::Pending(AuditContext::new(id, created_at))
    }

    /// Build an InProgress state for an existing audit.
    pub fn in_progress(context: AuditContext) -> Self {
        Self::InProgress(context)
    }

    /// Build a Completed state, rejecting a blank summary.
    ///
    /// The summary is stored exactly as given; trimming is only used to
    /// decide whether it is blank.
    pub fn completed(
        context: AuditContext,
        summary: impl Into<String>,
    ) -> Result<Self, Violations> {
        CompletedContext::new(context, summary.into()).map(Self::Completed)
    }

    /// Build a Cancelled state; the reason may be absent.
    pub fn cancelled(context: AuditContext, reason: Option<String>) -> Self {
        Self::Cancelled(CancelledContext {
            base: context,
            cancellation_reason: reason,
        })
    }

    /// Get the payload-free status (pure).
    pub fn status(&self) -> AuditStatus {
        match self {
            Self::Pending(_) => AuditStatus::Pending,
            Self::InProgress(_) => AuditStatus::InProgress,
            Self::Completed(_) => AuditStatus::Completed,
            Self::Cancelled(_) => AuditStatus::Cancelled,
        }
    }

    /// Name of the state for display/logging.
    pub fn name(&self) -> &'static str {
        self.status().name()
    }

    /// Completed and Cancelled absorb every further event.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Identity shared by all variants.
    pub fn context(&self) -> &AuditContext {
        match self {
            Self::Pending(context) | Self::InProgress(context) => context,
            Self::Completed(completed) => &completed.base,
            Self::Cancelled(cancelled) => &cancelled.base,
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> &AuditId {
        self.context().id()
    }

    /// Timestamp assigned at creation.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.context().created_at()
    }

    /// The completion summary; only Completed states carry one.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Completed(completed) => Some(completed.summary()),
            _ => None,
        }
    }

    /// The cancellation reason; only Cancelled states can carry one, and
    /// even then it may be absent.
    pub fn cancellation_reason(&self) -> Option<&str> {
        match self {
            Self::Cancelled(cancelled) => cancelled.cancellation_reason(),
            _ => None,
        }
    }
}

impl fmt::Display for AuditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

/// Context of a Completed audit. Always holds a non-blank summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CompletedContextRepr")]
pub struct CompletedContext {
    #[serde(flatten)]
    base: AuditContext,
    summary: String,
}

impl CompletedContext {
    fn new(base: AuditContext, summary: String) -> Result<Self, Violations> {
        rules::validate_completion(&summary)?;
        Ok(Self { base, summary })
    }

    /// Identity of the completed audit.
    pub fn context(&self) -> &AuditContext {
        &self.base
    }

    /// The summary exactly as supplied with COMPLETE.
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

// Deserialized completed contexts go through the same summary rule as
// engine-built ones.
#[derive(Deserialize)]
struct CompletedContextRepr {
    #[serde(flatten)]
    base: AuditContext,
    summary: String,
}

impl TryFrom<CompletedContextRepr> for CompletedContext {
    type Error = Violations;

    fn try_from(repr: CompletedContextRepr) -> Result<Self, Self::Error> {
        Self::new(repr.base, repr.summary)
    }
}

// Pending and InProgress carry nothing beyond identity, so a stray
// `summary` or `cancellationReason` key is rejected rather than dropped.
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct StrictContext {
    id: AuditId,
    created_at: DateTime<Utc>,
}

fn strict_context<'de, D>(deserializer: D) -> Result<AuditContext, D::Error>
where
    D: Deserializer<'de>,
{
    let StrictContext { id, created_at } = StrictContext::deserialize(deserializer)?;
    Ok(AuditContext::new(id, created_at))
}

/// Context of a Cancelled audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledContext {
    #[serde(flatten)]
    base: AuditContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cancellation_reason: Option<String>,
}

impl CancelledContext {
    /// Identity of the cancelled audit.
    pub fn context(&self) -> &AuditContext {
        &self.base
    }

    /// The reason given with CANCEL, if any.
    pub fn cancellation_reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }
}

/// Payload-free discriminant of an [`AuditState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl AuditStatus {
    /// Display name, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Check if this status absorbs every further event.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
