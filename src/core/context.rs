//! Identity data shared by every audit state.
//!
//! The identifier and creation timestamp are assigned once, when the caller
//! builds the initial Pending state, and are carried unchanged through every
//! later transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of an audit record.
///
/// The engine never generates identifiers. Callers either bring their own
/// (`"AUD-001"`) or use [`AuditId::random`] at creation time.
///
/// # Example
///
/// ```rust
/// use audit_lifecycle::core::AuditId;
///
/// let id = AuditId::from("AUD-001");
/// assert_eq!(id.as_str(), "AUD-001");
/// assert_eq!(id.to_string(), "AUD-001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditId(String);

impl AuditId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (UUID v4).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AuditId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AuditId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Context carried by every audit state: who the audit is and when it began.
///
/// Fields are private so that no state can have its identity rewritten
/// after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditContext {
    id: AuditId,
    created_at: DateTime<Utc>,
}

impl AuditContext {
    /// Create a context from caller-supplied identity.
    pub fn new(id: impl Into<AuditId>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> &AuditId {
        &self.id
    }

    /// Timestamp assigned at creation.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
