//! Unified error type for registry operations.

use crate::gateway::GatewayError;
use crate::record::DraftState;
use thiserror::Error;

/// Errors surfaced by [`crate::registry::RecordRegistry`] operations.
///
/// Nothing here is fatal: validation failures return the draft to editing
/// with field-level detail, fetch failures keep the previous snapshot, and
/// persistence failures keep both the snapshot and the draft so the user
/// can retry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Required fields were blank at submission time.
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// The gateway read failed; the previous snapshot is retained.
    #[error("fetch failed: {0}")]
    Fetch(#[source] GatewayError),

    /// The gateway write failed; the snapshot is untouched and the draft
    /// keeps its values.
    #[error("persistence failed: {0}")]
    Persistence(#[source] GatewayError),

    /// The draft is mid-submission or already persisted.
    #[error("draft is {0:?} and cannot be submitted")]
    DraftNotEditable(DraftState),
}

impl RegistryError {
    /// The missing field names of a validation failure, if that is what
    /// this error is.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            RegistryError::Validation { missing } => Some(missing),
            _ => None,
        }
    }
}
