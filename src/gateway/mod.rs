//! The remote collection gateway seam.
//!
//! The registry never talks to a list store directly; it goes through
//! [`CollectionGateway`], which a host implements against its actual
//! backend (a SharePoint site, a REST service, or the bundled
//! [`MemoryGateway`]).

mod memory;

pub use memory::MemoryGateway;

use crate::record::Record;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a collection gateway.
///
/// Read paths report [`GatewayError::Unavailable`]; write paths report
/// [`GatewayError::Rejected`] or [`GatewayError::RecordNotFound`]. The
/// registry maps these onto its own fetch/persistence taxonomy.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("collection '{collection}' is unavailable: {reason}")]
    Unavailable { collection: String, reason: String },

    #[error("collection '{0}' not found")]
    UnknownCollection(String),

    #[error("store rejected the write: {0}")]
    Rejected(String),

    #[error("record {id} not found in collection '{collection}'")]
    RecordNotFound { collection: String, id: u64 },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GatewayError {
    /// Create an unavailable error for a collection
    pub fn unavailable(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::Unavailable {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    /// Create a rejected-write error
    pub fn rejected(reason: impl Into<String>) -> Self {
        GatewayError::Rejected(reason.into())
    }
}

/// A named-collection list store: select records, append one, or overwrite
/// one by its store-assigned primary key.
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    /// Fetch every record of `collection`, restricted to `fields`
    /// (an empty slice means all fields).
    async fn select(
        &self,
        collection: &str,
        fields: &[String],
    ) -> Result<Vec<Record>, GatewayError>;

    /// Append a record, echoing it back with the store-assigned primary
    /// key. The given record must not already carry one.
    async fn add(&self, collection: &str, record: &Record) -> Result<Record, GatewayError>;

    /// Overwrite the attribute fields of the record with primary key `id`.
    async fn update_by_id(
        &self,
        collection: &str,
        id: u64,
        record: &Record,
    ) -> Result<(), GatewayError>;
}
