//! In-memory gateway implementation.
//!
//! The reference backing store: per-collection record lists behind a mutex,
//! with sequential numeric primary keys assigned on `add`. Used by the
//! crate's own tests and by hosts that run without a remote list service.

use super::{CollectionGateway, GatewayError};
use crate::record::Record;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemoryGateway {
    inner: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    collections: HashMap<String, Vec<Record>>,
    next_key: HashMap<String, u64>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with pre-existing records. Records without a
    /// primary key are assigned the next sequential one.
    pub fn seed(&self, collection: &str, records: Vec<Record>) {
        let mut state = self.lock();
        let key = state.next_key.entry(collection.to_string()).or_insert(0);
        let mut seeded = Vec::with_capacity(records.len());
        for mut record in records {
            if record.id.is_none() {
                *key = key.saturating_add(1);
                record.id = Some(*key);
            } else if let Some(id) = record.id {
                *key = (*key).max(id);
            }
            seeded.push(record);
        }
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .extend(seeded);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CollectionGateway for MemoryGateway {
    async fn select(
        &self,
        collection: &str,
        fields: &[String],
    ) -> Result<Vec<Record>, GatewayError> {
        let state = self.lock();
        let records = state
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        debug!(collection, count = records.len(), "select");
        Ok(records
            .into_iter()
            .map(|record| project(record, fields))
            .collect())
    }

    async fn add(&self, collection: &str, record: &Record) -> Result<Record, GatewayError> {
        if record.id.is_some() {
            return Err(GatewayError::rejected(
                "record already carries a primary key",
            ));
        }
        let mut state = self.lock();
        let key = state.next_key.entry(collection.to_string()).or_insert(0);
        *key = key.saturating_add(1);
        let id = *key;

        let mut stored = record.clone();
        stored.id = Some(id);
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(stored.clone());
        debug!(collection, id, "add");
        Ok(stored)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: u64,
        record: &Record,
    ) -> Result<(), GatewayError> {
        let mut state = self.lock();
        let records = state
            .collections
            .get_mut(collection)
            .ok_or_else(|| GatewayError::UnknownCollection(collection.to_string()))?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| GatewayError::RecordNotFound {
                collection: collection.to_string(),
                id,
            })?;

        slot.fields = record.fields.clone();
        // Display identifiers are immutable once set
        if slot.display_id.is_none() {
            slot.display_id = record.display_id.clone();
        }
        debug!(collection, id, "update");
        Ok(())
    }
}

/// Restrict a record's attribute fields to the requested subset.
fn project(mut record: Record, fields: &[String]) -> Record {
    if !fields.is_empty() {
        record.fields.retain(|name, _| fields.contains(name));
    }
    record
}
