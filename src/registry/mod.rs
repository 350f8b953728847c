//! The record registry: a synchronization layer between an in-memory list
//! view and a remote collection.
//!
//! The registry owns the last known-good snapshot of one collection. It
//! refreshes the snapshot wholesale on [`RecordRegistry::load`], mints
//! display identifiers for new drafts, validates and persists drafts
//! through the injected [`CollectionGateway`], and patches the snapshot
//! only after the gateway confirms a write. The remote collection stays
//! the source of truth: concurrent writers are not reflected until the
//! next load, and two registries sequencing identifiers from the same
//! snapshot can mint duplicates (see [`crate::sequencer`]).

mod error;

pub use error::RegistryError;

use crate::config::CollectionConfig;
use crate::gateway::CollectionGateway;
use crate::record::{Draft, DraftState, Record};
use crate::sequencer;
use crate::user::UserContext;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct RecordRegistry {
    config: CollectionConfig,
    gateway: Arc<dyn CollectionGateway>,
    user: UserContext,
    records: Vec<Record>,
    pending_next_suffix: u32,
}

impl RecordRegistry {
    pub fn new(
        config: CollectionConfig,
        gateway: Arc<dyn CollectionGateway>,
        user: UserContext,
    ) -> Self {
        Self {
            config,
            gateway,
            user,
            records: Vec::new(),
            pending_next_suffix: 1,
        }
    }

    /// The display title of the collection this registry mediates.
    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn user(&self) -> &UserContext {
        &self.user
    }

    /// The last known-good snapshot of the remote collection, in remote
    /// fetch order followed by local appends.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The numeric suffix the next minted display identifier will carry,
    /// as of the last load or confirmed write.
    pub fn pending_next_suffix(&self) -> u32 {
        self.pending_next_suffix
    }

    /// Refresh the snapshot wholesale from the remote collection.
    ///
    /// On failure the previous snapshot is retained untouched and the
    /// error is surfaced for display; loads are never retried
    /// automatically.
    pub async fn load(&mut self) -> Result<(), RegistryError> {
        let fetched = self
            .gateway
            .select(&self.config.collection, &self.config.fields)
            .await
            .map_err(|err| {
                warn!(
                    collection = %self.config.collection,
                    error = %err,
                    "load failed, keeping previous snapshot"
                );
                RegistryError::Fetch(err)
            })?;

        info!(
            collection = %self.config.collection,
            count = fetched.len(),
            "loaded collection"
        );
        self.records = fetched;
        self.pending_next_suffix = sequencer::next_suffix(&self.records);
        Ok(())
    }

    /// A fresh draft carrying the next display identifier and the
    /// configured field defaults. No gateway call is made.
    pub fn prepare_new(&self) -> Draft {
        let mut record = Record::new();
        record.display_id = Some(sequencer::next_display_id(
            &self.config.prefix,
            &self.records,
            self.config.pad_width,
        ));
        for (field, value) in &self.config.defaults {
            record.fields.insert(field.clone(), value.clone());
        }
        Draft::new(record)
    }

    /// A draft seeded from an existing record, for editing.
    pub fn prepare_edit(&self, record: &Record) -> Draft {
        Draft::new(record.clone())
    }

    /// Validate and persist a draft.
    ///
    /// Required fields are trimmed before the blank check; a failed
    /// validation lists every missing field and performs no gateway call.
    /// Drafts without a remote primary key go through the gateway's `add`
    /// and are appended to the snapshot with the store-assigned key; drafts
    /// with one go through `update_by_id` and replace their snapshot entry
    /// in place. The snapshot is patched only after confirmed gateway
    /// success, so on failure it is untouched and the draft keeps its
    /// values for a user-initiated retry.
    pub async fn submit(&mut self, draft: &mut Draft) -> Result<Record, RegistryError> {
        if draft.state() != DraftState::Editing {
            return Err(RegistryError::DraftNotEditable(draft.state()));
        }

        let missing = self.missing_required(draft.record());
        if !missing.is_empty() {
            debug!(
                collection = %self.config.collection,
                missing = ?missing,
                "draft rejected by validation"
            );
            return Err(RegistryError::Validation { missing });
        }

        // New records get their display identifier before the write if the
        // caller built the draft without prepare_new.
        if draft.record().id.is_none() && draft.record().display_id.is_none() {
            draft.record_mut().display_id = Some(sequencer::next_display_id(
                &self.config.prefix,
                &self.records,
                self.config.pad_width,
            ));
        }

        draft.set_state(DraftState::Submitting);
        let result = match draft.record().id {
            Some(id) => self.persist_update(id, draft.record()).await,
            None => self.persist_add(draft.record()).await,
        };

        match result {
            Ok(stored) => {
                draft.set_state(DraftState::Persisted);
                Ok(stored)
            }
            Err(err) => {
                // Back to editing with the draft intact for retry
                draft.set_state(DraftState::Editing);
                Err(err)
            }
        }
    }

    async fn persist_add(&mut self, record: &Record) -> Result<Record, RegistryError> {
        let stored = self
            .gateway
            .add(&self.config.collection, record)
            .await
            .map_err(|err| {
                warn!(
                    collection = %self.config.collection,
                    error = %err,
                    "add failed"
                );
                RegistryError::Persistence(err)
            })?;

        info!(
            collection = %self.config.collection,
            id = stored.id,
            display_id = stored.display_id.as_deref(),
            "record added"
        );
        self.records.push(stored.clone());
        self.pending_next_suffix = sequencer::next_suffix(&self.records);
        Ok(stored)
    }

    async fn persist_update(&mut self, id: u64, record: &Record) -> Result<Record, RegistryError> {
        self.gateway
            .update_by_id(&self.config.collection, id, record)
            .await
            .map_err(|err| {
                warn!(
                    collection = %self.config.collection,
                    id,
                    error = %err,
                    "update failed"
                );
                RegistryError::Persistence(err)
            })?;

        info!(collection = %self.config.collection, id, "record updated");
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == Some(id)) {
            *slot = record.clone();
        }
        Ok(record.clone())
    }

    /// Case-insensitive substring search over the configured searchable
    /// fields. Lazy and restartable: every call walks the snapshot afresh
    /// without mutating it.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let needle = term.to_lowercase();
        self.records.iter().filter(move |record| {
            self.config.searchable.iter().any(|field| {
                record
                    .field_str(field)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
    }

    /// Count snapshot records whose `field` equals `value`, ignoring
    /// ASCII case. Backs the dashboard-style counters.
    pub fn count_where(&self, field: &str, value: &str) -> usize {
        self.records
            .iter()
            .filter(|record| {
                record
                    .field_str(field)
                    .is_some_and(|v| v.eq_ignore_ascii_case(value))
            })
            .count()
    }

    fn missing_required(&self, record: &Record) -> Vec<String> {
        self.config
            .required
            .iter()
            .filter(|field| is_blank(record.fields.get(field.as_str())))
            .cloned()
            .collect()
    }
}

/// A field is blank when absent, null, or a string that trims to empty.
/// Non-string scalars (numbers, booleans) always count as present.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
