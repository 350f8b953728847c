//! Record and draft types shared by every collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single row of a remote collection.
///
/// A record is a mapping from field name to scalar value (strings, numbers,
/// dates-as-strings). The remote primary key and the human-readable display
/// identifier sit outside the field map; both are immutable once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Remote-assigned numeric primary key. `None` until the store
    /// confirms creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Human-readable `<PREFIX>-<NNN>` identifier, minted by the sequencer
    /// before the record is first sent to the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    /// Free-form attribute fields.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field's value as a string slice, if present and a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Set an attribute field, replacing any existing value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Whether the remote store has confirmed this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Lifecycle of a draft between the form and the store.
///
/// `Editing -> Submitting -> Persisted`. Validation rejections and gateway
/// failures return the draft to `Editing` with its values intact, so a
/// failed submission never loses data. `Persisted` is terminal: the same
/// draft cannot be submitted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Editing,
    Submitting,
    Persisted,
}

/// A record under construction or editing, not yet confirmed persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    record: Record,
    state: DraftState,
}

impl Draft {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            state: DraftState::Editing,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: DraftState) {
        self.state = state;
    }

    pub fn display_id(&self) -> Option<&str> {
        self.record.display_id.as_deref()
    }

    /// Set an attribute field on the underlying record.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.record.set_field(name, value);
        self
    }

    /// A field's value as a string slice, if present and a string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.record.field_str(name)
    }
}
