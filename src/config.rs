//! Collection configuration.
//!
//! One [`CollectionConfig`] per remote collection drives a
//! [`crate::registry::RecordRegistry`]: instead of a hand-rolled
//! load/validate/save layer per screen, every screen is the same registry
//! configured with its collection name, field list, identifier prefix,
//! required-field set, and defaults.

use crate::sequencer::DEFAULT_PAD_WIDTH;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionConfig {
    /// Display title of the remote collection (e.g. "clients").
    pub collection: String,
    /// Prefix for minted display identifiers (e.g. "CLI").
    pub prefix: String,
    /// Zero-pad width of the numeric suffix.
    pub pad_width: usize,
    /// Attribute fields fetched from and written to the store.
    pub fields: Vec<String>,
    /// Fields that must be non-blank at submission time.
    pub required: Vec<String>,
    /// Fields covered by substring search.
    pub searchable: Vec<String>,
    /// Per-field default values applied to new drafts.
    pub defaults: HashMap<String, Value>,
}

impl CollectionConfig {
    pub fn new(collection: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            prefix: prefix.into(),
            pad_width: DEFAULT_PAD_WIDTH,
            fields: Vec::new(),
            required: Vec::new(),
            searchable: Vec::new(),
            defaults: HashMap::new(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(field.into(), value.into());
        self
    }

    pub fn with_pad_width(mut self, width: usize) -> Self {
        self.pad_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let config = CollectionConfig::new("clients", "CLI");
        assert_eq!(config.collection, "clients");
        assert_eq!(config.prefix, "CLI");
        assert_eq!(config.pad_width, DEFAULT_PAD_WIDTH);
        assert!(config.fields.is_empty());
        assert!(config.required.is_empty());
    }

    #[test]
    fn test_builder_chaining() {
        let config = CollectionConfig::new("Job Openings", "JOB")
            .with_fields(["jobTitle", "clientName", "openings"])
            .with_required(["jobTitle", "clientName"])
            .with_searchable(["jobTitle"])
            .with_default("openings", 1)
            .with_pad_width(4);

        assert_eq!(config.fields.len(), 3);
        assert_eq!(config.required, vec!["jobTitle", "clientName"]);
        assert_eq!(config.searchable, vec!["jobTitle"]);
        assert_eq!(config.defaults.get("openings"), Some(&json!(1)));
        assert_eq!(config.pad_width, 4);
    }
}
