//! NetworkAPI request/response helpers shared by the façades
//!
//! Payloads travel as [`serde_json::Value`] mappings. These types cover the pieces
//! that repeat across endpoints: legacy search pagination, v3/v4 query options and
//! narrowing a response down to the single entity the server wraps it in.

use crate::error::NetworkApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pagination block accepted by the legacy `find` endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Pagination {
    /// First record (0-based)
    pub start_record: u64,
    /// Last record (exclusive)
    pub end_record: u64,
    /// Sort columns, prefixed with `-` for descending order
    pub asorting_cols: Vec<String>,
    /// Columns matched by `custom_search`
    pub searchable_columns: Vec<String>,
    /// Free-text search term
    pub custom_search: String,
}

impl Pagination {
    /// Pagination over `[start_record, end_record)` with no sorting or search
    pub fn new(start_record: u64, end_record: u64) -> Self {
        Self {
            start_record,
            end_record,
            ..Self::default()
        }
    }

    /// Copy the pagination fields into a request mapping
    pub fn apply(&self, map: &mut Map<String, Value>) -> Result<(), NetworkApiError> {
        if let Value::Object(fields) = serde_json::to_value(self)? {
            map.extend(fields);
        }
        Ok(())
    }
}

/// Query options understood by the v3/v4 endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Search filter, sent JSON-encoded as `search`
    pub search: Option<Value>,
    /// Only these fields are returned
    pub fields: Vec<String>,
    /// Extra (nested) fields to include
    pub include: Vec<String>,
    /// Fields to drop from the default set
    pub exclude: Vec<String>,
    /// Serializer kind (`basic`, `details`)
    pub kind: Option<String>,
}

impl QueryOptions {
    /// Options with a search filter only
    pub fn search(search: Value) -> Self {
        Self {
            search: Some(search),
            ..Self::default()
        }
    }

    /// Restrict the returned fields
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add nested fields
    #[must_use]
    pub fn with_include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = include.into_iter().map(Into::into).collect();
        self
    }

    /// Drop fields
    #[must_use]
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// Select the serializer kind
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Whether no option is set
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.fields.is_empty()
            && self.include.is_empty()
            && self.exclude.is_empty()
            && self.kind.is_none()
    }
}

/// Take the single entity the server wraps under `key`
///
/// # Returns
/// * `Ok(Value)` - The inner value
/// * `Err(NetworkApiError::Xml)` - If the response has no such element
pub fn narrow(mut response: Value, key: &str) -> Result<Value, NetworkApiError> {
    response
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| NetworkApiError::Xml(format!("response has no <{key}> element")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_apply() {
        let mut map = Map::new();
        map.insert("nome".to_string(), json!("VLAN_WEB"));

        let mut pagination = Pagination::new(0, 25);
        pagination.asorting_cols = vec!["-num_vlan".to_string()];
        pagination.apply(&mut map).unwrap();

        assert_eq!(
            Value::Object(map),
            json!({
                "nome": "VLAN_WEB",
                "start_record": 0,
                "end_record": 25,
                "asorting_cols": ["-num_vlan"],
                "searchable_columns": [],
                "custom_search": "",
            })
        );
    }

    #[test]
    fn test_narrow() {
        let inner = narrow(json!({ "ambiente": { "id": "7" } }), "ambiente").unwrap();
        assert_eq!(inner, json!({ "id": "7" }));
        assert!(narrow(json!({}), "ambiente").is_err());
    }

    #[test]
    fn test_query_options_builder() {
        let options = QueryOptions::search(json!({ "name": "DC1" }))
            .with_fields(["id", "name"])
            .with_kind("basic");
        assert!(!options.is_empty());
        assert_eq!(options.fields, vec!["id", "name"]);
        assert!(QueryOptions::default().is_empty());
    }
}
