//! URL helpers for NetworkAPI paths
//!
//! Provides path-segment encoding, multi-id joining and the v3/v4 query string.

use crate::error::NetworkApiError;
use crate::models::QueryOptions;
use std::borrow::Cow;

/// Percent-encode a value used as a path segment (names, IPs with slashes)
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Join identifiers with `;` as the v3/v4 endpoints expect (`1;2;3`)
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Build query string from key/value pairs
pub fn build_query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append the v3/v4 query options to `path`
///
/// `search` is JSON-encoded; `fields`, `include` and `exclude` are comma-joined.
pub fn prepare_url(path: &str, options: &QueryOptions) -> Result<String, NetworkApiError> {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(search) = &options.search {
        params.push(("search", serde_json::to_string(search)?));
    }
    if !options.fields.is_empty() {
        params.push(("fields", options.fields.join(",")));
    }
    if !options.include.is_empty() {
        params.push(("include", options.include.join(",")));
    }
    if !options.exclude.is_empty() {
        params.push(("exclude", options.exclude.join(",")));
    }
    if let Some(kind) = &options.kind {
        params.push(("kind", kind.clone()));
    }

    if params.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, build_query_string(&params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 2, 3]), "1;2;3");
        assert_eq!(join_ids(&[9]), "9");
    }

    #[test]
    fn test_prepare_url_without_options() {
        let url = prepare_url("api/v3/vlan/", &QueryOptions::default()).unwrap();
        assert_eq!(url, "api/v3/vlan/");
    }

    #[test]
    fn test_prepare_url_with_options() {
        let options = QueryOptions::search(json!({ "name": "DC1" }))
            .with_fields(["id", "name"])
            .with_kind("basic");
        let url = prepare_url("api/v3/environment/", &options).unwrap();
        assert_eq!(
            url,
            "api/v3/environment/?search=%7B%22name%22%3A%22DC1%22%7D&fields=id%2Cname&kind=basic"
        );
    }

    #[test]
    fn test_segment_encodes_slashes() {
        assert_eq!(segment("10.0.0.0/24"), "10.0.0.0%2F24");
        assert_eq!(segment("SW-01"), "SW-01");
    }
}
