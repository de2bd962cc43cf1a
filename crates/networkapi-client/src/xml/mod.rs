//! XML codec for the legacy NetworkAPI resources
//!
//! Every legacy body is a single document rooted at `<networkapi versao="1.0">`.
//! Mapping keys become child elements, arrays become repeated siblings and nested
//! mappings become nested elements. Decoding walks the tree depth-first and yields
//! a [`serde_json::Value`] mapping of the root's children with string leaves.
//!
//! Two list rules apply when decoding:
//! - names in the caller's force-list always decode to an array, even with zero or
//!   one occurrence (`name` for children of the root, `parent/name` for children of
//!   every `<parent>`);
//! - any other name seen twice under the same parent is promoted to an array in
//!   document order.

mod decode;
mod encode;
mod sanitize;

pub use decode::decode;
pub use encode::encode;
pub use sanitize::{escape_percent, sanitize, unescape_percent};

/// Root element name of every legacy document
pub const ROOT_ELEMENT: &str = "networkapi";

/// Value of the root `versao` attribute
pub const PROTOCOL_VERSION: &str = "1.0";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_nested_mapping() {
        let payload = json!({
            "vlan": {
                "nome": "VLAN_WEB",
                "descricao": "Front end",
                "ambiente": { "id": "12", "nome": "DC1 - BE" },
                "redes": ["10.0.0.0/24", "10.0.1.0/24"],
            }
        });

        let xml = encode(&payload).unwrap();
        assert_eq!(decode(&xml, &[]).unwrap(), payload);
    }

    #[test]
    fn test_round_trip_list_of_mappings() {
        let payload = json!({
            "equipamento": [
                { "id": "1", "nome": "SW-01" },
                { "id": "2", "nome": "SW-02" },
            ]
        });

        let xml = encode(&payload).unwrap();
        assert_eq!(decode(&xml, &[]).unwrap(), payload);
    }

    #[test]
    fn test_round_trip_percent() {
        let payload = json!({ "ambiente": { "descricao": "100% utilizado, 5%% reserva" } });

        let xml = encode(&payload).unwrap();
        assert!(xml.contains("100%% utilizado"));
        assert_eq!(decode(&xml, &[]).unwrap(), payload);
    }

    #[test]
    fn test_round_trip_blank_string() {
        let payload = json!({ "a": { "descricao": " ", "nome": "x" } });

        let xml = encode(&payload).unwrap();
        assert_eq!(decode(&xml, &[]).unwrap(), payload);
    }

    #[test]
    fn test_round_trip_markup_characters() {
        let payload = json!({ "filter": { "description": "a < b & c > \"d\"" } });

        let xml = encode(&payload).unwrap();
        assert_eq!(decode(&xml, &[]).unwrap(), payload);
    }
}
