//! XML -> mapping

use super::sanitize::{sanitize, unescape_percent};
use crate::error::NetworkApiError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

#[derive(Debug, Default)]
struct Node {
    name: String,
    text: String,
    children: Vec<Node>,
}

fn xml_error(err: impl std::fmt::Display) -> NetworkApiError {
    NetworkApiError::Xml(err.to_string())
}

fn element_name(start: &BytesStart<'_>) -> Result<String, NetworkApiError> {
    std::str::from_utf8(start.name().as_ref())
        .map(str::to_owned)
        .map_err(xml_error)
}

/// One force-list entry: `name` applies under the document root, `parent/name`
/// applies under every `<parent>` element.
#[derive(Debug, Clone, Copy)]
struct ListRule<'a> {
    parent: Option<&'a str>,
    name: &'a str,
}

impl<'a> ListRule<'a> {
    fn parse(entry: &'a str) -> Self {
        match entry.split_once('/') {
            Some((parent, name)) => Self {
                parent: Some(parent),
                name,
            },
            None => Self { parent: None, name: entry },
        }
    }
}

/// Parse a legacy document and map the root's children.
///
/// Force-list entries name the elements that always decode to arrays. A bare
/// `name` refers to children of the root, `parent/name` to children of every
/// `<parent>` element. Either way the array is present in its parent mapping even
/// when the element never occurs. An empty body decodes to an empty mapping.
pub fn decode(xml: &str, force_list: &[&str]) -> Result<Value, NetworkApiError> {
    let rules: Vec<ListRule<'_>> = force_list.iter().copied().map(ListRule::parse).collect();
    let cleaned = sanitize(xml);
    if cleaned.trim().is_empty() {
        return Ok(Value::Object(children_to_map(&[], None, &rules)));
    }

    let root = parse(&cleaned)?;
    Ok(Value::Object(children_to_map(&root.children, None, &rules)))
}

fn parse(xml: &str) -> Result<Node, NetworkApiError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => stack.push(Node {
                name: element_name(&start)?,
                ..Node::default()
            }),
            Event::Empty(start) => {
                let node = Node {
                    name: element_name(&start)?,
                    ..Node::default()
                };
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| xml_error("unexpected closing tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape().map_err(xml_error)?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(xml_error(format!("element <{}> is never closed", open.name)));
    }
    root.ok_or_else(|| xml_error("document has no root element"))
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), NetworkApiError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        Ok(())
    } else if root.is_none() {
        *root = Some(node);
        Ok(())
    } else {
        Err(xml_error("document has more than one root element"))
    }
}

fn node_value(node: &Node, rules: &[ListRule<'_>]) -> Value {
    if !node.children.is_empty() {
        Value::Object(children_to_map(&node.children, Some(&node.name), rules))
    } else if node.text.is_empty() {
        Value::Null
    } else {
        Value::String(unescape_percent(&node.text).into_owned())
    }
}

fn children_to_map(children: &[Node], parent: Option<&str>, rules: &[ListRule<'_>]) -> Map<String, Value> {
    let forced = |name: &str| {
        rules
            .iter()
            .any(|rule| rule.parent == parent && rule.name == name)
    };
    let mut map = Map::new();

    for child in children {
        let value = node_value(child, rules);

        if forced(&child.name) {
            let entry = map
                .entry(child.name.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = entry {
                items.push(value);
            }
            continue;
        }

        match map.get_mut(&child.name) {
            None => {
                map.insert(child.name.clone(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }

    for rule in rules.iter().filter(|rule| rule.parent == parent) {
        if !map.contains_key(rule.name) {
            map.insert(rule.name.to_string(), Value::Array(Vec::new()));
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(inner: &str) -> String {
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\">{inner}</networkapi>")
    }

    #[test]
    fn test_leaves_stay_strings() {
        let value = decode(&doc("<ambiente><id>7</id></ambiente>"), &[]).unwrap();
        assert_eq!(value, json!({ "ambiente": { "id": "7" } }));
    }

    #[test]
    fn test_force_list_zero_one_two() {
        let zero = decode(&doc(""), &["vlan"]).unwrap();
        assert_eq!(zero, json!({ "vlan": [] }));

        let empty = decode(&doc("<vlan/>"), &["vlan"]).unwrap();
        assert_eq!(empty, json!({ "vlan": [null] }));

        let one = decode(&doc("<vlan><id>1</id></vlan>"), &["vlan"]).unwrap();
        assert_eq!(one, json!({ "vlan": [{ "id": "1" }] }));

        let two = decode(&doc("<vlan><id>1</id></vlan><vlan><id>2</id></vlan>"), &["vlan"]).unwrap();
        assert_eq!(two, json!({ "vlan": [{ "id": "1" }, { "id": "2" }] }));
    }

    #[test]
    fn test_scoped_force_list_under_parent() {
        let value = decode(
            &doc("<equipamento><id>3</id><ips><ip>10.0.0.1</ip></ips></equipamento>"),
            &["equipamento/ips", "equipamento/grupos"],
        )
        .unwrap();
        assert_eq!(
            value,
            json!({ "equipamento": { "id": "3", "ips": [{ "ip": "10.0.0.1" }], "grupos": [] } })
        );
    }

    #[test]
    fn test_scoped_force_list_zero_occurrences() {
        let value = decode(&doc("<vlan><id>1</id></vlan>"), &["vlan/redeipv4"]).unwrap();
        assert_eq!(value, json!({ "vlan": { "id": "1", "redeipv4": [] } }));
    }

    #[test]
    fn test_scoped_force_list_in_every_item() {
        let value = decode(
            &doc("<vlan><id>1</id><redeipv4><id>10</id></redeipv4></vlan><vlan><id>2</id></vlan>"),
            &["vlan", "vlan/redeipv4"],
        )
        .unwrap();
        assert_eq!(
            value,
            json!({ "vlan": [
                { "id": "1", "redeipv4": [{ "id": "10" }] },
                { "id": "2", "redeipv4": [] },
            ] })
        );
    }

    #[test]
    fn test_root_force_list_ignores_nested_names() {
        let value = decode(&doc("<vlan><id>1</id><vlan>inner</vlan></vlan>"), &["vlan"]).unwrap();
        assert_eq!(value, json!({ "vlan": [{ "id": "1", "vlan": "inner" }] }));
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let value = decode(&doc("<descricao> </descricao><nome></nome>"), &[]).unwrap();
        assert_eq!(value, json!({ "descricao": " ", "nome": null }));
    }

    #[test]
    fn test_implicit_promotion_preserves_order() {
        let single = decode(&doc("<marca><nome>Cisco</nome></marca>"), &[]).unwrap();
        assert_eq!(single, json!({ "marca": { "nome": "Cisco" } }));

        let many = decode(
            &doc("<marca><nome>Cisco</nome></marca><marca><nome>Dell</nome></marca><marca><nome>HP</nome></marca>"),
            &[],
        )
        .unwrap();
        assert_eq!(
            many,
            json!({ "marca": [{ "nome": "Cisco" }, { "nome": "Dell" }, { "nome": "HP" }] })
        );
    }

    #[test]
    fn test_empty_element_and_body() {
        assert_eq!(decode(&doc("<vrf/>"), &[]).unwrap(), json!({ "vrf": null }));
        assert_eq!(decode("", &[]).unwrap(), json!({}));
        assert_eq!(decode(&doc(""), &[]).unwrap(), json!({}));
    }

    #[test]
    fn test_illegal_characters_are_replaced() {
        let value = decode(&doc("<descricao>bad\u{2}char</descricao>"), &[]).unwrap();
        assert_eq!(value, json!({ "descricao": "bad?char" }));
    }

    #[test]
    fn test_cdata_and_entities() {
        let value = decode(&doc("<a><![CDATA[x < y]]></a><b>&amp;&lt;</b>"), &[]).unwrap();
        assert_eq!(value, json!({ "a": "x < y", "b": "&<" }));
    }

    #[test]
    fn test_malformed_document() {
        let result = decode("<networkapi><a></networkapi>", &[]);
        assert!(matches!(result, Err(NetworkApiError::Xml(_))));
    }
}
