//! Mapping -> XML

use super::sanitize::escape_percent;
use super::{PROTOCOL_VERSION, ROOT_ELEMENT};
use crate::error::NetworkApiError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

type XmlWriter = Writer<Vec<u8>>;

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), NetworkApiError> {
    writer
        .write_event(event)
        .map_err(|e| NetworkApiError::Xml(e.to_string()))
}

/// Serialize a mapping into a `<networkapi versao="1.0">` document.
///
/// The payload must be an object; its keys become the root's children.
pub fn encode(payload: &Value) -> Result<String, NetworkApiError> {
    let Value::Object(map) = payload else {
        return Err(NetworkApiError::invalid_parameter(
            "XML payload must be a mapping",
        ));
    };

    let mut writer = Writer::new(Vec::new());
    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new(ROOT_ELEMENT).with_attributes([("versao", PROTOCOL_VERSION)])),
    )?;
    write_children(&mut writer, map)?;
    write(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| NetworkApiError::Xml(e.to_string()))
}

fn write_children(writer: &mut XmlWriter, map: &Map<String, Value>) -> Result<(), NetworkApiError> {
    for (name, value) in map {
        write_element(writer, name, value)?;
    }
    Ok(())
}

fn write_element(writer: &mut XmlWriter, name: &str, value: &Value) -> Result<(), NetworkApiError> {
    match value {
        // repeated siblings; nested arrays flatten into the same run
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            write_children(writer, map)?;
            write(writer, Event::End(BytesEnd::new(name)))
        }
        Value::Null => write(writer, Event::Empty(BytesStart::new(name))),
        Value::String(text) => write_text(writer, name, &escape_percent(text)),
        Value::Bool(flag) => write_text(writer, name, if *flag { "True" } else { "False" }),
        Value::Number(number) => write_text(writer, name, &number.to_string()),
    }
}

fn write_text(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), NetworkApiError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_document_shape() {
        let xml = encode(&json!({ "ambiente": { "id": 7, "ativo": true, "vrf": null } })).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\">\
             <ambiente><id>7</id><ativo>True</ativo><vrf/></ambiente></networkapi>"
        );
    }

    #[test]
    fn test_encode_list_as_siblings() {
        let xml = encode(&json!({ "network": { "ids": [1, 2, 3] } })).unwrap();
        assert!(xml.contains("<network><ids>1</ids><ids>2</ids><ids>3</ids></network>"));
    }

    #[test]
    fn test_encode_escapes_percent_and_markup() {
        let xml = encode(&json!({ "vlan": { "descricao": "50% <web>" } })).unwrap();
        assert!(xml.contains("<descricao>50%% &lt;web&gt;</descricao>"));
    }

    #[test]
    fn test_encode_rejects_non_mapping() {
        let result = encode(&json!(["a", "b"]));
        assert!(matches!(result, Err(NetworkApiError::InvalidParameter(_))));
    }
}
