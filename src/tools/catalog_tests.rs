//! Tests for tool names and definitions.

use serde_json::json;

use super::{ToolName, definitions};

#[test]
fn lists_three_tools_in_order() {
    let names: Vec<_> = definitions().iter().map(|d| d.name).collect();

    assert_eq!(names, ["send_message", "edit_message", "delete_message"]);
}

#[test]
fn names_round_trip() {
    for tool in ToolName::ALL {
        assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
    }
    assert_eq!(ToolName::from_name("nope"), None);
}

#[test]
fn edit_and_delete_require_message_id() {
    let defs = definitions();

    assert_eq!(defs[1].input_schema["required"], json!(["message_id"]));
    assert_eq!(defs[2].input_schema["required"], json!(["message_id"]));
}

#[test]
fn schemas_are_closed() {
    for def in definitions() {
        assert_eq!(def.input_schema["additionalProperties"], false);
    }
}

#[test]
fn serializes_input_schema_in_camel_case() {
    let value = json!(definitions()[0]);

    assert!(value.get("inputSchema").is_some());
    assert!(value["description"].as_str().unwrap().contains("2000"));
}
