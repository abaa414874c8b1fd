//! Per-node conversion: a fragment read into a pre-created node must write
//! back unchanged, and must behave exactly like the same content inside a
//! whole-document read.

use serde_json::json;
use voussoir_codec::{create_document, read_node, write_node};

#[test]
fn info_fragment_reads_into_an_empty_document() {
    let mut doc = create_document("2.0").unwrap();
    let fragment = json!({
        "title": "Partially Loaded",
        "contact": {"email": "owner@example.com"},
        "version": "0.1.0",
        "x-stage": "draft"
    });

    let info = doc.create_info();
    read_node(&mut doc, info, &fragment).unwrap();
    if let Some(d) = doc.node_mut(doc.root()).as_document_v2_mut() {
        d.info = Some(info);
    }

    assert_eq!(write_node(&doc, info), fragment);
    assert_eq!(
        write_node(&doc, doc.root()),
        json!({"swagger": "2.0", "info": fragment})
    );
}

#[test]
fn operation_fragment_reads_under_a_built_path() {
    let mut doc = create_document("2.0").unwrap();
    let fragment = json!({
        "summary": "Delete a pet",
        "operationId": "deletePet",
        "parameters": [
            {"name": "petId", "in": "path", "required": true, "type": "string"}
        ],
        "responses": {
            "204": {"description": "Deleted"}
        }
    });

    let paths = doc.create_paths();
    let item = doc.add_path_item(paths, "/pets/{petId}");
    let op = doc.create_operation(item, "delete");
    read_node(&mut doc, op, &fragment).unwrap();

    assert_eq!(write_node(&doc, op), fragment);
    // Ownership runs through the built chain.
    assert_eq!(doc.parent(op), Some(item));
    assert_eq!(doc.parent(item), Some(paths));
}

#[test]
fn response_definition_fragment_round_trips() {
    let mut doc = create_document("2.0").unwrap();
    let fragment = json!({
        "description": "Standard error body",
        "schema": {
            "type": "object",
            "properties": {
                "code": {"type": "integer"},
                "message": {"type": "string"}
            }
        },
        "headers": {
            "X-Request-Id": {"type": "string"}
        }
    });

    let collection = doc.create_responses_definitions();
    let def = doc.add_response_definition(collection, "Error");
    read_node(&mut doc, def, &fragment).unwrap();

    assert_eq!(write_node(&doc, def), fragment);
}

#[test]
fn document_node_partial_read_checks_the_marker() {
    let mut doc = create_document("2.0").unwrap();
    let root = doc.root();
    let err = read_node(&mut doc, root, &json!({"swagger": "3.0.0"})).unwrap_err();
    assert!(matches!(
        err,
        voussoir_codec::ModelError::UnsupportedVersion(_)
    ));

    read_node(
        &mut doc,
        root,
        &json!({"swagger": "2.0", "host": "api.example.com"}),
    )
    .unwrap();
    let fields = doc.node(root).as_document_v2().unwrap();
    assert_eq!(fields.host.as_deref(), Some("api.example.com"));
}
