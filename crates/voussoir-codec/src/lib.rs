//! Reader and writer between generic JSON and the voussoir document model.
//!
//! The reader walks a `serde_json::Value` and populates typed nodes through
//! the model's factories, so every node it creates is owned by the document
//! before any field lands on it. The writer is the inverse: it serializes
//! any node back to a generic value, omitting absent fields and appending
//! vendor extensions last. Both directions share the same per-kind routine
//! table, keyed through the visitor protocol, so partial (per-node) and
//! whole-document conversions cannot diverge.
//!
//! Input text is parsed with `serde_yaml`; JSON is a subset of YAML, so one
//! entry point covers both serializations.

pub mod reader;
pub mod writer;

use serde_json::Value;

pub use reader::{read_document, read_node};
pub use voussoir_model::{
    Document, ModelError, Node, NodeId, NodeKind, NodePayload, NodeVisitor, Oas2Visitor,
    Oas3Visitor, SpecVersion,
};
pub use writer::write_node;

/// An empty document for a version marker string (`"2.0"`, `"3.0.0"`).
pub fn create_document(marker: &str) -> Result<Document, ModelError> {
    Document::for_marker(marker)
}

/// Parse a JSON or YAML document source and read it into a model.
///
/// The version is taken from whichever discriminator field the source
/// carries; an unknown or missing marker fails with
/// [`ModelError::UnsupportedVersion`].
pub fn read_document_str(source: &str) -> Result<Document, ModelError> {
    let data: Value =
        serde_yaml::from_str(source).map_err(|e| ModelError::Parse(e.to_string()))?;
    let marker = data
        .get("swagger")
        .or_else(|| data.get("openapi"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut doc = Document::for_marker(marker)?;
    read_document(&mut doc, &data)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(source: &str) -> Document {
        read_document_str(source).unwrap()
    }

    #[test]
    fn reads_a_minimal_v2_document() {
        let doc = parse(
            r#"
            swagger: "2.0"
            info:
              title: Pet Store
              version: "1.0.0"
            host: api.example.com
            basePath: /v1
            "#,
        );
        assert_eq!(doc.version(), SpecVersion::V2);
        let root = doc.node(doc.root()).as_document_v2().unwrap();
        assert_eq!(root.host.as_deref(), Some("api.example.com"));
        assert_eq!(root.base_path.as_deref(), Some("/v1"));
        let info = doc.node(root.info.unwrap()).as_info().unwrap();
        assert_eq!(info.title.as_deref(), Some("Pet Store"));
    }

    #[test]
    fn version_must_match_exactly() {
        let err = read_document_str("swagger: \"2.1\"\n").unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVersion(v) if v == "2.1"));

        // A 2.0 body presented to a 3.0 document is also a mismatch.
        let mut doc = Document::new(SpecVersion::V3);
        let err = read_document(&mut doc, &json!({"swagger": "2.0"})).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVersion(_)));
    }

    #[test]
    fn explicit_null_reads_as_absent() {
        let doc = parse(
            r#"
            swagger: "2.0"
            info:
              title: Nulls
              description: null
              version: "1.0"
            host: null
            "#,
        );
        let root = doc.node(doc.root()).as_document_v2().unwrap();
        assert_eq!(root.host, None);
        let info = doc.node(root.info.unwrap()).as_info().unwrap();
        assert_eq!(info.description, None);
    }

    #[test]
    fn extension_keys_are_captured_not_treated_as_paths() {
        let doc = parse(
            r#"
            swagger: "2.0"
            x-origin: internal
            paths:
              x-hidden: true
              /pets:
                get:
                  operationId: listPets
            "#,
        );
        let root = doc.root();
        assert_eq!(doc.node(root).extensions()["x-origin"], json!("internal"));

        let paths_id = doc.node(root).as_document_v2().unwrap().paths.unwrap();
        let paths = doc.node(paths_id).as_paths().unwrap();
        assert_eq!(paths.path_items.len(), 1);
        assert!(paths.path_items.contains_key("/pets"));
        assert_eq!(doc.node(paths_id).extensions()["x-hidden"], json!(true));
    }

    #[test]
    fn property_extensions_stay_inside_properties() {
        let doc = parse(
            r#"
            swagger: "2.0"
            definitions:
              Pet:
                type: object
                x-internal: true
                properties:
                  name:
                    type: string
                  x-extra:
                    type: integer
            "#,
        );
        let defs_id = doc
            .node(doc.root())
            .as_document_v2()
            .unwrap()
            .definitions
            .unwrap();
        let pet_id = doc.node(defs_id).as_definitions().unwrap().schemas["Pet"];
        let pet = doc.node(pet_id).as_schema().unwrap();

        // The captured key belongs to the properties object, not the schema.
        let names: Vec<&str> = pet
            .properties
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["name"]);
        assert_eq!(pet.property_extensions["x-extra"], json!({"type": "integer"}));
        assert_eq!(doc.node(pet_id).extensions()["x-internal"], json!(true));

        let written = write_node(&doc, pet_id);
        assert_eq!(written["properties"]["x-extra"], json!({"type": "integer"}));
        assert_eq!(written["x-internal"], json!(true));
        assert!(written.get("x-extra").is_none());
    }

    #[test]
    fn x_prefixed_header_names_are_headers() {
        let doc = parse(
            r#"
            swagger: "2.0"
            responses:
              Ok:
                description: ok
                headers:
                  x-request-id:
                    type: string
            "#,
        );
        let defs_id = doc
            .node(doc.root())
            .as_document_v2()
            .unwrap()
            .responses
            .unwrap();
        let ok_id = doc.node(defs_id).as_responses_definitions().unwrap().responses["Ok"];
        let headers_id = doc
            .node(ok_id)
            .as_response_definition()
            .unwrap()
            .core
            .headers
            .unwrap();
        let headers = doc.node(headers_id).as_headers().unwrap();
        assert!(headers.headers.contains_key("x-request-id"));
        assert!(doc.node(headers_id).extensions().is_empty());

        let written = write_node(&doc, doc.root());
        assert_eq!(
            written["responses"]["Ok"]["headers"]["x-request-id"],
            json!({"type": "string"})
        );
    }

    #[test]
    fn parameter_fields_write_in_canonical_order() {
        // Input order is scrambled on purpose.
        let doc = parse(
            r#"
            swagger: "2.0"
            paths:
              /pets:
                get:
                  parameters:
                    - format: int32
                      type: integer
                      required: true
                      in: query
                      name: limit
            "#,
        );
        let written = write_node(&doc, doc.root());
        let param = written["paths"]["/pets"]["get"]["parameters"][0]
            .as_object()
            .unwrap();
        let keys: Vec<&str> = param.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "in", "required", "type", "format"]);
    }

    #[test]
    fn additional_properties_keeps_both_shapes() {
        let doc = parse(
            r#"
            swagger: "2.0"
            definitions:
              Open:
                type: object
                additionalProperties: true
              Dict:
                type: object
                additionalProperties:
                  type: string
            "#,
        );
        use voussoir_model::v2::BooleanOrSchema;
        let defs_id = doc
            .node(doc.root())
            .as_document_v2()
            .unwrap()
            .definitions
            .unwrap();
        let defs = doc.node(defs_id).as_definitions().unwrap();

        let open = doc.node(defs.schemas["Open"]).as_schema().unwrap();
        assert_eq!(open.additional_properties, Some(BooleanOrSchema::Flag(true)));

        let dict = doc.node(defs.schemas["Dict"]).as_schema().unwrap();
        assert!(matches!(
            dict.additional_properties,
            Some(BooleanOrSchema::Schema(_))
        ));
    }

    #[test]
    fn array_of_schemas_under_items_is_rejected() {
        let err = read_document_str(
            r#"
            swagger: "2.0"
            definitions:
              Tuple:
                type: array
                items:
                  - type: string
                  - type: integer
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedSchemaShape(_)));
    }

    #[test]
    fn unknown_type_name_is_an_invalid_enum_value() {
        let err = read_document_str(
            r#"
            swagger: "2.0"
            definitions:
              Bad:
                type: blob
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidEnumValue { field: "type", .. }
        ));
    }

    #[test]
    fn reference_stub_reads_and_writes_pointer_only() {
        let doc = parse(
            r##"
            swagger: "2.0"
            paths:
              /pets:
                get:
                  responses:
                    "200":
                      description: ok
                      schema:
                        $ref: "#/definitions/Pet"
            "##,
        );
        let written = write_node(&doc, doc.root());
        let schema =
            &written["paths"]["/pets"]["get"]["responses"]["200"]["schema"];
        assert_eq!(schema, &json!({"$ref": "#/definitions/Pet"}));
    }

    #[test]
    fn reads_a_minimal_v3_document() {
        let doc = parse(
            r#"
            openapi: "3.0.0"
            info:
              title: Pet Store
              version: "2.0.0"
            servers:
              - url: https://api.example.com/{basePath}
                variables:
                  basePath:
                    default: v2
            "#,
        );
        assert_eq!(doc.version(), SpecVersion::V3);
        let root = doc.node(doc.root()).as_document_v3().unwrap();
        let servers = root.servers.as_ref().unwrap();
        let server = doc.node(servers[0]).as_server().unwrap();
        let variable_id = server.variables.as_ref().unwrap()["basePath"];
        let variable = doc.node(variable_id).as_server_variable().unwrap();
        assert_eq!(variable.default.as_deref(), Some("v2"));
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let err = read_document_str("swagger: [unclosed").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
