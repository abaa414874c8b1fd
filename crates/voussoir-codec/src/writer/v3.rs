//! Write routines for the OpenAPI 3.0 top-level surface.

use serde_json::{Map, Value};
use voussoir_model::{Document, NodeId, Oas3Visitor, SpecVersion};

use super::common;
use super::{set_string, set_string_array, write_extensions};

pub(crate) fn write_document(doc: &Document) -> Value {
    let root = doc.root();
    let mut obj = Map::new();
    obj.insert(
        SpecVersion::V3.discriminator_field().to_string(),
        Value::String(SpecVersion::V3.discriminator_value().to_string()),
    );
    if let Some(fields) = doc.node(root).as_document_v3() {
        if let Some(info) = fields.info {
            obj.insert("info".to_string(), common::write_info(doc, info));
        }
        if let Some(servers) = &fields.servers {
            let items = servers.iter().map(|s| write_server(doc, *s)).collect();
            obj.insert("servers".to_string(), Value::Array(items));
        }
        if let Some(security) = &fields.security {
            let items = security
                .iter()
                .map(|req| common::write_security_requirement(doc, *req))
                .collect();
            obj.insert("security".to_string(), Value::Array(items));
        }
        if let Some(tags) = &fields.tags {
            let items = tags.iter().map(|tag| common::write_tag(doc, *tag)).collect();
            obj.insert("tags".to_string(), Value::Array(items));
        }
        if let Some(edoc) = fields.external_docs {
            obj.insert(
                "externalDocs".to_string(),
                common::write_external_documentation(doc, edoc),
            );
        }
    }
    write_extensions(doc, root, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_server(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(server) = doc.node(node).as_server() {
        set_string(&mut obj, "url", &server.url);
        set_string(&mut obj, "description", &server.description);
        if let Some(variables) = &server.variables {
            let mut vars = Map::new();
            for (name, variable) in variables {
                vars.insert(name.clone(), write_server_variable(doc, *variable));
            }
            obj.insert("variables".to_string(), Value::Object(vars));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_server_variable(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(variable) = doc.node(node).as_server_variable() {
        set_string_array(&mut obj, "enum", &variable.enum_values);
        set_string(&mut obj, "default", &variable.default);
        set_string(&mut obj, "description", &variable.description);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

/// 3.0 counterpart of the 2.0 writer visitor.
#[derive(Default)]
pub(crate) struct Writer {
    pub(crate) out: Value,
}

impl Oas3Visitor for Writer {
    fn visit_document(&mut self, doc: &Document, _node: NodeId) {
        self.out = write_document(doc);
    }
    fn visit_info(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_info(doc, node);
    }
    fn visit_contact(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_contact(doc, node);
    }
    fn visit_license(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_license(doc, node);
    }
    fn visit_tag(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_tag(doc, node);
    }
    fn visit_external_documentation(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_external_documentation(doc, node);
    }
    fn visit_security_requirement(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_security_requirement(doc, node);
    }
    fn visit_server(&mut self, doc: &Document, node: NodeId) {
        self.out = write_server(doc, node);
    }
    fn visit_server_variable(&mut self, doc: &Document, node: NodeId) {
        self.out = write_server_variable(doc, node);
    }
}
