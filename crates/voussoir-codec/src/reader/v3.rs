//! Field routines for the OpenAPI 3.0 top-level surface.

use serde_json::Value;
use voussoir_model::extensions::{data_entries, is_extension_name};
use voussoir_model::{Document, ModelError, NodeId, Oas3Visitor, SpecVersion};

use super::common;
use super::{defined, read_extensions, string_array_field, string_field, ReadFn};

pub(crate) fn read_document(doc: &mut Document, value: &Value) -> Result<(), ModelError> {
    let marker = value
        .get(SpecVersion::V3.discriminator_field())
        .and_then(Value::as_str)
        .unwrap_or_default();
    if marker != SpecVersion::V3.discriminator_value() {
        return Err(ModelError::UnsupportedVersion(marker.to_string()));
    }

    let root = doc.root();
    let mut fields = doc.node(root).as_document_v3().cloned().unwrap_or_default();

    if let Some(v) = defined(value, "info") {
        let info = doc.create_info();
        common::read_info(doc, info, v)?;
        fields.info = Some(info);
    }
    if let Some(items) = defined(value, "servers").and_then(Value::as_array) {
        let mut servers = Vec::new();
        for item in items {
            let server = doc.create_server();
            read_server(doc, server, item)?;
            servers.push(server);
        }
        fields.servers = Some(servers);
    }
    if let Some(items) = defined(value, "security").and_then(Value::as_array) {
        let mut security = Vec::new();
        for item in items {
            let req = doc.create_security_requirement(root);
            common::read_security_requirement(doc, req, item)?;
            security.push(req);
        }
        fields.security = Some(security);
    }
    if let Some(items) = defined(value, "tags").and_then(Value::as_array) {
        let mut tags = Vec::new();
        for item in items {
            let tag = doc.create_tag();
            common::read_tag(doc, tag, item)?;
            tags.push(tag);
        }
        fields.tags = Some(tags);
    }
    if let Some(v) = defined(value, "externalDocs") {
        let edoc = doc.create_external_documentation(root);
        common::read_external_documentation(doc, edoc, v)?;
        fields.external_docs = Some(edoc);
    }

    if let Some(slot) = doc.node_mut(root).as_document_v3_mut() {
        *slot = fields;
    }
    read_extensions(doc, root, value)
}

fn read_document_node(doc: &mut Document, _node: NodeId, value: &Value) -> Result<(), ModelError> {
    read_document(doc, value)
}

pub(crate) fn read_server(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut server = doc.node(node).as_server().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "url") {
        server.url = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        server.description = Some(s);
    }
    if let Some(obj) = defined(value, "variables").and_then(Value::as_object) {
        let mut variables = std::collections::BTreeMap::new();
        for (name, v) in data_entries(obj) {
            let variable = doc.create_server_variable(node, name);
            read_server_variable(doc, variable, v)?;
            variables.insert(name.clone(), variable);
        }
        for (name, v) in obj.iter().filter(|(name, _)| is_extension_name(name)) {
            doc.add_extension(node, name, v.clone())?;
        }
        server.variables = Some(variables);
    }

    if let Some(slot) = doc.node_mut(node).as_server_mut() {
        *slot = server;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_server_variable(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut variable = doc
        .node(node)
        .as_server_variable()
        .cloned()
        .unwrap_or_default();

    if let Some(a) = string_array_field(value, "enum") {
        variable.enum_values = Some(a);
    }
    if let Some(s) = string_field(value, "default") {
        variable.default = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        variable.description = Some(s);
    }

    if let Some(slot) = doc.node_mut(node).as_server_variable_mut() {
        *slot = variable;
    }
    read_extensions(doc, node, value)
}

/// 3.0 counterpart of the 2.0 dispatch visitor.
#[derive(Default)]
pub(crate) struct ReadDispatch {
    pub(crate) routine: Option<ReadFn>,
}

impl Oas3Visitor for ReadDispatch {
    fn visit_document(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_document_node);
    }
    fn visit_info(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_info);
    }
    fn visit_contact(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_contact);
    }
    fn visit_license(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_license);
    }
    fn visit_tag(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_tag);
    }
    fn visit_external_documentation(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_external_documentation);
    }
    fn visit_security_requirement(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_security_requirement);
    }
    fn visit_server(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_server);
    }
    fn visit_server_variable(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_server_variable);
    }
}
