//! Field routines for node kinds shared by every document variant.

use serde_json::Value;
use voussoir_model::{Document, ModelError, NodeId};

use super::{defined, read_extensions, string_field};

pub(crate) fn read_info(doc: &mut Document, node: NodeId, value: &Value) -> Result<(), ModelError> {
    let mut info = doc.node(node).as_info().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "title") {
        info.title = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        info.description = Some(s);
    }
    if let Some(s) = string_field(value, "termsOfService") {
        info.terms_of_service = Some(s);
    }
    if let Some(v) = defined(value, "contact") {
        let contact = doc.create_contact(node);
        read_contact(doc, contact, v)?;
        info.contact = Some(contact);
    }
    if let Some(v) = defined(value, "license") {
        let license = doc.create_license(node);
        read_license(doc, license, v)?;
        info.license = Some(license);
    }
    if let Some(s) = string_field(value, "version") {
        info.version = Some(s);
    }

    if let Some(slot) = doc.node_mut(node).as_info_mut() {
        *slot = info;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_contact(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut contact = doc.node(node).as_contact().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "name") {
        contact.name = Some(s);
    }
    if let Some(s) = string_field(value, "url") {
        contact.url = Some(s);
    }
    if let Some(s) = string_field(value, "email") {
        contact.email = Some(s);
    }

    if let Some(slot) = doc.node_mut(node).as_contact_mut() {
        *slot = contact;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_license(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut license = doc.node(node).as_license().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "name") {
        license.name = Some(s);
    }
    if let Some(s) = string_field(value, "url") {
        license.url = Some(s);
    }

    if let Some(slot) = doc.node_mut(node).as_license_mut() {
        *slot = license;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_tag(doc: &mut Document, node: NodeId, value: &Value) -> Result<(), ModelError> {
    let mut tag = doc.node(node).as_tag().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "name") {
        tag.name = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        tag.description = Some(s);
    }
    if let Some(v) = defined(value, "externalDocs") {
        let edoc = doc.create_external_documentation(node);
        read_external_documentation(doc, edoc, v)?;
        tag.external_docs = Some(edoc);
    }

    if let Some(slot) = doc.node_mut(node).as_tag_mut() {
        *slot = tag;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_external_documentation(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut edoc = doc
        .node(node)
        .as_external_documentation()
        .cloned()
        .unwrap_or_default();

    if let Some(s) = string_field(value, "description") {
        edoc.description = Some(s);
    }
    if let Some(s) = string_field(value, "url") {
        edoc.url = Some(s);
    }

    if let Some(slot) = doc.node_mut(node).as_external_documentation_mut() {
        *slot = edoc;
    }
    read_extensions(doc, node, value)
}

/// Every key of a security requirement is a scheme name mapped to the list
/// of scopes required of it; the extension namespace does not apply here.
pub(crate) fn read_security_requirement(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut req = doc
        .node(node)
        .as_security_requirement()
        .cloned()
        .unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, scopes) in obj {
            let scopes = scopes
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            req.requirements.insert(name.clone(), scopes);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_security_requirement_mut() {
        *slot = req;
    }
    Ok(())
}
