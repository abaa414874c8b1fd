//! Write routines for node kinds shared by every document variant.

use serde_json::{Map, Value};
use voussoir_model::{Document, NodeId};

use super::{set_string, write_extensions};

pub(crate) fn write_info(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(info) = doc.node(node).as_info() {
        set_string(&mut obj, "title", &info.title);
        set_string(&mut obj, "description", &info.description);
        set_string(&mut obj, "termsOfService", &info.terms_of_service);
        if let Some(contact) = info.contact {
            obj.insert("contact".to_string(), write_contact(doc, contact));
        }
        if let Some(license) = info.license {
            obj.insert("license".to_string(), write_license(doc, license));
        }
        set_string(&mut obj, "version", &info.version);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_contact(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(contact) = doc.node(node).as_contact() {
        set_string(&mut obj, "name", &contact.name);
        set_string(&mut obj, "url", &contact.url);
        set_string(&mut obj, "email", &contact.email);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_license(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(license) = doc.node(node).as_license() {
        set_string(&mut obj, "name", &license.name);
        set_string(&mut obj, "url", &license.url);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_tag(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(tag) = doc.node(node).as_tag() {
        set_string(&mut obj, "name", &tag.name);
        set_string(&mut obj, "description", &tag.description);
        if let Some(edoc) = tag.external_docs {
            obj.insert(
                "externalDocs".to_string(),
                write_external_documentation(doc, edoc),
            );
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_external_documentation(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(edoc) = doc.node(node).as_external_documentation() {
        set_string(&mut obj, "description", &edoc.description);
        set_string(&mut obj, "url", &edoc.url);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_security_requirement(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(req) = doc.node(node).as_security_requirement() {
        for (name, scopes) in &req.requirements {
            let scopes = scopes.iter().cloned().map(Value::String).collect();
            obj.insert(name.clone(), Value::Array(scopes));
        }
    }
    Value::Object(obj)
}
