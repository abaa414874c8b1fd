//! Model to generic-JSON writer.
//!
//! [`write_node`] serializes any node (the document root included) back to a
//! generic value. Entry is through the visitor protocol so the caller needs
//! nothing but a node id; below the entry point each routine recurses
//! directly through the typed payloads. Writing is total: every reachable
//! model state has an encoding, so the routines return values rather than
//! results.

mod common;
pub(crate) mod v2;
pub(crate) mod v3;

use serde_json::{Map, Number, Value};
use voussoir_model::{Document, NodeId, NodeVisitor, SpecVersion};

/// Serialize a node to its generic-JSON encoding.
///
/// Fields appear in canonical order, vendor extensions after them in
/// lexicographic order. Absent fields are omitted entirely, never written
/// as null.
pub fn write_node(doc: &Document, node: NodeId) -> Value {
    tracing::trace!(kind = ?doc.node(node).kind(), "writing node");
    match doc.version() {
        SpecVersion::V2 => {
            let mut writer = v2::Writer::default();
            // Cannot fail: the capability set is chosen from the document's
            // own version.
            if doc.accept(node, NodeVisitor::V2(&mut writer)).is_err() {
                return Value::Null;
            }
            writer.out
        }
        SpecVersion::V3 => {
            let mut writer = v3::Writer::default();
            if doc.accept(node, NodeVisitor::V3(&mut writer)).is_err() {
                return Value::Null;
            }
            writer.out
        }
    }
}

pub(crate) fn set_string(obj: &mut Map<String, Value>, key: &str, field: &Option<String>) {
    if let Some(s) = field {
        obj.insert(key.to_string(), Value::String(s.clone()));
    }
}

pub(crate) fn set_bool(obj: &mut Map<String, Value>, key: &str, field: &Option<bool>) {
    if let Some(b) = field {
        obj.insert(key.to_string(), Value::Bool(*b));
    }
}

pub(crate) fn set_number(obj: &mut Map<String, Value>, key: &str, field: &Option<Number>) {
    if let Some(n) = field {
        obj.insert(key.to_string(), Value::Number(n.clone()));
    }
}

pub(crate) fn set_value(obj: &mut Map<String, Value>, key: &str, field: &Option<Value>) {
    if let Some(v) = field {
        obj.insert(key.to_string(), v.clone());
    }
}

pub(crate) fn set_string_array(
    obj: &mut Map<String, Value>,
    key: &str,
    field: &Option<Vec<String>>,
) {
    if let Some(items) = field {
        let items = items.iter().cloned().map(Value::String).collect();
        obj.insert(key.to_string(), Value::Array(items));
    }
}

pub(crate) fn set_value_array(obj: &mut Map<String, Value>, key: &str, field: &Option<Vec<Value>>) {
    if let Some(items) = field {
        obj.insert(key.to_string(), Value::Array(items.clone()));
    }
}

/// Append the node's vendor extensions after its fields.
pub(crate) fn write_extensions(doc: &Document, node: NodeId, obj: &mut Map<String, Value>) {
    for (name, value) in doc.node(node).extensions() {
        obj.insert(name.clone(), value.clone());
    }
}
