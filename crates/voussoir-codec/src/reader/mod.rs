//! Generic-JSON to model reader.
//!
//! Two entry points: [`read_document`] populates a whole document after
//! verifying the version discriminator, and [`read_node`] populates any
//! single pre-created node from a fragment by dispatching through the
//! visitor protocol to the one field routine registered for the node's
//! kind. Both paths run the identical underlying routines, so a partial
//! read can never drift from a whole-document read.

mod common;
pub(crate) mod v2;
pub(crate) mod v3;

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};
use voussoir_model::extensions::is_extension_name;
use voussoir_model::{Document, ModelError, NodeId, NodeVisitor, SpecVersion};

/// Signature shared by every field-reading routine, whole-document included.
pub(crate) type ReadFn = fn(&mut Document, NodeId, &Value) -> Result<(), ModelError>;

/// Populate an empty document from a full generic value.
///
/// The discriminator field must equal the document's expected version
/// exactly; any mismatch (a compatible-but-different version included)
/// fails with [`ModelError::UnsupportedVersion`] before anything is read.
pub fn read_document(doc: &mut Document, data: &Value) -> Result<(), ModelError> {
    tracing::debug!(version = %doc.version(), "reading document");
    match doc.version() {
        SpecVersion::V2 => v2::read_document(doc, data),
        SpecVersion::V3 => v3::read_document(doc, data),
    }
}

/// Populate a single pre-created, pre-owned node from a generic fragment.
///
/// Dispatches through the visitor protocol; a `Document` node runs the full
/// document routine, discriminator check included.
pub fn read_node(doc: &mut Document, node: NodeId, data: &Value) -> Result<(), ModelError> {
    tracing::trace!(kind = ?doc.node(node).kind(), "reading node");
    let routine = match doc.version() {
        SpecVersion::V2 => {
            let mut dispatch = v2::ReadDispatch::default();
            doc.accept(node, NodeVisitor::V2(&mut dispatch))?;
            dispatch.routine
        }
        SpecVersion::V3 => {
            let mut dispatch = v3::ReadDispatch::default();
            doc.accept(node, NodeVisitor::V3(&mut dispatch))?;
            dispatch.routine
        }
    };
    match routine {
        Some(routine) => routine(doc, node, data),
        None => Ok(()),
    }
}

/// The presence rule: a field is present iff it is neither absent nor JSON
/// null. Explicit null and omission are indistinguishable after reading.
pub(crate) fn defined<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

pub(crate) fn string_field(value: &Value, key: &str) -> Option<String> {
    defined(value, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    defined(value, key).and_then(Value::as_bool)
}

pub(crate) fn number_field(value: &Value, key: &str) -> Option<Number> {
    match defined(value, key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

pub(crate) fn value_field(value: &Value, key: &str) -> Option<Value> {
    defined(value, key).cloned()
}

pub(crate) fn string_array_field(value: &Value, key: &str) -> Option<Vec<String>> {
    defined(value, key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

pub(crate) fn value_array_field(value: &Value, key: &str) -> Option<Vec<Value>> {
    defined(value, key).and_then(Value::as_array).cloned()
}

/// Coerce a closed-enumeration field. An unrecognized string fails with
/// [`ModelError::InvalidEnumValue`] rather than silently fabricating a
/// value.
pub(crate) fn enum_field<T: DeserializeOwned>(
    value: &Value,
    key: &'static str,
) -> Result<Option<T>, ModelError> {
    match defined(value, key) {
        None => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|_| ModelError::InvalidEnumValue {
                field: key,
                value: v.to_string(),
            }),
    }
}

/// Capture every reserved-prefix key of `value` onto `node`.
pub(crate) fn read_extensions(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    if !doc.node(node).kind().is_extensible() {
        return Ok(());
    }
    if let Some(obj) = value.as_object() {
        for (name, v) in obj.iter().filter(|(name, _)| is_extension_name(name)) {
            doc.add_extension(node, name, v.clone())?;
        }
    }
    Ok(())
}
