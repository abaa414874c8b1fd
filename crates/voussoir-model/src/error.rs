use thiserror::Error;

use crate::document::SpecVersion;

/// Errors produced while building or reading a document model (E3001–E3006).
#[derive(Debug, Error)]
pub enum ModelError {
    /// E3001: Document version marker absent or not one we support.
    #[error("E3001: unsupported specification version: {0:?}")]
    UnsupportedVersion(String),

    /// E3002: Visitor capability set does not match the document's version.
    #[error("E3002: visitor for version {visitor} presented to a {document} document")]
    IncompatibleVisitor {
        document: SpecVersion,
        visitor: SpecVersion,
    },

    /// E3003: Extension key does not carry the reserved `x-` prefix.
    #[error("E3003: invalid extension name {0:?}: must start with \"x-\"")]
    InvalidExtensionName(String),

    /// E3004: A polymorphic field uses an encoding we deliberately do not read.
    #[error("E3004: unsupported schema shape: {0}")]
    UnsupportedSchemaShape(String),

    /// E3005: Closed-enumeration field holds an unrecognized string.
    #[error("E3005: invalid value for {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },

    /// E3006: YAML/JSON text could not be parsed at all.
    #[error("E3006: parse error: {0}")]
    Parse(String),
}
