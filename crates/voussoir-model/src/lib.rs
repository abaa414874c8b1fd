//! In-memory object model for OpenAPI description documents.
//!
//! A [`Document`] owns an arena of typed nodes (info, paths, operations,
//! schemas, ...) addressed by [`NodeId`]. Documents come in per-version
//! variants (2.0 fully worked, 3.0 top-level surface) selected by the
//! version discriminator; generic code traverses any variant through the
//! sealed visitor protocol in [`visitor`]. Vendor extensions (`x-` fields)
//! are preserved verbatim on every extensible node.
//!
//! Conversion to and from generic JSON lives in the companion
//! `voussoir-codec` crate.

pub mod document;
pub mod error;
pub mod extensions;
pub mod node;
pub mod v2;
pub mod v3;
pub mod visitor;

pub use document::{Document, SpecVersion};
pub use error::ModelError;
pub use node::{Node, NodeId, NodeKind, NodePayload};
pub use visitor::{NodeVisitor, Oas2Visitor, Oas3Visitor};
