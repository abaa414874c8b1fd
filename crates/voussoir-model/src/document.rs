//! Document roots and the node arena.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::ModelError;
use crate::extensions::is_extension_name;
use crate::node::{Node, NodeId, NodePayload};
use crate::v2::{
    Contact, DocumentV2, ExternalDocumentation, Info, License, SecurityRequirement, Tag,
};
use crate::v3::DocumentV3;

/// The spec version a document conforms to. Fixed at construction; selects
/// the discriminator field and the field layout readers and writers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    /// OpenAPI 2.0 (Swagger): `"swagger": "2.0"`.
    V2,
    /// OpenAPI 3.0: `"openapi": "3.0.0"`.
    V3,
}

impl SpecVersion {
    /// Root field name carrying the version discriminator.
    pub fn discriminator_field(self) -> &'static str {
        match self {
            SpecVersion::V2 => "swagger",
            SpecVersion::V3 => "openapi",
        }
    }

    /// Exact discriminator value expected on read. Comparison is plain
    /// string equality; a compatible-but-different version is a mismatch.
    pub fn discriminator_value(self) -> &'static str {
        match self {
            SpecVersion::V2 => "2.0",
            SpecVersion::V3 => "3.0.0",
        }
    }

    pub fn from_marker(marker: &str) -> Option<SpecVersion> {
        match marker {
            "2.0" => Some(SpecVersion::V2),
            "3.0.0" => Some(SpecVersion::V3),
            _ => None,
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator_value())
    }
}

/// A document tree: the root node plus the arena owning every node in it.
///
/// Node 0 is always the root; all other nodes are created through factory
/// methods which stamp the parent link inside the arena before returning the
/// new [`NodeId`]. Ids are never reassigned and never point into another
/// tree, so the ownership invariant ("every reachable node belongs to this
/// document") holds structurally rather than by caller discipline.
#[derive(Debug, Clone)]
pub struct Document {
    version: SpecVersion,
    nodes: Vec<Node>,
}

impl Document {
    /// An empty document of the given version.
    pub fn new(version: SpecVersion) -> Self {
        let payload = match version {
            SpecVersion::V2 => NodePayload::DocumentV2(DocumentV2::default()),
            SpecVersion::V3 => NodePayload::DocumentV3(DocumentV3::default()),
        };
        Document {
            version,
            nodes: vec![Node {
                parent: None,
                payload,
                extensions: BTreeMap::new(),
            }],
        }
    }

    /// An empty document for a version marker string (`"2.0"`, `"3.0.0"`).
    pub fn for_marker(marker: &str) -> Result<Self, ModelError> {
        SpecVersion::from_marker(marker)
            .map(Document::new)
            .ok_or_else(|| ModelError::UnsupportedVersion(marker.to_string()))
    }

    pub fn version(&self) -> SpecVersion {
        self.version
    }

    /// Id of the root document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Immediate parent of a node; `None` only for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Child ids of a node in canonical field order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).children()
    }

    /// Version-scoped factories are bugs when used on the other variant;
    /// catch that in debug builds.
    pub(crate) fn expect_version(&self, version: SpecVersion) {
        debug_assert_eq!(self.version, version, "factory and document version differ");
    }

    pub(crate) fn push_node(&mut self, parent: NodeId, payload: NodePayload) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            payload,
            extensions: BTreeMap::new(),
        });
        id
    }

    /// Attach a vendor extension to a node. The name must carry the reserved
    /// `x-` prefix; an existing value under the same name is overwritten.
    pub fn add_extension(
        &mut self,
        node: NodeId,
        name: &str,
        value: Value,
    ) -> Result<(), ModelError> {
        if !is_extension_name(name) {
            return Err(ModelError::InvalidExtensionName(name.to_string()));
        }
        self.node_mut(node).extensions.insert(name.to_string(), value);
        Ok(())
    }

    // Factories for kinds shared between the 2.0 and 3.0 variants.

    pub fn create_info(&mut self) -> NodeId {
        let root = self.root();
        self.push_node(root, NodePayload::Info(Info::default()))
    }

    pub fn create_contact(&mut self, info: NodeId) -> NodeId {
        self.push_node(info, NodePayload::Contact(Contact::default()))
    }

    pub fn create_license(&mut self, info: NodeId) -> NodeId {
        self.push_node(info, NodePayload::License(License::default()))
    }

    pub fn create_tag(&mut self) -> NodeId {
        let root = self.root();
        self.push_node(root, NodePayload::Tag(Tag::default()))
    }

    pub fn create_external_documentation(&mut self, parent: NodeId) -> NodeId {
        self.push_node(
            parent,
            NodePayload::ExternalDocumentation(ExternalDocumentation::default()),
        )
    }

    pub fn create_security_requirement(&mut self, parent: NodeId) -> NodeId {
        self.push_node(
            parent,
            NodePayload::SecurityRequirement(SecurityRequirement::default()),
        )
    }

    /// Create a tag with the given name and description and append it to the
    /// document's tag list.
    pub fn add_tag(&mut self, name: &str, description: &str) -> NodeId {
        let tag = self.create_tag();
        if let Some(t) = self.node_mut(tag).as_tag_mut() {
            t.name = Some(name.to_string());
            t.description = Some(description.to_string());
        }
        let root = self.root();
        match self.node_mut(root).payload_mut() {
            NodePayload::DocumentV2(d) => d.tags.get_or_insert_with(Vec::new).push(tag),
            NodePayload::DocumentV3(d) => d.tags.get_or_insert_with(Vec::new).push(tag),
            _ => {}
        }
        tag
    }

    /// Create and attach the document-level external documentation pointer.
    pub fn set_external_documentation(&mut self, description: &str, url: &str) -> NodeId {
        let root = self.root();
        let edoc = self.create_external_documentation(root);
        if let Some(e) = self.node_mut(edoc).as_external_documentation_mut() {
            e.description = Some(description.to_string());
            e.url = Some(url.to_string());
        }
        match self.node_mut(root).payload_mut() {
            NodePayload::DocumentV2(d) => d.external_docs = Some(edoc),
            NodePayload::DocumentV3(d) => d.external_docs = Some(edoc),
            _ => {}
        }
        edoc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use serde_json::json;

    #[test]
    fn unknown_marker_is_rejected() {
        let err = Document::for_marker("1.2").unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVersion(v) if v == "1.2"));
    }

    #[test]
    fn root_owns_itself() {
        let doc = Document::new(SpecVersion::V2);
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.parent(doc.root()), None);
        assert_eq!(doc.node(doc.root()).kind(), NodeKind::Document);
    }

    #[test]
    fn factories_stamp_parent_before_returning() {
        let mut doc = Document::new(SpecVersion::V2);
        let info = doc.create_info();
        let contact = doc.create_contact(info);
        assert_eq!(doc.parent(info), Some(doc.root()));
        assert_eq!(doc.parent(contact), Some(info));
        assert_eq!(doc.node(contact).kind(), NodeKind::Contact);
    }

    #[test]
    fn add_tag_links_into_root() {
        let mut doc = Document::new(SpecVersion::V2);
        let tag = doc.add_tag("pets", "Everything about pets");
        let root_tags = doc
            .node(doc.root())
            .as_document_v2()
            .and_then(|d| d.tags.clone())
            .unwrap();
        assert_eq!(root_tags, vec![tag]);
        assert_eq!(
            doc.node(tag).as_tag().and_then(|t| t.name.clone()),
            Some("pets".to_string())
        );
    }

    #[test]
    fn extension_name_must_carry_prefix() {
        let mut doc = Document::new(SpecVersion::V2);
        let root = doc.root();
        let err = doc.add_extension(root, "vendor", json!(1)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidExtensionName(_)));

        doc.add_extension(root, "x-vendor", json!(1)).unwrap();
        doc.add_extension(root, "x-vendor", json!(2)).unwrap();
        assert_eq!(doc.node(root).extensions()["x-vendor"], json!(2));
    }

    #[test]
    #[should_panic(expected = "factory and document version differ")]
    fn v3_factory_on_a_v2_document_is_caught() {
        let mut doc = Document::new(SpecVersion::V2);
        doc.create_server();
    }

    #[test]
    #[should_panic(expected = "factory and document version differ")]
    fn v2_factory_on_a_v3_document_is_caught() {
        let mut doc = Document::new(SpecVersion::V3);
        doc.create_paths();
    }

    #[test]
    fn add_server_only_on_v3() {
        let mut v2 = Document::new(SpecVersion::V2);
        assert!(v2.add_server("https://api.example.com", "prod").is_none());

        let mut v3 = Document::new(SpecVersion::V3);
        let server = v3.add_server("https://api.example.com", "prod").unwrap();
        assert_eq!(v3.parent(server), Some(v3.root()));
    }
}
