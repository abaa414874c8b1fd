//! Typed payloads and factories for OpenAPI 3.0 documents.
//!
//! The 3.0 variant covers the top-level document surface: info, servers,
//! security, tags and external docs. Metadata kinds (Info, Contact, License,
//! Tag, ExternalDocumentation, SecurityRequirement) share their structs with
//! the 2.0 variant; version membership is enforced through the owning
//! document's discriminator and the visitor capability check.

use std::collections::BTreeMap;

use crate::document::{Document, SpecVersion};
use crate::node::{NodeId, NodePayload};

/// Root payload of a 3.0 document.
#[derive(Debug, Clone, Default)]
pub struct DocumentV3 {
    pub info: Option<NodeId>,
    pub servers: Option<Vec<NodeId>>,
    pub security: Option<Vec<NodeId>>,
    pub tags: Option<Vec<NodeId>>,
    pub external_docs: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Server {
    pub url: Option<String>,
    pub description: Option<String>,
    pub variables: Option<BTreeMap<String, NodeId>>,
}

#[derive(Debug, Clone, Default)]
pub struct ServerVariable {
    /// Name under which the variable appears in the server's `variables` map.
    pub name: String,
    pub enum_values: Option<Vec<String>>,
    pub default: Option<String>,
    pub description: Option<String>,
}

/// Factories for node kinds that only occur in 3.0 documents.
impl Document {
    pub fn create_server(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V3);
        let root = self.root();
        self.push_node(root, NodePayload::Server(Server::default()))
    }

    pub fn create_server_variable(&mut self, server: NodeId, name: &str) -> NodeId {
        self.expect_version(SpecVersion::V3);
        self.push_node(
            server,
            NodePayload::ServerVariable(ServerVariable {
                name: name.to_string(),
                ..ServerVariable::default()
            }),
        )
    }

    /// Create a server, set its url and description, and append it to the
    /// document's server list. Returns `None` on a non-3.0 document.
    pub fn add_server(&mut self, url: &str, description: &str) -> Option<NodeId> {
        self.node(self.root()).as_document_v3()?;
        let server = self.create_server();
        if let Some(s) = self.node_mut(server).as_server_mut() {
            s.url = Some(url.to_string());
            s.description = Some(description.to_string());
        }
        let root = self.root();
        if let Some(d) = self.node_mut(root).as_document_v3_mut() {
            d.servers.get_or_insert_with(Vec::new).push(server);
        }
        Some(server)
    }
}
