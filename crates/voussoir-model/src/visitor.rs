//! Double-dispatch visitor protocol.
//!
//! Each spec version has its own capability set: a trait with one visit
//! method per node kind valid in that version. [`NodeVisitor`] is the closed
//! union of the capability sets; [`Document::accept`] checks that the
//! presented capability set matches the document's version before
//! dispatching, failing fast with [`ModelError::IncompatibleVisitor`]
//! instead of proceeding with mismatched data. Both the reader's node-level
//! dispatch and the writer go through this protocol, so generic code can
//! turn "I have an arbitrary node" into "I know exactly which routine to
//! run".

use crate::document::{Document, SpecVersion};
use crate::error::ModelError;
use crate::node::{NodeId, NodeKind};

/// Capability set for OpenAPI 2.0 documents. All methods default to no-ops
/// so a visitor only implements the kinds it cares about.
#[allow(unused_variables)]
pub trait Oas2Visitor {
    fn visit_document(&mut self, doc: &Document, node: NodeId) {}
    fn visit_info(&mut self, doc: &Document, node: NodeId) {}
    fn visit_contact(&mut self, doc: &Document, node: NodeId) {}
    fn visit_license(&mut self, doc: &Document, node: NodeId) {}
    fn visit_tag(&mut self, doc: &Document, node: NodeId) {}
    fn visit_external_documentation(&mut self, doc: &Document, node: NodeId) {}
    fn visit_security_requirement(&mut self, doc: &Document, node: NodeId) {}
    fn visit_security_definitions(&mut self, doc: &Document, node: NodeId) {}
    fn visit_security_scheme(&mut self, doc: &Document, node: NodeId) {}
    fn visit_scopes(&mut self, doc: &Document, node: NodeId) {}
    fn visit_paths(&mut self, doc: &Document, node: NodeId) {}
    fn visit_path_item(&mut self, doc: &Document, node: NodeId) {}
    fn visit_operation(&mut self, doc: &Document, node: NodeId) {}
    fn visit_parameter(&mut self, doc: &Document, node: NodeId) {}
    fn visit_parameter_definition(&mut self, doc: &Document, node: NodeId) {}
    fn visit_items(&mut self, doc: &Document, node: NodeId) {}
    fn visit_responses(&mut self, doc: &Document, node: NodeId) {}
    fn visit_response(&mut self, doc: &Document, node: NodeId) {}
    fn visit_response_definition(&mut self, doc: &Document, node: NodeId) {}
    fn visit_schema(&mut self, doc: &Document, node: NodeId) {}
    fn visit_headers(&mut self, doc: &Document, node: NodeId) {}
    fn visit_header(&mut self, doc: &Document, node: NodeId) {}
    fn visit_example(&mut self, doc: &Document, node: NodeId) {}
    fn visit_xml(&mut self, doc: &Document, node: NodeId) {}
    fn visit_definitions(&mut self, doc: &Document, node: NodeId) {}
    fn visit_parameters_definitions(&mut self, doc: &Document, node: NodeId) {}
    fn visit_responses_definitions(&mut self, doc: &Document, node: NodeId) {}
}

/// Capability set for OpenAPI 3.0 documents.
#[allow(unused_variables)]
pub trait Oas3Visitor {
    fn visit_document(&mut self, doc: &Document, node: NodeId) {}
    fn visit_info(&mut self, doc: &Document, node: NodeId) {}
    fn visit_contact(&mut self, doc: &Document, node: NodeId) {}
    fn visit_license(&mut self, doc: &Document, node: NodeId) {}
    fn visit_tag(&mut self, doc: &Document, node: NodeId) {}
    fn visit_external_documentation(&mut self, doc: &Document, node: NodeId) {}
    fn visit_security_requirement(&mut self, doc: &Document, node: NodeId) {}
    fn visit_server(&mut self, doc: &Document, node: NodeId) {}
    fn visit_server_variable(&mut self, doc: &Document, node: NodeId) {}
}

/// A visitor for some spec version: the closed union of capability sets.
pub enum NodeVisitor<'a> {
    V2(&'a mut dyn Oas2Visitor),
    V3(&'a mut dyn Oas3Visitor),
}

impl NodeVisitor<'_> {
    /// The spec version this visitor's capability set belongs to.
    pub fn version(&self) -> SpecVersion {
        match self {
            NodeVisitor::V2(_) => SpecVersion::V2,
            NodeVisitor::V3(_) => SpecVersion::V3,
        }
    }
}

impl Document {
    /// Dispatch `visitor` to the single visit method matching the node's
    /// kind. Fails with [`ModelError::IncompatibleVisitor`] if the visitor's
    /// capability set does not match this document's version.
    pub fn accept(&self, node: NodeId, visitor: NodeVisitor<'_>) -> Result<(), ModelError> {
        if visitor.version() != self.version() {
            return Err(ModelError::IncompatibleVisitor {
                document: self.version(),
                visitor: visitor.version(),
            });
        }
        match visitor {
            NodeVisitor::V2(v) => self.accept_v2(node, v),
            NodeVisitor::V3(v) => self.accept_v3(node, v),
        }
        Ok(())
    }

    fn accept_v2(&self, node: NodeId, v: &mut dyn Oas2Visitor) {
        match self.node(node).kind() {
            NodeKind::Document => v.visit_document(self, node),
            NodeKind::Info => v.visit_info(self, node),
            NodeKind::Contact => v.visit_contact(self, node),
            NodeKind::License => v.visit_license(self, node),
            NodeKind::Tag => v.visit_tag(self, node),
            NodeKind::ExternalDocumentation => v.visit_external_documentation(self, node),
            NodeKind::SecurityRequirement => v.visit_security_requirement(self, node),
            NodeKind::SecurityDefinitions => v.visit_security_definitions(self, node),
            NodeKind::SecurityScheme => v.visit_security_scheme(self, node),
            NodeKind::Scopes => v.visit_scopes(self, node),
            NodeKind::Paths => v.visit_paths(self, node),
            NodeKind::PathItem => v.visit_path_item(self, node),
            NodeKind::Operation => v.visit_operation(self, node),
            NodeKind::Parameter => v.visit_parameter(self, node),
            NodeKind::ParameterDefinition => v.visit_parameter_definition(self, node),
            NodeKind::Items => v.visit_items(self, node),
            NodeKind::Responses => v.visit_responses(self, node),
            NodeKind::Response => v.visit_response(self, node),
            NodeKind::ResponseDefinition => v.visit_response_definition(self, node),
            NodeKind::Schema => v.visit_schema(self, node),
            NodeKind::Headers => v.visit_headers(self, node),
            NodeKind::Header => v.visit_header(self, node),
            NodeKind::Example => v.visit_example(self, node),
            NodeKind::Xml => v.visit_xml(self, node),
            NodeKind::Definitions => v.visit_definitions(self, node),
            NodeKind::ParametersDefinitions => v.visit_parameters_definitions(self, node),
            NodeKind::ResponsesDefinitions => v.visit_responses_definitions(self, node),
            // 3.0-only kinds cannot be created under a 2.0 document.
            NodeKind::Server | NodeKind::ServerVariable => {}
        }
    }

    fn accept_v3(&self, node: NodeId, v: &mut dyn Oas3Visitor) {
        match self.node(node).kind() {
            NodeKind::Document => v.visit_document(self, node),
            NodeKind::Info => v.visit_info(self, node),
            NodeKind::Contact => v.visit_contact(self, node),
            NodeKind::License => v.visit_license(self, node),
            NodeKind::Tag => v.visit_tag(self, node),
            NodeKind::ExternalDocumentation => v.visit_external_documentation(self, node),
            NodeKind::SecurityRequirement => v.visit_security_requirement(self, node),
            NodeKind::Server => v.visit_server(self, node),
            NodeKind::ServerVariable => v.visit_server_variable(self, node),
            // 2.0-only kinds cannot be created under a 3.0 document.
            NodeKind::SecurityDefinitions
            | NodeKind::SecurityScheme
            | NodeKind::Scopes
            | NodeKind::Paths
            | NodeKind::PathItem
            | NodeKind::Operation
            | NodeKind::Parameter
            | NodeKind::ParameterDefinition
            | NodeKind::Items
            | NodeKind::Responses
            | NodeKind::Response
            | NodeKind::ResponseDefinition
            | NodeKind::Schema
            | NodeKind::Headers
            | NodeKind::Header
            | NodeKind::Example
            | NodeKind::Xml
            | NodeKind::Definitions
            | NodeKind::ParametersDefinitions
            | NodeKind::ResponsesDefinitions => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct KindRecorder {
        visited: Vec<&'static str>,
    }

    impl Oas2Visitor for KindRecorder {
        fn visit_info(&mut self, _doc: &Document, _node: NodeId) {
            self.visited.push("info");
        }
        fn visit_contact(&mut self, _doc: &Document, _node: NodeId) {
            self.visited.push("contact");
        }
    }

    impl Oas3Visitor for KindRecorder {}

    #[test]
    fn accept_dispatches_exactly_one_method() {
        let mut doc = Document::new(SpecVersion::V2);
        let info = doc.create_info();
        let contact = doc.create_contact(info);

        let mut rec = KindRecorder::default();
        doc.accept(info, NodeVisitor::V2(&mut rec)).unwrap();
        doc.accept(contact, NodeVisitor::V2(&mut rec)).unwrap();
        assert_eq!(rec.visited, vec!["info", "contact"]);
    }

    #[test]
    fn wrong_capability_set_fails_fast() {
        let doc = Document::new(SpecVersion::V2);
        let mut rec = KindRecorder::default();
        let err = doc
            .accept(doc.root(), NodeVisitor::V3(&mut rec))
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::IncompatibleVisitor {
                document: SpecVersion::V2,
                visitor: SpecVersion::V3,
            }
        ));
        assert!(rec.visited.is_empty());
    }
}
