//! Tree elements.
//!
//! Every element of a document tree is a [`Node`] stored in its document's
//! arena and addressed by a [`NodeId`]. A node carries its parent link, a
//! closed typed payload (the node "kind" plus that kind's fields) and a
//! vendor-extension map. Nodes are created exclusively through the factory
//! methods on [`Document`](crate::Document), which stamp the parent link
//! before the id is ever returned — a `NodeId` therefore always refers into
//! the tree that minted it.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::v2::{
    BooleanOrSchema, Contact, Definitions, DocumentV2, Example, ExternalDocumentation, Header,
    Headers, Info, Items, License, Operation, Parameter, ParameterDefinition,
    ParametersDefinitions, PathItem, Paths, Response, ResponseDefinition, Responses,
    ResponsesDefinitions, Schema, Scopes, SecurityDefinitions, SecurityRequirement,
    SecurityScheme, Tag, Xml,
};
use crate::v3::{DocumentV3, Server, ServerVariable};

/// Stable identifier of a node within its owning document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Arena index of this node. The root document is always index 0.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Closed tag identifying which concrete payload a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Info,
    Contact,
    License,
    Tag,
    ExternalDocumentation,
    SecurityRequirement,
    SecurityDefinitions,
    SecurityScheme,
    Scopes,
    Paths,
    PathItem,
    Operation,
    Parameter,
    ParameterDefinition,
    Items,
    Responses,
    Response,
    ResponseDefinition,
    Schema,
    Headers,
    Header,
    Example,
    Xml,
    Definitions,
    ParametersDefinitions,
    ResponsesDefinitions,
    Server,
    ServerVariable,
}

impl NodeKind {
    /// Whether this kind carries vendor extensions.
    ///
    /// Security requirements, example maps and response header collections
    /// are pure data: every key in their wire encoding is a scheme name, a
    /// content type or a header name (headers like `x-request-id` are
    /// common), so the extension namespace does not apply to them.
    pub fn is_extensible(self) -> bool {
        !matches!(
            self,
            NodeKind::SecurityRequirement | NodeKind::Example | NodeKind::Headers
        )
    }
}

/// Typed payload of a node: one variant per node kind.
#[derive(Debug, Clone)]
pub enum NodePayload {
    DocumentV2(DocumentV2),
    DocumentV3(DocumentV3),
    Info(Info),
    Contact(Contact),
    License(License),
    Tag(Tag),
    ExternalDocumentation(ExternalDocumentation),
    SecurityRequirement(SecurityRequirement),
    SecurityDefinitions(SecurityDefinitions),
    SecurityScheme(SecurityScheme),
    Scopes(Scopes),
    Paths(Paths),
    PathItem(PathItem),
    Operation(Operation),
    Parameter(Parameter),
    ParameterDefinition(ParameterDefinition),
    Items(Items),
    Responses(Responses),
    Response(Response),
    ResponseDefinition(ResponseDefinition),
    Schema(Box<Schema>),
    Headers(Headers),
    Header(Header),
    Example(Example),
    Xml(Xml),
    Definitions(Definitions),
    ParametersDefinitions(ParametersDefinitions),
    ResponsesDefinitions(ResponsesDefinitions),
    Server(Server),
    ServerVariable(ServerVariable),
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::DocumentV2(_) | NodePayload::DocumentV3(_) => NodeKind::Document,
            NodePayload::Info(_) => NodeKind::Info,
            NodePayload::Contact(_) => NodeKind::Contact,
            NodePayload::License(_) => NodeKind::License,
            NodePayload::Tag(_) => NodeKind::Tag,
            NodePayload::ExternalDocumentation(_) => NodeKind::ExternalDocumentation,
            NodePayload::SecurityRequirement(_) => NodeKind::SecurityRequirement,
            NodePayload::SecurityDefinitions(_) => NodeKind::SecurityDefinitions,
            NodePayload::SecurityScheme(_) => NodeKind::SecurityScheme,
            NodePayload::Scopes(_) => NodeKind::Scopes,
            NodePayload::Paths(_) => NodeKind::Paths,
            NodePayload::PathItem(_) => NodeKind::PathItem,
            NodePayload::Operation(_) => NodeKind::Operation,
            NodePayload::Parameter(_) => NodeKind::Parameter,
            NodePayload::ParameterDefinition(_) => NodeKind::ParameterDefinition,
            NodePayload::Items(_) => NodeKind::Items,
            NodePayload::Responses(_) => NodeKind::Responses,
            NodePayload::Response(_) => NodeKind::Response,
            NodePayload::ResponseDefinition(_) => NodeKind::ResponseDefinition,
            NodePayload::Schema(_) => NodeKind::Schema,
            NodePayload::Headers(_) => NodeKind::Headers,
            NodePayload::Header(_) => NodeKind::Header,
            NodePayload::Example(_) => NodeKind::Example,
            NodePayload::Xml(_) => NodeKind::Xml,
            NodePayload::Definitions(_) => NodeKind::Definitions,
            NodePayload::ParametersDefinitions(_) => NodeKind::ParametersDefinitions,
            NodePayload::ResponsesDefinitions(_) => NodeKind::ResponsesDefinitions,
            NodePayload::Server(_) => NodeKind::Server,
            NodePayload::ServerVariable(_) => NodeKind::ServerVariable,
        }
    }

    /// Child node ids referenced by this payload, in canonical field order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodePayload::DocumentV2(d) => {
                out.extend(d.info);
                out.extend(d.paths);
                out.extend(d.definitions);
                out.extend(d.parameters);
                out.extend(d.responses);
                out.extend(d.security_definitions);
                out.extend(d.security.iter().flatten());
                out.extend(d.tags.iter().flatten());
                out.extend(d.external_docs);
            }
            NodePayload::DocumentV3(d) => {
                out.extend(d.info);
                out.extend(d.servers.iter().flatten());
                out.extend(d.security.iter().flatten());
                out.extend(d.tags.iter().flatten());
                out.extend(d.external_docs);
            }
            NodePayload::Info(i) => {
                out.extend(i.contact);
                out.extend(i.license);
            }
            NodePayload::Contact(_)
            | NodePayload::License(_)
            | NodePayload::ExternalDocumentation(_)
            | NodePayload::SecurityRequirement(_)
            | NodePayload::Scopes(_)
            | NodePayload::Example(_)
            | NodePayload::Xml(_) => {}
            NodePayload::Tag(t) => out.extend(t.external_docs),
            NodePayload::SecurityDefinitions(d) => out.extend(d.schemes.values().copied()),
            NodePayload::SecurityScheme(s) => out.extend(s.scopes),
            NodePayload::Paths(p) => out.extend(p.path_items.values().copied()),
            NodePayload::PathItem(p) => {
                for op in [p.get, p.put, p.post, p.delete, p.options, p.head, p.patch] {
                    out.extend(op);
                }
                out.extend(p.parameters.iter().flatten());
            }
            NodePayload::Operation(o) => {
                out.extend(o.external_docs);
                out.extend(o.parameters.iter().flatten());
                out.extend(o.responses);
                out.extend(o.security.iter().flatten());
            }
            NodePayload::Parameter(p) => {
                out.extend(p.core.schema);
                out.extend(p.core.items.items);
            }
            NodePayload::ParameterDefinition(p) => {
                out.extend(p.core.schema);
                out.extend(p.core.items.items);
            }
            NodePayload::Items(i) => out.extend(i.core.items),
            NodePayload::Responses(r) => {
                out.extend(r.default);
                out.extend(r.responses.values().copied());
            }
            NodePayload::Response(r) => {
                out.extend(r.core.schema);
                out.extend(r.core.headers);
                out.extend(r.core.examples);
            }
            NodePayload::ResponseDefinition(r) => {
                out.extend(r.core.schema);
                out.extend(r.core.headers);
                out.extend(r.core.examples);
            }
            NodePayload::Schema(s) => {
                out.extend(s.items);
                out.extend(s.all_of.iter().flatten());
                if let Some(props) = &s.properties {
                    out.extend(props.values().copied());
                }
                if let Some(BooleanOrSchema::Schema(id)) = s.additional_properties {
                    out.push(id);
                }
                out.extend(s.xml);
                out.extend(s.external_docs);
            }
            NodePayload::Headers(h) => out.extend(h.headers.values().copied()),
            NodePayload::Header(h) => out.extend(h.core.items),
            NodePayload::Definitions(d) => out.extend(d.schemas.values().copied()),
            NodePayload::ParametersDefinitions(d) => out.extend(d.parameters.values().copied()),
            NodePayload::ResponsesDefinitions(d) => out.extend(d.responses.values().copied()),
            NodePayload::Server(s) => {
                out.extend(s.variables.iter().flat_map(|v| v.values().copied()));
            }
            NodePayload::ServerVariable(_) => {}
        }
        out
    }
}

/// One element of a document tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) payload: NodePayload,
    pub(crate) extensions: BTreeMap<String, Value>,
}

macro_rules! payload_accessors {
    ($( $as:ident / $as_mut:ident => $variant:ident($ty:ty); )*) => { $(
        pub fn $as(&self) -> Option<&$ty> {
            match &self.payload {
                NodePayload::$variant(p) => Some(p),
                _ => None,
            }
        }

        pub fn $as_mut(&mut self) -> Option<&mut $ty> {
            match &mut self.payload {
                NodePayload::$variant(p) => Some(p),
                _ => None,
            }
        }
    )* };
}

impl Node {
    /// The immediate containing node; `None` only for the root document.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &NodePayload {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut NodePayload {
        &mut self.payload
    }

    /// Child node ids in canonical field order.
    pub fn children(&self) -> Vec<NodeId> {
        self.payload.children()
    }

    /// Vendor extensions captured on this node, keyed by their full `x-` name.
    pub fn extensions(&self) -> &BTreeMap<String, Value> {
        &self.extensions
    }

    payload_accessors! {
        as_document_v2 / as_document_v2_mut => DocumentV2(DocumentV2);
        as_document_v3 / as_document_v3_mut => DocumentV3(DocumentV3);
        as_info / as_info_mut => Info(Info);
        as_contact / as_contact_mut => Contact(Contact);
        as_license / as_license_mut => License(License);
        as_tag / as_tag_mut => Tag(Tag);
        as_external_documentation / as_external_documentation_mut => ExternalDocumentation(ExternalDocumentation);
        as_security_requirement / as_security_requirement_mut => SecurityRequirement(SecurityRequirement);
        as_security_definitions / as_security_definitions_mut => SecurityDefinitions(SecurityDefinitions);
        as_security_scheme / as_security_scheme_mut => SecurityScheme(SecurityScheme);
        as_scopes / as_scopes_mut => Scopes(Scopes);
        as_paths / as_paths_mut => Paths(Paths);
        as_path_item / as_path_item_mut => PathItem(PathItem);
        as_operation / as_operation_mut => Operation(Operation);
        as_parameter / as_parameter_mut => Parameter(Parameter);
        as_parameter_definition / as_parameter_definition_mut => ParameterDefinition(ParameterDefinition);
        as_items / as_items_mut => Items(Items);
        as_responses / as_responses_mut => Responses(Responses);
        as_response / as_response_mut => Response(Response);
        as_response_definition / as_response_definition_mut => ResponseDefinition(ResponseDefinition);
        as_headers / as_headers_mut => Headers(Headers);
        as_header / as_header_mut => Header(Header);
        as_example / as_example_mut => Example(Example);
        as_xml / as_xml_mut => Xml(Xml);
        as_definitions / as_definitions_mut => Definitions(Definitions);
        as_parameters_definitions / as_parameters_definitions_mut => ParametersDefinitions(ParametersDefinitions);
        as_responses_definitions / as_responses_definitions_mut => ResponsesDefinitions(ResponsesDefinitions);
        as_server / as_server_mut => Server(Server);
        as_server_variable / as_server_variable_mut => ServerVariable(ServerVariable);
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match &self.payload {
            NodePayload::Schema(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_schema_mut(&mut self) -> Option<&mut Schema> {
        match &mut self.payload {
            NodePayload::Schema(s) => Some(&mut **s),
            _ => None,
        }
    }
}
