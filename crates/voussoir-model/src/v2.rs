//! Typed payloads and factories for OpenAPI 2.0 (Swagger) documents.
//!
//! One struct per node kind, holding strictly-typed fields for that object's
//! allowed properties. Child links are [`NodeId`]s into the owning document's
//! arena; named collections are `BTreeMap<String, NodeId>`. Numeric fields
//! keep the raw [`serde_json::Number`] so integer/float representation
//! survives a round trip.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::document::{Document, SpecVersion};
use crate::node::{NodeId, NodePayload};

/// JSON Schema primitive type names admitted by a 2.0 `type` field.
///
/// `file` is valid for formData parameters and response schemas in 2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonSchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    File,
}

impl JsonSchemaType {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonSchemaType::String => "string",
            JsonSchemaType::Number => "number",
            JsonSchemaType::Integer => "integer",
            JsonSchemaType::Boolean => "boolean",
            JsonSchemaType::Array => "array",
            JsonSchemaType::Object => "object",
            JsonSchemaType::File => "file",
        }
    }
}

/// Serialization style for array-valued parameters (`collectionFormat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    Csv,
    Ssv,
    Tsv,
    Pipes,
    Multi,
}

impl CollectionFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionFormat::Csv => "csv",
            CollectionFormat::Ssv => "ssv",
            CollectionFormat::Tsv => "tsv",
            CollectionFormat::Pipes => "pipes",
            CollectionFormat::Multi => "multi",
        }
    }
}

/// A field that is either a capability flag or a full nested schema
/// (`additionalProperties`). Resolved at read time from the run-time shape
/// of the generic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOrSchema {
    Flag(bool),
    Schema(NodeId),
}

/// Root payload of a 2.0 document.
#[derive(Debug, Clone, Default)]
pub struct DocumentV2 {
    pub info: Option<NodeId>,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub schemes: Option<Vec<String>>,
    pub consumes: Option<Vec<String>>,
    pub produces: Option<Vec<String>>,
    pub paths: Option<NodeId>,
    pub definitions: Option<NodeId>,
    pub parameters: Option<NodeId>,
    pub responses: Option<NodeId>,
    pub security_definitions: Option<NodeId>,
    pub security: Option<Vec<NodeId>>,
    pub tags: Option<Vec<NodeId>>,
    pub external_docs: Option<NodeId>,
}

/// The `info` metadata object.
#[derive(Debug, Clone, Default)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<NodeId>,
    pub license: Option<NodeId>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Tag {
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ExternalDocumentation {
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Map from security scheme name to the scopes required of it.
///
/// Every key is data (a scheme name); the extension namespace does not apply.
#[derive(Debug, Clone, Default)]
pub struct SecurityRequirement {
    pub requirements: BTreeMap<String, Vec<String>>,
}

/// The `securityDefinitions` named collection.
#[derive(Debug, Clone, Default)]
pub struct SecurityDefinitions {
    pub schemes: BTreeMap<String, NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct SecurityScheme {
    /// Name under which the scheme is registered in `securityDefinitions`.
    pub scheme_name: String,
    pub scheme_type: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub flow: Option<String>,
    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub scopes: Option<NodeId>,
}

/// OAuth2 scope name to description map.
#[derive(Debug, Clone, Default)]
pub struct Scopes {
    pub scopes: BTreeMap<String, String>,
}

/// The `paths` collection: route template to path item.
#[derive(Debug, Clone, Default)]
pub struct Paths {
    pub path_items: BTreeMap<String, NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct PathItem {
    /// Route template this item is mapped to (the key in `paths`).
    pub path: String,
    pub reference: Option<String>,
    pub get: Option<NodeId>,
    pub put: Option<NodeId>,
    pub post: Option<NodeId>,
    pub delete: Option<NodeId>,
    pub options: Option<NodeId>,
    pub head: Option<NodeId>,
    pub patch: Option<NodeId>,
    pub parameters: Option<Vec<NodeId>>,
}

#[derive(Debug, Clone, Default)]
pub struct Operation {
    /// Lowercase HTTP method this operation is registered under.
    pub method: String,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<NodeId>,
    pub operation_id: Option<String>,
    pub consumes: Option<Vec<String>>,
    pub produces: Option<Vec<String>>,
    pub parameters: Option<Vec<NodeId>>,
    pub responses: Option<NodeId>,
    pub schemes: Option<Vec<String>>,
    pub deprecated: Option<bool>,
    pub security: Option<Vec<NodeId>>,
}

/// Fields of the 2.0 Items object, also embedded verbatim in parameters
/// and headers (their wire encodings extend Items).
#[derive(Debug, Clone, Default)]
pub struct ItemsCore {
    pub schema_type: Option<JsonSchemaType>,
    pub format: Option<String>,
    /// Nested Items node describing array elements.
    pub items: Option<NodeId>,
    pub collection_format: Option<CollectionFormat>,
    pub default: Option<Value>,
    pub maximum: Option<Number>,
    pub exclusive_maximum: Option<bool>,
    pub minimum: Option<Number>,
    pub exclusive_minimum: Option<bool>,
    pub max_length: Option<Number>,
    pub min_length: Option<Number>,
    pub pattern: Option<String>,
    pub max_items: Option<Number>,
    pub min_items: Option<Number>,
    pub unique_items: Option<bool>,
    pub enum_values: Option<Vec<Value>>,
    pub multiple_of: Option<Number>,
}

#[derive(Debug, Clone, Default)]
pub struct Items {
    pub core: ItemsCore,
}

/// Field layout shared by the reference-capable parameter and the named
/// parameter definition.
#[derive(Debug, Clone, Default)]
pub struct ParameterCore {
    pub name: Option<String>,
    /// The `in` field: query, header, path, formData or body.
    pub location: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub schema: Option<NodeId>,
    pub allow_empty_value: Option<bool>,
    pub items: ItemsCore,
}

#[derive(Debug, Clone, Default)]
pub struct Parameter {
    /// Indirection stub; when set, the node stands for content defined
    /// elsewhere and carries no inline fields.
    pub reference: Option<String>,
    pub core: ParameterCore,
}

#[derive(Debug, Clone, Default)]
pub struct ParameterDefinition {
    /// Name under which the definition is registered in `parameters`.
    pub name: String,
    pub core: ParameterCore,
}

/// The `responses` object of an operation.
#[derive(Debug, Clone, Default)]
pub struct Responses {
    pub default: Option<NodeId>,
    pub responses: BTreeMap<String, NodeId>,
}

/// Field layout shared by the reference-capable response and the named
/// response definition.
#[derive(Debug, Clone, Default)]
pub struct ResponseCore {
    pub description: Option<String>,
    pub schema: Option<NodeId>,
    pub headers: Option<NodeId>,
    pub examples: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Status code this response is registered under; `None` for `default`.
    pub status_code: Option<String>,
    pub reference: Option<String>,
    pub core: ResponseCore,
}

#[derive(Debug, Clone, Default)]
pub struct ResponseDefinition {
    /// Name under which the definition is registered in `responses`.
    pub name: String,
    pub core: ResponseCore,
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Indirection stub; when set, the node stands for a schema defined
    /// elsewhere and carries no inline fields.
    pub reference: Option<String>,
    pub format: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub multiple_of: Option<Number>,
    pub maximum: Option<Number>,
    pub exclusive_maximum: Option<bool>,
    pub minimum: Option<Number>,
    pub exclusive_minimum: Option<bool>,
    pub max_length: Option<Number>,
    pub min_length: Option<Number>,
    pub pattern: Option<String>,
    pub max_items: Option<Number>,
    pub min_items: Option<Number>,
    pub unique_items: Option<bool>,
    pub max_properties: Option<Number>,
    pub min_properties: Option<Number>,
    pub required: Option<Vec<String>>,
    pub enum_values: Option<Vec<Value>>,
    pub schema_type: Option<JsonSchemaType>,
    /// Single-schema `items` child. The plural (array-of-schemas) encoding
    /// is rejected at read time.
    pub items: Option<NodeId>,
    pub all_of: Option<Vec<NodeId>>,
    pub properties: Option<BTreeMap<String, NodeId>>,
    /// Extension keys captured inside the `properties` object. They belong
    /// to that object, not to the schema, and are written back there.
    pub property_extensions: BTreeMap<String, Value>,
    pub additional_properties: Option<BooleanOrSchema>,
    pub discriminator: Option<String>,
    pub read_only: Option<bool>,
    pub xml: Option<NodeId>,
    pub external_docs: Option<NodeId>,
    pub example: Option<Value>,
}

/// Named response headers.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    pub headers: BTreeMap<String, NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Header {
    /// Header name (the key in the containing `headers` object).
    pub name: String,
    pub description: Option<String>,
    pub core: ItemsCore,
}

/// Content-type to example value map. Every key is data.
#[derive(Debug, Clone, Default)]
pub struct Example {
    pub examples: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct Xml {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub attribute: Option<bool>,
    pub wrapped: Option<bool>,
}

/// The `definitions` named collection of reusable schemas.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    pub schemas: BTreeMap<String, NodeId>,
}

/// The `parameters` named collection of reusable parameter definitions.
#[derive(Debug, Clone, Default)]
pub struct ParametersDefinitions {
    pub parameters: BTreeMap<String, NodeId>,
}

/// The `responses` named collection of reusable response definitions.
#[derive(Debug, Clone, Default)]
pub struct ResponsesDefinitions {
    pub responses: BTreeMap<String, NodeId>,
}

/// Factories for node kinds that only occur in 2.0 documents. Every factory
/// stamps ownership before the id is returned; linking the child into the
/// parent's field or collection is the caller's (usually the reader's) move.
impl Document {
    pub fn create_paths(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V2);
        let root = self.root();
        self.push_node(root, NodePayload::Paths(Paths::default()))
    }

    pub fn create_path_item(&mut self, paths: NodeId, path: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            paths,
            NodePayload::PathItem(PathItem {
                path: path.to_string(),
                ..PathItem::default()
            }),
        )
    }

    pub fn create_operation(&mut self, path_item: NodeId, method: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            path_item,
            NodePayload::Operation(Operation {
                method: method.to_string(),
                ..Operation::default()
            }),
        )
    }

    pub fn create_parameter(&mut self, parent: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(parent, NodePayload::Parameter(Parameter::default()))
    }

    pub fn create_parameter_definition(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            parent,
            NodePayload::ParameterDefinition(ParameterDefinition {
                name: name.to_string(),
                core: ParameterCore::default(),
            }),
        )
    }

    pub fn create_items(&mut self, parent: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(parent, NodePayload::Items(Items::default()))
    }

    pub fn create_responses(&mut self, operation: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(operation, NodePayload::Responses(Responses::default()))
    }

    pub fn create_response(&mut self, responses: NodeId, status_code: Option<&str>) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            responses,
            NodePayload::Response(Response {
                status_code: status_code.map(str::to_string),
                ..Response::default()
            }),
        )
    }

    pub fn create_response_definition(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            parent,
            NodePayload::ResponseDefinition(ResponseDefinition {
                name: name.to_string(),
                core: ResponseCore::default(),
            }),
        )
    }

    pub fn create_schema(&mut self, parent: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(parent, NodePayload::Schema(Box::default()))
    }

    pub fn create_headers(&mut self, parent: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(parent, NodePayload::Headers(Headers::default()))
    }

    pub fn create_header(&mut self, headers: NodeId, name: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            headers,
            NodePayload::Header(Header {
                name: name.to_string(),
                ..Header::default()
            }),
        )
    }

    pub fn create_example(&mut self, parent: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(parent, NodePayload::Example(Example::default()))
    }

    pub fn create_xml(&mut self, schema: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(schema, NodePayload::Xml(Xml::default()))
    }

    pub fn create_definitions(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V2);
        let root = self.root();
        self.push_node(root, NodePayload::Definitions(Definitions::default()))
    }

    pub fn create_parameters_definitions(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V2);
        let root = self.root();
        self.push_node(
            root,
            NodePayload::ParametersDefinitions(ParametersDefinitions::default()),
        )
    }

    pub fn create_responses_definitions(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V2);
        let root = self.root();
        self.push_node(
            root,
            NodePayload::ResponsesDefinitions(ResponsesDefinitions::default()),
        )
    }

    pub fn create_security_definitions(&mut self) -> NodeId {
        self.expect_version(SpecVersion::V2);
        let root = self.root();
        self.push_node(
            root,
            NodePayload::SecurityDefinitions(SecurityDefinitions::default()),
        )
    }

    pub fn create_security_scheme(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(
            parent,
            NodePayload::SecurityScheme(SecurityScheme {
                scheme_name: name.to_string(),
                ..SecurityScheme::default()
            }),
        )
    }

    pub fn create_scopes(&mut self, scheme: NodeId) -> NodeId {
        self.expect_version(SpecVersion::V2);
        self.push_node(scheme, NodePayload::Scopes(Scopes::default()))
    }

    /// Create a path item and register it in the paths collection.
    pub fn add_path_item(&mut self, paths: NodeId, path: &str) -> NodeId {
        let item = self.create_path_item(paths, path);
        if let Some(p) = self.node_mut(paths).as_paths_mut() {
            p.path_items.insert(path.to_string(), item);
        }
        item
    }

    /// Create a response definition and register it in the collection.
    pub fn add_response_definition(&mut self, parent: NodeId, name: &str) -> NodeId {
        let response = self.create_response_definition(parent, name);
        if let Some(d) = self.node_mut(parent).as_responses_definitions_mut() {
            d.responses.insert(name.to_string(), response);
        }
        response
    }
}
