//! Write routines for OpenAPI 2.0 documents.

use serde_json::{Map, Value};
use voussoir_model::v2::{BooleanOrSchema, ItemsCore, ParameterCore, ResponseCore};
use voussoir_model::{Document, NodeId, Oas2Visitor, SpecVersion};

use super::common;
use super::{
    set_bool, set_number, set_string, set_string_array, set_value, set_value_array,
    write_extensions,
};

pub(crate) fn write_document(doc: &Document) -> Value {
    let root = doc.root();
    let mut obj = Map::new();
    obj.insert(
        SpecVersion::V2.discriminator_field().to_string(),
        Value::String(SpecVersion::V2.discriminator_value().to_string()),
    );
    if let Some(fields) = doc.node(root).as_document_v2() {
        if let Some(info) = fields.info {
            obj.insert("info".to_string(), common::write_info(doc, info));
        }
        set_string(&mut obj, "host", &fields.host);
        set_string(&mut obj, "basePath", &fields.base_path);
        set_string_array(&mut obj, "schemes", &fields.schemes);
        set_string_array(&mut obj, "consumes", &fields.consumes);
        set_string_array(&mut obj, "produces", &fields.produces);
        if let Some(paths) = fields.paths {
            obj.insert("paths".to_string(), write_paths(doc, paths));
        }
        if let Some(definitions) = fields.definitions {
            obj.insert("definitions".to_string(), write_definitions(doc, definitions));
        }
        if let Some(parameters) = fields.parameters {
            obj.insert(
                "parameters".to_string(),
                write_parameters_definitions(doc, parameters),
            );
        }
        if let Some(responses) = fields.responses {
            obj.insert(
                "responses".to_string(),
                write_responses_definitions(doc, responses),
            );
        }
        if let Some(defs) = fields.security_definitions {
            obj.insert(
                "securityDefinitions".to_string(),
                write_security_definitions(doc, defs),
            );
        }
        if let Some(security) = &fields.security {
            let items = security
                .iter()
                .map(|req| common::write_security_requirement(doc, *req))
                .collect();
            obj.insert("security".to_string(), Value::Array(items));
        }
        if let Some(tags) = &fields.tags {
            let items = tags.iter().map(|tag| common::write_tag(doc, *tag)).collect();
            obj.insert("tags".to_string(), Value::Array(items));
        }
        if let Some(edoc) = fields.external_docs {
            obj.insert(
                "externalDocs".to_string(),
                common::write_external_documentation(doc, edoc),
            );
        }
    }
    write_extensions(doc, root, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_paths(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(paths) = doc.node(node).as_paths() {
        for (path, item) in &paths.path_items {
            obj.insert(path.clone(), write_path_item(doc, *item));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_path_item(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(item) = doc.node(node).as_path_item() {
        set_string(&mut obj, "$ref", &item.reference);
        let methods = [
            ("get", item.get),
            ("put", item.put),
            ("post", item.post),
            ("delete", item.delete),
            ("options", item.options),
            ("head", item.head),
            ("patch", item.patch),
        ];
        for (method, op) in methods {
            if let Some(op) = op {
                obj.insert(method.to_string(), write_operation(doc, op));
            }
        }
        if let Some(parameters) = &item.parameters {
            let items = parameters
                .iter()
                .map(|param| write_parameter(doc, *param))
                .collect();
            obj.insert("parameters".to_string(), Value::Array(items));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_operation(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(op) = doc.node(node).as_operation() {
        set_string_array(&mut obj, "tags", &op.tags);
        set_string(&mut obj, "summary", &op.summary);
        set_string(&mut obj, "description", &op.description);
        if let Some(edoc) = op.external_docs {
            obj.insert(
                "externalDocs".to_string(),
                common::write_external_documentation(doc, edoc),
            );
        }
        set_string(&mut obj, "operationId", &op.operation_id);
        set_string_array(&mut obj, "consumes", &op.consumes);
        set_string_array(&mut obj, "produces", &op.produces);
        if let Some(parameters) = &op.parameters {
            let items = parameters
                .iter()
                .map(|param| write_parameter(doc, *param))
                .collect();
            obj.insert("parameters".to_string(), Value::Array(items));
        }
        if let Some(responses) = op.responses {
            obj.insert("responses".to_string(), write_responses(doc, responses));
        }
        set_string_array(&mut obj, "schemes", &op.schemes);
        set_bool(&mut obj, "deprecated", &op.deprecated);
        if let Some(security) = &op.security {
            let items = security
                .iter()
                .map(|req| common::write_security_requirement(doc, *req))
                .collect();
            obj.insert("security".to_string(), Value::Array(items));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_parameter(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(param) = doc.node(node).as_parameter() {
        // A reference stub writes its pointer and nothing else.
        if let Some(reference) = &param.reference {
            obj.insert("$ref".to_string(), Value::String(reference.clone()));
            return Value::Object(obj);
        }
        write_parameter_core(doc, &param.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_parameter_definition(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(def) = doc.node(node).as_parameter_definition() {
        write_parameter_core(doc, &def.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

fn write_parameter_core(doc: &Document, core: &ParameterCore, obj: &mut Map<String, Value>) {
    set_string(obj, "name", &core.name);
    set_string(obj, "in", &core.location);
    set_string(obj, "description", &core.description);
    set_bool(obj, "required", &core.required);
    if let Some(schema) = core.schema {
        obj.insert("schema".to_string(), write_schema(doc, schema));
    }
    set_bool(obj, "allowEmptyValue", &core.allow_empty_value);
    write_items_core(doc, &core.items, obj);
}

pub(crate) fn write_items(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(items) = doc.node(node).as_items() {
        write_items_core(doc, &items.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

fn write_items_core(doc: &Document, core: &ItemsCore, obj: &mut Map<String, Value>) {
    if let Some(t) = core.schema_type {
        obj.insert("type".to_string(), Value::String(t.as_str().to_string()));
    }
    set_string(obj, "format", &core.format);
    if let Some(items) = core.items {
        obj.insert("items".to_string(), write_items(doc, items));
    }
    if let Some(f) = core.collection_format {
        obj.insert(
            "collectionFormat".to_string(),
            Value::String(f.as_str().to_string()),
        );
    }
    set_value(obj, "default", &core.default);
    set_number(obj, "maximum", &core.maximum);
    set_bool(obj, "exclusiveMaximum", &core.exclusive_maximum);
    set_number(obj, "minimum", &core.minimum);
    set_bool(obj, "exclusiveMinimum", &core.exclusive_minimum);
    set_number(obj, "maxLength", &core.max_length);
    set_number(obj, "minLength", &core.min_length);
    set_string(obj, "pattern", &core.pattern);
    set_number(obj, "maxItems", &core.max_items);
    set_number(obj, "minItems", &core.min_items);
    set_bool(obj, "uniqueItems", &core.unique_items);
    set_value_array(obj, "enum", &core.enum_values);
    set_number(obj, "multipleOf", &core.multiple_of);
}

pub(crate) fn write_schema(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(schema) = doc.node(node).as_schema() {
        // A reference stub writes its pointer and nothing else.
        if let Some(reference) = &schema.reference {
            obj.insert("$ref".to_string(), Value::String(reference.clone()));
            return Value::Object(obj);
        }
        set_string(&mut obj, "format", &schema.format);
        set_string(&mut obj, "title", &schema.title);
        set_string(&mut obj, "description", &schema.description);
        set_value(&mut obj, "default", &schema.default);
        set_number(&mut obj, "multipleOf", &schema.multiple_of);
        set_number(&mut obj, "maximum", &schema.maximum);
        set_bool(&mut obj, "exclusiveMaximum", &schema.exclusive_maximum);
        set_number(&mut obj, "minimum", &schema.minimum);
        set_bool(&mut obj, "exclusiveMinimum", &schema.exclusive_minimum);
        set_number(&mut obj, "maxLength", &schema.max_length);
        set_number(&mut obj, "minLength", &schema.min_length);
        set_string(&mut obj, "pattern", &schema.pattern);
        set_number(&mut obj, "maxItems", &schema.max_items);
        set_number(&mut obj, "minItems", &schema.min_items);
        set_bool(&mut obj, "uniqueItems", &schema.unique_items);
        set_number(&mut obj, "maxProperties", &schema.max_properties);
        set_number(&mut obj, "minProperties", &schema.min_properties);
        set_string_array(&mut obj, "required", &schema.required);
        set_value_array(&mut obj, "enum", &schema.enum_values);
        if let Some(t) = schema.schema_type {
            obj.insert("type".to_string(), Value::String(t.as_str().to_string()));
        }
        if let Some(items) = schema.items {
            obj.insert("items".to_string(), write_schema(doc, items));
        }
        if let Some(all_of) = &schema.all_of {
            let items = all_of.iter().map(|s| write_schema(doc, *s)).collect();
            obj.insert("allOf".to_string(), Value::Array(items));
        }
        if let Some(properties) = &schema.properties {
            let mut props = Map::new();
            for (name, prop) in properties {
                props.insert(name.clone(), write_schema(doc, *prop));
            }
            for (name, value) in &schema.property_extensions {
                props.insert(name.clone(), value.clone());
            }
            obj.insert("properties".to_string(), Value::Object(props));
        }
        match schema.additional_properties {
            Some(BooleanOrSchema::Flag(b)) => {
                obj.insert("additionalProperties".to_string(), Value::Bool(b));
            }
            Some(BooleanOrSchema::Schema(child)) => {
                obj.insert("additionalProperties".to_string(), write_schema(doc, child));
            }
            None => {}
        }
        set_string(&mut obj, "discriminator", &schema.discriminator);
        set_bool(&mut obj, "readOnly", &schema.read_only);
        if let Some(xml) = schema.xml {
            obj.insert("xml".to_string(), write_xml(doc, xml));
        }
        if let Some(edoc) = schema.external_docs {
            obj.insert(
                "externalDocs".to_string(),
                common::write_external_documentation(doc, edoc),
            );
        }
        set_value(&mut obj, "example", &schema.example);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_responses(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(responses) = doc.node(node).as_responses() {
        if let Some(default) = responses.default {
            obj.insert("default".to_string(), write_response(doc, default));
        }
        for (status, response) in &responses.responses {
            obj.insert(status.clone(), write_response(doc, *response));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_response(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(response) = doc.node(node).as_response() {
        if let Some(reference) = &response.reference {
            obj.insert("$ref".to_string(), Value::String(reference.clone()));
            return Value::Object(obj);
        }
        write_response_core(doc, &response.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_response_definition(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(def) = doc.node(node).as_response_definition() {
        write_response_core(doc, &def.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

fn write_response_core(doc: &Document, core: &ResponseCore, obj: &mut Map<String, Value>) {
    set_string(obj, "description", &core.description);
    if let Some(schema) = core.schema {
        obj.insert("schema".to_string(), write_schema(doc, schema));
    }
    if let Some(headers) = core.headers {
        obj.insert("headers".to_string(), write_headers(doc, headers));
    }
    if let Some(examples) = core.examples {
        obj.insert("examples".to_string(), write_example(doc, examples));
    }
}

pub(crate) fn write_headers(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(headers) = doc.node(node).as_headers() {
        for (name, header) in &headers.headers {
            obj.insert(name.clone(), write_header(doc, *header));
        }
    }
    Value::Object(obj)
}

pub(crate) fn write_header(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(header) = doc.node(node).as_header() {
        set_string(&mut obj, "description", &header.description);
        write_items_core(doc, &header.core, &mut obj);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_example(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(example) = doc.node(node).as_example() {
        for (content_type, value) in &example.examples {
            obj.insert(content_type.clone(), value.clone());
        }
    }
    Value::Object(obj)
}

pub(crate) fn write_xml(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(xml) = doc.node(node).as_xml() {
        set_string(&mut obj, "name", &xml.name);
        set_string(&mut obj, "namespace", &xml.namespace);
        set_string(&mut obj, "prefix", &xml.prefix);
        set_bool(&mut obj, "attribute", &xml.attribute);
        set_bool(&mut obj, "wrapped", &xml.wrapped);
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_definitions(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(defs) = doc.node(node).as_definitions() {
        for (name, schema) in &defs.schemas {
            obj.insert(name.clone(), write_schema(doc, *schema));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_parameters_definitions(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(defs) = doc.node(node).as_parameters_definitions() {
        for (name, def) in &defs.parameters {
            obj.insert(name.clone(), write_parameter_definition(doc, *def));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_responses_definitions(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(defs) = doc.node(node).as_responses_definitions() {
        for (name, def) in &defs.responses {
            obj.insert(name.clone(), write_response_definition(doc, *def));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_security_definitions(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(defs) = doc.node(node).as_security_definitions() {
        for (name, scheme) in &defs.schemes {
            obj.insert(name.clone(), write_security_scheme(doc, *scheme));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_security_scheme(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(scheme) = doc.node(node).as_security_scheme() {
        set_string(&mut obj, "type", &scheme.scheme_type);
        set_string(&mut obj, "description", &scheme.description);
        set_string(&mut obj, "name", &scheme.name);
        set_string(&mut obj, "in", &scheme.location);
        set_string(&mut obj, "flow", &scheme.flow);
        set_string(&mut obj, "authorizationUrl", &scheme.authorization_url);
        set_string(&mut obj, "tokenUrl", &scheme.token_url);
        if let Some(scopes) = scheme.scopes {
            obj.insert("scopes".to_string(), write_scopes(doc, scopes));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

pub(crate) fn write_scopes(doc: &Document, node: NodeId) -> Value {
    let mut obj = Map::new();
    if let Some(scopes) = doc.node(node).as_scopes() {
        for (scope, description) in &scopes.scopes {
            obj.insert(scope.clone(), Value::String(description.clone()));
        }
    }
    write_extensions(doc, node, &mut obj);
    Value::Object(obj)
}

/// Visitor that serializes whichever node it is dispatched to.
#[derive(Default)]
pub(crate) struct Writer {
    pub(crate) out: Value,
}

impl Oas2Visitor for Writer {
    fn visit_document(&mut self, doc: &Document, _node: NodeId) {
        self.out = write_document(doc);
    }
    fn visit_info(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_info(doc, node);
    }
    fn visit_contact(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_contact(doc, node);
    }
    fn visit_license(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_license(doc, node);
    }
    fn visit_tag(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_tag(doc, node);
    }
    fn visit_external_documentation(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_external_documentation(doc, node);
    }
    fn visit_security_requirement(&mut self, doc: &Document, node: NodeId) {
        self.out = common::write_security_requirement(doc, node);
    }
    fn visit_security_definitions(&mut self, doc: &Document, node: NodeId) {
        self.out = write_security_definitions(doc, node);
    }
    fn visit_security_scheme(&mut self, doc: &Document, node: NodeId) {
        self.out = write_security_scheme(doc, node);
    }
    fn visit_scopes(&mut self, doc: &Document, node: NodeId) {
        self.out = write_scopes(doc, node);
    }
    fn visit_paths(&mut self, doc: &Document, node: NodeId) {
        self.out = write_paths(doc, node);
    }
    fn visit_path_item(&mut self, doc: &Document, node: NodeId) {
        self.out = write_path_item(doc, node);
    }
    fn visit_operation(&mut self, doc: &Document, node: NodeId) {
        self.out = write_operation(doc, node);
    }
    fn visit_parameter(&mut self, doc: &Document, node: NodeId) {
        self.out = write_parameter(doc, node);
    }
    fn visit_parameter_definition(&mut self, doc: &Document, node: NodeId) {
        self.out = write_parameter_definition(doc, node);
    }
    fn visit_items(&mut self, doc: &Document, node: NodeId) {
        self.out = write_items(doc, node);
    }
    fn visit_responses(&mut self, doc: &Document, node: NodeId) {
        self.out = write_responses(doc, node);
    }
    fn visit_response(&mut self, doc: &Document, node: NodeId) {
        self.out = write_response(doc, node);
    }
    fn visit_response_definition(&mut self, doc: &Document, node: NodeId) {
        self.out = write_response_definition(doc, node);
    }
    fn visit_schema(&mut self, doc: &Document, node: NodeId) {
        self.out = write_schema(doc, node);
    }
    fn visit_headers(&mut self, doc: &Document, node: NodeId) {
        self.out = write_headers(doc, node);
    }
    fn visit_header(&mut self, doc: &Document, node: NodeId) {
        self.out = write_header(doc, node);
    }
    fn visit_example(&mut self, doc: &Document, node: NodeId) {
        self.out = write_example(doc, node);
    }
    fn visit_xml(&mut self, doc: &Document, node: NodeId) {
        self.out = write_xml(doc, node);
    }
    fn visit_definitions(&mut self, doc: &Document, node: NodeId) {
        self.out = write_definitions(doc, node);
    }
    fn visit_parameters_definitions(&mut self, doc: &Document, node: NodeId) {
        self.out = write_parameters_definitions(doc, node);
    }
    fn visit_responses_definitions(&mut self, doc: &Document, node: NodeId) {
        self.out = write_responses_definitions(doc, node);
    }
}
