//! Field routines for OpenAPI 2.0 documents.

use serde_json::Value;
use voussoir_model::extensions::{data_entries, is_extension_name};
use voussoir_model::v2::{BooleanOrSchema, ItemsCore, ParameterCore, ResponseCore};
use voussoir_model::{Document, ModelError, NodeId, Oas2Visitor, SpecVersion};

use super::common;
use super::{
    bool_field, defined, enum_field, number_field, read_extensions, string_array_field,
    string_field, value_array_field, value_field, ReadFn,
};

/// HTTP methods a path item can register operations under.
const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

/// Populate a whole 2.0 document. The `swagger` marker must be exactly
/// `"2.0"`; top-level fields are then read in canonical order, extensions
/// last.
pub(crate) fn read_document(doc: &mut Document, value: &Value) -> Result<(), ModelError> {
    let marker = value
        .get(SpecVersion::V2.discriminator_field())
        .and_then(Value::as_str)
        .unwrap_or_default();
    if marker != SpecVersion::V2.discriminator_value() {
        return Err(ModelError::UnsupportedVersion(marker.to_string()));
    }

    let root = doc.root();
    let mut fields = doc.node(root).as_document_v2().cloned().unwrap_or_default();

    if let Some(v) = defined(value, "info") {
        let info = doc.create_info();
        common::read_info(doc, info, v)?;
        fields.info = Some(info);
    }
    if let Some(s) = string_field(value, "host") {
        fields.host = Some(s);
    }
    if let Some(s) = string_field(value, "basePath") {
        fields.base_path = Some(s);
    }
    if let Some(a) = string_array_field(value, "schemes") {
        fields.schemes = Some(a);
    }
    if let Some(a) = string_array_field(value, "consumes") {
        fields.consumes = Some(a);
    }
    if let Some(a) = string_array_field(value, "produces") {
        fields.produces = Some(a);
    }
    if let Some(v) = defined(value, "paths") {
        let paths = doc.create_paths();
        read_paths(doc, paths, v)?;
        fields.paths = Some(paths);
    }
    if let Some(v) = defined(value, "definitions") {
        let definitions = doc.create_definitions();
        read_definitions(doc, definitions, v)?;
        fields.definitions = Some(definitions);
    }
    if let Some(v) = defined(value, "parameters") {
        let parameters = doc.create_parameters_definitions();
        read_parameters_definitions(doc, parameters, v)?;
        fields.parameters = Some(parameters);
    }
    if let Some(v) = defined(value, "responses") {
        let responses = doc.create_responses_definitions();
        read_responses_definitions(doc, responses, v)?;
        fields.responses = Some(responses);
    }
    if let Some(v) = defined(value, "securityDefinitions") {
        let defs = doc.create_security_definitions();
        read_security_definitions(doc, defs, v)?;
        fields.security_definitions = Some(defs);
    }
    if let Some(items) = defined(value, "security").and_then(Value::as_array) {
        let mut security = Vec::new();
        for item in items {
            let req = doc.create_security_requirement(root);
            common::read_security_requirement(doc, req, item)?;
            security.push(req);
        }
        fields.security = Some(security);
    }
    if let Some(items) = defined(value, "tags").and_then(Value::as_array) {
        let mut tags = Vec::new();
        for item in items {
            let tag = doc.create_tag();
            common::read_tag(doc, tag, item)?;
            tags.push(tag);
        }
        fields.tags = Some(tags);
    }
    if let Some(v) = defined(value, "externalDocs") {
        let edoc = doc.create_external_documentation(root);
        common::read_external_documentation(doc, edoc, v)?;
        fields.external_docs = Some(edoc);
    }

    if let Some(slot) = doc.node_mut(root).as_document_v2_mut() {
        *slot = fields;
    }
    read_extensions(doc, root, value)
}

fn read_document_node(doc: &mut Document, _node: NodeId, value: &Value) -> Result<(), ModelError> {
    read_document(doc, value)
}

pub(crate) fn read_paths(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut paths = doc.node(node).as_paths().cloned().unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (path, item_value) in data_entries(obj) {
            if item_value.is_null() {
                continue;
            }
            let item = doc.create_path_item(node, path);
            read_path_item(doc, item, item_value)?;
            paths.path_items.insert(path.clone(), item);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_paths_mut() {
        *slot = paths;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_path_item(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut item = doc.node(node).as_path_item().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "$ref") {
        item.reference = Some(s);
    }
    for method in HTTP_METHODS {
        if let Some(v) = defined(value, method) {
            let op = doc.create_operation(node, method);
            read_operation(doc, op, v)?;
            match *method {
                "get" => item.get = Some(op),
                "put" => item.put = Some(op),
                "post" => item.post = Some(op),
                "delete" => item.delete = Some(op),
                "options" => item.options = Some(op),
                "head" => item.head = Some(op),
                _ => item.patch = Some(op),
            }
        }
    }
    if let Some(items) = defined(value, "parameters").and_then(Value::as_array) {
        let mut parameters = Vec::new();
        for v in items {
            let param = doc.create_parameter(node);
            read_parameter(doc, param, v)?;
            parameters.push(param);
        }
        item.parameters = Some(parameters);
    }

    if let Some(slot) = doc.node_mut(node).as_path_item_mut() {
        *slot = item;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_operation(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut op = doc.node(node).as_operation().cloned().unwrap_or_default();

    if let Some(a) = string_array_field(value, "tags") {
        op.tags = Some(a);
    }
    if let Some(s) = string_field(value, "summary") {
        op.summary = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        op.description = Some(s);
    }
    if let Some(v) = defined(value, "externalDocs") {
        let edoc = doc.create_external_documentation(node);
        common::read_external_documentation(doc, edoc, v)?;
        op.external_docs = Some(edoc);
    }
    if let Some(s) = string_field(value, "operationId") {
        op.operation_id = Some(s);
    }
    if let Some(a) = string_array_field(value, "consumes") {
        op.consumes = Some(a);
    }
    if let Some(a) = string_array_field(value, "produces") {
        op.produces = Some(a);
    }
    if let Some(items) = defined(value, "parameters").and_then(Value::as_array) {
        let mut parameters = Vec::new();
        for v in items {
            let param = doc.create_parameter(node);
            read_parameter(doc, param, v)?;
            parameters.push(param);
        }
        op.parameters = Some(parameters);
    }
    if let Some(v) = defined(value, "responses") {
        let responses = doc.create_responses(node);
        read_responses(doc, responses, v)?;
        op.responses = Some(responses);
    }
    if let Some(a) = string_array_field(value, "schemes") {
        op.schemes = Some(a);
    }
    if let Some(b) = bool_field(value, "deprecated") {
        op.deprecated = Some(b);
    }
    if let Some(items) = defined(value, "security").and_then(Value::as_array) {
        let mut security = Vec::new();
        for v in items {
            let req = doc.create_security_requirement(node);
            common::read_security_requirement(doc, req, v)?;
            security.push(req);
        }
        op.security = Some(security);
    }

    if let Some(slot) = doc.node_mut(node).as_operation_mut() {
        *slot = op;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_parameter(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut param = doc.node(node).as_parameter().cloned().unwrap_or_default();

    // Indirection stub: the node stands for content defined elsewhere and
    // takes no inline fields.
    if let Some(s) = string_field(value, "$ref") {
        param.reference = Some(s);
        if let Some(slot) = doc.node_mut(node).as_parameter_mut() {
            *slot = param;
        }
        return Ok(());
    }

    read_parameter_core(doc, node, value, &mut param.core)?;
    if let Some(slot) = doc.node_mut(node).as_parameter_mut() {
        *slot = param;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_parameter_definition(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut def = doc
        .node(node)
        .as_parameter_definition()
        .cloned()
        .unwrap_or_default();

    read_parameter_core(doc, node, value, &mut def.core)?;
    if let Some(slot) = doc.node_mut(node).as_parameter_definition_mut() {
        *slot = def;
    }
    read_extensions(doc, node, value)
}

/// One shared routine for both parameter flavors: a parameter's wire
/// encoding extends the Items object, whose fields follow the parameter's
/// own.
fn read_parameter_core(
    doc: &mut Document,
    owner: NodeId,
    value: &Value,
    core: &mut ParameterCore,
) -> Result<(), ModelError> {
    if let Some(s) = string_field(value, "name") {
        core.name = Some(s);
    }
    if let Some(s) = string_field(value, "in") {
        core.location = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        core.description = Some(s);
    }
    if let Some(b) = bool_field(value, "required") {
        core.required = Some(b);
    }
    if let Some(v) = defined(value, "schema") {
        let schema = doc.create_schema(owner);
        read_schema(doc, schema, v)?;
        core.schema = Some(schema);
    }
    if let Some(b) = bool_field(value, "allowEmptyValue") {
        core.allow_empty_value = Some(b);
    }
    read_items_core(doc, owner, value, &mut core.items)?;
    Ok(())
}

pub(crate) fn read_items(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut items = doc.node(node).as_items().cloned().unwrap_or_default();

    read_items_core(doc, node, value, &mut items.core)?;
    if let Some(slot) = doc.node_mut(node).as_items_mut() {
        *slot = items;
    }
    read_extensions(doc, node, value)
}

fn read_items_core(
    doc: &mut Document,
    owner: NodeId,
    value: &Value,
    core: &mut ItemsCore,
) -> Result<(), ModelError> {
    if let Some(t) = enum_field(value, "type")? {
        core.schema_type = Some(t);
    }
    if let Some(s) = string_field(value, "format") {
        core.format = Some(s);
    }
    if let Some(v) = defined(value, "items") {
        let child = doc.create_items(owner);
        read_items(doc, child, v)?;
        core.items = Some(child);
    }
    if let Some(f) = enum_field(value, "collectionFormat")? {
        core.collection_format = Some(f);
    }
    if let Some(v) = value_field(value, "default") {
        core.default = Some(v);
    }
    if let Some(n) = number_field(value, "maximum") {
        core.maximum = Some(n);
    }
    if let Some(b) = bool_field(value, "exclusiveMaximum") {
        core.exclusive_maximum = Some(b);
    }
    if let Some(n) = number_field(value, "minimum") {
        core.minimum = Some(n);
    }
    if let Some(b) = bool_field(value, "exclusiveMinimum") {
        core.exclusive_minimum = Some(b);
    }
    if let Some(n) = number_field(value, "maxLength") {
        core.max_length = Some(n);
    }
    if let Some(n) = number_field(value, "minLength") {
        core.min_length = Some(n);
    }
    if let Some(s) = string_field(value, "pattern") {
        core.pattern = Some(s);
    }
    if let Some(n) = number_field(value, "maxItems") {
        core.max_items = Some(n);
    }
    if let Some(n) = number_field(value, "minItems") {
        core.min_items = Some(n);
    }
    if let Some(b) = bool_field(value, "uniqueItems") {
        core.unique_items = Some(b);
    }
    if let Some(a) = value_array_field(value, "enum") {
        core.enum_values = Some(a);
    }
    if let Some(n) = number_field(value, "multipleOf") {
        core.multiple_of = Some(n);
    }
    Ok(())
}

pub(crate) fn read_schema(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut schema = doc.node(node).as_schema().cloned().unwrap_or_default();

    // Indirection stub path: nothing inline is read.
    if let Some(s) = string_field(value, "$ref") {
        schema.reference = Some(s);
        if let Some(slot) = doc.node_mut(node).as_schema_mut() {
            *slot = schema;
        }
        return Ok(());
    }

    if let Some(s) = string_field(value, "format") {
        schema.format = Some(s);
    }
    if let Some(s) = string_field(value, "title") {
        schema.title = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        schema.description = Some(s);
    }
    if let Some(v) = value_field(value, "default") {
        schema.default = Some(v);
    }
    if let Some(n) = number_field(value, "multipleOf") {
        schema.multiple_of = Some(n);
    }
    if let Some(n) = number_field(value, "maximum") {
        schema.maximum = Some(n);
    }
    if let Some(b) = bool_field(value, "exclusiveMaximum") {
        schema.exclusive_maximum = Some(b);
    }
    if let Some(n) = number_field(value, "minimum") {
        schema.minimum = Some(n);
    }
    if let Some(b) = bool_field(value, "exclusiveMinimum") {
        schema.exclusive_minimum = Some(b);
    }
    if let Some(n) = number_field(value, "maxLength") {
        schema.max_length = Some(n);
    }
    if let Some(n) = number_field(value, "minLength") {
        schema.min_length = Some(n);
    }
    if let Some(s) = string_field(value, "pattern") {
        schema.pattern = Some(s);
    }
    if let Some(n) = number_field(value, "maxItems") {
        schema.max_items = Some(n);
    }
    if let Some(n) = number_field(value, "minItems") {
        schema.min_items = Some(n);
    }
    if let Some(b) = bool_field(value, "uniqueItems") {
        schema.unique_items = Some(b);
    }
    if let Some(n) = number_field(value, "maxProperties") {
        schema.max_properties = Some(n);
    }
    if let Some(n) = number_field(value, "minProperties") {
        schema.min_properties = Some(n);
    }
    if let Some(a) = string_array_field(value, "required") {
        schema.required = Some(a);
    }
    if let Some(a) = value_array_field(value, "enum") {
        schema.enum_values = Some(a);
    }
    if let Some(t) = enum_field(value, "type")? {
        schema.schema_type = Some(t);
    }
    if let Some(v) = defined(value, "items") {
        if v.is_array() {
            return Err(ModelError::UnsupportedSchemaShape(
                "items encoded as an array of schemas".to_string(),
            ));
        }
        let child = doc.create_schema(node);
        read_schema(doc, child, v)?;
        schema.items = Some(child);
    }
    if let Some(items) = defined(value, "allOf").and_then(Value::as_array) {
        let mut all_of = Vec::new();
        for v in items {
            let child = doc.create_schema(node);
            read_schema(doc, child, v)?;
            all_of.push(child);
        }
        schema.all_of = Some(all_of);
    }
    if let Some(obj) = defined(value, "properties").and_then(Value::as_object) {
        let mut properties = std::collections::BTreeMap::new();
        for (name, v) in data_entries(obj) {
            let child = doc.create_schema(node);
            read_schema(doc, child, v)?;
            properties.insert(name.clone(), child);
        }
        for (name, v) in obj.iter().filter(|(name, _)| is_extension_name(name)) {
            schema.property_extensions.insert(name.clone(), v.clone());
        }
        schema.properties = Some(properties);
    }
    match defined(value, "additionalProperties") {
        Some(Value::Bool(b)) => schema.additional_properties = Some(BooleanOrSchema::Flag(*b)),
        Some(v) => {
            let child = doc.create_schema(node);
            read_schema(doc, child, v)?;
            schema.additional_properties = Some(BooleanOrSchema::Schema(child));
        }
        None => {}
    }
    if let Some(s) = string_field(value, "discriminator") {
        schema.discriminator = Some(s);
    }
    if let Some(b) = bool_field(value, "readOnly") {
        schema.read_only = Some(b);
    }
    if let Some(v) = defined(value, "xml") {
        let xml = doc.create_xml(node);
        read_xml(doc, xml, v)?;
        schema.xml = Some(xml);
    }
    if let Some(v) = defined(value, "externalDocs") {
        let edoc = doc.create_external_documentation(node);
        common::read_external_documentation(doc, edoc, v)?;
        schema.external_docs = Some(edoc);
    }
    if let Some(v) = value_field(value, "example") {
        schema.example = Some(v);
    }

    if let Some(slot) = doc.node_mut(node).as_schema_mut() {
        *slot = schema;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_responses(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut responses = doc.node(node).as_responses().cloned().unwrap_or_default();

    if let Some(v) = defined(value, "default") {
        let response = doc.create_response(node, None);
        read_response(doc, response, v)?;
        responses.default = Some(response);
    }
    if let Some(obj) = value.as_object() {
        for (status, v) in data_entries(obj) {
            if status == "default" || v.is_null() {
                continue;
            }
            let response = doc.create_response(node, Some(status.as_str()));
            read_response(doc, response, v)?;
            responses.responses.insert(status.clone(), response);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_responses_mut() {
        *slot = responses;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_response(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut response = doc.node(node).as_response().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "$ref") {
        response.reference = Some(s);
        if let Some(slot) = doc.node_mut(node).as_response_mut() {
            *slot = response;
        }
        return Ok(());
    }

    read_response_core(doc, node, value, &mut response.core)?;
    if let Some(slot) = doc.node_mut(node).as_response_mut() {
        *slot = response;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_response_definition(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut def = doc
        .node(node)
        .as_response_definition()
        .cloned()
        .unwrap_or_default();

    read_response_core(doc, node, value, &mut def.core)?;
    if let Some(slot) = doc.node_mut(node).as_response_definition_mut() {
        *slot = def;
    }
    read_extensions(doc, node, value)
}

/// One shared routine for both response flavors.
fn read_response_core(
    doc: &mut Document,
    owner: NodeId,
    value: &Value,
    core: &mut ResponseCore,
) -> Result<(), ModelError> {
    if let Some(s) = string_field(value, "description") {
        core.description = Some(s);
    }
    if let Some(v) = defined(value, "schema") {
        let schema = doc.create_schema(owner);
        read_schema(doc, schema, v)?;
        core.schema = Some(schema);
    }
    if let Some(v) = defined(value, "headers") {
        let headers = doc.create_headers(owner);
        read_headers(doc, headers, v)?;
        core.headers = Some(headers);
    }
    if let Some(v) = defined(value, "examples") {
        let example = doc.create_example(owner);
        read_example(doc, example, v)?;
        core.examples = Some(example);
    }
    Ok(())
}

/// Every key is a header name, `x-` prefixed names included.
pub(crate) fn read_headers(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut headers = doc.node(node).as_headers().cloned().unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, v) in obj {
            if v.is_null() {
                continue;
            }
            let header = doc.create_header(node, name);
            read_header(doc, header, v)?;
            headers.headers.insert(name.clone(), header);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_headers_mut() {
        *slot = headers;
    }
    Ok(())
}

pub(crate) fn read_header(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut header = doc.node(node).as_header().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "description") {
        header.description = Some(s);
    }
    read_items_core(doc, node, value, &mut header.core)?;

    if let Some(slot) = doc.node_mut(node).as_header_mut() {
        *slot = header;
    }
    read_extensions(doc, node, value)
}

/// Content-type keyed example values; every key is data.
pub(crate) fn read_example(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut example = doc.node(node).as_example().cloned().unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (content_type, v) in obj {
            example.examples.insert(content_type.clone(), v.clone());
        }
    }

    if let Some(slot) = doc.node_mut(node).as_example_mut() {
        *slot = example;
    }
    Ok(())
}

pub(crate) fn read_xml(doc: &mut Document, node: NodeId, value: &Value) -> Result<(), ModelError> {
    let mut xml = doc.node(node).as_xml().cloned().unwrap_or_default();

    if let Some(s) = string_field(value, "name") {
        xml.name = Some(s);
    }
    if let Some(s) = string_field(value, "namespace") {
        xml.namespace = Some(s);
    }
    if let Some(s) = string_field(value, "prefix") {
        xml.prefix = Some(s);
    }
    if let Some(b) = bool_field(value, "attribute") {
        xml.attribute = Some(b);
    }
    if let Some(b) = bool_field(value, "wrapped") {
        xml.wrapped = Some(b);
    }

    if let Some(slot) = doc.node_mut(node).as_xml_mut() {
        *slot = xml;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_definitions(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut defs = doc.node(node).as_definitions().cloned().unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, v) in data_entries(obj) {
            let schema = doc.create_schema(node);
            read_schema(doc, schema, v)?;
            defs.schemas.insert(name.clone(), schema);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_definitions_mut() {
        *slot = defs;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_parameters_definitions(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut defs = doc
        .node(node)
        .as_parameters_definitions()
        .cloned()
        .unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, v) in data_entries(obj) {
            let def = doc.create_parameter_definition(node, name);
            read_parameter_definition(doc, def, v)?;
            defs.parameters.insert(name.clone(), def);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_parameters_definitions_mut() {
        *slot = defs;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_responses_definitions(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut defs = doc
        .node(node)
        .as_responses_definitions()
        .cloned()
        .unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, v) in data_entries(obj) {
            let def = doc.create_response_definition(node, name);
            read_response_definition(doc, def, v)?;
            defs.responses.insert(name.clone(), def);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_responses_definitions_mut() {
        *slot = defs;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_security_definitions(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut defs = doc
        .node(node)
        .as_security_definitions()
        .cloned()
        .unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (name, v) in data_entries(obj) {
            let scheme = doc.create_security_scheme(node, name);
            read_security_scheme(doc, scheme, v)?;
            defs.schemes.insert(name.clone(), scheme);
        }
    }

    if let Some(slot) = doc.node_mut(node).as_security_definitions_mut() {
        *slot = defs;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_security_scheme(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut scheme = doc
        .node(node)
        .as_security_scheme()
        .cloned()
        .unwrap_or_default();

    if let Some(s) = string_field(value, "type") {
        scheme.scheme_type = Some(s);
    }
    if let Some(s) = string_field(value, "description") {
        scheme.description = Some(s);
    }
    if let Some(s) = string_field(value, "name") {
        scheme.name = Some(s);
    }
    if let Some(s) = string_field(value, "in") {
        scheme.location = Some(s);
    }
    if let Some(s) = string_field(value, "flow") {
        scheme.flow = Some(s);
    }
    if let Some(s) = string_field(value, "authorizationUrl") {
        scheme.authorization_url = Some(s);
    }
    if let Some(s) = string_field(value, "tokenUrl") {
        scheme.token_url = Some(s);
    }
    if let Some(v) = defined(value, "scopes") {
        let scopes = doc.create_scopes(node);
        read_scopes(doc, scopes, v)?;
        scheme.scopes = Some(scopes);
    }

    if let Some(slot) = doc.node_mut(node).as_security_scheme_mut() {
        *slot = scheme;
    }
    read_extensions(doc, node, value)
}

pub(crate) fn read_scopes(
    doc: &mut Document,
    node: NodeId,
    value: &Value,
) -> Result<(), ModelError> {
    let mut scopes = doc.node(node).as_scopes().cloned().unwrap_or_default();

    if let Some(obj) = value.as_object() {
        for (scope, v) in data_entries(obj) {
            if let Some(description) = v.as_str() {
                scopes.scopes.insert(scope.clone(), description.to_string());
            }
        }
    }

    if let Some(slot) = doc.node_mut(node).as_scopes_mut() {
        *slot = scopes;
    }
    read_extensions(doc, node, value)
}

/// Visitor that resolves a node's kind to its field routine. Dispatch and
/// routine invocation are split so the routine can take the document
/// mutably.
#[derive(Default)]
pub(crate) struct ReadDispatch {
    pub(crate) routine: Option<ReadFn>,
}

impl Oas2Visitor for ReadDispatch {
    fn visit_document(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_document_node);
    }
    fn visit_info(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_info);
    }
    fn visit_contact(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_contact);
    }
    fn visit_license(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_license);
    }
    fn visit_tag(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_tag);
    }
    fn visit_external_documentation(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_external_documentation);
    }
    fn visit_security_requirement(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(common::read_security_requirement);
    }
    fn visit_security_definitions(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_security_definitions);
    }
    fn visit_security_scheme(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_security_scheme);
    }
    fn visit_scopes(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_scopes);
    }
    fn visit_paths(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_paths);
    }
    fn visit_path_item(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_path_item);
    }
    fn visit_operation(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_operation);
    }
    fn visit_parameter(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_parameter);
    }
    fn visit_parameter_definition(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_parameter_definition);
    }
    fn visit_items(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_items);
    }
    fn visit_responses(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_responses);
    }
    fn visit_response(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_response);
    }
    fn visit_response_definition(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_response_definition);
    }
    fn visit_schema(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_schema);
    }
    fn visit_headers(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_headers);
    }
    fn visit_header(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_header);
    }
    fn visit_example(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_example);
    }
    fn visit_xml(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_xml);
    }
    fn visit_definitions(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_definitions);
    }
    fn visit_parameters_definitions(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_parameters_definitions);
    }
    fn visit_responses_definitions(&mut self, _doc: &Document, _node: NodeId) {
        self.routine = Some(read_responses_definitions);
    }
}
