//! Whole-document conversion: writing a freshly read document must
//! reproduce the source value, and the resulting tree must satisfy the
//! ownership invariant.

use serde_json::{json, Value};
use voussoir_codec::{read_document_str, write_node, Document};

fn round_trip(source: &Value) -> (Document, Value) {
    let doc = read_document_str(&source.to_string()).unwrap();
    let written = write_node(&doc, doc.root());
    (doc, written)
}

/// Walk the tree from the root and check that every reachable node's parent
/// link points back at the node it was reached from, and that every node in
/// the arena is reachable.
fn assert_ownership(doc: &Document) {
    let mut queue = vec![doc.root()];
    let mut reached = 0usize;
    while let Some(node) = queue.pop() {
        reached += 1;
        for child in doc.children(node) {
            assert_eq!(doc.parent(child), Some(node));
            queue.push(child);
        }
    }
    assert_eq!(reached, doc.node_count());
}

#[test]
fn v2_document_survives_a_round_trip() {
    let source = json!({
        "swagger": "2.0",
        "info": {
            "title": "Pet Store",
            "description": "A sample API",
            "termsOfService": "https://example.com/terms",
            "contact": {
                "name": "API Support",
                "url": "https://example.com/support",
                "email": "support@example.com"
            },
            "license": {
                "name": "Apache 2.0",
                "url": "https://www.apache.org/licenses/LICENSE-2.0"
            },
            "version": "1.0.0",
            "x-audience": "public"
        },
        "host": "api.example.com",
        "basePath": "/v1",
        "schemes": ["https"],
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "paths": {
            "/pets": {
                "get": {
                    "tags": ["pets"],
                    "summary": "List pets",
                    "operationId": "listPets",
                    "parameters": [
                        {
                            "name": "limit",
                            "in": "query",
                            "description": "How many to return",
                            "required": false,
                            "type": "integer",
                            "format": "int32",
                            "maximum": 100,
                            "default": 20
                        },
                        {
                            "name": "tags",
                            "in": "query",
                            "type": "array",
                            "collectionFormat": "csv",
                            "items": {
                                "type": "string",
                                "minLength": 1
                            }
                        }
                    ],
                    "responses": {
                        "default": {
                            "$ref": "#/responses/Error"
                        },
                        "200": {
                            "description": "A page of pets",
                            "schema": {
                                "type": "array",
                                "items": {
                                    "$ref": "#/definitions/Pet"
                                }
                            },
                            "headers": {
                                "X-Rate-Limit": {
                                    "description": "Requests left",
                                    "type": "integer"
                                }
                            },
                            "examples": {
                                "application/json": [{"name": "rex"}]
                            }
                        }
                    },
                    "deprecated": false,
                    "security": [
                        {"petstore_auth": ["read:pets"]}
                    ]
                },
                "parameters": [
                    {"$ref": "#/parameters/traceId"}
                ],
                "x-rate-limited": true
            }
        },
        "definitions": {
            "Pet": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": {"type": "string"},
                    "age": {"type": "integer", "format": "int32"},
                    "kind": {
                        "type": "string",
                        "enum": ["cat", "dog"]
                    },
                    "x-lineage": {"type": "string"}
                },
                "additionalProperties": false,
                "xml": {"name": "pet"},
                "example": {"name": "rex", "age": 3}
            },
            "Error": {
                "type": "object",
                "properties": {
                    "message": {"type": "string"}
                }
            }
        },
        "parameters": {
            "traceId": {
                "name": "X-Trace-Id",
                "in": "header",
                "type": "string"
            }
        },
        "responses": {
            "Error": {
                "description": "Unexpected error",
                "schema": {"$ref": "#/definitions/Error"}
            }
        },
        "securityDefinitions": {
            "petstore_auth": {
                "type": "oauth2",
                "flow": "implicit",
                "authorizationUrl": "https://example.com/authorize",
                "scopes": {
                    "read:pets": "read your pets",
                    "write:pets": "modify your pets"
                }
            }
        },
        "security": [
            {"petstore_auth": ["read:pets", "write:pets"]}
        ],
        "tags": [
            {
                "name": "pets",
                "description": "Everything about pets",
                "externalDocs": {"url": "https://example.com/docs/pets"}
            }
        ],
        "externalDocs": {
            "description": "Full documentation",
            "url": "https://example.com/docs"
        },
        "x-origin": "hand-written"
    });

    let (doc, written) = round_trip(&source);
    assert_eq!(written, source);
    assert_ownership(&doc);
}

#[test]
fn v3_document_survives_a_round_trip() {
    let source = json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Pet Store",
            "version": "2.0.0"
        },
        "servers": [
            {
                "url": "https://{region}.api.example.com/{basePath}",
                "description": "Regional endpoint",
                "variables": {
                    "region": {
                        "enum": ["eu", "us"],
                        "default": "eu",
                        "description": "Deployment region"
                    },
                    "basePath": {"default": "v2"}
                }
            }
        ],
        "security": [
            {"api_key": []}
        ],
        "tags": [
            {"name": "pets"}
        ],
        "externalDocs": {"url": "https://example.com/docs"},
        "x-origin": "hand-written"
    });

    let (doc, written) = round_trip(&source);
    assert_eq!(written, source);
    assert_ownership(&doc);
}

#[test]
fn integer_and_float_bounds_keep_their_representation() {
    let source = json!({
        "swagger": "2.0",
        "definitions": {
            "Reading": {
                "type": "number",
                "minimum": 0.5,
                "maximum": 100,
                "multipleOf": 0.25
            }
        }
    });

    let (_, written) = round_trip(&source);
    let bounds = &written["definitions"]["Reading"];
    assert_eq!(bounds["minimum"], json!(0.5));
    assert_eq!(bounds["maximum"], json!(100));
    assert_eq!(bounds["multipleOf"], json!(0.25));
}

#[test]
fn explicit_null_is_dropped_on_write() {
    let source = json!({
        "swagger": "2.0",
        "info": {
            "title": "Nulls",
            "description": null,
            "version": "1.0"
        },
        "host": null
    });

    let (_, written) = round_trip(&source);
    assert!(written.get("host").is_none());
    assert!(written["info"].get("description").is_none());
}
