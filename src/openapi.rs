//! OpenAPI documents served by the API.
//!
//! Documents are registered by name at startup, each with its own info block
//! and the operations mapped to it. Rendering produces a deterministic
//! OpenAPI 3.0 JSON value.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Name of the document the translation endpoints are mapped to.
pub const MY_API_V1: &str = "my-api-v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
}

/// A GET operation with a single string path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOperation {
    pub path: String,
    pub operation_id: String,
    pub summary: String,
    pub parameter: String,
    /// Schema of the 200 response
    pub response_schema: Value,
    /// Status codes answered with a plain-text message
    pub error_responses: Vec<(u16, String)>,
}

impl ApiOperation {
    fn to_path_item(&self) -> Value {
        let mut responses = Map::new();
        responses.insert(
            "200".to_string(),
            json!({
                "description": "OK",
                "content": {
                    "application/json": { "schema": self.response_schema }
                }
            }),
        );
        for (status, description) in &self.error_responses {
            responses.insert(
                status.to_string(),
                json!({
                    "description": description,
                    "content": {
                        "text/plain": { "schema": { "type": "string" } }
                    }
                }),
            );
        }

        json!({
            "get": {
                "operationId": self.operation_id,
                "summary": self.summary,
                "parameters": [
                    {
                        "name": self.parameter,
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }
                ],
                "responses": responses
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct ApiDocument {
    pub name: String,
    pub info: ApiInfo,
    pub operations: Vec<ApiOperation>,
}

impl ApiDocument {
    pub fn to_json(&self) -> Value {
        let paths: Map<String, Value> = self
            .operations
            .iter()
            .map(|op| (op.path.clone(), op.to_path_item()))
            .collect();

        json!({
            "openapi": "3.0.3",
            "info": self.info,
            "paths": paths,
            "components": {
                "schemas": {
                    "LanguageNode": {
                        "type": "object",
                        "required": ["isSelected", "displayName"],
                        "properties": {
                            "isSelected": { "type": "boolean" },
                            "displayName": { "type": "string" }
                        }
                    }
                }
            }
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiDocumentRegistry {
    documents: Vec<ApiDocument>,
}

impl ApiDocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document. Registering an existing name replaces its info
    /// and keeps its operations.
    pub fn register(&mut self, name: &str, info: ApiInfo) -> &mut Self {
        match self.documents.iter_mut().find(|doc| doc.name == name) {
            Some(doc) => doc.info = info,
            None => self.documents.push(ApiDocument {
                name: name.to_string(),
                info,
                operations: Vec::new(),
            }),
        }
        self
    }

    /// Attach an operation to a registered document. Returns `false` when the
    /// document does not exist.
    pub fn map_operation(&mut self, name: &str, operation: ApiOperation) -> bool {
        match self.documents.iter_mut().find(|doc| doc.name == name) {
            Some(doc) => {
                doc.operations.push(operation);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ApiDocument> {
        self.documents.iter().find(|doc| doc.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.name.as_str())
    }
}

/// Registry holding `my-api-v1` with both translation endpoints.
pub fn default_registry() -> ApiDocumentRegistry {
    let mut registry = ApiDocumentRegistry::new();
    registry.register(
        MY_API_V1,
        ApiInfo {
            title: "My API v1".to_string(),
            version: "1.0".to_string(),
        },
    );

    registry.map_operation(
        MY_API_V1,
        ApiOperation {
            path: "/v1/allLanguages/{currentCultureIsoCode}".to_string(),
            operation_id: "getAllLanguagesInCurrentCultureIsoCode".to_string(),
            summary: "List configured languages with names in the given culture".to_string(),
            parameter: "currentCultureIsoCode".to_string(),
            response_schema: json!({
                "type": "object",
                "additionalProperties": { "$ref": "#/components/schemas/LanguageNode" }
            }),
            error_responses: vec![(500, "Content context unavailable".to_string())],
        },
    );

    registry.map_operation(
        MY_API_V1,
        ApiOperation {
            path: "/v1/translations/{currentLanguageIsoCode}".to_string(),
            operation_id: "getTranslationForCurrentLanguageIsoCode".to_string(),
            summary: "Dictionary translations for the closest configured language".to_string(),
            parameter: "currentLanguageIsoCode".to_string(),
            response_schema: json!({
                "type": "object",
                "additionalProperties": { "type": "string" }
            }),
            error_responses: vec![(404, "Language was not found in the CMS".to_string())],
        },
    );

    registry
}
