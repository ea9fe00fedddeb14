use serde_json::{json, Value};

use crate::chain::constants::DEFAULT_TIP_AMOUNT;

fn handle_param() -> Value {
    json!({
        "name": "handle",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "example": "skrillex" }
    })
}

fn amount_param() -> Value {
    json!({
        "name": "amount",
        "in": "path",
        "required": true,
        "schema": { "type": "number", "example": DEFAULT_TIP_AMOUNT.to_string() }
    })
}

fn get_operation(params: Vec<Value>) -> Value {
    json!({
        "tags": ["Tip"],
        "parameters": params,
        "responses": {
            "200": {
                "description": "Action metadata",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ActionGetResponse" } } }
            },
            "default": { "$ref": "#/components/responses/Error" }
        }
    })
}

fn post_operation(params: Vec<Value>) -> Value {
    json!({
        "tags": ["Tip"],
        "parameters": params,
        "requestBody": {
            "required": true,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ActionPostRequest" } } }
        },
        "responses": {
            "200": {
                "description": "Unsigned transaction",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ActionPostResponse" } } }
            },
            "default": { "$ref": "#/components/responses/Error" }
        }
    })
}

fn linked_action_schema() -> Value {
    json!({
        "type": "object",
        "required": ["label", "href"],
        "properties": {
            "label": { "type": "string" },
            "href": { "type": "string" },
            "parameters": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" },
                        "label": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn action_get_response_schema() -> Value {
    json!({
        "type": "object",
        "required": ["type", "icon", "label", "title", "description"],
        "properties": {
            "type": { "type": "string", "enum": ["action"] },
            "icon": { "type": "string" },
            "label": { "type": "string" },
            "title": { "type": "string" },
            "description": { "type": "string" },
            "links": {
                "type": "object",
                "properties": {
                    "actions": { "type": "array", "items": linked_action_schema() }
                }
            }
        }
    })
}

/// OpenAPI 3 description of the tip action routes.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Audius tip action",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/{handle}": {
                "get": get_operation(vec![handle_param()]),
                "post": post_operation(vec![handle_param()])
            },
            "/{handle}/{amount}": {
                "get": get_operation(vec![handle_param(), amount_param()]),
                "post": post_operation(vec![handle_param(), amount_param()])
            }
        },
        "components": {
            "schemas": {
                "ActionGetResponse": action_get_response_schema(),
                "ActionPostRequest": {
                    "type": "object",
                    "required": ["account"],
                    "properties": { "account": { "type": "string" } }
                },
                "ActionPostResponse": {
                    "type": "object",
                    "required": ["type", "transaction"],
                    "properties": {
                        "type": { "type": "string", "enum": ["transaction"] },
                        "transaction": { "type": "string", "format": "byte" },
                        "message": { "type": "string" }
                    }
                },
                "ActionError": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string" } }
                }
            },
            "responses": {
                "Error": {
                    "description": "Request failed",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ActionError" } } }
                }
            }
        }
    })
}
