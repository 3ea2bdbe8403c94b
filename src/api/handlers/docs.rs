//! OpenAPI document for the evidence endpoints.

use axum::Json;
use serde_json::{json, Value};

/// GET /docs/openapi.json - Machine-readable API description.
pub async fn openapi_document() -> Json<Value> {
    Json(openapi())
}

/// Build the OpenAPI 3 document served at `/docs/openapi.json`.
pub fn openapi() -> Value {
    let evidences_op = json!({
        "tags": ["evidence"],
        "summary": "Get evidences by control ID",
        "description": "Returns a list of generated evidences for the provided control ID",
        "parameters": [{
            "name": "controlId",
            "in": "query",
            "required": true,
            "description": "Control ID (1234 for DataDog, 5678 for Sonar)",
            "schema": { "type": "string" }
        }],
        "responses": {
            "200": {
                "description": "Generated evidences, empty when the control is unknown",
                "content": { "application/json": { "schema": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Evidence" }
                }}}
            },
            "400": {
                "description": "Missing controlId",
                "content": { "application/json": { "schema": {
                    "$ref": "#/components/schemas/ErrorResponse"
                }}}
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Evidence Service API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A service that provides evidence information based on control IDs."
        },
        "paths": {
            "/v1/evidences": { "get": evidences_op.clone() },
            "/getEvidences": { "get": evidences_op }
        },
        "components": {
            "schemas": {
                "Evidence": {
                    "type": "object",
                    "required": ["evidenceId", "evidenceType", "controlId", "evidenceStatus"],
                    "properties": {
                        "evidenceId": {
                            "type": "string",
                            "pattern": "^sys_[0-9a-f]{32}$",
                            "example": "sys_1a2b3c4d5e6f7890abcdef0123456789"
                        },
                        "evidenceType": { "type": "string", "example": "dataDog" },
                        "controlId": { "type": "string", "example": "1234" },
                        "evidenceStatus": { "type": "string", "enum": ["SUCCESS", "FAILED"] },
                        "appId": { "type": "string", "pattern": "^[A-Z]$", "example": "A" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["status", "message", "code"],
                    "properties": {
                        "status": { "type": "integer", "example": 400 },
                        "message": { "type": "string", "example": "Control ID is required" },
                        "code": { "type": "string", "example": "MISSING_CONTROL_ID" }
                    }
                }
            }
        }
    })
}
