//! API description endpoints
//!
//! Read-only OpenAPI document for the album routes, plus a small HTML page
//! linking to it. Informational only.

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{AppState, API_BASE_PATH};

const DOC_PATH: &str = "/swagger/doc.json";

/// OpenAPI 3 description of the album routes
pub fn openapi_document() -> Value {
    let message_schema = json!({
        "type": "object",
        "properties": { "message": { "type": "string" } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Swagger Example API",
            "version": "1.0",
            "description": "Album catalog service",
            "termsOfService": "http://swagger.io/terms/",
            "contact": {
                "name": "API Support",
                "url": "http://www.swagger.io/support",
                "email": "support@swagger.io"
            },
            "license": {
                "name": "Apache 2.0",
                "url": "http://www.apache.org/licenses/LICENSE-2.0.html"
            }
        },
        "servers": [{ "url": API_BASE_PATH }],
        "paths": {
            "/album": {
                "get": {
                    "summary": "List albums",
                    "tags": ["album"],
                    "responses": {
                        "200": {
                            "description": "All stored albums",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/albumResponse" }
                            }}}
                        },
                        "404": {
                            "description": "not found",
                            "content": { "application/json": { "schema": message_schema } }
                        }
                    }
                },
                "post": {
                    "summary": "Create album",
                    "tags": ["album"],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "$ref": "#/components/schemas/albumRequest"
                        }}}
                    },
                    "responses": {
                        "201": {
                            "description": "Insert outcome",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": { "success": { "type": "boolean" } }
                            }}}
                        },
                        "500": {
                            "description": "could not add",
                            "content": { "application/json": { "schema": message_schema } }
                        }
                    }
                }
            },
            "/album/{id}": {
                "get": {
                    "summary": "Get album by id",
                    "tags": ["album"],
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "description": "Album ID",
                        "schema": { "type": "integer" }
                    }],
                    "responses": {
                        "200": {
                            "description": "The album",
                            "content": { "application/json": { "schema": {
                                "$ref": "#/components/schemas/albumResponse"
                            }}}
                        },
                        "404": {
                            "description": "Not Found",
                            "content": { "application/json": { "schema": message_schema } }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "albumRequest": {
                    "type": "object",
                    "required": ["title", "artist", "price"],
                    "properties": {
                        "title": { "type": "string" },
                        "artist": { "type": "string" },
                        "price": { "type": "number", "multipleOf": 0.01 }
                    }
                },
                "albumResponse": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "title": { "type": "string" },
                        "artist": { "type": "string" },
                        "price": { "type": "number", "multipleOf": 0.01 }
                    }
                }
            }
        }
    })
}

/// GET /swagger/doc.json
pub async fn serve_openapi() -> Json<Value> {
    Json(openapi_document())
}

/// GET /swagger
pub async fn serve_docs_index() -> impl IntoResponse {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Album API</title></head>\n<body>\n\
         <h1>Album API</h1>\n<p>Routes are served under <code>{}</code>.</p>\n\
         <p>OpenAPI document: <a href=\"{}\">{}</a></p>\n</body>\n</html>\n",
        API_BASE_PATH, DOC_PATH, DOC_PATH
    ))
}

/// Build API description routes
pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .route("/swagger", get(serve_docs_index))
        .route("/swagger/index.html", get(serve_docs_index))
        .route(DOC_PATH, get(serve_openapi))
}
