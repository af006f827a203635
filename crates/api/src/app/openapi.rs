//! OpenAPI document describing the person API.

use axum::Json;
use serde_json::{Value, json};

use peoplehub_people::PERSON_BASE_PATH;

pub const API_DOCS_PATH: &str = "/v3/api-docs";

pub const API_TITLE: &str = "RESTful API with Rust and axum";
pub const API_VERSION: &str = "v1";
pub const API_DESCRIPTION: &str = "Some description about API";
pub const API_LICENSE: &str = "Apache 2.0";

pub async fn api_docs() -> Json<Value> {
    Json(document())
}

/// Build the OpenAPI 3 document.
pub fn document() -> Value {
    let collection = PERSON_BASE_PATH;
    let item = format!("{PERSON_BASE_PATH}/{{id}}");

    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" },
    });
    let person_ref = json!({ "$ref": "#/components/schemas/Person" });
    let error_ref = json!({ "$ref": "#/components/schemas/Error" });
    let person_body = json!({
        "required": true,
        "content": { "application/json": { "schema": person_ref } },
    });
    let ok_person = json!({
        "description": "Success",
        "content": { "application/json": { "schema": person_ref } },
    });
    let error = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": error_ref } },
        })
    };

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION,
            "termsOfService": "",
            "license": { "name": API_LICENSE, "url": "" },
        },
        "paths": {
            collection: {
                "get": {
                    "tags": ["People"],
                    "summary": "Finds all people",
                    "operationId": "findAll",
                    "responses": {
                        "200": {
                            "description": "Success",
                            "content": { "application/json": {
                                "schema": { "type": "array", "items": person_ref },
                            } },
                        },
                        "500": error("Storage failure"),
                    },
                },
                "post": {
                    "tags": ["People"],
                    "summary": "Adds a new person",
                    "operationId": "create",
                    "requestBody": person_body,
                    "responses": {
                        "201": ok_person,
                        "400": error("Null payload"),
                        "500": error("Storage failure"),
                    },
                },
                "put": {
                    "tags": ["People"],
                    "summary": "Updates a person",
                    "operationId": "update",
                    "requestBody": person_body,
                    "responses": {
                        "200": ok_person,
                        "400": error("Null payload"),
                        "404": error("Not found"),
                        "500": error("Storage failure"),
                    },
                },
            },
            item: {
                "get": {
                    "tags": ["People"],
                    "summary": "Finds a person",
                    "operationId": "findById",
                    "parameters": [id_param],
                    "responses": {
                        "200": ok_person,
                        "400": error("Invalid id"),
                        "404": error("Not found"),
                        "500": error("Storage failure"),
                    },
                },
                "delete": {
                    "tags": ["People"],
                    "summary": "Deletes a person",
                    "operationId": "delete",
                    "parameters": [id_param],
                    "responses": {
                        "204": { "description": "No content" },
                        "400": error("Invalid id"),
                        "404": error("Not found"),
                        "500": error("Storage failure"),
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "Person": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "first_name": { "type": "string" },
                        "last_name": { "type": "string" },
                        "address": { "type": "string" },
                        "gender": { "type": "string" },
                        "links": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Link" },
                        },
                    },
                    "required": ["first_name", "last_name", "address", "gender"],
                },
                "Link": {
                    "type": "object",
                    "properties": {
                        "rel": { "type": "string" },
                        "href": { "type": "string" },
                    },
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "timestamp": { "type": "string", "format": "date-time" },
                        "error": { "type": "string" },
                        "message": { "type": "string" },
                        "details": { "type": "string" },
                    },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_api_metadata() {
        let doc = document();
        assert_eq!(doc["info"]["title"], API_TITLE);
        assert_eq!(doc["info"]["version"], "v1");
        assert_eq!(doc["info"]["termsOfService"], "");
        assert_eq!(doc["info"]["license"]["name"], "Apache 2.0");
    }

    #[test]
    fn document_lists_person_routes() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/person/v1"));
        assert!(paths.contains_key("/api/person/v1/{id}"));
        assert!(doc["paths"]["/api/person/v1"]["put"].is_object());
        assert!(doc["paths"]["/api/person/v1/{id}"]["delete"].is_object());
    }
}
