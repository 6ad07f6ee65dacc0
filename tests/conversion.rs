//! End-to-end conversion tests
//!
//! Collection JSON → Swagger document, through the public library API.

use postman2swagger::convert::{DefinitionKeyStrategy, TagStrategy};
use postman2swagger::schema::definition_key;
use postman2swagger::swagger::{render_document, OutputFormat};
use postman2swagger::{load_collection_from_str, ConvertOptions, Converter};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const SHOP: &str = include_str!("fixtures/shop.postman_collection.json");

fn convert(options: ConvertOptions) -> Value {
    let parsed = load_collection_from_str(SHOP).unwrap();
    let document = Converter::new(options).convert_parsed(&parsed).unwrap();
    serde_json::to_value(document).unwrap()
}

#[test]
fn test_envelope_and_tags() {
    let doc = convert(ConvertOptions::default());

    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(
        doc["info"],
        json!({
            "title": "Shop API",
            "description": "Example shop backend",
            "version": "1.0.0",
            "contact": {}
        })
    );
    assert_eq!(doc["host"], "");
    assert_eq!(doc["schemes"], json!(["https", "http"]));
    assert_eq!(
        doc["tags"],
        json!([
            {"name": "default", "description": "default tag"},
            {"name": "Users", "description": "User management"},
            {"name": "Orders", "description": "Orders of a user"}
        ])
    );
}

#[test]
fn test_paths() {
    let doc = convert(ConvertOptions::default());
    let paths = doc["paths"].as_object().unwrap();

    let mut keys: Vec<_> = paths.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["/health", "/users/{userId}", "/users/{userId}/orders"]
    );

    let user = &paths["/users/{userId}"];
    assert_eq!(user.as_object().unwrap().len(), 2);
    assert_eq!(user["get"]["tags"], json!(["Users"]));
    assert_eq!(user["get"]["summary"], "Get user");
    assert_eq!(user["get"]["description"], "Fetch one user");
    assert_eq!(user["get"]["consumes"], json!(["application/json"]));
    assert_eq!(
        user["get"]["parameters"],
        json!([{
            "name": "userId",
            "in": "path",
            "description": "",
            "required": true,
            "type": "integer",
            "format": "int64"
        }])
    );

    assert_eq!(user["post"]["consumes"], json!(["application/x-www-form-urlencoded"]));
    assert_eq!(user["post"]["responses"], json!({}));
    assert_eq!(
        user["post"]["parameters"],
        json!([
            {
                "name": "userId",
                "in": "path",
                "description": "",
                "required": true,
                "type": "integer",
                "format": "int64"
            },
            {"name": "name", "in": "formData", "description": "display name", "type": "string"},
            {"name": "email", "in": "formData", "description": "", "type": "string"}
        ])
    );

    assert_eq!(paths["/health"]["get"]["tags"], json!(["default"]));
    assert_eq!(paths["/health"]["get"]["parameters"], json!([]));
    assert_eq!(
        paths["/users/{userId}/orders"]["get"]["tags"],
        json!(["Orders"])
    );
}

#[test]
fn test_response_definitions() {
    let doc = convert(ConvertOptions::default());
    let user_key = definition_key("get user ok");
    let orders_key = definition_key("list orders ok");
    let health_key = definition_key("health ok");

    let responses = &doc["paths"]["/users/{userId}"]["get"]["responses"];
    assert_eq!(
        responses["200"],
        json!({
            "description": "get user ok",
            "schema": {"$ref": format!("#/definitions/{user_key}")}
        })
    );
    assert_eq!(responses["404"], json!({"description": "get user missing"}));

    let definitions = &doc["definitions"];
    assert_eq!(
        definitions[&user_key],
        json!({
            "type": "object",
            "properties": {
                "msg": {"type": "string"},
                "errcode": {"type": "integer", "format": "int64"},
                "data": {"$ref": format!("#/definitions/{user_key}data")}
            }
        })
    );
    assert_eq!(
        definitions[format!("{user_key}data")],
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "name": {"type": "string"},
                "score": {"type": "integer", "format": "int64"},
                "roles": {"type": "string"}
            }
        })
    );
    assert_eq!(
        definitions[&orders_key]["properties"]["data"],
        json!({
            "type": "array",
            "items": {"$ref": format!("#/definitions/{orders_key}data")}
        })
    );
    assert_eq!(
        definitions[format!("{orders_key}data")]["properties"]["orderId"],
        json!({"type": "integer", "format": "int64"})
    );

    // Plain-text body is wrapped, so its envelope has an untyped `data`
    assert_eq!(definitions[&health_key]["properties"]["data"], json!({}));
    assert_eq!(definitions.as_object().unwrap().len(), 5);
}

#[test]
fn test_malformed_item_reported_and_skipped() {
    let parsed = load_collection_from_str(SHOP).unwrap();

    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].location, "Users / Orders / Broken");

    let strict = Converter::new(ConvertOptions::new().with_strict(true));
    assert!(strict.convert_parsed(&parsed).is_err());
}

#[test]
fn test_alternative_strategies() {
    let doc = convert(
        ConvertOptions::new()
            .with_tag_strategy(TagStrategy::TopLevelFolder)
            .with_definition_keys(DefinitionKeyStrategy::Operation),
    );

    assert_eq!(doc["tags"].as_array().unwrap().len(), 2);
    assert_eq!(
        doc["paths"]["/users/{userId}/orders"]["get"]["tags"],
        json!(["Users"])
    );

    let key = definition_key("/users/{userId} get get user ok");
    assert_eq!(
        doc["paths"]["/users/{userId}"]["get"]["responses"]["200"]["schema"]["$ref"],
        format!("#/definitions/{key}")
    );
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let render = || {
        let parsed = load_collection_from_str(SHOP).unwrap();
        let document = Converter::default().convert_parsed(&parsed).unwrap();
        render_document(&document, OutputFormat::Json, true).unwrap()
    };

    assert_eq!(render(), render());
}
