//! Function declaration converter.
//!
//! Produces the OpenAPI-subset schema Gemini expects inside
//! `tools[].functionDeclarations`.

use searchmind_domain::ToolDefinition;
use serde_json::{Map, Value, json};

/// Convert a tool definition into one function declaration.
///
/// Handles param_type → schema type mapping:
/// - `"string"`, `"path"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// `minimum`, `maximum` and `default` are copied when set.
pub fn function_declaration(tool: &ToolDefinition) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in &tool.parameters {
        let schema_type = match param.param_type.as_str() {
            "string" | "path" => "string",
            "number" => "number",
            "integer" => "integer",
            "boolean" => "boolean",
            _ => "string",
        };

        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(schema_type));
        prop.insert("description".to_string(), json!(param.description));
        if let Some(minimum) = param.minimum {
            prop.insert("minimum".to_string(), json!(minimum));
        }
        if let Some(maximum) = param.maximum {
            prop.insert("maximum".to_string(), json!(maximum));
        }
        if let Some(default) = &param.default {
            prop.insert("default".to_string(), default.clone());
        }
        properties.insert(param.name.clone(), Value::Object(prop));

        if param.required {
            required.push(json!(param.name));
        }
    }

    json!({
        "name": tool.name,
        "description": tool.description,
        "parameters": {
            "type": "object",
            "properties": properties,
            "required": required,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchmind_domain::{ToolParameter, web_search_definition};

    #[test]
    fn test_web_search_declaration() {
        let schema = function_declaration(&web_search_definition());

        assert_eq!(schema["name"], "web_search");
        assert_eq!(schema["parameters"]["type"], "object");
        assert_eq!(schema["parameters"]["required"], json!(["query"]));

        let query = &schema["parameters"]["properties"]["query"];
        assert_eq!(query["type"], "string");
        assert!(query.get("minimum").is_none());

        let num = &schema["parameters"]["properties"]["numResults"];
        assert_eq!(num["type"], "integer");
        assert_eq!(num["minimum"], 1);
        assert_eq!(num["maximum"], 10);
        assert_eq!(num["default"], 5);
    }

    #[test]
    fn test_unknown_type_maps_to_string() {
        let tool = ToolDefinition::new("lookup", "Look something up")
            .with_parameter(ToolParameter::new("when", "A date", false).with_type("date"))
            .with_parameter(ToolParameter::new("exact", "Exact match", false).with_type("boolean"));

        let schema = function_declaration(&tool);
        assert_eq!(schema["parameters"]["properties"]["when"]["type"], "string");
        assert_eq!(schema["parameters"]["properties"]["exact"]["type"], "boolean");
        assert_eq!(schema["parameters"]["required"], json!([]));
    }
}
