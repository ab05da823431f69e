//! JSON Schema generation for the layout configuration.

use crate::config::EngineConfig;

/// Generates a JSON Schema for the layout configuration.
///
/// The schema includes every layout variant with its fields, descriptions and
/// default values, so editors can validate and complete configuration files.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(EngineConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/tessel-wm/tessel/main/tessel.schema.json"
            ),
        );
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the layout configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_produces_valid_json() {
        let schema_json = generate_schema_json();
        let parsed: serde_json::Value = serde_json::from_str(&schema_json).unwrap();

        assert!(parsed["$id"].as_str().unwrap().ends_with("tessel.schema.json"));
        assert_eq!(parsed["$schema"], "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(parsed["title"], "EngineConfig");
        assert!(parsed["properties"]["layouts"].is_object());
    }

    #[test]
    fn test_schema_defines_layout_variants() {
        let schema_json = generate_schema_json();
        assert!(schema_json.contains("LayoutConfig"));
        for tag in ["max", "stack", "tile", "ratio-tile", "slice"] {
            assert!(schema_json.contains(&format!("\"{tag}\"")), "missing {tag}");
        }
    }

    #[test]
    fn test_schema_nests_layouts_inside_slice_fallback() {
        let parsed: serde_json::Value = serde_json::from_str(&generate_schema_json()).unwrap();
        let defs = &parsed["$defs"];
        assert!(defs["LayoutConfig"].is_object());

        let slice = &defs["SliceConfig"];
        let fallback = &slice["properties"]["fallback"];
        assert!(fallback.is_object());
        assert!(fallback.to_string().contains("#/$defs/LayoutConfig"));

        let required: Vec<&str> = slice["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        assert!(required.contains(&"name"));
        assert!(!required.contains(&"fallback"));
    }

    #[test]
    fn test_schema_json_is_pretty_printed() {
        assert!(generate_schema_json().contains('\n'));
    }
}
