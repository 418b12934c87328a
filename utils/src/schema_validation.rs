use anyhow::{anyhow, bail, Result};
use jsonschema::{Draft, JSONSchema};
use log::{debug, error};

/// Validates a manifest against a JSON schema, e.g. the `openAPIV3Schema` of a CRD.
pub fn validate_manifest_schema(
    manifest: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<()> {
    let errors = schema_errors(manifest, schema)?;
    if errors.is_empty() {
        debug!("Schema validation succeeded");
        return Ok(());
    }
    for e in &errors {
        error!("Schema validation error: {}", e);
    }
    bail!("Schema validation failed: {}", errors.join("; "))
}

/// Every violation as `<instance path>: <message>`; empty when the manifest is valid.
pub fn schema_errors(manifest: &serde_json::Value, schema: &serde_json::Value) -> Result<Vec<String>> {
    let compiled_schema = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|e| anyhow!("Invalid JSON Schema: {}", e))?;

    let errors = match compiled_schema.validate(manifest) {
        Ok(()) => vec![],
        Err(errors) => errors
            .map(|e| format!("{}: {}", e.instance_path, e))
            .collect(),
    };
    Ok(errors)
}

/// Rewrites the OpenAPI v3 extensions Draft 7 does not know into plain JSON
/// schema: `nullable: true` admits `null`, `x-kubernetes-int-or-string`
/// admits integers and strings.
pub fn openapi_to_json_schema(schema: &serde_json::Value) -> serde_json::Value {
    let map = match schema {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Array(items) => {
            return serde_json::Value::Array(items.iter().map(openapi_to_json_schema).collect())
        }
        other => return other.clone(),
    };

    let mut converted = serde_json::Map::new();
    for (key, value) in map {
        let value = match key.as_str() {
            // literal instance data, not subschemas
            "default" | "enum" | "example" => value.clone(),
            "properties" | "patternProperties" | "definitions" => match value {
                serde_json::Value::Object(named) => serde_json::Value::Object(
                    named
                        .iter()
                        .map(|(name, subschema)| (name.clone(), openapi_to_json_schema(subschema)))
                        .collect(),
                ),
                other => other.clone(),
            },
            _ => openapi_to_json_schema(value),
        };
        converted.insert(key.clone(), value);
    }

    if converted.get("x-kubernetes-int-or-string") == Some(&serde_json::Value::Bool(true)) {
        converted.insert("type".to_string(), serde_json::json!(["integer", "string"]));
    }

    if converted.get("nullable") == Some(&serde_json::Value::Bool(true)) {
        let nullable_type = match converted.get("type") {
            Some(serde_json::Value::String(t)) => Some(serde_json::json!([t, "null"])),
            Some(serde_json::Value::Array(types)) => {
                let mut types = types.clone();
                types.push(serde_json::json!("null"));
                Some(serde_json::Value::Array(types))
            }
            _ => None,
        };
        if let Some(nullable_type) = nullable_type {
            converted.insert("type".to_string(), nullable_type);
        }
    }

    serde_json::Value::Object(converted)
}

pub fn yaml_to_json(yaml: &str) -> Result<serde_json::Value> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "imageLabels": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "value": {"type": "string"}
                        },
                        "required": ["name"]
                    }
                }
            }
        })
    }

    #[test]
    fn test_valid_manifest() {
        let manifest = yaml_to_json("imageLabels:\n  - name: vendor\n    value: acme\n").unwrap();
        assert!(validate_manifest_schema(&manifest, &label_schema()).is_ok());
    }

    #[test]
    fn test_openapi_extensions_are_converted() {
        let schema = json!({
            "type": "object",
            "properties": {
                "forcePull": {"type": "boolean", "nullable": true},
                "cpu": {"x-kubernetes-int-or-string": true, "type": "string"},
                "labels": {"type": "array", "nullable": true, "default": [{"nullable": true}]},
                "default": {"type": "string", "nullable": true}
            }
        });
        let converted = openapi_to_json_schema(&schema);
        let properties = &converted["properties"];
        assert_eq!(properties["forcePull"]["type"], json!(["boolean", "null"]));
        assert_eq!(properties["cpu"]["type"], json!(["integer", "string"]));
        assert_eq!(properties["labels"]["type"], json!(["array", "null"]));
        assert_eq!(properties["labels"]["default"], json!([{"nullable": true}]));
        assert_eq!(properties["default"]["type"], json!(["string", "null"]));

        for manifest in [
            json!({"forcePull": null, "cpu": 2}),
            json!({"forcePull": true, "cpu": "500m"}),
        ] {
            assert!(validate_manifest_schema(&manifest, &converted).is_ok());
        }
        assert!(schema_errors(&json!({"forcePull": null}), &schema)
            .unwrap()
            .iter()
            .any(|e| e.starts_with("/forcePull")));
    }

    #[test]
    fn test_invalid_manifest_reports_path() {
        let manifest = json!({"imageLabels": [{"name": "vendor"}, {"value": "orphan"}]});
        let errors = schema_errors(&manifest, &label_schema()).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("/imageLabels/1"));
        assert!(validate_manifest_schema(&manifest, &label_schema()).is_err());
    }
}
