use k8s_openapi::api::core::v1::ResourceRequirements;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Rewrites numeric quantities (`cpu: 2`) under `limits` and `requests` as
/// strings, the only form `Quantity` decodes.
pub fn normalize_quantities(resources: &mut Value) {
    for key in ["limits", "requests"] {
        if let Some(Value::Object(quantities)) = resources.get_mut(key) {
            for quantity in quantities.values_mut() {
                let normalized = match quantity {
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                if let Some(normalized) = normalized {
                    *quantity = Value::String(normalized);
                }
            }
        }
    }
}

pub fn deserialize_resources<'de, D>(deserializer: D) -> Result<ResourceRequirements, D::Error>
where
    D: Deserializer<'de>,
{
    let mut value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(ResourceRequirements::default());
    }
    normalize_quantities(&mut value);
    serde_json::from_value(value).map_err(serde::de::Error::custom)
}
