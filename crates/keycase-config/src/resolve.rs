use serde_json::{Map, Value};

use crate::merge::merge_layers;
use crate::switches::SwitchType;
use crate::{ConfigError, KeyboardConfig};

const BASE_DEFAULTS: &str = include_str!("../defaults.yaml");

/// Parse a YAML document into a configuration layer. An empty document is an empty layer.
pub fn parse_yaml(text: &str) -> Result<Value, ConfigError> {
    match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Ok(Value::Object(Map::new())),
        v @ Value::Object(_) => Ok(v),
        _ => Err(ConfigError::NotAMapping),
    }
}

/// Resolve `base ← switch spec ← profile ← overrides` into a validated configuration.
///
/// The switch spec layer is picked by the effective `switch.type`, so an override can switch
/// a profile from choc to mx and pick up the mx spacing and cutout.
pub fn resolve_layers(
    profile: &Value,
    overrides: Option<&Value>,
) -> Result<KeyboardConfig, ConfigError> {
    let base = parse_yaml(BASE_DEFAULTS)?;
    let overrides = overrides.cloned().unwrap_or(Value::Null);

    let switch_type = effective_switch_type(&[base.clone(), profile.clone(), overrides.clone()])?;
    let merged = merge_layers(&[base, switch_type.layer(), profile.clone(), overrides]);

    let config: KeyboardConfig = serde_json::from_value(merged)?;
    config.validate()?;

    tracing::debug!(
        switch = %config.switch.kind,
        rows = config.layout.matrix.row_layout.len(),
        thumb_keys = config.thumb.cluster.keys,
        "resolved keyboard configuration"
    );
    Ok(config)
}

fn effective_switch_type(layers: &[Value]) -> Result<SwitchType, ConfigError> {
    let merged = merge_layers(layers);
    match merged.pointer("/switch/type") {
        Some(Value::String(s)) => s.parse(),
        Some(Value::Null) | None => Ok(SwitchType::default()),
        Some(other) => Err(ConfigError::UnknownSwitch(other.to_string())),
    }
}
