use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration does not match the expected shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown profile \"{name}\" (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("unknown switch type \"{0}\" (expected choc or mx)")]
    UnknownSwitch(String),

    #[error("configuration root must be a mapping")]
    NotAMapping,

    #[error("invalid configuration:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}
