use indexmap::IndexMap;
use serde_json::Value;

use crate::resolve::{parse_yaml, resolve_layers};
use crate::{ConfigError, KeyboardConfig};

/// Profile the CLI builds when none is named.
pub const DEFAULT_PROFILE: &str = "split-36";

const BUILTIN: &[(&str, &str)] = &[
    ("3x3", include_str!("../profiles/3x3.yaml")),
    ("corne", include_str!("../profiles/corne.yaml")),
    ("macropad-3x3", include_str!("../profiles/macropad-3x3.yaml")),
    ("planck", include_str!("../profiles/planck.yaml")),
    ("split-36", include_str!("../profiles/split-36.yaml")),
    ("sweep", include_str!("../profiles/sweep.yaml")),
    ("test-single-choc", include_str!("../profiles/test-single-choc.yaml")),
    ("test-single-mx", include_str!("../profiles/test-single-mx.yaml")),
];

/// Named configuration profiles, in listing order.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, String>,
}

impl ProfileRegistry {
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Register (or replace) a profile from YAML source.
    pub fn insert(&mut self, name: impl Into<String>, yaml: impl Into<String>) {
        self.profiles.insert(name.into(), yaml.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// The raw profile layer.
    pub fn get(&self, name: &str) -> Result<Value, ConfigError> {
        let text = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })?;
        parse_yaml(text)
    }

    /// Resolve profile `name` with optional user overrides on top.
    pub fn resolve(
        &self,
        name: &str,
        overrides: Option<&Value>,
    ) -> Result<KeyboardConfig, ConfigError> {
        let profile = self.get(name)?;
        tracing::debug!(profile = name, "resolving profile");
        resolve_layers(&profile, overrides)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
