use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SwitchType {
    /// Kailh Choc low profile.
    #[default]
    Choc,
    /// Cherry MX compatible.
    Mx,
}

impl SwitchType {
    pub const ALL: [SwitchType; 2] = [SwitchType::Choc, SwitchType::Mx];

    pub fn as_str(self) -> &'static str {
        match self {
            SwitchType::Choc => "choc",
            SwitchType::Mx => "mx",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SwitchType::Choc => "Kailh Choc Low Profile",
            SwitchType::Mx => "Cherry MX Compatible",
        }
    }

    /// Configuration layer applied between the base defaults and the profile.
    pub fn layer(self) -> Value {
        match self {
            SwitchType::Choc => json!({
                "switch": {
                    "cutout": {"inner": 13.8, "outer": 15.0, "height": 3.0, "startHeight": 2.2},
                    "plate": {"thickness": 1.6, "totalThickness": 8.0}
                },
                "layout": {"matrix": {"spacing": 18.0}}
            }),
            SwitchType::Mx => json!({
                "switch": {
                    "cutout": {"inner": 13.9, "outer": 15.9, "height": 5.0, "startHeight": 1.5},
                    "plate": {"thickness": 4.1, "totalThickness": 7.1}
                },
                "layout": {"matrix": {"spacing": 18.6}}
            }),
        }
    }
}

impl fmt::Display for SwitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownSwitch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MX".parse::<SwitchType>().unwrap(), SwitchType::Mx);
        assert!(matches!(
            "alps".parse::<SwitchType>(),
            Err(ConfigError::UnknownSwitch(_))
        ));
    }

    #[test]
    fn layers_carry_spacing() {
        assert_eq!(SwitchType::Mx.layer()["layout"]["matrix"]["spacing"], 18.6);
        assert_eq!(SwitchType::Choc.layer()["switch"]["cutout"]["outer"], 15.0);
    }
}
