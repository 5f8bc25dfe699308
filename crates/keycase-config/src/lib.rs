//! Keyboard configuration: layered YAML defaults, switch specs and built-in profiles resolved
//! into one typed [`KeyboardConfig`].

mod error;
pub mod merge;
mod model;
pub mod profiles;
mod resolve;
pub mod switches;

pub use error::ConfigError;
pub use model::{
    BuildSide, CaseStyle, CutoutConfig, EnclosureConfig, EnclosurePlateConfig, KeyboardConfig,
    LayoutConfig, LayoutMode, MatrixConfig, OutputConfig, SwitchConfig, SwitchPlateConfig,
    ThumbClusterConfig, ThumbConfig, WallsConfig,
};
pub use profiles::{ProfileRegistry, DEFAULT_PROFILE};
pub use resolve::{parse_yaml, resolve_layers};
pub use switches::SwitchType;
