use std::fmt;

use keycase_core::{EdgeMargin, PerKeyThumb, Point2D, RowLayoutItem, ThumbClusterSpec};
use serde::{Deserialize, Serialize};

use crate::switches::SwitchType;
use crate::ConfigError;

/// Fully resolved keyboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardConfig {
    pub layout: LayoutConfig,
    pub switch: SwitchConfig,
    pub thumb: ThumbConfig,
    pub enclosure: EnclosureConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Split,
    Unibody,
    Single,
}

/// Which half a split build produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildSide {
    Left,
    #[default]
    Right,
    Both,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    #[default]
    Rectangular,
    Organic,
}

macro_rules! lowercase_display {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $name,)+
                })
            }
        }
    };
}

lowercase_display!(LayoutMode { Split => "split", Unibody => "unibody", Single => "single" });
lowercase_display!(BuildSide { Left => "left", Right => "right", Both => "both" });
lowercase_display!(CaseStyle { Rectangular => "rectangular", Organic => "organic" });

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default)]
    pub mode: LayoutMode,
    #[serde(default)]
    pub side: BuildSide,
    pub center_gap: f64,
    pub matrix: MatrixConfig,
    pub edge_margin: EdgeMargin,
    #[serde(default)]
    pub base_degrees: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatrixConfig {
    pub spacing: f64,
    pub row_layout: Vec<RowLayoutItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchConfig {
    #[serde(rename = "type")]
    pub kind: SwitchType,
    pub cutout: CutoutConfig,
    pub plate: SwitchPlateConfig,
}

/// Switch cutout; `outer` is the square key footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CutoutConfig {
    pub inner: f64,
    pub outer: f64,
    pub height: f64,
    pub start_height: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPlateConfig {
    pub thickness: f64,
    pub total_thickness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbConfig {
    pub cluster: ThumbClusterConfig,
    pub offset: Point2D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_key: Option<PerKeyThumb>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbClusterConfig {
    pub keys: usize,
    pub spacing: f64,
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureConfig {
    pub plate: EnclosurePlateConfig,
    pub walls: WallsConfig,
    #[serde(default)]
    pub case_style: CaseStyle,
    pub corner_radius: f64,
    #[serde(default)]
    pub organic_corner_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_size: Option<f64>,
    #[serde(default)]
    pub section_offset: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnclosurePlateConfig {
    pub top_thickness: f64,
    pub bottom_thickness: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WallsConfig {
    pub thickness: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub resolution: u32,
}

impl KeyboardConfig {
    /// Square key footprint (the switch cutout's outer size).
    pub fn footprint(&self) -> f64 {
        self.switch.cutout.outer
    }

    /// Whether the build produces the mirrored half.
    pub fn mirrors(&self) -> bool {
        match self.layout.mode {
            LayoutMode::Single => false,
            LayoutMode::Unibody => true,
            LayoutMode::Split => self.layout.side != BuildSide::Right,
        }
    }

    /// Whether the designed (unmirrored) half is kept.
    pub fn keeps_source_half(&self) -> bool {
        !(self.layout.mode == LayoutMode::Split && self.layout.side == BuildSide::Left)
    }

    pub fn thumb_spec(&self) -> ThumbClusterSpec {
        let cluster = &self.thumb.cluster;
        if let Some(per_key) = &self.thumb.per_key {
            for (what, len) in [
                ("rotations", per_key.rotations.len()),
                ("offsets", per_key.offsets.len()),
            ] {
                if len < cluster.keys {
                    tracing::warn!(
                        keys = cluster.keys,
                        len,
                        "thumb.perKey.{what} is shorter than the key count; missing entries are zero"
                    );
                }
            }
        }
        ThumbClusterSpec {
            count: cluster.keys,
            spacing: cluster.spacing,
            rotation: cluster.rotation,
            base_offset: self.thumb.offset,
            per_key: self.thumb.per_key.clone(),
        }
    }

    /// Key count per half: matrix keys plus thumb keys.
    pub fn keys_per_half(&self) -> usize {
        let matrix: usize = self.layout.matrix.row_layout.iter().map(|r| r.length).sum();
        matrix + self.thumb.cluster.keys
    }

    /// Total key count of the build.
    pub fn total_keys(&self) -> usize {
        let halves = usize::from(self.mirrors()) + usize::from(self.keeps_source_half());
        self.keys_per_half() * halves
    }

    /// `start:length` per row, e.g. `{0:3,0:3}`.
    pub fn row_pattern(&self) -> String {
        let rows: Vec<String> = self
            .layout
            .matrix
            .row_layout
            .iter()
            .map(|r| format!("{}:{}", r.start, r.length))
            .collect();
        format!("{{{}}}", rows.join(","))
    }

    /// Organic outline sampling section; defaults to half the footprint.
    pub fn section_size(&self) -> f64 {
        self.enclosure
            .section_size
            .unwrap_or_else(|| self.footprint() / 2.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        let rows = &self.layout.matrix.row_layout;
        if rows.is_empty() {
            problems.push("layout.matrix.rowLayout must contain at least one row".to_string());
        }
        for (i, row) in rows.iter().enumerate() {
            if row.length == 0 {
                problems.push(format!("layout.matrix.rowLayout[{i}].length must be positive"));
            }
        }
        if !(self.layout.matrix.spacing > 0.0) {
            problems.push("layout.matrix.spacing must be positive".to_string());
        }
        if !(self.footprint() > 0.0) {
            problems.push("switch.cutout.outer must be positive".to_string());
        }
        if self.switch.plate.thickness >= self.switch.plate.total_thickness {
            problems.push(format!(
                "switch.plate.thickness ({}) must be below switch.plate.totalThickness ({})",
                self.switch.plate.thickness, self.switch.plate.total_thickness
            ));
        }
        if self.thumb.cluster.keys > 0 && !(self.thumb.cluster.spacing > 0.0) {
            problems.push("thumb.cluster.spacing must be positive".to_string());
        }
        if let Some(size) = self.enclosure.section_size {
            if !(size > 0.0) {
                problems.push("enclosure.sectionSize must be positive".to_string());
            }
        }
        if self.enclosure.walls.thickness < 0.0 {
            problems.push("enclosure.walls.thickness must not be negative".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}
