use keycase_config::KeyboardConfig;
use keycase_core::rotation::half_index;
use keycase_core::{Bounds, KeyPlacement, Point2D, RowLayoutItem, ThumbClusterSpec};

use crate::LayoutError;

/// Which halves of a mirrored build are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halves {
    /// The designed half only; no mirroring.
    Source,
    /// Only the mirrored copy.
    Mirrored,
    /// Mirrored copy first, then the designed half.
    Both,
}

/// Everything the builder needs, detached from the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub rows: Vec<RowLayoutItem>,
    pub thumb: Option<ThumbClusterSpec>,
    pub pitch: f64,
    /// Global rotation in degrees, about the origin.
    pub rotation: f64,
    pub halves: Halves,
    pub center_gap: f64,
    pub footprint: f64,
    /// Where the minimum corner of the footprint bounds ends up.
    pub origin: Point2D,
}

impl LayoutSpec {
    pub fn from_config(config: &KeyboardConfig) -> Self {
        let halves = match (config.mirrors(), config.keeps_source_half()) {
            (false, _) => Halves::Source,
            (true, false) => Halves::Mirrored,
            (true, true) => Halves::Both,
        };
        let thumb = config.thumb_spec();
        let margin = config.layout.edge_margin;
        let wall = config.enclosure.walls.thickness;

        Self {
            rows: config.layout.matrix.row_layout.clone(),
            thumb: (thumb.count > 0).then_some(thumb),
            pitch: config.layout.matrix.spacing,
            rotation: config.layout.base_degrees,
            halves,
            center_gap: config.layout.center_gap,
            footprint: config.footprint(),
            origin: Point2D::new(margin.left + wall, margin.bottom + wall),
        }
    }
}

/// Build the ordered placement list: matrix keys row by row, then thumb keys; mirrored copies
/// come before the designed half.
pub fn build_layout(spec: &LayoutSpec) -> Result<Vec<KeyPlacement>, LayoutError> {
    if spec.rows.is_empty() {
        return Err(LayoutError::EmptyRowLayout);
    }
    if !(spec.pitch > 0.0) {
        return Err(LayoutError::NonPositivePitch(spec.pitch));
    }
    if !(spec.footprint > 0.0) {
        return Err(LayoutError::NonPositiveFootprint(spec.footprint));
    }

    let mut keys = matrix_keys(&spec.rows, spec.pitch);
    let matrix_count = keys.len();

    if let Some(thumb) = &spec.thumb {
        let anchor = thumb_anchor(&spec.rows, spec.pitch, thumb.base_offset);
        keys.extend(thumb_keys(thumb, anchor));
    }

    rotate_all(&mut keys, spec.rotation);
    let keys = mirror_halves(&keys, spec.center_gap, spec.footprint, spec.halves);
    let keys = anchor_to(&keys, spec.footprint, spec.origin);

    tracing::debug!(
        matrix = matrix_count,
        thumb = spec.thumb.as_ref().map_or(0, |t| t.count),
        total = keys.len(),
        halves = ?spec.halves,
        "built key layout"
    );
    Ok(keys)
}

/// Row `i` places key `k` at `((start + k) * pitch + offset, i * pitch)`.
pub fn matrix_keys(rows: &[RowLayoutItem], pitch: f64) -> Vec<KeyPlacement> {
    rows.iter()
        .enumerate()
        .flat_map(|(i, row)| {
            let y = i as f64 * pitch;
            row.columns()
                .map(move |col| KeyPlacement::new(col as f64 * pitch + row.offset, y, 0.0))
        })
        .collect()
}

/// Thumb reference point: `base_offset` plus the position of every anchor key.
///
/// Anchor keys of several rows are summed, not averaged.
pub fn thumb_anchor(rows: &[RowLayoutItem], pitch: f64, base_offset: Point2D) -> Point2D {
    let mut acc = Point2D::origin();
    let mut matches = 0usize;
    for (i, row) in rows.iter().enumerate() {
        let Some(anchor_col) = row.thumb_anchor else {
            continue;
        };
        for col in row.columns().filter(|&c| c == anchor_col) {
            acc = acc.offset(col as f64 * pitch + row.offset, i as f64 * pitch);
            matches += 1;
        }
    }
    if matches > 1 {
        tracing::warn!(
            matches,
            "several rows declare a thumb anchor; their positions are summed"
        );
    }
    base_offset + acc
}

/// Thumb keys stacked along Y around `anchor`, then rotated about it by the cluster rotation.
pub fn thumb_keys(spec: &ThumbClusterSpec, anchor: Point2D) -> Vec<KeyPlacement> {
    let center = half_index(spec.count);
    (0..spec.count)
        .map(|k| {
            let offset = spec.key_offset(k);
            let local = anchor.offset(
                offset.x,
                (center - k as f64) * spec.spacing + offset.y,
            );
            KeyPlacement {
                pos: local.rotated_about(anchor, spec.rotation),
                rot: spec.key_rotation(k) + spec.rotation,
            }
        })
        .collect()
}

/// Rotate every key about the origin by `degrees`.
pub fn rotate_all(keys: &mut [KeyPlacement], degrees: f64) {
    if degrees == 0.0 {
        return;
    }
    for k in keys.iter_mut() {
        *k = k.rotated_about(Point2D::origin(), degrees);
    }
}

/// Split the layout into halves across a horizontal axis.
///
/// With `cy` the center of the key positions and `h` half their span plus half a footprint, the
/// mirrored half lands at `-(y - cy) - gap/2 - h` and the designed half at
/// `(y - cy) + gap/2 + h`, so unrotated footprints of the two halves are `gap` apart.
pub fn mirror_halves(
    keys: &[KeyPlacement],
    gap: f64,
    footprint: f64,
    halves: Halves,
) -> Vec<KeyPlacement> {
    if halves == Halves::Source {
        return keys.to_vec();
    }
    let Some(b) = Bounds::of_points(keys.iter().map(|k| k.pos)) else {
        return Vec::new();
    };
    let cy = (b.max_y + b.min_y) / 2.0;
    let h = b.height() / 2.0 + footprint / 2.0;
    let g = gap / 2.0;

    // -(y - cy) - g - h is a reflection about y = (cy - g - h) / 2.
    let axis = (cy - g - h) / 2.0;
    let mirrored = keys.iter().map(|k| k.mirrored_y(axis));
    let source = keys.iter().map(|k| k.translated(0.0, g + h - cy));

    match halves {
        Halves::Mirrored => mirrored.collect(),
        _ => mirrored.chain(source).collect(),
    }
}

/// Translate so the rotation-aware footprint bounds start at `origin`.
pub fn anchor_to(keys: &[KeyPlacement], footprint: f64, origin: Point2D) -> Vec<KeyPlacement> {
    let Some(b) = Bounds::of_footprints(keys, footprint) else {
        return Vec::new();
    };
    let min = b.min_corner();
    let dx = origin.x - min.x;
    let dy = origin.y - min.y;
    keys.iter().map(|k| k.translated(dx, dy)).collect()
}
