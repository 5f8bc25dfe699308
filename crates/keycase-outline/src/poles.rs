use std::collections::BTreeMap;

use keycase_core::rotation::rotate_vec;
use keycase_core::{Bounds, KeyPlacement, Point2D};

/// Tolerance for poles tying on a face's outward axis.
const TIE_EPSILON: f64 = 0.001;

/// One side of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 4] = [Face::Left, Face::Right, Face::Top, Face::Bottom];

    /// Order in which faces are walked around the outline.
    pub const PERIMETER: [Face; 4] = [Face::Left, Face::Top, Face::Right, Face::Bottom];

    /// Left/right faces bin along Y; top/bottom along X.
    fn bins_along_y(self) -> bool {
        matches!(self, Face::Left | Face::Right)
    }

    /// Coordinate used for binning (the axis the face runs along).
    fn along(self, p: Point2D) -> f64 {
        if self.bins_along_y() {
            p.y
        } else {
            p.x
        }
    }

    /// Coordinate the face pushes outward on.
    fn across(self, p: Point2D) -> f64 {
        if self.bins_along_y() {
            p.x
        } else {
            p.y
        }
    }

    /// Whether this face wants the largest `across` value.
    fn wants_max(self) -> bool {
        matches!(self, Face::Right | Face::Top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    fn offset(self, half: f64) -> [f64; 2] {
        match self {
            Corner::TopLeft => [-half, half],
            Corner::TopRight => [half, half],
            Corner::BottomRight => [half, -half],
            Corner::BottomLeft => [-half, -half],
        }
    }
}

/// A rotated key corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pole {
    pub pos: Point2D,
    pub key_index: usize,
    pub corner: Corner,
}

/// Four corner poles per key, in placement order.
pub(crate) fn generate_poles(placements: &[KeyPlacement], footprint: f64) -> Vec<Pole> {
    let half = footprint / 2.0;
    placements
        .iter()
        .enumerate()
        .flat_map(|(key_index, k)| {
            Corner::ALL.into_iter().map(move |corner| {
                let r = rotate_vec(corner.offset(half), k.rot);
                Pole {
                    pos: k.pos.offset(r[0], r[1]),
                    key_index,
                    corner,
                }
            })
        })
        .collect()
}

pub(crate) fn pole_bounds(poles: &[Pole]) -> Option<Bounds> {
    Bounds::of_points(poles.iter().map(|p| p.pos))
}

/// Extreme poles of `face`, sorted along the face within each bin.
///
/// The face's running axis is cut into bins of `section_size`, the first one starting at
/// `section_offset mod section_size` past the minimum. Poles before the first bin are ignored
/// and the last bin is closed so a pole at the maximum still counts.
pub(crate) fn extreme_poles(
    poles: &[Pole],
    bounds: &Bounds,
    face: Face,
    section_size: f64,
    section_offset: f64,
) -> Vec<Pole> {
    let (min, max) = if face.bins_along_y() {
        (bounds.min_y, bounds.max_y)
    } else {
        (bounds.min_x, bounds.max_x)
    };
    let start = min + section_offset.rem_euclid(section_size);
    let span = max - start;
    if span < 0.0 {
        return Vec::new();
    }
    let last_bin = (span / section_size).ceil().max(1.0) - 1.0;

    // Only populated bins are stored. Keys are the bits of a non-negative bin number, which
    // order the same as the number itself and never saturate like an integer cast.
    let mut bins: BTreeMap<u64, Vec<Pole>> = BTreeMap::new();
    for p in poles {
        let t = face.along(p.pos) - start;
        if t < 0.0 {
            continue;
        }
        let idx = (t / section_size).floor().min(last_bin);
        bins.entry(idx.to_bits()).or_default().push(*p);
    }

    let mut out = Vec::new();
    for bin in bins.values() {
        let target = bin
            .iter()
            .map(|p| face.across(p.pos))
            .fold(None, |acc: Option<f64>, v| {
                Some(match acc {
                    None => v,
                    Some(a) if face.wants_max() => a.max(v),
                    Some(a) => a.min(v),
                })
            });
        let Some(target) = target else {
            continue;
        };
        let mut extremes: Vec<Pole> = bin
            .iter()
            .copied()
            .filter(|p| (face.across(p.pos) - target).abs() < TIE_EPSILON)
            .collect();
        extremes.sort_by(|a, b| face.along(a.pos).total_cmp(&face.along(b.pos)));
        out.extend(extremes);
    }
    out
}

/// Number of extreme poles per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceCounts {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl FaceCounts {
    pub fn get(&self, face: Face) -> usize {
        match face {
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }

    pub fn total(&self) -> usize {
        self.left + self.right + self.top + self.bottom
    }
}
