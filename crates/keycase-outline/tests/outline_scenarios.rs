use approx::assert_abs_diff_eq;
use keycase_config::{CaseStyle, ProfileRegistry};
use keycase_core::{Bounds, KeyPlacement};
use keycase_geometry::offset::offset_region;
use keycase_geometry::primitives::rectangle_from_bounds;
use keycase_geometry::Region;
use keycase_layout::KeyLayout;
use keycase_outline::{
    case_outlines, extreme_pole_counts, trace_outline, Face, OutlineError, OutlineParams,
};
use proptest::prelude::*;
use serde_json::json;

fn grid(rows: usize, cols: usize, pitch: f64) -> Vec<KeyPlacement> {
    (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| KeyPlacement::new(c as f64 * pitch, r as f64 * pitch, 0.0))
        })
        .collect()
}

fn assert_bounds_eq(a: &Bounds, b: &Bounds) {
    assert_abs_diff_eq!(a.min_x, b.min_x, epsilon = 1e-6);
    assert_abs_diff_eq!(a.max_x, b.max_x, epsilon = 1e-6);
    assert_abs_diff_eq!(a.min_y, b.min_y, epsilon = 1e-6);
    assert_abs_diff_eq!(a.max_y, b.max_y, epsilon = 1e-6);
}

#[test]
fn square_grid_traces_the_inflated_bounding_box() {
    let keys = grid(2, 2, 19.0);
    let outline = trace_outline(&keys, &OutlineParams::new(18.0, 2.0)).unwrap();

    let bbox = Bounds {
        min_x: -9.0,
        max_x: 28.0,
        min_y: -9.0,
        max_y: 28.0,
    };
    let expected = offset_region(&Region::from_pos(vec![rectangle_from_bounds(&bbox)]), 2.0);

    assert_eq!(outline.pos.len(), 1);
    assert!(outline.neg.is_empty());
    assert_bounds_eq(&outline.extents().unwrap(), &expected.extents().unwrap());
    assert_abs_diff_eq!(outline.area(), expected.area(), epsilon = 1e-4);
    assert_abs_diff_eq!(
        outline.area(),
        37.0 * 37.0 + 4.0 * 37.0 * 2.0 + std::f64::consts::PI * 4.0,
        epsilon = 1e-4
    );
}

#[test]
fn corner_radius_adds_to_the_extent() {
    let keys = grid(2, 3, 19.0);
    let plain = trace_outline(&keys, &OutlineParams::new(18.0, 2.0)).unwrap();
    let rounded =
        trace_outline(&keys, &OutlineParams::new(18.0, 2.0).with_corner_radius(1.5)).unwrap();
    let (a, b) = (plain.extents().unwrap(), rounded.extents().unwrap());
    assert_abs_diff_eq!(b.width() - a.width(), 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(b.height() - a.height(), 3.0, epsilon = 1e-6);
}

#[test]
fn negative_expansion_shrinks_inside_the_keys() {
    let keys = grid(3, 3, 19.0);
    let outline = trace_outline(&keys, &OutlineParams::new(18.0, -1.0)).unwrap();
    let b = outline.extents().unwrap();
    assert_abs_diff_eq!(b.min_x, -8.0, epsilon = 1e-6);
    assert_abs_diff_eq!(b.max_y, 46.0, epsilon = 1e-6);
}

#[test]
fn refining_sections_never_loses_extremes() {
    // Second row shifted right: coarse sections see one left edge, finer ones see both.
    let keys = vec![
        KeyPlacement::new(0.0, 0.0, 0.0),
        KeyPlacement::new(5.0, 19.0, 0.0),
    ];
    let counts: Vec<_> = [38.0, 19.0, 9.5]
        .into_iter()
        .map(|size| {
            extreme_pole_counts(&keys, &OutlineParams::new(18.0, 0.0).with_sections(size, 0.0))
                .unwrap()
        })
        .collect();

    assert_eq!(counts[0].get(Face::Left), 2);
    assert_eq!(counts[1].get(Face::Left), 4);
    for pair in counts.windows(2) {
        for face in Face::ALL {
            assert!(
                pair[1].get(face) >= pair[0].get(face),
                "{face:?}: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn rotated_thumb_cluster_traces_a_simple_outline() {
    let config = ProfileRegistry::builtin().resolve("split-36", None).unwrap();
    let layout = KeyLayout::from_config(&config).unwrap();
    let outline = trace_outline(
        &layout.placements,
        &OutlineParams::new(config.footprint(), 8.0).with_corner_radius(1.0),
    )
    .unwrap();
    assert_eq!(outline.pos.len(), 1);
    assert!(outline.is_simple());

    // Every key center lies inside the outline's extents.
    let b = outline.extents().unwrap();
    for k in &layout.placements {
        assert!(k.pos.x > b.min_x && k.pos.x < b.max_x);
        assert!(k.pos.y > b.min_y && k.pos.y < b.max_y);
    }
}

#[test]
fn organic_case_outlines_nest() {
    let config = ProfileRegistry::builtin().resolve("corne", None).unwrap();
    assert_eq!(config.enclosure.case_style, CaseStyle::Organic);
    let layout = KeyLayout::from_config(&config).unwrap();
    let outlines = case_outlines(&config, &layout).unwrap();

    let outer = outlines.outer.area();
    let plate = outlines.plate.area();
    let cavity = outlines.cavity.area();
    assert!(outer > plate && plate > cavity && cavity > 0.0);

    let (o, p) = (
        outlines.outer.extents().unwrap(),
        outlines.plate.extents().unwrap(),
    );
    assert_abs_diff_eq!(p.min_x - o.min_x, 1.5, epsilon = 1e-6);
    assert!(outlines.wall_band().area() > 0.0);
}

#[test]
fn rectangular_case_outlines_follow_the_plate() {
    let config = ProfileRegistry::builtin().resolve("3x3", None).unwrap();
    let layout = KeyLayout::from_config(&config).unwrap();
    let outlines = case_outlines(&config, &layout).unwrap();

    let wall = config.enclosure.walls.thickness;
    let (w, h) = (layout.plate.plate_width, layout.plate.plate_height);
    let outer = outlines.outer.extents().unwrap();
    assert_abs_diff_eq!(outer.min_x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(outer.max_x, w + 2.0 * wall, epsilon = 1e-9);
    assert_abs_diff_eq!(outer.max_y, h + 2.0 * wall, epsilon = 1e-9);

    let plate = outlines.plate.extents().unwrap();
    assert_abs_diff_eq!(plate.min_x, wall, epsilon = 1e-9);
    assert_abs_diff_eq!(plate.width(), w, epsilon = 1e-9);

    let r = config.enclosure.corner_radius;
    let corner_loss = (4.0 - std::f64::consts::PI) * r * r;
    assert_abs_diff_eq!(outlines.plate.area(), w * h - corner_loss, epsilon = 1e-6);

    // Keys sit inside the plate with the configured margin.
    assert_abs_diff_eq!(layout.bounds.min_x - plate.min_x, 10.0, epsilon = 1e-9);
}

#[test]
fn organic_override_on_a_rectangular_profile() {
    let over = json!({"enclosure": {"caseStyle": "organic", "organicCornerRadius": 2.0}});
    let config = ProfileRegistry::builtin()
        .resolve("sweep", Some(&over))
        .unwrap();
    let layout = KeyLayout::from_config(&config).unwrap();
    let outlines = case_outlines(&config, &layout).unwrap();
    assert!(outlines.outer.is_simple());
    assert!(outlines.cavity.area() > 0.0);
}

#[test]
fn empty_layout_has_no_poles() {
    assert!(matches!(
        extreme_pole_counts(&[], &OutlineParams::new(18.0, 0.0)),
        Err(OutlineError::NoPoles)
    ));
}

#[test]
fn shrinking_past_the_key_leaves_nothing() {
    let keys = [KeyPlacement::new(0.0, 0.0, 0.0)];
    assert!(matches!(
        trace_outline(&keys, &OutlineParams::new(10.0, -20.0)),
        Err(OutlineError::EmptyOutline { .. })
    ));
}

proptest! {
    #[test]
    fn uniform_grid_counts_every_edge_corner(
        rows in 1usize..5,
        cols in 1usize..5,
        pitch in 18.0f64..22.0,
        footprint in 14.0f64..18.0,
        fraction in 0.1f64..1.0,
    ) {
        let keys = grid(rows, cols, pitch);
        let params = OutlineParams::new(footprint, 0.0).with_sections(pitch * fraction, 0.0);
        let counts = extreme_pole_counts(&keys, &params).unwrap();
        prop_assert_eq!(counts.left, 2 * rows);
        prop_assert_eq!(counts.right, 2 * rows);
        prop_assert_eq!(counts.top, 2 * cols);
        prop_assert_eq!(counts.bottom, 2 * cols);
    }
}
