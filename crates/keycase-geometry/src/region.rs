use cavalier_contours::polyline::internal::pline_intersects::all_self_intersects_as_basic;
use cavalier_contours::polyline::{
    BooleanOp, BooleanResultInfo, PlineOrientation, PlineSource, PlineSourceMut, Polyline,
};
use keycase_core::Bounds;

const SELF_INTERSECT_EPS: f64 = 1e-5;

/// A planar region: CCW outer loops (`pos`) with CW holes (`neg`).
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub pos: Vec<Polyline<f64>>,
    pub neg: Vec<Polyline<f64>>,
}

impl Region {
    pub fn from_pos(pos: Vec<Polyline<f64>>) -> Self {
        Self { pos, neg: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Union of all closed loops in `plines`. Holes enclosed by the union are kept in `neg`.
    pub fn union_all(plines: Vec<Polyline<f64>>) -> Self {
        let (pos, neg) = merge_pairwise(plines);
        let neg = merge_pairwise(neg).0;
        Self {
            pos: normalize_winding(pos, PlineOrientation::CounterClockwise),
            neg: normalize_winding(neg, PlineOrientation::Clockwise),
        }
    }

    /// Remove every cutter loop from this region.
    pub fn subtract_all(&mut self, cutters: &[Polyline<f64>]) {
        let mut new_pos: Vec<Polyline<f64>> = Vec::new();
        let mut new_neg: Vec<Polyline<f64>> = Vec::new();

        for loop_ in std::mem::take(&mut self.pos) {
            let mut remaining = vec![loop_];
            for cutter in cutters {
                let mut next: Vec<Polyline<f64>> = Vec::new();
                for piece in remaining {
                    let res = piece.boolean(cutter, BooleanOp::Not);
                    next.extend(res.pos_plines.into_iter().map(|p| p.pline));
                    new_neg.extend(res.neg_plines.into_iter().map(|p| p.pline));
                }
                remaining = next;
            }
            new_pos.extend(remaining);
        }

        self.pos = normalize_winding(
            merge_pairwise(new_pos).0,
            PlineOrientation::CounterClockwise,
        );
        self.neg.extend(normalize_winding(
            merge_pairwise(new_neg).0,
            PlineOrientation::Clockwise,
        ));
    }

    /// `self` minus `other`, holes of `other` included.
    pub fn difference(&self, other: &Region) -> Region {
        let mut out = self.clone();
        if !other.pos.is_empty() {
            out.subtract_all(&other.pos);
        }
        out
    }

    /// The region with every hole filled.
    pub fn filled(&self) -> Region {
        Region::from_pos(self.pos.clone())
    }

    /// Signed area: outer loops count positive, holes negative.
    pub fn area(&self) -> f64 {
        let outer: f64 = self.pos.iter().map(|p| p.area().abs()).sum();
        let holes: f64 = self.neg.iter().map(|p| p.area().abs()).sum();
        outer - holes
    }

    /// Exact extents including arc bulges.
    pub fn extents(&self) -> Option<Bounds> {
        let mut b = Bounds::empty();
        for pl in &self.pos {
            if let Some(aabb) = pl.extents() {
                b.include(aabb.min_x, aabb.min_y);
                b.include(aabb.max_x, aabb.max_y);
            }
        }
        (!b.is_empty()).then_some(b)
    }

    /// No loop crosses itself.
    pub fn is_simple(&self) -> bool {
        self.pos
            .iter()
            .chain(self.neg.iter())
            .all(|pl| pl.is_closed() && !self_intersects(pl))
    }
}

fn self_intersects(pl: &Polyline<f64>) -> bool {
    let index = pl.create_aabb_index();
    !all_self_intersects_as_basic(pl, &index, false, SELF_INTERSECT_EPS).is_empty()
}

/// Union loops pairwise until no pair overlaps; returns the merged loops and any holes the unions
/// produced. O(n^2) restarts, fine for the few dozen loops an outline is made of.
fn merge_pairwise(mut plines: Vec<Polyline<f64>>) -> (Vec<Polyline<f64>>, Vec<Polyline<f64>>) {
    plines.retain(|p| p.is_closed() && p.vertex_count() >= 2);
    let mut plines: Vec<Polyline<f64>> = plines.into_iter().map(simplify).collect();
    let mut holes: Vec<Polyline<f64>> = Vec::new();

    let mut i = 0usize;
    'outer: while i < plines.len() {
        for j in (i + 1)..plines.len() {
            let res = plines[i].boolean(&plines[j], BooleanOp::Or);
            match res.result_info {
                BooleanResultInfo::Disjoint | BooleanResultInfo::InvalidInput => continue,
                _ => {
                    let mut merged: Vec<Polyline<f64>> = res
                        .pos_plines
                        .into_iter()
                        .map(|p| simplify(p.pline))
                        .collect();
                    holes.extend(res.neg_plines.into_iter().map(|p| simplify(p.pline)));
                    // j > i, so removing j first keeps i valid.
                    plines.swap_remove(j);
                    plines.swap_remove(i);
                    plines.append(&mut merged);
                    i = 0;
                    continue 'outer;
                }
            }
        }
        i += 1;
    }

    (plines, holes)
}

fn normalize_winding(
    plines: Vec<Polyline<f64>>,
    desired: PlineOrientation,
) -> Vec<Polyline<f64>> {
    plines
        .into_iter()
        .map(|mut pl| {
            let orientation = pl.orientation();
            if orientation != PlineOrientation::Open && orientation != desired {
                pl.invert_direction_mut();
            }
            pl
        })
        .collect()
}

fn simplify(p: Polyline<f64>) -> Polyline<f64> {
    // Boolean results carry collinear and coincident vertexes along shared edges.
    p.remove_redundant(1e-6).unwrap_or(p)
}
