//! Causal order recomputed from coordinates, compared with the draw order.
//!
//! A family's permutation is only useful to a Hasse-diagram renderer if it
//! never draws an event below one of its causal predecessors. This module
//! recomputes the flat-spacetime order from an embedding's coordinates and
//! reports the pairs where the two disagree.

use crate::family::DrawOrder;
use indexmap::IndexSet;
use lightcone_core::{CoordinateSet, Embedding, Permutation};

/// A strict order as `(earlier label, later label)` pairs, in discovery
/// order.
pub type Relation = IndexSet<(u32, u32)>;

/// Whether `a` strictly precedes `b` in flat spacetime.
///
/// Requires `b` to be later and strictly inside the future light cone of
/// `a`: `dt > 0` and `dt² > |dx|²`. Lightlike separation does not count.
pub fn flat_precedes(a: &[f64], b: &[f64]) -> bool {
    let dt = b[0] - a[0];
    if dt <= 0.0 {
        return false;
    }
    let dx2: f64 = a[1..]
        .iter()
        .zip(&b[1..])
        .map(|(x, y)| (y - x) * (y - x))
        .sum();
    dt * dt > dx2
}

/// All strictly timelike pairs of `coords`.
pub fn coordinate_order(coords: &CoordinateSet) -> Relation {
    let mut rel = Relation::new();
    let points = coords.points();
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate() {
            if flat_precedes(a, b) {
                rel.insert((i as u32 + 1, j as u32 + 1));
            }
        }
    }
    rel
}

/// The two-dimensional order of a permutation: `a < b` as labels and `a`
/// drawn before `b`.
///
/// Empty unless the permutation is a bijection.
pub fn permutation_order(permutation: &Permutation) -> Relation {
    let mut rel = Relation::new();
    let Some(pos) = permutation.positions() else {
        return rel;
    };
    for (i, &pa) in pos.iter().enumerate() {
        for (j, &pb) in pos.iter().enumerate().skip(i + 1) {
            if pa < pb {
                rel.insert((i as u32 + 1, j as u32 + 1));
            }
        }
    }
    rel
}

/// Disagreement between the coordinate order and a draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderReport {
    /// Causal pairs the permutation does not draw in order.
    pub missing: Vec<(u32, u32)>,
    /// Pairs the permutation orders that the coordinates leave unrelated.
    pub extra: Vec<(u32, u32)>,
}

impl OrderReport {
    /// Compare a coordinate order with a draw order.
    pub fn compare(coordinate: &Relation, drawn: &Relation) -> Self {
        Self {
            missing: coordinate.difference(drawn).copied().collect(),
            extra: drawn.difference(coordinate).copied().collect(),
        }
    }

    /// No causal pair is drawn out of order.
    pub fn is_extension(&self) -> bool {
        self.missing.is_empty()
    }

    /// The draw order and the causal order coincide.
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// Whether the report matches the class a family declares.
    ///
    /// A schematic family is expected to draw some pairs out of order; if
    /// it stops doing so its declared class is stale.
    pub fn satisfies(&self, class: DrawOrder) -> bool {
        match class {
            DrawOrder::Exact => self.is_exact(),
            DrawOrder::Extension => self.is_extension(),
            DrawOrder::Schematic => !self.is_extension(),
        }
    }
}

/// Compare an embedding's coordinates with its permutation.
pub fn check_draw_order(embedding: &Embedding) -> OrderReport {
    OrderReport::compare(
        &coordinate_order(embedding.coordinates()),
        &permutation_order(embedding.permutation()),
    )
}
