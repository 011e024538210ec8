//! Barycentric subdivisions of the 1-, 2- and 3-simplex.
//!
//! Every face of the simplex becomes one causal element placed at the
//! face's barycentre. Vertices sit on the earliest layer; a face spanned by
//! `k + 1` vertices sits on layer `k`, so each face lies in the future of
//! its sub-faces.

use crate::family::{DrawOrder, Family, FamilyDescriptor, ANY_SPACETIME, FLAT, FLAT_DE_SITTER};
use lightcone_core::{CoordinateSet, Permutation, Point, Spacetime, DEFAULT_EPSILON};

/// Place one point per face at its barycentre.
///
/// `vertices` are spatial positions. `faces` list 1-based vertex labels in
/// causal-label order. `times[k]` is the time of faces with `k + 1`
/// vertices.
pub(crate) fn barycentric(vertices: &[&[f64]], faces: &[&[usize]], times: &[f64]) -> CoordinateSet {
    let spatial = vertices.first().map_or(0, |v| v.len());
    let mut set = CoordinateSet::with_capacity(spatial + 1, faces.len());
    for face in faces {
        let mut p = Point::from_elem(0.0, spatial + 1);
        p[0] = times[face.len() - 1];
        for &v in *face {
            for (axis, x) in vertices[v - 1].iter().enumerate() {
                p[axis + 1] += x;
            }
        }
        let k = face.len() as f64;
        for x in &mut p[1..] {
            *x /= k;
        }
        set.push(p);
    }
    set
}

// ── 1-simplex ───────────────────────────────────────────────────

static ONE_SIMPLEX: FamilyDescriptor = FamilyDescriptor {
    key: "1-simplex",
    name: "1-simplex",
    dim: 2,
    len: 3,
    spacetimes: ANY_SPACETIME,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Exact,
};

/// A single link: two events and their common future.
///
/// The black-hole layout places the events at fixed radial positions
/// outside the horizon; only the time axis scales.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneSimplex;

impl Family for OneSimplex {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &ONE_SIMPLEX
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[2, 1, 3])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let s = scale / 2.0;
        let t = 0.75 * s;
        match spacetime {
            Spacetime::BlackHole => {
                let mut set = CoordinateSet::with_capacity(2, 3);
                set.push_row(&[-t, 0.47]);
                set.push_row(&[-t, 0.87]);
                set.push_row(&[t, 0.25]);
                set
            }
            Spacetime::Flat | Spacetime::DeSitter => {
                barycentric(&[&[-s], &[s]], &[&[1], &[2], &[1, 2]], &[-t, t])
            }
        }
    }
}

// ── 2-simplex ───────────────────────────────────────────────────

static TWO_SIMPLEX: FamilyDescriptor = FamilyDescriptor {
    key: "2-simplex",
    name: "2-simplex",
    dim: 3,
    len: 7,
    spacetimes: FLAT_DE_SITTER,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// Triangle with its three edges and the face, over three layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoSimplex;

/// Half-edge, circumradius and inradius of an equilateral triangle.
pub(crate) fn triangle(edge: f64) -> (f64, f64, f64) {
    let r = edge / 3f64.sqrt();
    (edge / 2.0, r, r / 2.0)
}

impl Family for TwoSimplex {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &TWO_SIMPLEX
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[4, 2, 6, 1, 5, 3, 7])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let (a, r, r_h) = triangle(scale);
        let tmax = a + r_h;
        let times = match spacetime {
            Spacetime::DeSitter => [0.0, 1.5 * a, 1.5 * tmax].map(|t| t - 0.75 * tmax),
            _ => [0.0, a, tmax].map(|t| t - tmax / 2.0),
        };
        barycentric(
            &[&[-a, -r_h], &[a, -r_h], &[0.0, r]],
            &[&[1], &[2], &[1, 2], &[3], &[1, 3], &[2, 3], &[1, 2, 3]],
            &times,
        )
    }
}

// ── 3-simplex ───────────────────────────────────────────────────

static THREE_SIMPLEX: FamilyDescriptor = FamilyDescriptor {
    key: "3-simplex",
    name: "3-simplex",
    dim: 4,
    len: 15,
    spacetimes: FLAT,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// Tetrahedron with all its faces, over four layers in 3+1 dimensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeSimplex;

impl Family for ThreeSimplex {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &THREE_SIMPLEX
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[6, 4, 12, 2, 10, 1, 8, 7, 14, 5, 13, 3, 11, 9, 15])
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let r = (3.0f64 / 8.0).sqrt() * scale;
        let a = scale / 2.0;
        let b = a / 3f64.sqrt();
        let c = scale / 24f64.sqrt();
        let tmax = a + b + c;
        let times = [0.0, a, a + b, tmax].map(|t| t - tmax / 2.0);
        barycentric(
            &[
                &[-a, -b, -2.0 * c],
                &[a, -b, -2.0 * c],
                &[0.0, 2.0 * b, -2.0 * c],
                &[0.0, 0.0, r - c],
            ],
            &[
                &[1],
                &[2],
                &[1, 2],
                &[3],
                &[1, 3],
                &[4],
                &[1, 4],
                &[2, 3],
                &[1, 2, 3],
                &[2, 4],
                &[1, 2, 4],
                &[3, 4],
                &[1, 3, 4],
                &[2, 3, 4],
                &[1, 2, 3, 4],
            ],
            &times,
        )
    }
}
