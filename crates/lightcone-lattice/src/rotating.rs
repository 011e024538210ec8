//! A 2-simplex rotating in time, in three or five steps.
//!
//! Each step rotates the triangle by a fixed angle and advances one
//! layer. The step time `2r / (√6 + √2)` is the distance a vertex moves per
//! step, so consecutive vertex positions are lightlike before the epsilon
//! stretch. Left-handed rotation is the mirror image in the first spatial
//! axis; both handednesses share one permutation.

use crate::family::{layer_times, DrawOrder, Family, FamilyDescriptor, FLAT_DE_SITTER};
use crate::simplex::triangle;
use lightcone_core::{Chirality, CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

fn step_time(r: f64) -> f64 {
    2.0 * r / (6f64.sqrt() + 2f64.sqrt())
}

static ROTATING_3: FamilyDescriptor = FamilyDescriptor {
    key: "2-simplex rotating 3",
    name: "2-simplex rotating (3 steps)",
    dim: 3,
    len: 9,
    spacetimes: FLAT_DE_SITTER,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

static ROTATING_5: FamilyDescriptor = FamilyDescriptor {
    key: "2-simplex rotating 5",
    name: "2-simplex rotating (5 steps)",
    dim: 3,
    len: 15,
    spacetimes: FLAT_DE_SITTER,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// Rotating 2-simplex over three layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotatingThree {
    chirality: Chirality,
}

impl RotatingThree {
    /// Rotating in the given sense.
    pub fn new(chirality: Chirality) -> Self {
        Self { chirality }
    }
}

impl Family for RotatingThree {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &ROTATING_3
    }

    fn name(&self) -> String {
        format!("2-simplex rotating {} (3 steps)", self.chirality)
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[6, 3, 5, 9, 7, 1, 8, 2, 4])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let (a, r, r_h) = triangle(scale);
        let s = self.chirality.sign();
        let layers = match spacetime {
            Spacetime::DeSitter => [-1.5, 0.0, 1.5],
            _ => [-1.0, 0.0, 1.0],
        };
        let [t0, t1, t2] = layer_times(layers, step_time(r));
        let mut set = CoordinateSet::with_capacity(3, 9);
        set.push_row(&[t0, -s * a, -r_h]);
        set.push_row(&[t1, -s * r_h, -a]);
        set.push_row(&[t0, s * a, -r_h]);
        set.push_row(&[t2, 0.0, -r]);
        set.push_row(&[t1, s * r, 0.0]);
        set.push_row(&[t0, 0.0, r]);
        set.push_row(&[t1, -s * r_h, a]);
        set.push_row(&[t2, -s * a, r_h]);
        set.push_row(&[t2, s * a, r_h]);
        set
    }
}

/// Rotating 2-simplex over five layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotatingFive {
    chirality: Chirality,
}

impl RotatingFive {
    /// Rotating in the given sense.
    pub fn new(chirality: Chirality) -> Self {
        Self { chirality }
    }
}

impl Family for RotatingFive {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &ROTATING_5
    }

    fn name(&self) -> String {
        format!("2-simplex rotating {} (5 steps)", self.chirality)
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[7, 10, 3, 1, 12, 5, 2, 14, 8, 11, 4, 15, 13, 6, 9])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let (a, r, r_h) = triangle(scale);
        let s = self.chirality.sign();
        let layers = match spacetime {
            Spacetime::DeSitter => [-3.0, -1.5, 0.0, 1.5, 3.0],
            _ => [-2.0, -1.0, 0.0, 1.0, 2.0],
        };
        let [t0, t1, t2, t3, t4] = layer_times(layers, step_time(r));
        let mut set = CoordinateSet::with_capacity(3, 15);
        set.push_row(&[t0, -s * a, -r_h]);
        set.push_row(&[t1, -s * r_h, -a]);
        set.push_row(&[t0, s * a, -r_h]);
        set.push_row(&[t2, 0.0, -r]);
        set.push_row(&[t1, s * r, 0.0]);
        set.push_row(&[t3, s * r_h, -a]);
        set.push_row(&[t0, 0.0, r]);
        set.push_row(&[t2, s * a, r_h]);
        set.push_row(&[t4, s * a, -r_h]);
        set.push_row(&[t1, -s * r_h, a]);
        set.push_row(&[t3, s * r_h, a]);
        set.push_row(&[t2, -s * a, r_h]);
        set.push_row(&[t4, 0.0, r]);
        set.push_row(&[t3, -s * r, 0.0]);
        set.push_row(&[t4, -s * a, -r_h]);
        set
    }
}
