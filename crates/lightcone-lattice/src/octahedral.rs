//! Octahedral null lattices in 2+1 and 3+1 dimensions.
//!
//! Sites are integer multiples of the half-edge `s` with `t + |x|₁` of fixed
//! parity, so nearest neighbours between adjacent layers are one unit apart
//! in time and one unit apart along a single spatial axis.

use crate::family::{integer_sites, DrawOrder, Family, FamilyDescriptor, FLAT};
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

/// `(t, x, y)` sites of the 3D diamond, in causal-label order.
const SITES_3D: [[i8; 3]; 44] = [
    [-3, 0, 0], [-2, 0, -1], [-1, 0, -2], [0, 0, -3], [-2, -1, 0],
    [-1, -1, -1], [0, -1, -2], [-2, 1, 0], [-1, 1, -1], [0, 1, -2],
    [-1, -2, 0], [0, -2, -1], [-2, 0, 1], [-1, 0, 0], [0, 0, -1],
    [1, 0, -2], [-1, 2, 0], [0, 2, -1], [0, -3, 0], [-1, -1, 1],
    [0, -1, 0], [1, -1, -1], [-1, 1, 1], [0, 1, 0], [1, 1, -1],
    [0, 3, 0], [0, -2, 1], [1, -2, 0], [-1, 0, 2], [0, 0, 1],
    [1, 0, 0], [2, 0, -1], [0, 2, 1], [1, 2, 0], [0, -1, 2],
    [1, -1, 1], [2, -1, 0], [0, 1, 2], [1, 1, 1], [2, 1, 0],
    [0, 0, 3], [1, 0, 2], [2, 0, 1], [3, 0, 0],
];

const PERMUTATION_3D: [u32; 44] = [
    1, 13, 29, 41, 8, 23, 38, 5, 20, 35, 17, 33, 2, 14, 30, 42, 11, 27, 26, 9, 24, 39, 6, 21, 36,
    19, 18, 34, 3, 15, 31, 43, 12, 28, 10, 25, 40, 7, 22, 37, 4, 16, 32, 44,
];

/// `(t, x, y, z)` sites of the 4D diamond, in causal-label order. Layers
/// run in time order; within the middle layer the order is hand-curated.
const SITES_4D: [[i8; 4]; 96] = [
    [-3, 0, 0, 0], [-2, -1, 0, 0], [-2, 0, -1, 0], [-2, 0, 0, -1], [-2, 0, 0, 1], [-2, 0, 1, 0],
    [-2, 1, 0, 0], [-1, -2, 0, 0], [-1, -1, -1, 0], [-1, -1, 0, -1], [-1, -1, 0, 1], [-1, -1, 1, 0],
    [-1, 0, -2, 0], [-1, 0, -1, -1], [-1, 0, -1, 1], [-1, 0, 0, -2], [-1, 0, 0, 0], [-1, 0, 0, 2],
    [-1, 0, 1, -1], [-1, 0, 1, 1], [-1, 0, 2, 0], [-1, 1, -1, 0], [-1, 1, 0, -1], [-1, 1, 0, 1],
    [-1, 1, 1, 0], [-1, 2, 0, 0], [0, -3, 0, 0], [0, -2, 0, -1], [0, -1, 0, -2], [0, 0, 0, -3],
    [0, -2, -1, 0], [0, -1, -1, -1], [0, 0, -1, -2], [0, -2, 1, 0], [0, -1, 1, -1], [0, 0, 1, -2],
    [0, -1, -2, 0], [0, 0, -2, -1], [0, -2, 0, 1], [0, -1, 0, 0], [0, 0, 0, -1], [0, 1, 0, -2],
    [0, -1, 2, 0], [0, 0, 2, -1], [0, 0, -3, 0], [0, -1, -1, 1], [0, 0, -1, 0], [0, 1, -1, -1],
    [0, -1, 1, 1], [0, 0, 1, 0], [0, 1, 1, -1], [0, 0, 3, 0], [0, 0, -2, 1], [0, 1, -2, 0],
    [0, -1, 0, 2], [0, 0, 0, 1], [0, 1, 0, 0], [0, 2, 0, -1], [0, 0, 2, 1], [0, 1, 2, 0],
    [0, 0, -1, 2], [0, 1, -1, 1], [0, 2, -1, 0], [0, 0, 1, 2], [0, 1, 1, 1], [0, 2, 1, 0],
    [0, 0, 0, 3], [0, 1, 0, 2], [0, 2, 0, 1], [0, 3, 0, 0], [1, -2, 0, 0], [1, -1, -1, 0],
    [1, -1, 0, -1], [1, -1, 0, 1], [1, -1, 1, 0], [1, 0, -2, 0], [1, 0, -1, -1], [1, 0, -1, 1],
    [1, 0, 0, -2], [1, 0, 0, 0], [1, 0, 0, 2], [1, 0, 1, -1], [1, 0, 1, 1], [1, 0, 2, 0],
    [1, 1, -1, 0], [1, 1, 0, -1], [1, 1, 0, 1], [1, 1, 1, 0], [1, 2, 0, 0], [2, -1, 0, 0],
    [2, 0, -1, 0], [2, 0, 0, -1], [2, 0, 0, 1], [2, 0, 1, 0], [2, 1, 0, 0], [3, 0, 0, 0],
];

const PERMUTATION_CUT: [u32; 34] = [
    1, 11, 21, 31, 8, 18, 28, 5, 15, 25, 2, 12, 22, 32, 9, 19, 29, 6, 16, 26, 3, 13, 23, 33, 10,
    20, 30, 7, 17, 27, 4, 14, 24, 34,
];

static LATTICE_3D: FamilyDescriptor = FamilyDescriptor {
    key: "3D lattice",
    name: "3D-lattice of octahedrons",
    dim: 3,
    len: 44,
    spacetimes: FLAT,
    default_scale: 0.6,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// Causal diamond of the octahedral lattice in 2+1 dimensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octahedral3D;

impl Family for Octahedral3D {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &LATTICE_3D
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION_3D)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        integer_sites(&SITES_3D, scale / 2.0)
    }
}

static LATTICE_3D_CUT: FamilyDescriptor = FamilyDescriptor {
    key: "3D lattice cut",
    name: "3D-lattice of octahedrons (diamond cut)",
    dim: 3,
    len: 34,
    spacetimes: FLAT,
    default_scale: 0.6,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// The 3D diamond restricted to the slab `|x| <= 1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octahedral3DCut;

impl Family for Octahedral3DCut {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &LATTICE_3D_CUT
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION_CUT)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let sites: Vec<[i8; 3]> = SITES_3D
            .into_iter()
            .filter(|site| site[1].abs() <= 1)
            .collect();
        integer_sites(&sites, scale / 2.0)
    }
}

static LATTICE_4D: FamilyDescriptor = FamilyDescriptor {
    key: "4D lattice",
    name: "4D-lattice of octahedrons",
    dim: 4,
    len: 96,
    spacetimes: FLAT,
    default_scale: 0.6,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// Causal diamond of the octahedral lattice in 3+1 dimensions.
///
/// Sites are all `(t, x, y, z)` with `|x| + |y| + |z| <= 3 - |t|` and
/// `t + 3 + |x| + |y| + |z|` even, labelled in layer order. The draw
/// permutation lists layers in time order, each layer in descending label
/// order, so events of one layer are drawn unrelated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octahedral4D;

impl Family for Octahedral4D {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &LATTICE_4D
    }

    fn permutation(&self) -> Permutation {
        let mut labels = Vec::with_capacity(SITES_4D.len());
        let mut start = 0;
        while start < SITES_4D.len() {
            let t = SITES_4D[start][0];
            let end = start + SITES_4D[start..].iter().take_while(|s| s[0] == t).count();
            labels.extend((start as u32 + 1..=end as u32).rev());
            start = end;
        }
        Permutation::new(labels)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        integer_sites(&SITES_4D, scale / 2.0)
    }
}
