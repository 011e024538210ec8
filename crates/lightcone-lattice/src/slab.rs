//! Slab of the 2+1 dimensional null lattice and its derived variants.
//!
//! The slab is a strip of width 4 in the first spatial axis and width 2 in
//! the second, eleven layers deep. The past- and future-infinity variants
//! keep its first or last four layers. The perturbed variant moves one
//! event and adds three off-lattice events.

use crate::family::{integer_sites, DrawOrder, Family, FamilyDescriptor, FLAT};
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

/// `(t, x, y)` sites in causal-label order, in units of `edge / √2`.
const SITES: [[i8; 3]; 82] = [
    [-5, -2, 0], [-5, -1, -1], [-4, -2, -1], [-5, -1, 1], [-4, -2, 1],
    [-5, 0, 0], [-4, -1, 0], [-3, -2, 0], [-5, 1, -1], [-4, 0, -1],
    [-3, -1, -1], [-2, -2, -1], [-5, 1, 1], [-4, 0, 1], [-3, -1, 1],
    [-2, -2, 1], [-5, 2, 0], [-4, 1, 0], [-3, 0, 0], [-2, -1, 0],
    [-1, -2, 0], [-4, 2, -1], [-3, 1, -1], [-2, 0, -1], [-1, -1, -1],
    [0, -2, -1], [-4, 2, 1], [-3, 1, 1], [-2, 0, 1], [-1, -1, 1],
    [0, -2, 1], [-3, 2, 0], [-2, 1, 0], [-1, 0, 0], [0, -1, 0],
    [1, -2, 0], [-2, 2, -1], [-1, 1, -1], [0, 0, -1], [1, -1, -1],
    [2, -2, -1], [-2, 2, 1], [-1, 1, 1], [0, 0, 1], [1, -1, 1],
    [2, -2, 1], [-1, 2, 0], [0, 1, 0], [1, 0, 0], [2, -1, 0],
    [3, -2, 0], [0, 2, -1], [1, 1, -1], [2, 0, -1], [3, -1, -1],
    [4, -2, -1], [0, 2, 1], [1, 1, 1], [2, 0, 1], [3, -1, 1],
    [4, -2, 1], [1, 2, 0], [2, 1, 0], [3, 0, 0], [4, -1, 0],
    [5, -2, 0], [2, 2, -1], [3, 1, -1], [4, 0, -1], [5, -1, -1],
    [2, 2, 1], [3, 1, 1], [4, 0, 1], [5, -1, 1], [3, 2, 0],
    [4, 1, 0], [5, 0, 0], [4, 2, -1], [5, 1, -1], [4, 2, 1],
    [5, 1, 1], [5, 2, 0],
];

const PERMUTATION: [u32; 82] = [
    17, 13, 27, 9, 22, 6, 18, 32, 4, 14, 28, 42, 2, 10, 23, 37, 1, 7, 19, 33, 47, 5, 15, 29, 43,
    57, 3, 11, 24, 38, 52, 8, 20, 34, 48, 62, 16, 30, 44, 58, 71, 12, 25, 39, 53, 67, 21, 35, 49,
    63, 75, 31, 45, 59, 72, 80, 26, 40, 54, 68, 78, 36, 50, 64, 76, 82, 46, 60, 73, 81, 41, 55, 69,
    79, 51, 65, 77, 61, 74, 56, 70, 66,
];

const PERMUTATION_PAST: [u32; 30] = [
    17, 13, 24, 9, 21, 6, 18, 27, 4, 14, 25, 30, 2, 10, 22, 29, 1, 7, 19, 28, 5, 15, 26, 3, 11, 23,
    8, 20, 16, 12,
];

const PERMUTATION_FUTURE: [u32; 30] = [
    19, 15, 11, 23, 8, 20, 28, 5, 16, 26, 3, 12, 24, 30, 2, 9, 21, 29, 1, 6, 17, 27, 4, 13, 25, 10,
    22, 7, 18, 14,
];

const PERMUTATION_PERTURBED: [u32; 85] = [
    17, 13, 27, 9, 22, 6, 18, 32, 4, 14, 28, 42, 2, 10, 23, 37, 1, 7, 19, 33, 49, 5, 15, 29, 43,
    60, 3, 11, 24, 38, 55, 8, 20, 34, 51, 65, 16, 30, 35, 46, 45, 61, 74, 12, 25, 39, 50, 56, 70,
    21, 44, 52, 66, 78, 31, 47, 62, 75, 83, 26, 40, 57, 71, 81, 36, 53, 67, 79, 85, 48, 63, 76, 84,
    41, 58, 72, 82, 54, 68, 80, 64, 77, 59, 73, 69,
];

/// Slab label whose event is displaced in the perturbed variant.
const MOVED_LABEL: usize = 35;
/// New position of the displaced event.
const MOVED_TO: [f64; 3] = [-0.5, -0.5, 0.0];
/// Off-lattice events of the perturbed variant, with their final labels,
/// in ascending label order.
const INSERTED: [(usize, [f64; 3]); 3] = [
    (44, [0.5, -5.0 / 6.0, 5.0 / 6.0]),
    (46, [0.0, 0.5, -0.25]),
    (50, [0.5, 0.25, 0.15]),
];

/// Layers kept by the infinity variants: `|t| >= INFINITY_CUT`.
const INFINITY_CUT: i8 = 2;

fn unit(scale: f64) -> f64 {
    scale / 2f64.sqrt()
}

static SLAB: FamilyDescriptor = FamilyDescriptor {
    key: "3D slab",
    name: "3D-lattice (slab)",
    dim: 3,
    len: 82,
    spacetimes: FLAT,
    default_scale: 0.27,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// The full eleven-layer slab.
#[derive(Clone, Copy, Debug, Default)]
pub struct Slab;

impl Family for Slab {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &SLAB
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        integer_sites(&SITES, unit(scale))
    }
}

static SLAB_PAST: FamilyDescriptor = FamilyDescriptor {
    key: "3D slab past inf",
    name: "3D-lattice (slab, past inf.)",
    dim: 3,
    len: 30,
    spacetimes: FLAT,
    default_scale: 0.27,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// The first four layers of the slab.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlabPastInfinity;

impl Family for SlabPastInfinity {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &SLAB_PAST
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION_PAST)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let sites: Vec<_> = SITES.into_iter().filter(|s| s[0] <= -INFINITY_CUT).collect();
        integer_sites(&sites, unit(scale))
    }
}

static SLAB_FUTURE: FamilyDescriptor = FamilyDescriptor {
    key: "3D slab future inf",
    name: "3D-lattice (slab, future inf.)",
    dim: 3,
    len: 30,
    spacetimes: FLAT,
    default_scale: 0.27,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// The last four layers of the slab.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlabFutureInfinity;

impl Family for SlabFutureInfinity {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &SLAB_FUTURE
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION_FUTURE)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let sites: Vec<_> = SITES.into_iter().filter(|s| s[0] >= INFINITY_CUT).collect();
        integer_sites(&sites, unit(scale))
    }
}

static SLAB_PERTURBED: FamilyDescriptor = FamilyDescriptor {
    key: "3D slab perturbed",
    name: "3D-lattice (slab, perturbed)",
    dim: 3,
    len: 85,
    spacetimes: FLAT,
    default_scale: 0.27,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// The slab with one event displaced and three events inserted off the
/// lattice.
///
/// Labels after each insertion point shift up, which the permutation
/// literal already accounts for.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlabPerturbed;

impl SlabPerturbed {
    fn sites() -> Vec<[f64; 3]> {
        let mut sites: Vec<[f64; 3]> = SITES.iter().map(|s| s.map(f64::from)).collect();
        sites[MOVED_LABEL - 1] = MOVED_TO;
        for (label, site) in INSERTED {
            sites.insert(label - 1, site);
        }
        sites
    }
}

impl Family for SlabPerturbed {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &SLAB_PERTURBED
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION_PERTURBED)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        CoordinateSet::from_scaled_rows(3, &Self::sites(), unit(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn eleven_layers() {
        let c = Slab.coordinates(2f64.sqrt(), Spacetime::Flat);
        assert_eq!(c.layers(1e-9).len(), 11);
    }

    #[test]
    fn past_infinity_is_the_first_four_layers() {
        let full = Slab.coordinates(1.0, Spacetime::Flat);
        let past = SlabPastInfinity.coordinates(1.0, Spacetime::Flat);
        let cut = full.layers(1e-12)[3];
        assert_eq!(past, full.filtered(|p| p[0] <= cut));
        assert_eq!(past.len(), 30);
    }

    #[test]
    fn future_infinity_is_the_last_four_layers() {
        let full = Slab.coordinates(1.0, Spacetime::Flat);
        let future = SlabFutureInfinity.coordinates(1.0, Spacetime::Flat);
        let layers = full.layers(1e-12);
        let cut = layers[layers.len() - 4];
        assert_eq!(future, full.filtered(|p| p[0] >= cut));
        assert_eq!(future.len(), 30);
    }

    #[test]
    fn perturbed_sites() {
        let c = SlabPerturbed.coordinates(2f64.sqrt(), Spacetime::Flat);
        assert_eq!(c.len(), 85);
        let at = |label: u32| c.by_label(label).map(|p| p.to_vec());
        assert_eq!(at(35), Some(MOVED_TO.to_vec()));
        for (label, site) in INSERTED {
            let p = at(label as u32).unwrap_or_default();
            for (x, y) in p.iter().zip(site) {
                assert!((x - y).abs() < 1e-12, "label {label}: {p:?} != {site:?}");
            }
        }
        // slab label 82 becomes label 85
        assert_eq!(at(85), Some(vec![5.0, 2.0, 0.0]));
    }

    #[test]
    fn perturbed_slab_is_drawn_consistently() {
        let e = crate::family::embed(&SlabPerturbed, 0.27, DEFAULT_EPSILON, Spacetime::Flat)
            .unwrap();
        assert!(crate::order::check_draw_order(&e).is_extension());
    }

    #[test]
    fn compliance_slab() {
        compliance::run_full_compliance(&Slab);
    }

    #[test]
    fn compliance_slab_past_infinity() {
        compliance::run_full_compliance(&SlabPastInfinity);
    }

    #[test]
    fn compliance_slab_future_infinity() {
        compliance::run_full_compliance(&SlabFutureInfinity);
    }

    #[test]
    fn compliance_slab_perturbed() {
        compliance::run_full_compliance(&SlabPerturbed);
    }
}
