//! Hexagonal close-packed lattice in 2+1 dimensions.

use crate::family::{DrawOrder, Family, FamilyDescriptor, FLAT};
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

/// Draw order shared by the stacked 4×4×4 lattices whose labels run
/// group, column, step.
pub(crate) const STACKED_PERMUTATION: [u32; 64] = [
    13, 9, 29, 25, 45, 41, 61, 57, 5, 1, 21, 17, 37, 33, 53, 49, 14, 10, 30, 26, 46, 42, 62, 58,
    6, 2, 22, 18, 38, 34, 54, 50, 15, 11, 31, 27, 47, 43, 63, 59, 7, 3, 23, 19, 39, 35, 55, 51, 16,
    12, 32, 28, 48, 44, 64, 60, 8, 4, 24, 20, 40, 36, 56, 52,
];

/// Column offsets along the first spatial axis, in half-edges.
const COLUMN_X: [f64; 4] = [0.0, 0.0, 1.0, 1.0];
/// Column offsets along the second spatial axis, in circumradii.
const COLUMN_Y: [f64; 4] = [-2.5, 0.5, -1.0, 2.0];

static HCP: FamilyDescriptor = FamilyDescriptor {
    key: "3D lattice HCP",
    name: "3D-lattice in HCP",
    dim: 3,
    len: 64,
    spacetimes: FLAT,
    default_scale: 0.45,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Extension,
};

/// Sixty-four events on four groups of four null columns.
///
/// Event `16m + 4n + k + 1` is step `k` of column `n` in group `m`, at
/// time `(m + k - 3) r`. Layers of even time are shifted by half a
/// circumradius, which produces the alternating close-packed stacking.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hcp;

impl Family for Hcp {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &HCP
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&STACKED_PERMUTATION)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let a = scale / 2.0;
        let r = scale / 3f64.sqrt();
        let mut set = CoordinateSet::with_capacity(3, HCP.len);
        for m in 0..4i32 {
            for n in 0..4 {
                for k in 0..4i32 {
                    let step = m + k - 3;
                    let shift = if step.rem_euclid(2) == 0 { 0.5 } else { 0.0 };
                    set.push_row(&[
                        f64::from(step) * r,
                        (COLUMN_X[n] + f64::from(m - k)) * a,
                        (COLUMN_Y[n] + shift) * r,
                    ]);
                }
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_and_last_sites() {
        let c = Hcp.coordinates(2.0, Spacetime::Flat);
        let r = 2.0 / 3f64.sqrt();
        let first = &c.points()[0];
        assert_abs_diff_eq!(first[0], -3.0 * r, epsilon = 1e-12);
        assert_abs_diff_eq!(first[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first[2], -2.5 * r, epsilon = 1e-12);
        let last = &c.points()[63];
        assert_abs_diff_eq!(last[0], 3.0 * r, epsilon = 1e-12);
        assert_abs_diff_eq!(last[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(last[2], 2.0 * r, epsilon = 1e-12);
    }

    #[test]
    fn even_layers_are_shifted() {
        let c = Hcp.coordinates(2.0, Spacetime::Flat);
        let r = 2.0 / 3f64.sqrt();
        // label 2 is step 1 of column 0 in group 0, time -2r
        assert_abs_diff_eq!(c.points()[1][2], -2.0 * r, epsilon = 1e-12);
    }

    #[test]
    fn seven_layers() {
        let c = Hcp.coordinates(2.0, Spacetime::Flat);
        assert_eq!(c.layers(1e-9).len(), 7);
    }

    #[test]
    fn compliance_hcp() {
        compliance::run_full_compliance(&Hcp);
    }
}
