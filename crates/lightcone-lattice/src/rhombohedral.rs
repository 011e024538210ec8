//! Rhombohedral lattice in 2+1 dimensions.

use crate::family::{DrawOrder, Family, FamilyDescriptor, FLAT};
use crate::hcp::STACKED_PERMUTATION;
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

/// `(y, z)` offsets of the four columns, in half-edges.
const COLUMNS: [(f64, f64); 4] = [(-1.5, 0.0), (0.5, 1.0), (-0.5, 0.0), (1.5, 1.0)];

static RHOMBOHEDRAL: FamilyDescriptor = FamilyDescriptor {
    key: "3D lattice rhombohedral",
    name: "3D-lattice of rhombohedrons",
    dim: 3,
    len: 64,
    spacetimes: FLAT,
    default_scale: 0.45,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Schematic,
};

/// Sixty-four events labelled like [`Hcp`](crate::Hcp) with a rhombohedral
/// column layout.
///
/// Event `16m + 4n + k + 1` sits at `((m + k - 3) s, y_n s, (z_n + m - k) s)`.
/// Shares its draw permutation with the HCP lattice, which this layout
/// realises only schematically.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rhombohedral;

impl Family for Rhombohedral {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &RHOMBOHEDRAL
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&STACKED_PERMUTATION)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let s = scale / 2.0;
        let mut set = CoordinateSet::with_capacity(3, RHOMBOHEDRAL.len);
        for m in 0..4i32 {
            for (y, z) in COLUMNS {
                for k in 0..4i32 {
                    set.push_row(&[f64::from(m + k - 3) * s, y * s, (z + f64::from(m - k)) * s]);
                }
            }
        }
        set
    }
}
