//! Face-centred cubic lattice in 2+1 dimensions.

use crate::family::{DrawOrder, Family, FamilyDescriptor, FLAT};
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

const PERMUTATION: [u32; 64] = [
    1, 9, 21, 37, 5, 17, 33, 49, 13, 29, 45, 57, 25, 41, 53, 61, 2, 10, 22, 38, 6, 18, 34, 50, 14,
    30, 46, 58, 26, 42, 54, 62, 3, 11, 23, 39, 7, 19, 35, 51, 15, 31, 47, 59, 27, 43, 55, 63, 4, 12,
    24, 40, 8, 20, 36, 52, 16, 32, 48, 60, 28, 44, 56, 64,
];

static FCC: FamilyDescriptor = FamilyDescriptor {
    key: "3D lattice FCC",
    name: "3D-lattice in FCC",
    dim: 3,
    len: 64,
    spacetimes: FLAT,
    default_scale: 0.45,
    default_epsilon: DEFAULT_EPSILON,
    recentre: true,
    draw_order: DrawOrder::Schematic,
};

/// Sixteen timelike chains of four events.
///
/// Chain `(j, k)` step `i` sits at `((i + j + k - 4.5) r, (i - j) a,
/// (i + j - k) b)`. Chains are labelled by `j + k` ascending, then `j`
/// descending. The draw permutation follows the abstract lattice; in this
/// embedding several causally related pairs are drawn out of order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fcc;

impl Fcc {
    /// Chain indices `(j, k)` in label order.
    fn chains() -> impl Iterator<Item = (i32, i32)> {
        (0..=6).flat_map(|sum| {
            (0..=3)
                .rev()
                .map(move |j| (j, sum - j))
                .filter(|&(_, k)| (0..=3).contains(&k))
        })
    }
}

impl Family for Fcc {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &FCC
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&PERMUTATION)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let r = scale / 3f64.sqrt();
        let a = scale / 2.0;
        let b = r / 2.0;
        let mut set = CoordinateSet::with_capacity(3, FCC.len);
        for (j, k) in Self::chains() {
            for i in 0..4 {
                set.push_row(&[
                    (f64::from(i + j + k) - 4.5) * r,
                    f64::from(i - j) * a,
                    f64::from(i + j - k) * b,
                ]);
            }
        }
        set
    }
}
