//! A 4×4 diamond of the 1+1 dimensional null lattice.

use crate::family::{DrawOrder, Family, FamilyDescriptor, FLAT};
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

const SIDE: u32 = 4;

static LATTICE_2D: FamilyDescriptor = FamilyDescriptor {
    key: "2D lattice",
    name: "2D-lattice",
    dim: 2,
    len: 16,
    spacetimes: FLAT,
    default_scale: 0.6,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Exact,
};

/// Sixteen events on two families of null lines.
///
/// Label `4i + j + 1` sits `i` steps along one null direction and `j`
/// along the other: `((i + j - 3) s, (i - j) s)` with `s` the half-edge.
/// The draw permutation is the transpose of the label grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lattice2D;

impl Family for Lattice2D {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &LATTICE_2D
    }

    fn permutation(&self) -> Permutation {
        let mut labels = Vec::with_capacity((SIDE * SIDE) as usize);
        for j in 0..SIDE {
            for i in 0..SIDE {
                labels.push(SIDE * i + j + 1);
            }
        }
        Permutation::new(labels)
    }

    fn coordinates(&self, scale: f64, _spacetime: Spacetime) -> CoordinateSet {
        let s = scale / 2.0;
        let mut set = CoordinateSet::with_capacity(2, (SIDE * SIDE) as usize);
        for i in 0..SIDE as i32 {
            for j in 0..SIDE as i32 {
                set.push_row(&[f64::from(i + j - 3) * s, f64::from(i - j) * s]);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn permutation_is_the_transpose() {
        assert_eq!(
            Lattice2D.permutation().labels(),
            &[1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, 4, 8, 12, 16]
        );
    }

    #[test]
    fn corners_of_the_diamond() {
        let c = Lattice2D.coordinates(2.0, Spacetime::Flat);
        assert_eq!(c.points()[0].as_slice(), &[-3.0, 0.0]);
        assert_eq!(c.points()[3].as_slice(), &[0.0, -3.0]);
        assert_eq!(c.points()[12].as_slice(), &[0.0, 3.0]);
        assert_eq!(c.points()[15].as_slice(), &[3.0, 0.0]);
    }

    #[test]
    fn seven_time_layers() {
        let c = Lattice2D.coordinates(2.0, Spacetime::Flat);
        assert_eq!(
            c.layers(0.0),
            vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn compliance_lattice_2d() {
        compliance::run_full_compliance(&Lattice2D);
    }
}
