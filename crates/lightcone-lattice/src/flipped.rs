//! 2-simplex variants with one or two edges flipped in time.

use crate::family::{layer_times, DrawOrder, Family, FamilyDescriptor, FLAT_DE_SITTER};
use crate::simplex::triangle;
use lightcone_core::{CoordinateSet, Permutation, Spacetime, DEFAULT_EPSILON};

/// Layer times `[-a, 0, a]`, spread by half again in de Sitter.
fn three_layers(a: f64, spacetime: Spacetime) -> [f64; 3] {
    let unit = match spacetime {
        Spacetime::DeSitter => 1.5 * a,
        _ => a,
    };
    layer_times([-1.0, 0.0, 1.0], unit)
}

static FLIPPED_ONCE: FamilyDescriptor = FamilyDescriptor {
    key: "2-simplex flipped",
    name: "2-simplex with one edge flipped",
    dim: 3,
    len: 6,
    spacetimes: FLAT_DE_SITTER,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// The 2-simplex with the midpoint of one edge moved below its endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlippedOnce;

impl Family for FlippedOnce {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &FLIPPED_ONCE
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[1, 5, 3, 6, 2, 4])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let (a, r, r_h) = triangle(scale);
        let [t0, t1, t2] = three_layers(a, spacetime);
        let mut set = CoordinateSet::with_capacity(3, 6);
        set.push_row(&[t0, 0.0, -r_h]);
        set.push_row(&[t1, -a, -r_h]);
        set.push_row(&[t1, 0.0, r]);
        set.push_row(&[t2, -a / 2.0, r_h / 2.0]);
        set.push_row(&[t1, a, -r_h]);
        set.push_row(&[t2, a / 2.0, r_h / 2.0]);
        set
    }
}

static FLIPPED_TWICE: FamilyDescriptor = FamilyDescriptor {
    key: "2-simplex flipped twice",
    name: "2-simplex with two edges flipped",
    dim: 3,
    len: 6,
    spacetimes: FLAT_DE_SITTER,
    default_scale: 1.2,
    default_epsilon: DEFAULT_EPSILON,
    recentre: false,
    draw_order: DrawOrder::Extension,
};

/// The 2-simplex with two edge midpoints moved below their endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlippedTwice;

impl Family for FlippedTwice {
    fn descriptor(&self) -> &'static FamilyDescriptor {
        &FLIPPED_TWICE
    }

    fn permutation(&self) -> Permutation {
        Permutation::from_slice(&[3, 5, 1, 4, 2, 6])
    }

    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet {
        let (a, r, r_h) = triangle(scale);
        let [t0, t1, t2] = three_layers(a, spacetime);
        let mut set = CoordinateSet::with_capacity(3, 6);
        set.push_row(&[t0, -a / 2.0, r_h / 2.0]);
        set.push_row(&[t1, -a, -r_h]);
        set.push_row(&[t0, a / 2.0, r_h / 2.0]);
        set.push_row(&[t1, 0.0, r]);
        set.push_row(&[t1, a, -r_h]);
        set.push_row(&[t2, 0.0, -r_h]);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::family::embed;

    #[test]
    fn one_flip_has_one_early_point() {
        let c = FlippedOnce.coordinates(1.2, Spacetime::Flat);
        let earliest = c.iter().filter(|p| p[0] < -1e-9).count();
        let latest = c.iter().filter(|p| p[0] > 1e-9).count();
        assert_eq!((earliest, latest), (1, 2));
    }

    #[test]
    fn two_flips_have_two_early_points() {
        let c = FlippedTwice.coordinates(1.2, Spacetime::Flat);
        let earliest = c.iter().filter(|p| p[0] < -1e-9).count();
        let latest = c.iter().filter(|p| p[0] > 1e-9).count();
        assert_eq!((earliest, latest), (2, 1));
    }

    #[test]
    fn de_sitter_spreads_layers() {
        for family in [&FlippedOnce as &dyn Family, &FlippedTwice] {
            let flat = family.coordinates(1.2, Spacetime::Flat);
            let ds = family.coordinates(1.2, Spacetime::DeSitter);
            for (p, q) in flat.iter().zip(ds.iter()) {
                assert!((q[0] - 1.5 * p[0]).abs() < 1e-12);
                assert_eq!(&p[1..], &q[1..]);
            }
        }
    }

    #[test]
    fn black_hole_is_rejected() {
        assert!(embed(&FlippedOnce, 1.2, DEFAULT_EPSILON, Spacetime::BlackHole).is_err());
        assert!(embed(&FlippedTwice, 1.2, DEFAULT_EPSILON, Spacetime::BlackHole).is_err());
    }

    #[test]
    fn compliance_flipped_once() {
        compliance::run_full_compliance(&FlippedOnce);
    }

    #[test]
    fn compliance_flipped_twice() {
        compliance::run_full_compliance(&FlippedTwice);
    }
}
