//! Midpoint centering of coordinate sets.

use crate::coords::CoordinateSet;

/// Shift every axis so its extent is symmetric about zero.
///
/// Subtracts `(min + max) / 2` per axis. Afterwards `min == -max` on every
/// axis up to rounding. Count and order are preserved; an empty set is
/// left unchanged. Applying it twice gives the same result as once.
pub fn recentre(set: &mut CoordinateSet) {
    for axis in 0..set.dim() {
        if let Some((lo, hi)) = set.bounds(axis) {
            let mid = 0.5 * (lo + hi);
            if mid != 0.0 {
                set.map_axis(axis, |v| v - mid);
            }
        }
    }
}

/// Whether every axis satisfies `|min + max| <= tol`.
pub fn is_centred(set: &CoordinateSet, tol: f64) -> bool {
    (0..set.dim()).all(|axis| match set.bounds(axis) {
        Some((lo, hi)) => (lo + hi).abs() <= tol,
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn shifts_each_axis_independently() {
        let mut set = CoordinateSet::new(2);
        set.push_row(&[0.0, 10.0]);
        set.push_row(&[4.0, 12.0]);
        set.push_row(&[1.0, 11.0]);
        recentre(&mut set);
        assert_eq!(set.points()[0].as_slice(), &[-2.0, -1.0]);
        assert_eq!(set.points()[1].as_slice(), &[2.0, 1.0]);
        assert_eq!(set.points()[2].as_slice(), &[-1.0, 0.0]);
        assert!(is_centred(&set, 0.0));
    }

    #[test]
    fn empty_set_is_untouched() {
        let mut set = CoordinateSet::new(3);
        recentre(&mut set);
        assert!(set.is_empty());
        assert!(is_centred(&set, 0.0));
    }

    fn arb_set() -> impl Strategy<Value = CoordinateSet> {
        (1usize..5).prop_flat_map(|dim| {
            prop::collection::vec(prop::collection::vec(-100.0f64..100.0, dim), 1..30).prop_map(
                move |rows| {
                    let mut set = CoordinateSet::new(dim);
                    for r in &rows {
                        set.push_row(r);
                    }
                    set
                },
            )
        })
    }

    proptest! {
        #[test]
        fn min_equals_minus_max(mut set in arb_set()) {
            let n = set.len();
            recentre(&mut set);
            prop_assert_eq!(set.len(), n);
            prop_assert!(is_centred(&set, 1e-9));
        }

        #[test]
        fn idempotent(mut set in arb_set()) {
            recentre(&mut set);
            let once = set.clone();
            recentre(&mut set);
            for (a, b) in once.iter().zip(set.iter()) {
                for (x, y) in a.iter().zip(b.iter()) {
                    assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
                }
            }
        }

        #[test]
        fn preserves_differences(mut set in arb_set()) {
            let before = set.clone();
            recentre(&mut set);
            let (p0, q0) = (&before.points()[0], &set.points()[0]);
            for (p, q) in before.iter().zip(set.iter()) {
                for axis in 0..set.dim() {
                    assert_abs_diff_eq!(p[axis] - p0[axis], q[axis] - q0[axis], epsilon = 1e-9);
                }
            }
        }
    }
}
