//! Time-axis perturbation.
//!
//! Lattice links between adjacent layers are exactly lightlike. Stretching
//! every time coordinate by `1 + eps` tips them strictly inside the light
//! cone so that a strict causal check sees them.

use crate::coords::CoordinateSet;

/// Default stretch applied to time coordinates.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Stretch a single time value: `t * (1 + eps)`.
///
/// For `eps > -1` this preserves sign and is strictly monotonic in `t`.
/// `eps` is not validated.
#[inline]
pub fn perturb(t: f64, eps: f64) -> f64 {
    t * (1.0 + eps)
}

/// Stretch every value in `ts` in place.
pub fn perturb_slice(ts: &mut [f64], eps: f64) {
    for t in ts {
        *t = perturb(*t, eps);
    }
}

/// Stretch component 0 of every point in `set`. Spatial components are
/// untouched.
pub fn perturb_times(set: &mut CoordinateSet, eps: f64) {
    set.map_axis(0, |t| perturb(t, eps));
}
