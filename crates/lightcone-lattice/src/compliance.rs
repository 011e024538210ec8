//! Family trait compliance test helpers.
//!
//! These functions verify that a Family implementation satisfies the
//! contract every generator shares. Reused across all family test modules.

use crate::family::{embed, Family};
use crate::order::check_draw_order;
use indexmap::IndexSet;
use lightcone_core::{is_centred, Spacetime};

/// Assert the permutation is a bijection onto `1..=len`.
pub fn assert_permutation_bijective(family: &dyn Family) {
    let p = family.permutation();
    let d = family.descriptor();
    assert_eq!(p.len(), d.len, "{}: permutation length", d.key);
    assert!(p.is_bijection(), "{}: {p} is not a bijection", d.key);
}

/// Assert point count and dimension match the descriptor in every
/// supported spacetime.
pub fn assert_shape_matches_descriptor(family: &dyn Family) {
    let d = family.descriptor();
    for &st in d.spacetimes {
        let e = embed(family, d.default_scale, d.default_epsilon, st)
            .unwrap_or_else(|err| panic!("{}: {st} listed but rejected: {err}", d.key));
        assert_eq!(e.len(), d.len, "{} in {st}: point count", d.key);
        assert_eq!(e.dim(), d.dim, "{} in {st}: dimension", d.key);
        assert!(
            e.coordinates().iter().all(|p| p.len() == d.dim),
            "{} in {st}: ragged points",
            d.key
        );
        assert!(
            e.coordinates().iter().flatten().all(|v| v.is_finite()),
            "{} in {st}: non-finite coordinate",
            d.key
        );
    }
}

/// Assert every spacetime outside the descriptor's set is rejected.
pub fn assert_rejects_unsupported(family: &dyn Family) {
    let d = family.descriptor();
    for st in Spacetime::ALL {
        let supported = d.spacetimes.contains(&st);
        assert_eq!(family.supports(st), supported, "{}: supports({st})", d.key);
        let result = embed(family, d.default_scale, d.default_epsilon, st);
        assert_eq!(result.is_ok(), supported, "{}: embed in {st}", d.key);
    }
}

/// Assert zero, negative and NaN scales keep the point count and dimension.
///
/// Such scales collapse or mirror the layout; they never add or drop
/// events.
pub fn assert_degenerate_scale_keeps_shape(family: &dyn Family) {
    let d = family.descriptor();
    for &st in d.spacetimes {
        for scale in [0.0, -d.default_scale, f64::NAN] {
            let e = embed(family, scale, d.default_epsilon, st)
                .unwrap_or_else(|err| panic!("{} in {st} at scale {scale}: {err}", d.key));
            assert_eq!(e.len(), d.len, "{} in {st} at scale {scale}: point count", d.key);
            assert_eq!(
                e.permutation().len(),
                e.len(),
                "{} in {st} at scale {scale}: permutation length",
                d.key
            );
            assert!(
                e.coordinates().iter().all(|p| p.len() == d.dim),
                "{} in {st} at scale {scale}: ragged points",
                d.key
            );
        }
    }
}

/// Assert two generations with identical inputs are bit-identical.
pub fn assert_deterministic(family: &dyn Family) {
    let d = family.descriptor();
    let a = embed(family, d.default_scale, d.default_epsilon, Spacetime::Flat).unwrap();
    let b = embed(family, d.default_scale, d.default_epsilon, Spacetime::Flat).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint(), "{}: fingerprint drift", d.key);
    assert_eq!(a, b);
}

/// Assert no two events share a position.
pub fn assert_points_distinct(family: &dyn Family) {
    let d = family.descriptor();
    let c = family.coordinates(d.default_scale, Spacetime::Flat);
    let mut seen = IndexSet::new();
    for p in &c {
        let key: Vec<u64> = p.iter().map(|v| (v + 0.0).to_bits()).collect();
        assert!(seen.insert(key), "{}: duplicate point {p:?}", d.key);
    }
}

/// Assert recentring families come out symmetric about the origin.
pub fn assert_recentred_when_flagged(family: &dyn Family) {
    let d = family.descriptor();
    if !d.recentre {
        return;
    }
    let e = embed(family, d.default_scale, d.default_epsilon, Spacetime::Flat).unwrap();
    assert!(is_centred(e.coordinates(), 1e-12), "{}: not centred", d.key);
}

/// Assert epsilon moves only the time axis.
pub fn assert_epsilon_only_stretches_time(family: &dyn Family) {
    let d = family.descriptor();
    let plain = embed(family, d.default_scale, 0.0, Spacetime::Flat).unwrap();
    let stretched = embed(family, d.default_scale, 0.01, Spacetime::Flat).unwrap();
    for (p, q) in plain.coordinates().iter().zip(stretched.coordinates()) {
        assert_eq!(&p[1..], &q[1..], "{}: spatial drift", d.key);
        if !d.recentre {
            assert!(
                (q[0] - 1.01 * p[0]).abs() <= 1e-12,
                "{}: time {} not stretched to {}",
                d.key,
                p[0],
                q[0]
            );
        }
    }
}

/// Assert the permutation relates to the flat causal order as declared.
pub fn assert_draw_order_class(family: &dyn Family) {
    let d = family.descriptor();
    let e = embed(family, d.default_scale, d.default_epsilon, Spacetime::Flat).unwrap();
    let report = check_draw_order(&e);
    assert!(
        report.satisfies(d.draw_order),
        "{}: declared {} but {} pairs missing, {} extra",
        d.key,
        d.draw_order.name(),
        report.missing.len(),
        report.extra.len()
    );
}

/// Run all compliance checks on a family.
pub fn run_full_compliance(family: &dyn Family) {
    assert_permutation_bijective(family);
    assert_shape_matches_descriptor(family);
    assert_rejects_unsupported(family);
    assert_degenerate_scale_keeps_shape(family);
    assert_deterministic(family);
    assert_points_distinct(family);
    assert_recentred_when_flagged(family);
    assert_epsilon_only_stretches_time(family);
    assert_draw_order_class(family);
}
