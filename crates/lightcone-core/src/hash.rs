//! Output fingerprints.
//!
//! Uses FNV-1a over the exact bit patterns of an embedding so that two
//! runs can be compared for bit-identical output. Not cryptographic.

use crate::coords::CoordinateSet;
use crate::permutation::Permutation;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a name, permutation and coordinate set.
///
/// Folds in the name bytes, each label as 4 LE bytes, the dimension, and
/// every coordinate's `f64::to_bits()` as 8 LE bytes. Name length and
/// permutation length are folded first so that shifting content between
/// sections changes the hash.
pub fn fingerprint(name: &str, permutation: &Permutation, coords: &CoordinateSet) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &(name.len() as u64).to_le_bytes());
    hash = fnv1a_bytes(hash, name.as_bytes());
    hash = fnv1a_bytes(hash, &(permutation.len() as u64).to_le_bytes());
    for &label in permutation.labels() {
        hash = fnv1a_bytes(hash, &label.to_le_bytes());
    }
    hash = fnv1a_bytes(hash, &(coords.dim() as u64).to_le_bytes());
    for point in coords {
        for v in point {
            hash = fnv1a_bytes(hash, &v.to_bits().to_le_bytes());
        }
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(rows: &[[f64; 2]]) -> CoordinateSet {
        CoordinateSet::from_scaled_rows(2, rows, 1.0)
    }

    #[test]
    fn empty_input_hashes_deterministically() {
        let a = fingerprint("", &Permutation::new(vec![]), &CoordinateSet::new(0));
        let b = fingerprint("", &Permutation::new(vec![]), &CoordinateSet::new(0));
        assert_eq!(a, b);
        assert_ne!(a, 0);
    }

    #[test]
    fn every_section_contributes() {
        let p = Permutation::new(vec![2, 1]);
        let c = coords(&[[0.0, 1.0], [1.0, 0.0]]);
        let base = fingerprint("x", &p, &c);
        assert_ne!(base, fingerprint("y", &p, &c));
        assert_ne!(base, fingerprint("x", &Permutation::new(vec![1, 2]), &c));
        assert_ne!(base, fingerprint("x", &p, &coords(&[[0.0, 1.0], [1.0, 1e-300]])));
    }

    #[test]
    fn signed_zero_is_distinguished() {
        let p = Permutation::new(vec![1]);
        let a = fingerprint("z", &p, &coords(&[[0.0, 0.0]]));
        let b = fingerprint("z", &p, &coords(&[[-0.0, 0.0]]));
        assert_ne!(a, b);
    }
}
