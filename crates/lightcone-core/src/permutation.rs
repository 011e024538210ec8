//! Draw-order permutations.

use std::fmt;

/// Maps diagram draw position to causal label.
///
/// Position `k` holds the 1-based label of the `k`-th point drawn. A
/// permutation also defines a two-dimensional order on labels: `a` is
/// below `b` iff `a < b` and `a` is drawn before `b`.
///
/// # Examples
///
/// ```
/// use lightcone_core::Permutation;
///
/// let p = Permutation::new(vec![2, 1, 3]);
/// assert!(p.is_bijection());
/// assert!(p.precedes(1, 3));
/// assert!(!p.precedes(1, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<u32>);

impl Permutation {
    /// Wrap a label sequence.
    pub fn new(labels: Vec<u32>) -> Self {
        Self(labels)
    }

    /// Wrap a static literal.
    pub fn from_slice(labels: &[u32]) -> Self {
        Self(labels.to_vec())
    }

    /// Labels in draw order.
    pub fn labels(&self) -> &[u32] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every label in `1..=len` occurs exactly once.
    pub fn is_bijection(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &label in &self.0 {
            let Some(idx) = (label as usize).checked_sub(1) else {
                return false;
            };
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Draw position of every label: `positions()[label - 1]`.
    ///
    /// Returns `None` unless the permutation is a bijection.
    pub fn positions(&self) -> Option<Vec<usize>> {
        if !self.is_bijection() {
            return None;
        }
        let mut pos = vec![0; self.0.len()];
        for (k, &label) in self.0.iter().enumerate() {
            pos[label as usize - 1] = k;
        }
        Some(pos)
    }

    /// Whether label `a` is below label `b` in the two-dimensional order.
    ///
    /// Labels that do not occur are unrelated.
    pub fn precedes(&self, a: u32, b: u32) -> bool {
        if a >= b {
            return false;
        }
        let pa = self.0.iter().position(|&l| l == a);
        let pb = self.0.iter().position(|&l| l == b);
        matches!((pa, pb), (Some(pa), Some(pb)) if pa < pb)
    }
}

impl From<Vec<u32>> for Permutation {
    fn from(labels: Vec<u32>) -> Self {
        Self(labels)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bijection_checks() {
        assert!(Permutation::new(vec![4, 2, 6, 1, 5, 3, 7]).is_bijection());
        assert!(Permutation::new(vec![]).is_bijection());
        assert!(!Permutation::new(vec![1, 1]).is_bijection());
        assert!(!Permutation::new(vec![0, 1]).is_bijection());
        assert!(!Permutation::new(vec![1, 3]).is_bijection());
    }

    #[test]
    fn positions_invert_labels() {
        let p = Permutation::new(vec![3, 1, 2]);
        assert_eq!(p.positions(), Some(vec![1, 2, 0]));
        assert_eq!(Permutation::new(vec![2, 2]).positions(), None);
    }

    #[test]
    fn precedes_requires_both_label_and_draw_order() {
        let p = Permutation::new(vec![2, 1, 3]);
        assert!(p.precedes(2, 3));
        assert!(p.precedes(1, 3));
        assert!(!p.precedes(1, 2));
        assert!(!p.precedes(3, 1));
        assert!(!p.precedes(1, 9));
    }

    #[test]
    fn display_lists_labels() {
        assert_eq!(Permutation::new(vec![2, 1, 3]).to_string(), "[2, 1, 3]");
    }

    proptest! {
        #[test]
        fn identity_is_a_total_order(n in 1u32..40) {
            let p = Permutation::new((1..=n).collect());
            prop_assert!(p.is_bijection());
            for a in 1..=n {
                for b in (a + 1)..=n {
                    prop_assert!(p.precedes(a, b));
                }
            }
        }

        #[test]
        fn reversed_identity_is_an_antichain(n in 1u32..40) {
            let p = Permutation::new((1..=n).rev().collect());
            prop_assert!(p.is_bijection());
            for a in 1..=n {
                for b in 1..=n {
                    prop_assert!(!p.precedes(a, b));
                }
            }
        }
    }
}
