//! The generator output triple.

use crate::coords::CoordinateSet;
use crate::hash;
use crate::permutation::Permutation;

/// A generated embedding: display name, draw permutation and coordinates.
///
/// Created in one piece by a generator and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Embedding {
    name: String,
    permutation: Permutation,
    coordinates: CoordinateSet,
}

impl Embedding {
    /// Assemble an embedding.
    pub fn new(name: impl Into<String>, permutation: Permutation, coordinates: CoordinateSet) -> Self {
        Self {
            name: name.into(),
            permutation,
            coordinates,
        }
    }

    /// Human-readable family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Draw position to causal label mapping.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Point coordinates in label order.
    pub fn coordinates(&self) -> &CoordinateSet {
        &self.coordinates
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the embedding has no points.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Number of components per point.
    pub fn dim(&self) -> usize {
        self.coordinates.dim()
    }

    /// FNV-1a hash over name, permutation and coordinate bits.
    pub fn fingerprint(&self) -> u64 {
        hash::fingerprint(&self.name, &self.permutation, &self.coordinates)
    }
}
