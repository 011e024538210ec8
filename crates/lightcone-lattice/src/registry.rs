//! Family selection by key.

use crate::fcc::Fcc;
use crate::family::{Family, FamilyDescriptor};
use crate::flipped::{FlippedOnce, FlippedTwice};
use crate::hcp::Hcp;
use crate::lattice2d::Lattice2D;
use crate::octahedral::{Octahedral3D, Octahedral3DCut, Octahedral4D};
use crate::rhombohedral::Rhombohedral;
use crate::rotating::{RotatingFive, RotatingThree};
use crate::simplex::{OneSimplex, ThreeSimplex, TwoSimplex};
use crate::slab::{Slab, SlabFutureInfinity, SlabPastInfinity, SlabPerturbed};
use lightcone_core::{Chirality, EmbeddingError};
use std::fmt;
use std::str::FromStr;

/// Identifier of every registered lattice family.
///
/// # Examples
///
/// ```
/// use lightcone_lattice::FamilyId;
///
/// let id: FamilyId = "3D lattice HCP".parse().unwrap();
/// assert_eq!(id, FamilyId::Hcp);
/// assert_eq!(id.descriptor().len, 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FamilyId {
    /// `1-simplex`
    OneSimplex,
    /// `2-simplex`
    TwoSimplex,
    /// `2-simplex flipped`
    TwoSimplexFlipped,
    /// `2-simplex flipped twice`
    TwoSimplexFlippedTwice,
    /// `2-simplex rotating 3`
    TwoSimplexRotating3,
    /// `2-simplex rotating 5`
    TwoSimplexRotating5,
    /// `3-simplex`
    ThreeSimplex,
    /// `2D lattice`
    Lattice2D,
    /// `3D lattice`
    Octahedral3D,
    /// `3D lattice cut`
    Octahedral3DCut,
    /// `4D lattice`
    Octahedral4D,
    /// `3D lattice HCP`
    Hcp,
    /// `3D lattice FCC`
    Fcc,
    /// `3D lattice rhombohedral`
    Rhombohedral,
    /// `3D slab`
    Slab,
    /// `3D slab past inf`
    SlabPastInfinity,
    /// `3D slab future inf`
    SlabFutureInfinity,
    /// `3D slab perturbed`
    SlabPerturbed,
}

impl FamilyId {
    /// Every family, in listing order.
    pub const ALL: [FamilyId; 18] = [
        Self::OneSimplex,
        Self::TwoSimplex,
        Self::TwoSimplexFlipped,
        Self::TwoSimplexFlippedTwice,
        Self::TwoSimplexRotating3,
        Self::TwoSimplexRotating5,
        Self::ThreeSimplex,
        Self::Lattice2D,
        Self::Octahedral3D,
        Self::Octahedral3DCut,
        Self::Octahedral4D,
        Self::Hcp,
        Self::Fcc,
        Self::Rhombohedral,
        Self::Slab,
        Self::SlabPastInfinity,
        Self::SlabFutureInfinity,
        Self::SlabPerturbed,
    ];

    /// Instantiate the family. `chirality` only affects the rotating
    /// families.
    pub fn build(self, chirality: Chirality) -> Box<dyn Family> {
        match self {
            Self::OneSimplex => Box::new(OneSimplex),
            Self::TwoSimplex => Box::new(TwoSimplex),
            Self::TwoSimplexFlipped => Box::new(FlippedOnce),
            Self::TwoSimplexFlippedTwice => Box::new(FlippedTwice),
            Self::TwoSimplexRotating3 => Box::new(RotatingThree::new(chirality)),
            Self::TwoSimplexRotating5 => Box::new(RotatingFive::new(chirality)),
            Self::ThreeSimplex => Box::new(ThreeSimplex),
            Self::Lattice2D => Box::new(Lattice2D),
            Self::Octahedral3D => Box::new(Octahedral3D),
            Self::Octahedral3DCut => Box::new(Octahedral3DCut),
            Self::Octahedral4D => Box::new(Octahedral4D),
            Self::Hcp => Box::new(Hcp),
            Self::Fcc => Box::new(Fcc),
            Self::Rhombohedral => Box::new(Rhombohedral),
            Self::Slab => Box::new(Slab),
            Self::SlabPastInfinity => Box::new(SlabPastInfinity),
            Self::SlabFutureInfinity => Box::new(SlabFutureInfinity),
            Self::SlabPerturbed => Box::new(SlabPerturbed),
        }
    }

    /// Static facts about the family.
    pub fn descriptor(self) -> &'static FamilyDescriptor {
        self.build(Chirality::Right).descriptor()
    }

    /// Registry key.
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    /// Whether the family takes a [`Chirality`].
    pub fn is_chiral(self) -> bool {
        matches!(self, Self::TwoSimplexRotating3 | Self::TwoSimplexRotating5)
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FamilyId {
    type Err = EmbeddingError;

    /// Keys match case-insensitively, with surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EmbeddingError::UnknownFamily { key: s.to_string() })
    }
}
