//! Generation configuration and validation.
//!
//! [`GenerateConfig`] is the input to [`generate`](crate::generate). Defaults
//! come from the selected family's descriptor, never from global state.
//! [`validate()`](GenerateConfig::validate) checks the one structural
//! constraint: the family must have a layout for the spacetime.

use lightcone_core::{Chirality, EmbeddingError, Spacetime};
use lightcone_lattice::FamilyId;

/// Everything one generation depends on.
///
/// # Examples
///
/// ```
/// use lightcone_core::Spacetime;
/// use lightcone_engine::GenerateConfig;
/// use lightcone_lattice::FamilyId;
///
/// let config = GenerateConfig::new(FamilyId::TwoSimplex)
///     .with_spacetime(Spacetime::DeSitter)
///     .with_scale(2.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.epsilon, 0.001);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    /// Which lattice family to generate.
    pub family: FamilyId,
    /// Edge length. Default: the family's default scale.
    pub scale: f64,
    /// Time stretch. Default: 0.001.
    pub epsilon: f64,
    /// Ambient spacetime. Default: flat.
    pub spacetime: Spacetime,
    /// Handedness for the rotating families. Default: right-handed.
    pub chirality: Chirality,
}

impl GenerateConfig {
    /// Defaults for `family`.
    pub fn new(family: FamilyId) -> Self {
        let d = family.descriptor();
        Self {
            family,
            scale: d.default_scale,
            epsilon: d.default_epsilon,
            spacetime: Spacetime::default(),
            chirality: Chirality::default(),
        }
    }

    /// Defaults for the family registered under `key`.
    pub fn from_key(key: &str) -> Result<Self, EmbeddingError> {
        Ok(Self::new(key.parse()?))
    }

    /// Set the edge length.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the time stretch.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the ambient spacetime.
    pub fn with_spacetime(mut self, spacetime: Spacetime) -> Self {
        self.spacetime = spacetime;
        self
    }

    /// Set the rotation sense.
    pub fn with_chirality(mut self, chirality: Chirality) -> Self {
        self.chirality = chirality;
        self
    }

    /// Check the family supports the spacetime.
    ///
    /// Scale and epsilon are not checked: degenerate values give degenerate
    /// output, not an error.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.family.descriptor().spacetimes.contains(&self.spacetime) {
            Ok(())
        } else {
            Err(EmbeddingError::InvalidConfiguration {
                family: self.family.key(),
                spacetime: self.spacetime,
            })
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new(FamilyId::OneSimplex)
    }
}
