//! The `Family` trait and the shared embedding pipeline.

use lightcone_core::{
    perturb_times, recentre, CoordinateSet, Embedding, EmbeddingError, Permutation, Spacetime,
};

/// Relationship between a family's permutation literal and the causal order
/// recomputed from its flat coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawOrder {
    /// The permutation's two-dimensional order equals the coordinate order.
    Exact,
    /// Every coordinate relation appears in the permutation's order; the
    /// permutation may relate further pairs.
    Extension,
    /// The literal follows the abstract lattice and draws some causally
    /// related pairs out of order in the flat embedding.
    Schematic,
}

impl DrawOrder {
    /// Lower-case label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Extension => "extension",
            Self::Schematic => "schematic",
        }
    }
}

/// Static facts about a lattice family.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyDescriptor {
    /// Registry key, e.g. `"3D lattice HCP"`.
    pub key: &'static str,
    /// Display name. Chiral families substitute their handedness at runtime.
    pub name: &'static str,
    /// Components per point (time plus space).
    pub dim: usize,
    /// Number of points.
    pub len: usize,
    /// Spacetimes the family has a layout for.
    pub spacetimes: &'static [Spacetime],
    /// Edge length used when the caller does not choose one.
    pub default_scale: f64,
    /// Time stretch used when the caller does not choose one.
    pub default_epsilon: f64,
    /// Whether the output is shifted to be symmetric about the origin.
    pub recentre: bool,
    /// How the permutation literal relates to the flat causal order.
    pub draw_order: DrawOrder,
}

/// Flat spacetime only.
pub(crate) const FLAT: &[Spacetime] = &[Spacetime::Flat];
/// Flat and de Sitter layouts.
pub(crate) const FLAT_DE_SITTER: &[Spacetime] = &[Spacetime::Flat, Spacetime::DeSitter];
/// Every background.
pub(crate) const ANY_SPACETIME: &[Spacetime] = &Spacetime::ALL;

/// A deterministic lattice family.
///
/// Implementors hold no mutable state; every method is a pure function of
/// its arguments. Object-safe so the registry can hand out
/// `Box<dyn Family>`.
pub trait Family: Send + Sync + 'static {
    /// Static facts about this family.
    fn descriptor(&self) -> &'static FamilyDescriptor;

    /// Human-readable name attached to the embedding.
    fn name(&self) -> String {
        self.descriptor().name.to_string()
    }

    /// Draw position to causal label mapping.
    fn permutation(&self) -> Permutation;

    /// Raw coordinates: time unperturbed and not recentred.
    ///
    /// `spacetime` must satisfy [`supports`](Family::supports);
    /// unsupported values fall back to the flat layout. Use [`embed`] for
    /// checked generation.
    fn coordinates(&self, scale: f64, spacetime: Spacetime) -> CoordinateSet;

    /// Whether a layout exists for `spacetime`.
    fn supports(&self, spacetime: Spacetime) -> bool {
        self.descriptor().spacetimes.contains(&spacetime)
    }

    /// `Ok` when [`supports`](Family::supports) holds, otherwise
    /// [`EmbeddingError::InvalidConfiguration`].
    fn check(&self, spacetime: Spacetime) -> Result<(), EmbeddingError> {
        if self.supports(spacetime) {
            Ok(())
        } else {
            Err(EmbeddingError::InvalidConfiguration {
                family: self.descriptor().key,
                spacetime,
            })
        }
    }
}

/// Generate a complete embedding for `family`.
///
/// Rejects unsupported spacetimes before any arithmetic, then builds the
/// raw coordinates, stretches time by `1 + epsilon` and recentres when the
/// family asks for it. `scale` and `epsilon` are not validated.
pub fn embed(
    family: &dyn Family,
    scale: f64,
    epsilon: f64,
    spacetime: Spacetime,
) -> Result<Embedding, EmbeddingError> {
    family.check(spacetime)?;
    let mut coords = family.coordinates(scale, spacetime);
    perturb_times(&mut coords, epsilon);
    if family.descriptor().recentre {
        recentre(&mut coords);
    }
    Ok(Embedding::new(family.name(), family.permutation(), coords))
}

/// Time of every layer for layered families: `layers[k] * unit`.
pub(crate) fn layer_times<const N: usize>(layers: [f64; N], unit: f64) -> [f64; N] {
    layers.map(|k| k * unit)
}

/// Build a point set from integer lattice sites.
///
/// Every component is multiplied by `unit`; time is stretched later by
/// [`embed`].
pub(crate) fn integer_sites<const N: usize>(table: &[[i8; N]], unit: f64) -> CoordinateSet {
    let mut set = CoordinateSet::with_capacity(N, table.len());
    for site in table {
        set.push(site.iter().map(|&k| f64::from(k) * unit).collect());
    }
    set
}
