//! The dispatcher.

use crate::config::GenerateConfig;
use lightcone_core::{Embedding, EmbeddingError};
use lightcone_lattice::embed;
use tracing::{debug, warn};

/// Generate the embedding described by `config`.
///
/// Fails with [`EmbeddingError::InvalidConfiguration`] before any
/// arithmetic when the family has no layout for the spacetime. A
/// non-positive or non-finite scale is logged and passed through.
pub fn generate(config: &GenerateConfig) -> Result<Embedding, EmbeddingError> {
    if !(config.scale.is_finite() && config.scale > 0.0) {
        warn!(
            family = %config.family,
            scale = config.scale,
            "degenerate scale, output will be collapsed or mirrored"
        );
    }
    if let Err(e) = config.validate() {
        debug!(family = %config.family, spacetime = %config.spacetime, "rejected: {e}");
        return Err(e);
    }
    let family = config.family.build(config.chirality);
    let embedding = embed(family.as_ref(), config.scale, config.epsilon, config.spacetime)?;
    debug!(
        family = %config.family,
        scale = config.scale,
        epsilon = config.epsilon,
        spacetime = %config.spacetime,
        points = embedding.len(),
        "generated {}",
        embedding.name()
    );
    Ok(embedding)
}

/// Generate by family key and spacetime name, with the family's default
/// epsilon and right-handed rotation.
pub fn generate_by_key(key: &str, scale: f64, spacetime: &str) -> Result<Embedding, EmbeddingError> {
    let config = GenerateConfig::from_key(key)?
        .with_scale(scale)
        .with_spacetime(spacetime.parse()?);
    generate(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightcone_core::Spacetime;
    use lightcone_lattice::FamilyId;

    #[test]
    fn every_family_generates_with_defaults() {
        for id in FamilyId::ALL {
            let e = generate(&GenerateConfig::new(id)).unwrap();
            assert_eq!(e.len(), id.descriptor().len, "{id}");
        }
    }

    #[test]
    fn unknown_spacetime_name_fails_before_generation() {
        assert_eq!(
            generate_by_key("1-simplex", 1.2, "anti de Sitter"),
            Err(EmbeddingError::UnknownSpacetime {
                name: "anti de Sitter".into()
            })
        );
    }

    #[test]
    fn zero_scale_collapses_without_error() {
        let e = generate(&GenerateConfig::new(FamilyId::Hcp).with_scale(0.0)).unwrap();
        assert!(e.coordinates().iter().flatten().all(|v| *v == 0.0));
    }

    #[test]
    fn negative_scale_mirrors() {
        let pos = generate(&GenerateConfig::new(FamilyId::Lattice2D).with_scale(1.0)).unwrap();
        let neg = generate(&GenerateConfig::new(FamilyId::Lattice2D).with_scale(-1.0)).unwrap();
        for (p, q) in pos.coordinates().iter().zip(neg.coordinates()) {
            for (x, y) in p.iter().zip(q.iter()) {
                assert_eq!(*x, -*y);
            }
        }
    }

    #[test]
    fn black_hole_one_simplex_by_key() {
        let e = generate_by_key("1-simplex", 1.2, "Schwarzschild").unwrap();
        assert_eq!(e.coordinates().points()[0][1], 0.47);
        assert_eq!(
            generate_by_key("3D lattice", 0.6, "de Sitter").map(|e| e.len()),
            Err(EmbeddingError::InvalidConfiguration {
                family: "3D lattice",
                spacetime: Spacetime::DeSitter,
            })
        );
    }
}
