//! Lightcone: deterministic coordinate embeddings of causal-set lattices.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Lightcone sub-crates. Each lattice family yields a permutation (the order
//! in which a Hasse-diagram renderer draws its points) together with a
//! coordinate set whose time axis is stretched slightly so that light-like
//! pairs become strictly causal.
//!
//! # Quick start
//!
//! ```rust
//! use lightcone::prelude::*;
//!
//! // The three-point 1-simplex at its default edge length.
//! let e = generate(&GenerateConfig::new(FamilyId::OneSimplex)).unwrap();
//! assert_eq!(e.name(), "1-simplex");
//! assert_eq!(e.permutation().labels(), &[2, 1, 3]);
//! assert_eq!(e.dim(), 2);
//!
//! // The drawn order agrees with the flat causal order exactly.
//! assert!(check_draw_order(&e).is_exact());
//!
//! // Unsupported backgrounds are rejected, not approximated.
//! let err = generate_by_key("2-simplex", 1.2, "Schwarzschild").unwrap_err();
//! assert!(matches!(err, EmbeddingError::InvalidConfiguration { .. }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lightcone-core` | Coordinates, permutations, spacetimes, errors, fingerprints |
//! | [`lattice`] | `lightcone-lattice` | Family trait, the eighteen families, order verification |
//! | [`engine`] | `lightcone-engine` | Generation config and the family dispatcher |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`lightcone-core`).
///
/// Contains [`types::CoordinateSet`], [`types::Permutation`],
/// [`types::Embedding`], the [`types::Spacetime`] and [`types::Chirality`]
/// selectors, and the time-stretch and recentring transforms.
pub use lightcone_core as types;

/// Lattice families and causal-order checks (`lightcone-lattice`).
///
/// Provides the [`lattice::Family`] trait, one type per family, the
/// [`lattice::FamilyId`] registry and [`lattice::check_draw_order`].
pub use lightcone_lattice as lattice;

/// Generation entry points (`lightcone-engine`).
///
/// [`engine::generate`] for a validated [`engine::GenerateConfig`],
/// [`engine::generate_by_key`] for string-keyed callers.
pub use lightcone_engine as engine;

/// Common imports for typical Lightcone usage.
///
/// ```rust
/// use lightcone::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lightcone_core::{
        Chirality, CoordinateSet, Embedding, EmbeddingError, Permutation, Point, Spacetime,
    };

    // Families
    pub use lightcone_lattice::{
        check_draw_order, DrawOrder, Family, FamilyDescriptor, FamilyId, OrderReport,
    };

    // Engine
    pub use lightcone_engine::{generate, generate_by_key, GenerateConfig};
}
