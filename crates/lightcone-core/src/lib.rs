//! Core types for Lightcone lattice embeddings.
//!
//! This crate is the leaf dependency of the Lightcone workspace. It defines
//! the value types every generator produces and consumes:
//!
//! - [`Point`] and [`CoordinateSet`]: time-first coordinate rows
//! - [`Permutation`]: draw position to causal label mapping
//! - [`Spacetime`] and [`Chirality`]: selectors for layouts and handedness
//! - [`Embedding`]: the `(name, permutation, coordinates)` output triple
//! - [`EmbeddingError`]: the single error type raised across the workspace
//!
//! plus the two numeric normalizers applied to every embedding, the
//! [`perturb`] time stretch and the [`centre`] midpoint shift.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod centre;
pub mod coords;
pub mod embedding;
pub mod error;
pub mod hash;
pub mod permutation;
pub mod perturb;
pub mod spacetime;

pub use centre::{is_centred, recentre};
pub use coords::{CoordinateSet, Point};
pub use embedding::Embedding;
pub use error::EmbeddingError;
pub use permutation::Permutation;
pub use perturb::{perturb, perturb_slice, perturb_times, DEFAULT_EPSILON};
pub use spacetime::{Chirality, Spacetime};
