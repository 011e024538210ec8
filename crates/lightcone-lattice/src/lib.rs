//! Causal-set lattice families for Lightcone.
//!
//! Each family produces a fixed set of events in Minkowski-like spacetime
//! together with the permutation a layered Hasse-diagram renderer uses to
//! draw them. Families implement the [`Family`] trait; [`embed`] runs the
//! shared pipeline and [`FamilyId`] selects families by key.
//!
//! # Families
//!
//! - Simplices: [`OneSimplex`], [`TwoSimplex`], [`ThreeSimplex`],
//!   [`FlippedOnce`], [`FlippedTwice`], [`RotatingThree`], [`RotatingFive`]
//! - Null lattices: [`Lattice2D`], [`Octahedral3D`], [`Octahedral3DCut`],
//!   [`Octahedral4D`]
//! - Close packings: [`Hcp`], [`Fcc`], [`Rhombohedral`]
//! - Slabs: [`Slab`], [`SlabPastInfinity`], [`SlabFutureInfinity`],
//!   [`SlabPerturbed`]
//!
//! # Verification
//!
//! [`order::check_draw_order`] recomputes the flat causal order from an
//! embedding and reports pairs the permutation draws out of order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod family;
pub mod fcc;
pub mod flipped;
pub mod hcp;
pub mod lattice2d;
pub mod octahedral;
pub mod order;
pub mod registry;
pub mod rhombohedral;
pub mod rotating;
pub mod simplex;
pub mod slab;

#[cfg(test)]
pub(crate) mod compliance;

pub use family::{embed, DrawOrder, Family, FamilyDescriptor};
pub use fcc::Fcc;
pub use flipped::{FlippedOnce, FlippedTwice};
pub use hcp::Hcp;
pub use lattice2d::Lattice2D;
pub use octahedral::{Octahedral3D, Octahedral3DCut, Octahedral4D};
pub use order::{check_draw_order, OrderReport};
pub use registry::FamilyId;
pub use rhombohedral::Rhombohedral;
pub use rotating::{RotatingFive, RotatingThree};
pub use simplex::{OneSimplex, ThreeSimplex, TwoSimplex};
pub use slab::{Slab, SlabFutureInfinity, SlabPastInfinity, SlabPerturbed};
