//! Configuration and dispatch for Lightcone lattice embeddings.
//!
//! [`GenerateConfig`] carries every input to one generation explicitly;
//! [`generate`] validates it, instantiates the selected family and runs the
//! shared embedding pipeline. Generation is stateless and free of I/O, so
//! calls from independent threads need no coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;

pub use config::GenerateConfig;
pub use generate::{generate, generate_by_key};
