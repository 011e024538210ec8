//! Benchmark profiles for Lightcone.
//!
//! - [`all_families`]: every family at its defaults, both chiralities for
//!   the rotating ones
//! - [`largest`]: the families with the most points, where order checks
//!   dominate

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lightcone_core::Chirality;
use lightcone_engine::GenerateConfig;
use lightcone_lattice::FamilyId;

/// Every family at its default scale and epsilon.
///
/// Chiral families appear twice, once per [`Chirality`].
pub fn all_families() -> Vec<GenerateConfig> {
    let mut out = Vec::with_capacity(FamilyId::ALL.len() + 2);
    for id in FamilyId::ALL {
        out.push(GenerateConfig::new(id));
        if id.is_chiral() {
            out.push(GenerateConfig::new(id).with_chirality(Chirality::Left));
        }
    }
    out
}

/// The 4D lattice, the full slab and the perturbed slab (82 to 96 points).
pub fn largest() -> Vec<GenerateConfig> {
    [
        FamilyId::Octahedral4D,
        FamilyId::Slab,
        FamilyId::SlabPerturbed,
    ]
    .into_iter()
    .map(GenerateConfig::new)
    .collect()
}
