//! JSON rendering of descriptors, embeddings and order checks.

use lightcone_core::{Embedding, EmbeddingError};
use lightcone_engine::{generate, GenerateConfig};
use lightcone_lattice::{check_draw_order, FamilyDescriptor, FamilyId};
use serde_json::{json, Value};

/// One `list` entry.
pub fn descriptor_json(d: &FamilyDescriptor) -> Value {
    json!({
        "key": d.key,
        "name": d.name,
        "dim": d.dim,
        "len": d.len,
        "spacetimes": d.spacetimes.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "default_scale": d.default_scale,
        "default_epsilon": d.default_epsilon,
        "recentre": d.recentre,
        "draw_order": d.draw_order.name(),
    })
}

/// The `generate` output.
pub fn embedding_json(family: FamilyId, e: &Embedding) -> Value {
    json!({
        "name": e.name(),
        "family": family.key(),
        "dim": e.dim(),
        "permutation": e.permutation().labels(),
        "coordinates": e.coordinates().to_rows(),
        "fingerprint": format!("{:016x}", e.fingerprint()),
    })
}

/// Outcome of checking one family's draw order.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The report as JSON.
    pub json: Value,
    /// Whether the family matched its declared class.
    pub passed: bool,
}

/// Generate `family` with its defaults (and `epsilon` if given) and compare
/// its permutation with the flat causal order.
pub fn check_family(family: FamilyId, epsilon: Option<f64>) -> Result<CheckOutcome, EmbeddingError> {
    let mut config = GenerateConfig::new(family);
    if let Some(eps) = epsilon {
        config = config.with_epsilon(eps);
    }
    let e = generate(&config)?;
    let report = check_draw_order(&e);
    let declared = family.descriptor().draw_order;
    let passed = report.satisfies(declared);
    Ok(CheckOutcome {
        json: json!({
            "family": family.key(),
            "declared": declared.name(),
            "missing": report.missing.len(),
            "extra": report.extra.len(),
            "passed": passed,
        }),
        passed,
    })
}
