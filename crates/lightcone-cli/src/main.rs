//! Lightcone CLI
//!
//! Generate lattice embeddings and their draw permutations as JSON.

use clap::{Parser, Subcommand};
use lightcone_core::{Chirality, EmbeddingError, Spacetime};
use lightcone_engine::{generate, GenerateConfig};
use lightcone_lattice::FamilyId;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod report;

/// Causal-set lattice embeddings for Hasse diagrams
#[derive(Parser, Debug)]
#[command(name = "lightcone")]
#[command(about = "Generate causal-set lattice coordinates and draw permutations", long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every family with its defaults
    List,

    /// Generate one embedding
    Generate {
        /// Family key, e.g. "2-simplex" or "3D lattice HCP"
        family: String,

        /// Edge length (default: the family's own)
        #[arg(short, long, allow_hyphen_values = true)]
        scale: Option<f64>,

        /// Time stretch (default: 0.001)
        #[arg(short, long, allow_hyphen_values = true)]
        epsilon: Option<f64>,

        /// Ambient spacetime (Minkowski, de Sitter, Schwarzschild)
        #[arg(short = 'S', long, default_value = "Minkowski")]
        spacetime: String,

        /// Rotation sense for the rotating families (right, left)
        #[arg(short, long, default_value = "right")]
        chirality: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Verify every family's permutation against its flat causal order
    Check {
        /// Time stretch (default: each family's own)
        #[arg(short, long, allow_hyphen_values = true)]
        epsilon: Option<f64>,
    },
}

/// `--verbose` forces DEBUG; otherwise `RUST_LOG` applies, falling back to
/// INFO when unset or unparsable.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    match rust_log {
        Some(directives) if !verbose => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        _ => EnvFilter::new(fallback),
    }
}

fn print_json(value: &Value, pretty: bool) -> bool {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => {
            println!("{s}");
            true
        }
        Err(e) => {
            error!("failed to render JSON: {e}");
            false
        }
    }
}

fn parse_config(
    family: &str,
    scale: Option<f64>,
    epsilon: Option<f64>,
    spacetime: &str,
    chirality: &str,
) -> Result<GenerateConfig, EmbeddingError> {
    let id: FamilyId = family.parse()?;
    let spacetime: Spacetime = spacetime.parse()?;
    let chirality: Chirality = chirality.parse()?;
    let mut config = GenerateConfig::new(id)
        .with_spacetime(spacetime)
        .with_chirality(chirality);
    if let Some(s) = scale {
        config = config.with_scale(s);
    }
    if let Some(eps) = epsilon {
        config = config.with_epsilon(eps);
    }
    Ok(config)
}

fn run_generate(
    family: &str,
    scale: Option<f64>,
    epsilon: Option<f64>,
    spacetime: &str,
    chirality: &str,
    pretty: bool,
) -> ExitCode {
    let config = match parse_config(family, scale, epsilon, spacetime, chirality) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    debug!(?config, "generating");

    match generate(&config) {
        Ok(e) if print_json(&report::embedding_json(config.family, &e), pretty) => {
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run_check(epsilon: Option<f64>) -> ExitCode {
    let mut failed = 0usize;
    for id in FamilyId::ALL {
        match report::check_family(id, epsilon) {
            Ok(outcome) => {
                if !outcome.passed {
                    failed += 1;
                }
                if !print_json(&outcome.json, false) {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                error!("{id}: {e}");
                failed += 1;
            }
        }
    }
    if failed == 0 {
        info!("all {} families match their declared draw order", FamilyId::ALL.len());
        ExitCode::SUCCESS
    } else {
        error!("{failed} families failed the draw-order check");
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }

    match args.command {
        Command::List => {
            let all_printed = FamilyId::ALL
                .iter()
                .all(|id| print_json(&report::descriptor_json(id.descriptor()), false));
            if all_printed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Generate {
            family,
            scale,
            epsilon,
            spacetime,
            chirality,
            pretty,
        } => run_generate(&family, scale, epsilon, &spacetime, &chirality, pretty),
        Command::Check { epsilon } => run_check(epsilon),
    }
}
