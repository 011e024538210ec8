//! Error types for embedding generation.

use crate::spacetime::Spacetime;
use std::fmt;

/// Errors arising from selecting or generating an embedding.
///
/// Generators themselves only ever return
/// [`InvalidConfiguration`](Self::InvalidConfiguration); the remaining
/// variants come from parsing selector strings before any generator runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbeddingError {
    /// The family has no layout for the requested spacetime.
    InvalidConfiguration {
        /// Registry key of the family.
        family: &'static str,
        /// The unsupported spacetime.
        spacetime: Spacetime,
    },
    /// No family is registered under this key.
    UnknownFamily {
        /// The key as given.
        key: String,
    },
    /// The spacetime name matches no known background.
    UnknownSpacetime {
        /// The name as given.
        name: String,
    },
    /// The chirality name is neither right- nor left-handed.
    UnknownChirality {
        /// The name as given.
        name: String,
    },
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { family, spacetime } => {
                write!(f, "family '{family}' is not implemented for {spacetime} spacetime")
            }
            Self::UnknownFamily { key } => write!(f, "unknown lattice family '{key}'"),
            Self::UnknownSpacetime { name } => write!(f, "unknown spacetime '{name}'"),
            Self::UnknownChirality { name } => {
                write!(f, "unknown chirality '{name}' (expected right or left)")
            }
        }
    }
}

impl std::error::Error for EmbeddingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_family_and_spacetime() {
        let e = EmbeddingError::InvalidConfiguration {
            family: "2-simplex",
            spacetime: Spacetime::BlackHole,
        };
        assert_eq!(
            e.to_string(),
            "family '2-simplex' is not implemented for Schwarzschild spacetime"
        );
    }
}
