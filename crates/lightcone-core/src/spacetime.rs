//! Ambient spacetime and handedness selectors.

use crate::error::EmbeddingError;
use std::fmt;
use std::str::FromStr;

/// Metric background selecting which coordinate layout a family uses.
///
/// Parsing is case-insensitive and accepts the aliases used by plotting
/// front ends: the empty string, `flat` and `Minkowski` all select
/// [`Spacetime::Flat`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Spacetime {
    /// Flat Minkowski spacetime.
    #[default]
    Flat,
    /// De Sitter spacetime: layers are spread further apart in time.
    DeSitter,
    /// Schwarzschild black hole: only the 1-simplex has a layout.
    BlackHole,
}

impl Spacetime {
    /// Every variant, in declaration order.
    pub const ALL: [Spacetime; 3] = [Self::Flat, Self::DeSitter, Self::BlackHole];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "Minkowski",
            Self::DeSitter => "de Sitter",
            Self::BlackHole => "Schwarzschild",
        }
    }
}

impl fmt::Display for Spacetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spacetime {
    type Err = EmbeddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "flat" | "minkowski" => Ok(Self::Flat),
            "de sitter" | "de-sitter" | "desitter" => Ok(Self::DeSitter),
            "black hole" | "black-hole" | "blackhole" | "schwarzschild" => Ok(Self::BlackHole),
            _ => Err(EmbeddingError::UnknownSpacetime {
                name: s.to_string(),
            }),
        }
    }
}

/// Handedness of the rotating 2-simplex families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Chirality {
    /// Counter-clockwise rotation (`+1`).
    #[default]
    Right,
    /// Clockwise rotation (`-1`), the mirror image of [`Chirality::Right`].
    Left,
}

impl Chirality {
    /// `+1.0` for right-handed, `-1.0` for left-handed.
    pub fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// `"right-handed"` or `"left-handed"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Right => "right-handed",
            Self::Left => "left-handed",
        }
    }
}

impl fmt::Display for Chirality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chirality {
    type Err = EmbeddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "right-handed" | "+1" | "1" => Ok(Self::Right),
            "left" | "left-handed" | "-1" => Ok(Self::Left),
            _ => Err(EmbeddingError::UnknownChirality {
                name: s.to_string(),
            }),
        }
    }
}
