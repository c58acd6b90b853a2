//! Roll distributions and dice sampling.
//!
//! Every roll produces a sum in 2..=12. `Real` simulates two physical
//! six-sided dice, so sums follow the triangular 2d6 distribution with
//! its peak at 7. `Uniform` draws the sum directly, giving every value
//! the same probability.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The smallest possible roll sum.
pub const MIN_SUM: u32 = 2;

/// The largest possible roll sum.
pub const MAX_SUM: u32 = 12;

/// How roll sums are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// Sum of two independent d6 draws (triangular, peak at 7).
    Real,
    /// One uniform draw in 2..=12 (flat).
    Uniform,
}

impl Distribution {
    /// Parse a distribution from a name like "real" or "uniform".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "real" | "2d6" => Some(Self::Real),
            "uniform" | "flat" => Some(Self::Uniform),
            _ => None,
        }
    }

    /// Toggle to the other distribution.
    pub fn toggled(self) -> Self {
        match self {
            Self::Real => Self::Uniform,
            Self::Uniform => Self::Real,
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "Real"),
            Self::Uniform => write!(f, "Uniform"),
        }
    }
}

/// Sample one roll sum from the given distribution.
pub fn roll_dice(distribution: Distribution, rng: &mut StdRng) -> u32 {
    match distribution {
        Distribution::Real => rng.random_range(1..=6) + rng.random_range(1..=6),
        Distribution::Uniform => rng.random_range(MIN_SUM..=MAX_SUM),
    }
}
