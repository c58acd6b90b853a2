//! Configuration for a game session.

use crate::dice::Distribution;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Distribution preselected on the setup screen.
    pub distribution: Distribution,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            distribution: Distribution::Real,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the preselected distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.distribution, Distribution::Real);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_distribution(Distribution::Uniform);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.distribution, Distribution::Uniform);
    }
}
