use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::data::test_size;
use crate::features::N_FEATURES;

/// Settings for building the valuation model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Args)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of synthetic properties to generate
    #[arg(long, default_value_t = 1000)]
    pub n_samples: usize,

    /// Seed of the random stream used for generation and splitting
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Fraction of rows held out for evaluation, in [0, 1)
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            seed: 42,
            test_fraction: 0.2,
        }
    }
}

impl ModelConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            anyhow::bail!(
                "test_fraction must be in range [0, 1), got {}",
                self.test_fraction
            );
        }

        let n_train = self.n_samples - test_size(self.n_samples, self.test_fraction);
        if n_train < N_FEATURES + 1 {
            anyhow::bail!(
                "Need at least {} training rows, n_samples = {} with test_fraction = {} leaves {}",
                N_FEATURES + 1,
                self.n_samples,
                self.test_fraction,
                n_train
            );
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ModelConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
