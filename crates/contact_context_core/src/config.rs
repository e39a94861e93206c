//! Seeding configuration.
//!
//! # Invariants
//! - `secondary_address_probability` lies in `[0.0, 1.0]`.
//! - `batch_size` is at least 1.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Contact count at or above which startup seeding is skipped.
pub const DEFAULT_SEED_THRESHOLD: u64 = 100;
/// Contacts generated per seeding run.
pub const DEFAULT_SEED_BATCH_SIZE: usize = 1000;
/// Chance that a generated contact also gets a PO box address.
pub const DEFAULT_SECONDARY_ADDRESS_PROBABILITY: f64 = 0.3;

/// Tunables for one seeding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedConfig {
    /// Skip seeding when the store already holds this many contacts.
    pub threshold: u64,
    pub batch_size: usize,
    pub secondary_address_probability: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SEED_THRESHOLD,
            batch_size: DEFAULT_SEED_BATCH_SIZE,
            secondary_address_probability: DEFAULT_SECONDARY_ADDRESS_PROBABILITY,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.secondary_address_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.secondary_address_probability,
            ));
        }
        Ok(())
    }
}

/// Invalid seeding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EmptyBatch,
    ProbabilityOutOfRange(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "seed batch size must be at least 1"),
            Self::ProbabilityOutOfRange(value) => write!(
                f,
                "secondary address probability must be within [0, 1], got {value}"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SeedConfig};

    #[test]
    fn default_config_is_valid() {
        let config = SeedConfig::default();
        assert_eq!(config.threshold, 100);
        assert_eq!(config.batch_size, 1000);
        assert!((config.secondary_address_probability - 0.3).abs() < f64::EPSILON);
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn rejects_empty_batch() {
        let config = SeedConfig {
            batch_size: 0,
            ..SeedConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyBatch));
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        for probability in [-0.1, 1.5, f64::NAN] {
            let config = SeedConfig {
                secondary_address_probability: probability,
                ..SeedConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ProbabilityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn accepts_probability_bounds() {
        for probability in [0.0, 1.0] {
            let config = SeedConfig {
                secondary_address_probability: probability,
                ..SeedConfig::default()
            };
            config.validate().expect("bounds are inclusive");
        }
    }
}
