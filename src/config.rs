//! Run configuration and startup validation.

use crate::render::Shape;
use std::time::Duration;

/// Error type for invalid run configuration. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("insert-pii-percentage must be within [0, 1], got {0}")]
    InsertPiiPercentage(f64),

    #[error("insert-label-pii-percentage must be within [0, 1], got {0}")]
    InsertLabelPiiPercentage(f64),

    #[error("timeout-seconds must be positive")]
    Timeout,

    #[error("workers must be positive")]
    Workers,
}

/// Configuration surface consumed by the payload generator and runner.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Probability of promoting a PII-free payload to a PII-bearing one.
    pub insert_pii_percentage: f64,
    /// Upper bound on the fraction of one category injected.
    pub insert_label_pii_percentage: f64,
    /// Per-descriptor wall-clock deadline.
    pub timeout: Duration,
    /// Concurrency model selector: sequential or worker pool.
    pub multi_threaded: bool,
    /// Worker pool size when `multi_threaded` is set.
    pub workers: usize,
    /// Base RNG seed; a fixed seed reproduces the dataset exactly.
    pub seed: u64,
    /// Output payload shape.
    pub shape: Shape,
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.insert_pii_percentage) {
            return Err(ConfigError::InsertPiiPercentage(self.insert_pii_percentage));
        }
        if !(0.0..=1.0).contains(&self.insert_label_pii_percentage) {
            return Err(ConfigError::InsertLabelPiiPercentage(
                self.insert_label_pii_percentage,
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Timeout);
        }
        if self.workers == 0 {
            return Err(ConfigError::Workers);
        }
        Ok(())
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            insert_pii_percentage: 0.6,
            insert_label_pii_percentage: 0.05,
            timeout: Duration::from_secs(400),
            multi_threaded: false,
            workers: 10,
            seed: 0,
            shape: Shape::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GenerateConfig::default().validate().is_ok());
    }

    #[test]
    fn test_percentage_bounds() {
        let mut config = GenerateConfig {
            insert_pii_percentage: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InsertPiiPercentage(_))
        ));
        config.insert_pii_percentage = 0.5;
        config.insert_label_pii_percentage = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InsertLabelPiiPercentage(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = GenerateConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Timeout)));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = GenerateConfig {
            workers: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Workers)));
    }
}
