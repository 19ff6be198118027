use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MiningError, Result};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.03;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_MIN_LIFT: f64 = 1.0;

/// Thresholds for one mining run.
///
/// `min_lift = None` turns the lift filter off; lift is still computed and
/// reported for every rule. Leaving `min_lift` out of a config file, or out
/// of `Default`, means no lift filter. The batch CLI applies
/// [`DEFAULT_MIN_LIFT`] itself when no config file is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_lift: None,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64, min_lift: Option<f64>) -> Self {
        Self {
            min_support,
            min_confidence,
            min_lift,
        }
    }

    pub fn with_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = Some(min_lift);
        self
    }

    pub fn without_lift(mut self) -> Self {
        self.min_lift = None;
        self
    }

    /// Load thresholds from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MiningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_fraction("min_support", self.min_support)?;
        check_fraction("min_confidence", self.min_confidence)?;
        if let Some(lift) = self.min_lift {
            if !lift.is_finite() || lift < 0.0 {
                return Err(MiningError::InvalidThreshold {
                    name: "min_lift",
                    value: lift,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn passes_lift(&self, lift: f64) -> bool {
        self.min_lift.map_or(true, |min| lift >= min)
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}
