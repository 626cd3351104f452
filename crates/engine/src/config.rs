//! Tuning for the log-normal distribution.

use multicurve_domain::CurveError;
use multicurve_domain::constants::WAD;
use serde::{Deserialize, Serialize};

/// Configuration for the per-curve liquidity decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Weight of the distal bucket relative to the proximal one, scaled by WAD.
    /// `WAD` gives a flat curve.
    pub distal_weight: u128,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            distal_weight: WAD / 4, // distal bucket gets a quarter of the proximal liquidity
        }
    }
}

impl DistributionConfig {
    /// Creates a configuration with the default decay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distal weight.
    #[must_use]
    pub fn with_distal_weight(mut self, distal_weight: u128) -> Self {
        self.distal_weight = distal_weight;
        self
    }

    /// Checks the distal weight lies in `(0, WAD]`.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.distal_weight == 0 || self.distal_weight > WAD {
            return Err(CurveError::InvalidDistalWeight(self.distal_weight));
        }
        Ok(())
    }
}
