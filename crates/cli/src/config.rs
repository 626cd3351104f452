//! Pool configuration files read by the CLI.

use anyhow::{Context, Result};
use multicurve_domain::{Curve, TokenAmount};
use multicurve_engine::config::DistributionConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A curve set and its supplies as written in a JSON file.
///
/// Token amounts are decimal strings so that values above `u64::MAX` survive
/// JSON round trips.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    pub tick_spacing: i32,
    pub is_token0: bool,
    pub total_supply: String,
    #[serde(default)]
    pub head_supply: Option<String>,
    #[serde(default)]
    pub distal_weight: Option<u128>,
    pub curves: Vec<Curve>,
}

impl PoolConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn total_supply(&self) -> Result<TokenAmount> {
        parse_amount(&self.total_supply)
    }

    pub fn head_supply(&self) -> Result<TokenAmount> {
        match &self.head_supply {
            Some(value) => parse_amount(value),
            None => Ok(TokenAmount::zero()),
        }
    }

    pub fn distribution(&self) -> DistributionConfig {
        match self.distal_weight {
            Some(weight) => DistributionConfig::new().with_distal_weight(weight),
            None => DistributionConfig::default(),
        }
    }

    /// Number of positions the composer emits for this configuration.
    pub fn position_count(&self) -> Result<u64> {
        let curves: u64 = self
            .curves
            .iter()
            .map(|c| u64::from(c.num_positions))
            .sum();
        let head = u64::from(!self.head_supply()?.is_zero());
        Ok(curves + head)
    }
}

pub fn parse_amount(value: &str) -> Result<TokenAmount> {
    TokenAmount::from_dec_str(value.trim())
        .with_context(|| format!("Invalid token amount: {value}"))
}
