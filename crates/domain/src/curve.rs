use crate::constants::WAD;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One segment of a multi-segment bonding curve.
///
/// Ticks are expressed from token0's perspective. `shares` is the WAD-scaled
/// fraction of the total supply this segment receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Curve {
    /// Lower tick bound.
    pub tick_lower: i32,
    /// Upper tick bound.
    pub tick_upper: i32,
    /// Number of discrete positions this segment decomposes into.
    pub num_positions: u16,
    /// Weight of the total supply, scaled by [`WAD`].
    pub shares: u128,
}

impl Curve {
    /// Creates a new curve.
    #[must_use]
    pub fn new(tick_lower: i32, tick_upper: i32, num_positions: u16, shares: u128) -> Self {
        Self {
            tick_lower,
            tick_upper,
            num_positions,
            shares,
        }
    }

    /// Returns the share as a fraction of one, e.g. `0.25` for `WAD / 4`.
    ///
    /// Returns `None` when the share is too large for a decimal.
    pub fn share_fraction(&self) -> Option<Decimal> {
        let shares = i128::try_from(self.shares).ok()?;
        let scale = WAD.ilog10();
        Decimal::try_from_i128_with_scale(shares, scale)
            .ok()
            .map(|d| d.normalize())
    }

    /// Width of the curve in ticks.
    pub fn width(&self) -> i64 {
        i64::from(self.tick_upper) - i64::from(self.tick_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_share_fraction() {
        let curve = Curve::new(0, 100, 1, WAD / 4);
        assert_eq!(curve.share_fraction(), Some(dec!(0.25)));

        let full = Curve::new(0, 100, 1, WAD);
        assert_eq!(full.share_fraction(), Some(dec!(1)));

        let huge = Curve::new(0, 100, 1, u128::MAX);
        assert_eq!(huge.share_fraction(), None);
    }

    #[test]
    fn test_width() {
        assert_eq!(Curve::new(-100, 100, 1, WAD).width(), 200);
    }

    #[test]
    fn test_json_shape() {
        let curve = Curve::new(160_000, 240_000, 5, WAD / 10);
        let json = serde_json::to_string(&curve).unwrap();
        let back: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
        assert!(json.contains("\"num_positions\":5"));
    }
}
