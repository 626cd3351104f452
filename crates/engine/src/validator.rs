//! Curve set validation.

use multicurve_domain::constants::WAD;
use multicurve_domain::{Curve, CurveError};
use tracing::warn;

/// Checks a curve set is well formed.
///
/// Curves are checked in order, so the first offending curve determines the
/// error. Shares must sum to exactly one WAD; there is no rounding tolerance.
pub fn validate(curves: &[Curve]) -> Result<(), CurveError> {
    let result = check(curves);
    if let Err(err) = &result {
        warn!(curves = curves.len(), error = %err, "Rejected curve configuration");
    }
    result
}

fn check(curves: &[Curve]) -> Result<(), CurveError> {
    if curves.is_empty() {
        return Err(CurveError::EmptyCurves);
    }

    let mut total_shares: u128 = 0;
    for (index, curve) in curves.iter().enumerate() {
        if curve.num_positions == 0 {
            return Err(CurveError::ZeroPosition { index });
        }
        if curve.shares == 0 {
            return Err(CurveError::ZeroShare { index });
        }
        total_shares = total_shares
            .checked_add(curve.shares)
            .ok_or(CurveError::InvalidTotalShares)?;
    }

    if total_shares != WAD {
        return Err(CurveError::InvalidTotalShares);
    }
    Ok(())
}
