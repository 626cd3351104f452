//! Re-anchoring a curve set at migration time.

use crate::error::Result;
use crate::validator::validate;
use multicurve_domain::math::{
    is_range_ordered, is_tick_aligned, is_tick_in_bounds, is_tick_spacing_valid,
};
use multicurve_domain::{Curve, MathError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A curve set moved to a new starting tick, with its outer boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedCurves {
    pub curves: Vec<Curve>,
    pub lower_tick_boundary: i32,
    pub upper_tick_boundary: i32,
}

/// Shifts every curve by `offset`, mirroring the ranges when the sold token is token1.
///
/// With `is_token0` each range becomes `[lower + offset, upper + offset]`;
/// otherwise `[offset - upper, offset - lower]`. Position counts and shares are
/// carried over unchanged. The offset and every input bound must be aligned to
/// `tick_spacing`.
pub fn adjust_curves(
    curves: &[Curve],
    offset: i32,
    tick_spacing: i32,
    is_token0: bool,
) -> Result<AdjustedCurves> {
    validate(curves)?;
    is_tick_spacing_valid(tick_spacing)?;
    is_tick_aligned(offset, tick_spacing)?;

    let mut adjusted = Vec::with_capacity(curves.len());
    let mut lower_tick_boundary = i32::MAX;
    let mut upper_tick_boundary = i32::MIN;

    for curve in curves {
        is_tick_aligned(curve.tick_lower, tick_spacing)?;
        is_tick_aligned(curve.tick_upper, tick_spacing)?;

        let (tick_lower, tick_upper) = if is_token0 {
            (shift(curve.tick_lower, offset)?, shift(curve.tick_upper, offset)?)
        } else {
            (mirror(curve.tick_upper, offset)?, mirror(curve.tick_lower, offset)?)
        };
        is_tick_in_bounds(tick_lower)?;
        is_tick_in_bounds(tick_upper)?;
        is_range_ordered(tick_lower, tick_upper)?;

        lower_tick_boundary = lower_tick_boundary.min(tick_lower);
        upper_tick_boundary = upper_tick_boundary.max(tick_upper);
        adjusted.push(Curve {
            tick_lower,
            tick_upper,
            ..*curve
        });
    }

    debug!(
        offset,
        is_token0,
        lower_tick_boundary,
        upper_tick_boundary,
        "Adjusted curves"
    );

    Ok(AdjustedCurves {
        curves: adjusted,
        lower_tick_boundary,
        upper_tick_boundary,
    })
}

fn shift(tick: i32, offset: i32) -> Result<i32> {
    Ok(tick.checked_add(offset).ok_or(MathError::Overflow)?)
}

fn mirror(tick: i32, offset: i32) -> Result<i32> {
    Ok(offset.checked_sub(tick).ok_or(MathError::Overflow)?)
}
