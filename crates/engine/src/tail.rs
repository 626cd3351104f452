//! Terminal position beyond the outermost curve.

use crate::error::{MulticurveError, Result};
use crate::reserves::liquidity_for_amount;
use multicurve_domain::math::{
    get_sqrt_price_at_tick, is_range_ordered, is_tick_aligned, is_tick_in_bounds,
    is_tick_spacing_valid, max_usable_tick, min_usable_tick,
};
use multicurve_domain::{MathError, Position, Salt, TokenAmount};
use tracing::debug;

/// Computes the tail position covering everything past the curve set.
///
/// With `is_token0` the tail spans `[tick_upper + spacing, max_usable_tick]`
/// and holds token0; otherwise it spans `[min_usable_tick, tick_lower - spacing]`
/// and holds token1. Only the boundary facing the tail must be aligned.
pub fn calculate_lp_tail(
    salt: Salt,
    tick_lower: i32,
    tick_upper: i32,
    is_token0: bool,
    supply: TokenAmount,
    tick_spacing: i32,
) -> Result<Position> {
    is_tick_spacing_valid(tick_spacing)?;

    let (lower, upper) = if is_token0 {
        is_tick_in_bounds(tick_upper)?;
        is_tick_aligned(tick_upper, tick_spacing)?;
        let lower = tick_upper
            .checked_add(tick_spacing)
            .ok_or(MathError::Overflow)?;
        (lower, max_usable_tick(tick_spacing))
    } else {
        is_tick_in_bounds(tick_lower)?;
        is_tick_aligned(tick_lower, tick_spacing)?;
        let upper = tick_lower
            .checked_sub(tick_spacing)
            .ok_or(MathError::Overflow)?;
        (min_usable_tick(tick_spacing), upper)
    };

    let position = single_sided_position(lower, upper, is_token0, supply, salt)?;
    debug!(
        tick_lower = position.tick_lower,
        tick_upper = position.tick_upper,
        liquidity = position.liquidity,
        "Computed tail position"
    );
    Ok(position)
}

/// Sizes one position holding `supply` of a single token over `[lower, upper]`.
///
/// A positive supply too small to mint any liquidity is an error rather than an
/// empty position.
pub(crate) fn single_sided_position(
    lower: i32,
    upper: i32,
    holds_token0: bool,
    supply: TokenAmount,
    salt: Salt,
) -> Result<Position> {
    is_range_ordered(lower, upper)?;
    let sqrt_lower = get_sqrt_price_at_tick(lower)?;
    let sqrt_upper = get_sqrt_price_at_tick(upper)?;

    let liquidity = liquidity_for_amount(sqrt_lower, sqrt_upper, holds_token0, supply)?;
    if liquidity == 0 && !supply.is_zero() {
        return Err(MulticurveError::ZeroLiquidity(supply));
    }
    Ok(Position::new(lower, upper, liquidity, salt))
}
