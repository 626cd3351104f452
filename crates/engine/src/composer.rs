//! Fans a supply out across a curve set.
//!
//! Each curve receives a WAD-weighted slice of the total supply and is
//! discretized by the log-normal distributor. An optional head position holding
//! the paired currency is appended on the opposite side of the curves.

use crate::config::DistributionConfig;
use crate::error::Result;
use crate::log_normal::calculate_log_normal_distribution_with_config;
use crate::tail::single_sided_position;
use crate::validator::validate;
use multicurve_domain::constants::WAD;
use multicurve_domain::math::{
    is_tick_spacing_valid, max_usable_tick, min_usable_tick, mul_div,
};
use multicurve_domain::{Curve, MathError, Position, Salt, TokenAmount};
use primitive_types::U256;
use tracing::debug;

/// Computes every position for a curve set with the default [`DistributionConfig`].
///
/// See [`calculate_positions_with_config`].
pub fn calculate_positions(
    curves: &[Curve],
    tick_spacing: i32,
    total_supply: TokenAmount,
    head_supply: TokenAmount,
    is_token0: bool,
) -> Result<Vec<Position>> {
    calculate_positions_with_config(
        &DistributionConfig::default(),
        curves,
        tick_spacing,
        total_supply,
        head_supply,
        is_token0,
    )
}

/// Computes every position for a curve set.
///
/// Curve positions come first, in curve order. When `head_supply` is non-zero a
/// head position is appended: with `is_token0` it covers
/// `[min_usable_tick, lower_boundary - spacing]` and holds token1, otherwise
/// `[upper_boundary + spacing, max_usable_tick]` and holds token0. Salts are the
/// output index.
pub fn calculate_positions_with_config(
    config: &DistributionConfig,
    curves: &[Curve],
    tick_spacing: i32,
    total_supply: TokenAmount,
    head_supply: TokenAmount,
    is_token0: bool,
) -> Result<Vec<Position>> {
    validate(curves)?;
    is_tick_spacing_valid(tick_spacing)?;

    let capacity: usize = curves.iter().map(|c| usize::from(c.num_positions)).sum();
    let mut positions = Vec::with_capacity(capacity + 1);
    let mut lower_boundary = i32::MAX;
    let mut upper_boundary = i32::MIN;

    let supplies = curve_supplies(curves, total_supply)?;
    for (curve, curve_supply) in curves.iter().zip(supplies) {
        let curve_positions = calculate_log_normal_distribution_with_config(
            config,
            0,
            curve.tick_lower,
            curve.tick_upper,
            tick_spacing,
            is_token0,
            curve.num_positions,
            curve_supply,
        )?;

        for position in curve_positions {
            lower_boundary = lower_boundary.min(position.tick_lower);
            upper_boundary = upper_boundary.max(position.tick_upper);
            let salt = Salt::from_index(positions.len() as u64);
            positions.push(position.with_salt(salt));
        }
    }

    if !head_supply.is_zero() {
        let salt = Salt::from_index(positions.len() as u64);
        let head = if is_token0 {
            let upper = lower_boundary
                .checked_sub(tick_spacing)
                .ok_or(MathError::Overflow)?;
            single_sided_position(min_usable_tick(tick_spacing), upper, false, head_supply, salt)?
        } else {
            let lower = upper_boundary
                .checked_add(tick_spacing)
                .ok_or(MathError::Overflow)?;
            single_sided_position(lower, max_usable_tick(tick_spacing), true, head_supply, salt)?
        };
        debug!(
            tick_lower = head.tick_lower,
            tick_upper = head.tick_upper,
            liquidity = head.liquidity,
            "Computed head position"
        );
        positions.push(head);
    }

    debug!(
        curves = curves.len(),
        positions = positions.len(),
        lower_boundary,
        upper_boundary,
        "Composed multicurve positions"
    );

    Ok(positions)
}

/// Splits `total_supply` by curve shares. The last curve absorbs the flooring
/// remainder, so the slices always add up to `total_supply`.
fn curve_supplies(curves: &[Curve], total_supply: TokenAmount) -> Result<Vec<TokenAmount>> {
    let mut supplies = Vec::with_capacity(curves.len());
    let mut allocated = TokenAmount::zero();
    for (index, curve) in curves.iter().enumerate() {
        let curve_supply = if index + 1 == curves.len() {
            total_supply.checked_sub(allocated)?
        } else {
            TokenAmount(mul_div(
                total_supply.0,
                U256::from(curve.shares),
                U256::from(WAD),
            )?)
        };
        allocated = allocated.checked_add(curve_supply)?;
        supplies.push(curve_supply);
    }
    Ok(supplies)
}
