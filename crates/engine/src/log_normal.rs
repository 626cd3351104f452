//! Log-normal discretization of a single curve.
//!
//! A curve's tick range is cut into contiguous, tick-aligned buckets. Liquidity
//! decays geometrically from the price-proximal bucket to the distal one, which
//! traces one tail of a log-normal density over price. Every bucket's liquidity
//! is derived from one shared scale, so rounding never lets a distal bucket
//! overtake a proximal one.

use crate::config::DistributionConfig;
use crate::error::{MulticurveError, Result};
use crate::reserves::{amount_for_liquidity, liquidity_for_amount};
use multicurve_domain::constants::WAD;
use multicurve_domain::math::{
    align_tick, get_sqrt_price_at_tick, is_range_ordered, is_tick_in_bounds,
    is_tick_spacing_valid, mul_div, full_math::to_liquidity,
};
use multicurve_domain::{CurveError, MathError, Position, Salt, TokenAmount};
use primitive_types::U256;
use tracing::debug;

/// Discretizes one curve with the default [`DistributionConfig`].
///
/// See [`calculate_log_normal_distribution_with_config`].
#[allow(clippy::too_many_arguments)]
pub fn calculate_log_normal_distribution(
    offset: i32,
    tick_lower: i32,
    tick_upper: i32,
    tick_spacing: i32,
    is_token0: bool,
    num_positions: u16,
    curve_supply: TokenAmount,
) -> Result<Vec<Position>> {
    calculate_log_normal_distribution_with_config(
        &DistributionConfig::default(),
        offset,
        tick_lower,
        tick_upper,
        tick_spacing,
        is_token0,
        num_positions,
        curve_supply,
    )
}

/// Discretizes `[tick_lower, tick_upper] + offset` into `num_positions` buckets.
///
/// The shifted bounds are always aligned inward to `tick_spacing` (lower bound
/// rounded up, upper bound rounded down) for either token, so the buckets never
/// leave the curve's range. Positions are returned proximal first: lowest
/// range first when `is_token0` (the sale pushes the price up), highest range
/// first otherwise. Salts are the bucket index.
///
/// Liquidity is non-increasing from the proximal to the distal bucket. The
/// implied token amounts never exceed `curve_supply`; the remainder the shared
/// scale cannot place is topped up on the proximal bucket.
#[allow(clippy::too_many_arguments)]
pub fn calculate_log_normal_distribution_with_config(
    config: &DistributionConfig,
    offset: i32,
    tick_lower: i32,
    tick_upper: i32,
    tick_spacing: i32,
    is_token0: bool,
    num_positions: u16,
    curve_supply: TokenAmount,
) -> Result<Vec<Position>> {
    config.validate()?;
    is_tick_spacing_valid(tick_spacing)?;
    if num_positions == 0 {
        return Err(CurveError::ZeroPosition { index: 0 }.into());
    }

    let lower = align_tick(false, shift_tick(tick_lower, offset)?, tick_spacing);
    let upper = align_tick(true, shift_tick(tick_upper, offset)?, tick_spacing);
    is_range_ordered(lower, upper)?;

    let ranges = bucket_ranges(lower, upper, tick_spacing, num_positions, is_token0)?;
    let weights = decay_weights(num_positions, config.distal_weight)?;

    let mut sqrt_prices = Vec::with_capacity(ranges.len());
    for (bucket_lower, bucket_upper) in &ranges {
        sqrt_prices.push((
            get_sqrt_price_at_tick(*bucket_lower)?,
            get_sqrt_price_at_tick(*bucket_upper)?,
        ));
    }

    let (liquidity, dust) = scale_liquidity(&sqrt_prices, &weights, is_token0, curve_supply)?;
    let positions: Vec<Position> = ranges
        .iter()
        .zip(liquidity)
        .enumerate()
        .map(|(index, ((bucket_lower, bucket_upper), liquidity))| {
            Position::new(
                *bucket_lower,
                *bucket_upper,
                liquidity,
                Salt::from_index(index as u64),
            )
        })
        .collect();

    debug!(
        tick_lower = lower,
        tick_upper = upper,
        num_positions,
        supply = %curve_supply,
        dust = %dust,
        "Distributed curve"
    );

    Ok(positions)
}

fn shift_tick(tick: i32, offset: i32) -> Result<i32> {
    let shifted = tick.checked_add(offset).ok_or(MathError::Overflow)?;
    is_tick_in_bounds(shifted)?;
    Ok(shifted)
}

/// Splits `[lower, upper]` into contiguous aligned buckets, proximal first.
fn bucket_ranges(
    lower: i32,
    upper: i32,
    spacing: i32,
    num_positions: u16,
    is_token0: bool,
) -> Result<Vec<(i32, i32)>> {
    let n = i64::from(num_positions);
    let slots = (i64::from(upper) - i64::from(lower)) / i64::from(spacing);
    if slots < n {
        return Err(MulticurveError::TooManyPositions {
            num_positions,
            slots,
        });
    }

    // Boundaries stay inside [lower, upper], so they fit in i32
    let boundaries: Vec<i32> = (0..=n)
        .map(|k| (i64::from(lower) + i64::from(spacing) * (k * slots / n)) as i32)
        .collect();

    let mut ranges: Vec<(i32, i32)> = boundaries.windows(2).map(|w| (w[0], w[1])).collect();
    if !is_token0 {
        ranges.reverse();
    }
    Ok(ranges)
}

/// Geometric weights `WAD * r^i` with `r^(n-1)` as close to `distal_weight`
/// as WAD precision allows without exceeding it.
fn decay_weights(num_positions: u16, distal_weight: u128) -> Result<Vec<u128>> {
    let mut weights = Vec::with_capacity(usize::from(num_positions));
    weights.push(WAD);
    if num_positions == 1 {
        return Ok(weights);
    }

    let ratio = decay_ratio(u32::from(num_positions) - 1, distal_weight)?;
    for _ in 1..num_positions {
        let previous = weights[weights.len() - 1];
        weights.push(wad_mul(previous, ratio)?);
    }
    Ok(weights)
}

/// Largest ratio `r <= WAD` with `r^exponent <= distal_weight`.
fn decay_ratio(exponent: u32, distal_weight: u128) -> Result<u128> {
    let mut low = 0u128;
    let mut high = WAD;
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if wad_pow(mid, exponent)? <= distal_weight {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    Ok(low)
}

fn wad_mul(a: u128, b: u128) -> Result<u128> {
    let product = a.checked_mul(b).ok_or(MathError::Overflow)?;
    Ok(product / WAD)
}

fn wad_pow(mut base: u128, mut exponent: u32) -> Result<u128> {
    let mut result = WAD;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = wad_mul(result, base)?;
        }
        base = wad_mul(base, base)?;
        exponent >>= 1;
    }
    Ok(result)
}

/// Sizes every bucket as `weight * proximal / WAD` for the largest proximal
/// liquidity whose implied amounts fit in `supply`, then tops up the proximal
/// bucket with what is left. Returns the liquidity per bucket and the unplaced
/// dust.
fn scale_liquidity(
    sqrt_prices: &[(U256, U256)],
    weights: &[u128],
    is_token0: bool,
    supply: TokenAmount,
) -> Result<(Vec<u128>, TokenAmount)> {
    let mut low = 0u128;
    let mut high = u128::MAX;
    while low < high {
        let mid = high - (high - low) / 2;
        if profile_amount(sqrt_prices, weights, is_token0, mid)? <= supply {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut liquidity = weights
        .iter()
        .map(|weight| scale(*weight, low))
        .collect::<Result<Vec<u128>>>()?;
    let mut used = profile_amount(sqrt_prices, weights, is_token0, low)?;

    let remainder = supply.checked_sub(used)?;
    if !remainder.is_zero() {
        let (sqrt_lower, sqrt_upper) = sqrt_prices[0];
        let current = amount_for_liquidity(sqrt_lower, sqrt_upper, is_token0, liquidity[0])?;
        let budget = remainder.checked_add(current)?;
        let topped = liquidity_for_amount(sqrt_lower, sqrt_upper, is_token0, budget)?;
        // Growing the proximal bucket keeps the profile non-increasing
        if topped > liquidity[0] {
            let amount = amount_for_liquidity(sqrt_lower, sqrt_upper, is_token0, topped)?;
            used = used.checked_sub(current)?.checked_add(amount)?;
            liquidity[0] = topped;
        }
    }

    Ok((liquidity, supply.checked_sub(used)?))
}

/// Total amount implied by the profile with `proximal` liquidity in bucket zero.
fn profile_amount(
    sqrt_prices: &[(U256, U256)],
    weights: &[u128],
    is_token0: bool,
    proximal: u128,
) -> Result<TokenAmount> {
    let mut total = TokenAmount::zero();
    for ((sqrt_lower, sqrt_upper), weight) in sqrt_prices.iter().zip(weights) {
        let liquidity = scale(*weight, proximal)?;
        let amount = amount_for_liquidity(*sqrt_lower, *sqrt_upper, is_token0, liquidity)?;
        total = total.checked_add(amount)?;
    }
    Ok(total)
}

fn scale(weight: u128, proximal: u128) -> Result<u128> {
    let scaled = mul_div(U256::from(weight), U256::from(proximal), U256::from(WAD))?;
    Ok(to_liquidity(scaled)?)
}
