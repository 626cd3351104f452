//! Token amounts implied by single-sided positions.
//!
//! Every position computed by the engine sits entirely on one side of the
//! price: token0 positions above it, token1 positions below it.

use crate::error::{MulticurveError, Result};
use multicurve_domain::math::get_sqrt_price_at_tick;
use multicurve_domain::math::liquidity_amounts::{
    get_amount0_for_liquidity, get_amount1_for_liquidity, get_liquidity_for_amount0,
    get_liquidity_for_amount1,
};
use multicurve_domain::{Position, TokenAmount};
use primitive_types::U256;

/// Liquidity buying `amount` of the held token between two sqrt prices, rounded down.
pub fn liquidity_for_amount(
    sqrt_lower: U256,
    sqrt_upper: U256,
    holds_token0: bool,
    amount: TokenAmount,
) -> Result<u128> {
    let liquidity = if holds_token0 {
        get_liquidity_for_amount0(sqrt_lower, sqrt_upper, amount)?
    } else {
        get_liquidity_for_amount1(sqrt_lower, sqrt_upper, amount)?
    };
    Ok(liquidity)
}

/// Held token amount for `liquidity` between two sqrt prices, rounded down.
pub fn amount_for_liquidity(
    sqrt_lower: U256,
    sqrt_upper: U256,
    holds_token0: bool,
    liquidity: u128,
) -> Result<TokenAmount> {
    let amount = if holds_token0 {
        get_amount0_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?
    } else {
        get_amount1_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?
    };
    Ok(amount)
}

/// Token amount a single position holds.
pub fn implied_amount(position: &Position, holds_token0: bool) -> Result<TokenAmount> {
    let sqrt_lower = get_sqrt_price_at_tick(position.tick_lower)?;
    let sqrt_upper = get_sqrt_price_at_tick(position.tick_upper)?;
    amount_for_liquidity(sqrt_lower, sqrt_upper, holds_token0, position.liquidity)
}

/// Sum of the token amounts held by `positions`.
pub fn implied_total(positions: &[Position], holds_token0: bool) -> Result<TokenAmount> {
    positions
        .iter()
        .try_fold(TokenAmount::zero(), |total, position| {
            let amount = implied_amount(position, holds_token0)?;
            total.checked_add(amount).map_err(MulticurveError::from)
        })
}
