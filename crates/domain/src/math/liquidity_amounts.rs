use crate::constants::{RESOLUTION, q96};
use crate::error::MathError;
use crate::math::full_math::{mul_div, mul_div_rounding_up, to_liquidity};
use crate::token::TokenAmount;
use primitive_types::U256;

fn sort(sqrt_price_a: U256, sqrt_price_b: U256) -> (U256, U256) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

/// Calculates the amount of token0 (x) held by `liquidity` between two sqrt prices.
/// delta_x = L * (sqrt(P_b) - sqrt(P_a)) / (sqrt(P_a) * sqrt(P_b))
pub fn get_amount0_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<TokenAmount, MathError> {
    let (lower, upper) = sort(sqrt_price_a, sqrt_price_b);
    if lower.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let numerator = U256::from(liquidity) << RESOLUTION;
    let diff = upper - lower;

    let amount = if round_up {
        let inner = mul_div_rounding_up(numerator, diff, upper)?;
        let (quotient, remainder) = inner.div_mod(lower);
        if remainder.is_zero() {
            quotient
        } else {
            quotient + U256::one()
        }
    } else {
        mul_div(numerator, diff, upper)? / lower
    };
    Ok(TokenAmount(amount))
}

/// Calculates the amount of token1 (y) held by `liquidity` between two sqrt prices.
/// delta_y = L * (sqrt(P_b) - sqrt(P_a))
pub fn get_amount1_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<TokenAmount, MathError> {
    let (lower, upper) = sort(sqrt_price_a, sqrt_price_b);
    let diff = upper - lower;

    let amount = if round_up {
        mul_div_rounding_up(U256::from(liquidity), diff, q96())?
    } else {
        mul_div(U256::from(liquidity), diff, q96())?
    };
    Ok(TokenAmount(amount))
}

/// Token0 held by `liquidity`, rounded down.
pub fn get_amount0_for_liquidity(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
) -> Result<TokenAmount, MathError> {
    get_amount0_delta(sqrt_price_a, sqrt_price_b, liquidity, false)
}

/// Token1 held by `liquidity`, rounded down.
pub fn get_amount1_for_liquidity(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
) -> Result<TokenAmount, MathError> {
    get_amount1_delta(sqrt_price_a, sqrt_price_b, liquidity, false)
}

/// Calculates liquidity for a given amount of token0 and price range.
/// L = amount0 * (sqrt(P_a) * sqrt(P_b)) / (sqrt(P_b) - sqrt(P_a))
pub fn get_liquidity_for_amount0(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    amount0: TokenAmount,
) -> Result<u128, MathError> {
    let (lower, upper) = sort(sqrt_price_a, sqrt_price_b);
    let den = upper - lower;
    if den.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let intermediate = mul_div(lower, upper, q96())?;
    let liquidity = mul_div(amount0.0, intermediate, den).map_err(|err| match err {
        MathError::Overflow => MathError::LiquidityOverflow,
        other => other,
    })?;
    to_liquidity(liquidity)
}

/// Calculates liquidity for a given amount of token1 and price range.
/// L = amount1 / (sqrt(P_b) - sqrt(P_a))
pub fn get_liquidity_for_amount1(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    amount1: TokenAmount,
) -> Result<u128, MathError> {
    let (lower, upper) = sort(sqrt_price_a, sqrt_price_b);
    let den = upper - lower;
    if den.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let liquidity = mul_div(amount1.0, q96(), den).map_err(|err| match err {
        MathError::Overflow => MathError::LiquidityOverflow,
        other => other,
    })?;
    to_liquidity(liquidity)
}
