use crate::error::MathError;
use primitive_types::{U256, U512};

/// Computes `floor(a * b / denominator)` with a 512-bit intermediate product.
///
/// Fails with [`MathError::DivisionByZero`] for a zero denominator and
/// [`MathError::Overflow`] when the quotient does not fit in 256 bits.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let quotient = a.full_mul(b) / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| MathError::Overflow)
}

/// Computes `ceil(a * b / denominator)` with a 512-bit intermediate product.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.full_mul(b).div_mod(U512::from(denominator));
    let quotient = U256::try_from(quotient).map_err(|_| MathError::Overflow)?;
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        quotient.checked_add(U256::one()).ok_or(MathError::Overflow)
    }
}

/// Narrows a 256-bit liquidity value into `u128`.
pub fn to_liquidity(value: U256) -> Result<u128, MathError> {
    if value > U256::from(u128::MAX) {
        return Err(MathError::LiquidityOverflow);
    }
    Ok(value.low_u128())
}
