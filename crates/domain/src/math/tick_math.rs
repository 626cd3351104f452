use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK};
use crate::error::{MathError, TickError};
use primitive_types::U256;

/// `sqrt(1.0001)^-(2^i)` in Q128.128 for bits 1..=19 of the absolute tick.
const MAGIC_RATIOS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x09aa508b5b7a84e1c677de54f3e99bc9,
    0x005d6af8dedb81196699c329225ee604,
    0x00002216e584f5fa1ea926041bedfe98,
    0x00000000048a170391f7dc42444e8fa2,
];

/// Odd-tick seed, `sqrt(1.0001)^-1` in Q128.128.
const ODD_TICK_RATIO: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Returns `sqrt(1.0001^tick)` as a Q64.96 fixed-point number.
///
/// Bit-exact with the AMM's own tick math, so positions sized here convert to
/// the same token amounts on-chain.
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<U256, TickError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(TickError::TickOutOfBounds(tick));
    }
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(ODD_TICK_RATIO)
    } else {
        U256::one() << 128
    };
    for (bit, magic) in MAGIC_RATIOS.iter().enumerate() {
        if abs_tick & (1 << (bit + 1)) != 0 {
            // ratio <= 2^128 and magic < 2^128, so the product fits
            ratio = (ratio * U256::from(*magic)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the result is monotonic in tick
    let round_up = if (ratio & U256::from(u32::MAX)).is_zero() {
        U256::zero()
    } else {
        U256::one()
    };
    Ok((ratio >> 32) + round_up)
}

/// Returns the greatest tick whose sqrt price is at most `sqrt_price_x96`.
pub fn get_tick_at_sqrt_price(sqrt_price_x96: U256) -> Result<i32, MathError> {
    if sqrt_price_x96 < MIN_SQRT_PRICE || sqrt_price_x96 > MAX_SQRT_PRICE {
        return Err(MathError::SqrtPriceOutOfBounds);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    while low < high {
        // Upper midpoint so the loop always makes progress
        let mid = low + (high - low + 1) / 2;
        // `mid` stays within [MIN_TICK, MAX_TICK], so this never fails
        let mid_price =
            get_sqrt_price_at_tick(mid).map_err(|_| MathError::SqrtPriceOutOfBounds)?;
        if mid_price <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::q96;

    #[test]
    fn test_sqrt_price_at_bounds() {
        assert_eq!(get_sqrt_price_at_tick(MIN_TICK).unwrap(), MIN_SQRT_PRICE);
        assert_eq!(get_sqrt_price_at_tick(MAX_TICK).unwrap(), MAX_SQRT_PRICE);
        assert_eq!(get_sqrt_price_at_tick(0).unwrap(), q96());
    }

    #[test]
    fn test_sqrt_price_known_values() {
        assert_eq!(
            get_sqrt_price_at_tick(1).unwrap(),
            U256::from_dec_str("79232123823359799118286999568").unwrap()
        );
        assert_eq!(
            get_sqrt_price_at_tick(-1).unwrap(),
            U256::from_dec_str("79224201403219477170569942574").unwrap()
        );
    }

    #[test]
    fn test_sqrt_price_out_of_bounds() {
        assert_eq!(
            get_sqrt_price_at_tick(MAX_TICK + 1),
            Err(TickError::TickOutOfBounds(MAX_TICK + 1))
        );
        assert_eq!(
            get_sqrt_price_at_tick(MIN_TICK - 1),
            Err(TickError::TickOutOfBounds(MIN_TICK - 1))
        );
    }

    #[test]
    fn test_sqrt_price_is_monotonic() {
        let ticks = [MIN_TICK, -200_000, -1, 0, 1, 8, 160_000, 240_000, MAX_TICK];
        let prices: Vec<U256> = ticks
            .iter()
            .map(|t| get_sqrt_price_at_tick(*t).unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tick_at_sqrt_price_round_trip() {
        for tick in [MIN_TICK, -100_000, -1, 0, 1, 100, 240_000, MAX_TICK] {
            let price = get_sqrt_price_at_tick(tick).unwrap();
            assert_eq!(get_tick_at_sqrt_price(price).unwrap(), tick);
        }
    }

    #[test]
    fn test_tick_at_sqrt_price_between_ticks() {
        let price = get_sqrt_price_at_tick(100).unwrap() + U256::one();
        assert_eq!(get_tick_at_sqrt_price(price).unwrap(), 100);
        let price = get_sqrt_price_at_tick(100).unwrap() - U256::one();
        assert_eq!(get_tick_at_sqrt_price(price).unwrap(), 99);
    }

    #[test]
    fn test_tick_at_sqrt_price_searches_full_range() {
        // Every midpoint of the search is a valid tick
        assert_eq!(get_tick_at_sqrt_price(MIN_SQRT_PRICE), Ok(MIN_TICK));
        assert_eq!(get_tick_at_sqrt_price(MAX_SQRT_PRICE), Ok(MAX_TICK));
        assert_eq!(
            get_tick_at_sqrt_price(MAX_SQRT_PRICE - U256::one()),
            Ok(MAX_TICK - 1)
        );
    }

    #[test]
    fn test_tick_at_sqrt_price_out_of_bounds() {
        assert_eq!(
            get_tick_at_sqrt_price(MIN_SQRT_PRICE - U256::one()),
            Err(MathError::SqrtPriceOutOfBounds)
        );
        assert_eq!(
            get_tick_at_sqrt_price(MAX_SQRT_PRICE + U256::one()),
            Err(MathError::SqrtPriceOutOfBounds)
        );
    }
}
