//! Constants inherited from the AMM price representation.

use primitive_types::U256;

/// Fixed-point unit for curve shares (10^18).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Lowest tick representable by the pool.
pub const MIN_TICK: i32 = -887_272;
/// Highest tick representable by the pool.
pub const MAX_TICK: i32 = 887_272;

/// Smallest legal tick spacing.
pub const MIN_TICK_SPACING: i32 = 1;
/// Largest legal tick spacing.
pub const MAX_TICK_SPACING: i32 = i16::MAX as i32;

/// Fractional bits of a Q64.96 sqrt price.
pub const RESOLUTION: u32 = 96;

/// `get_sqrt_price_at_tick(MIN_TICK)`.
pub const MIN_SQRT_PRICE: U256 = U256([4_295_128_739, 0, 0, 0]);

/// `get_sqrt_price_at_tick(MAX_TICK)`.
pub const MAX_SQRT_PRICE: U256 = U256([
    0x5d95_1d52_6398_8d26,
    0xefd1_fc6a_5064_8849,
    0x0000_0000_fffd_8963,
    0,
]);

/// 2^96.
pub fn q96() -> U256 {
    U256::one() << RESOLUTION
}
