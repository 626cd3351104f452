/// Full-precision multiply-divide.
pub mod full_math;
/// Liquidity and token amount conversions.
pub mod liquidity_amounts;
/// Tick spacing alignment and range checks.
pub mod tick_alignment;
/// Tick and sqrt price conversions.
pub mod tick_math;

pub use full_math::{mul_div, mul_div_rounding_up};
pub use tick_alignment::{
    align_tick, align_tick_toward_zero, is_range_ordered, is_tick_aligned, is_tick_in_bounds,
    is_tick_spacing_valid, max_usable_tick, min_usable_tick,
};
pub use tick_math::{get_sqrt_price_at_tick, get_tick_at_sqrt_price};
