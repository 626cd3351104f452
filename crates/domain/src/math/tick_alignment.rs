//! Snapping ticks onto a pool's tick spacing.
//!
//! All functions assume `spacing` has already passed [`is_tick_spacing_valid`].

use crate::constants::{MAX_TICK, MAX_TICK_SPACING, MIN_TICK, MIN_TICK_SPACING};
use crate::error::TickError;

/// Rounds `tick` to a multiple of `spacing`.
///
/// `round_down` rounds toward negative infinity, otherwise toward positive infinity.
pub fn align_tick(round_down: bool, tick: i32, spacing: i32) -> i32 {
    if round_down {
        tick.div_euclid(spacing) * spacing
    } else {
        let floor = tick.div_euclid(spacing) * spacing;
        if floor == tick { floor } else { floor + spacing }
    }
}

/// Rounds the magnitude of `tick` down to a multiple of `spacing`, keeping its sign.
pub fn align_tick_toward_zero(tick: i32, spacing: i32) -> i32 {
    (tick / spacing) * spacing
}

pub fn is_tick_aligned(tick: i32, spacing: i32) -> Result<(), TickError> {
    if tick % spacing != 0 {
        return Err(TickError::TickNotAligned { tick, spacing });
    }
    Ok(())
}

pub fn is_range_ordered(lower: i32, upper: i32) -> Result<(), TickError> {
    if lower >= upper {
        return Err(TickError::TickRangeMisordered { lower, upper });
    }
    Ok(())
}

pub fn is_tick_spacing_valid(spacing: i32) -> Result<(), TickError> {
    if spacing < MIN_TICK_SPACING {
        return Err(TickError::TickSpacingTooSmall(spacing));
    }
    if spacing > MAX_TICK_SPACING {
        return Err(TickError::TickSpacingTooLarge(spacing));
    }
    Ok(())
}

pub fn is_tick_in_bounds(tick: i32) -> Result<(), TickError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(TickError::TickOutOfBounds(tick));
    }
    Ok(())
}

/// Lowest aligned tick inside the pool's range.
pub fn min_usable_tick(spacing: i32) -> i32 {
    align_tick(false, MIN_TICK, spacing)
}

/// Highest aligned tick inside the pool's range.
pub fn max_usable_tick(spacing: i32) -> i32 {
    align_tick(true, MAX_TICK, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_tick_round_down() {
        assert_eq!(align_tick(true, 17, 8), 16);
        assert_eq!(align_tick(true, 16, 8), 16);
        assert_eq!(align_tick(true, -17, 8), -24);
        assert_eq!(align_tick(true, -16, 8), -16);
        assert_eq!(align_tick(true, 0, 8), 0);
    }

    #[test]
    fn test_align_tick_round_up() {
        assert_eq!(align_tick(false, 17, 8), 24);
        assert_eq!(align_tick(false, 16, 8), 16);
        assert_eq!(align_tick(false, -17, 8), -16);
        assert_eq!(align_tick(false, -1, 8), 0);
        assert_eq!(align_tick(false, 0, 8), 0);
    }

    #[test]
    fn test_align_tick_toward_zero() {
        assert_eq!(align_tick_toward_zero(17, 8), 16);
        assert_eq!(align_tick_toward_zero(-17, 8), -16);
        assert_eq!(align_tick_toward_zero(7, 8), 0);
        assert_eq!(align_tick_toward_zero(-7, 8), 0);
        assert_eq!(align_tick_toward_zero(MIN_TICK, 60), -887_220);
    }

    #[test]
    fn test_is_tick_aligned() {
        assert!(is_tick_aligned(240_000, 8).is_ok());
        assert!(is_tick_aligned(-240_000, 8).is_ok());
        assert_eq!(
            is_tick_aligned(240_001, 8),
            Err(TickError::TickNotAligned {
                tick: 240_001,
                spacing: 8
            })
        );
    }

    #[test]
    fn test_is_range_ordered() {
        assert!(is_range_ordered(-1, 1).is_ok());
        assert_eq!(
            is_range_ordered(5, 5),
            Err(TickError::TickRangeMisordered { lower: 5, upper: 5 })
        );
        assert!(is_range_ordered(6, 5).is_err());
    }

    #[test]
    fn test_is_tick_spacing_valid() {
        assert!(is_tick_spacing_valid(1).is_ok());
        assert!(is_tick_spacing_valid(MAX_TICK_SPACING).is_ok());
        assert_eq!(
            is_tick_spacing_valid(0),
            Err(TickError::TickSpacingTooSmall(0))
        );
        assert_eq!(
            is_tick_spacing_valid(-8),
            Err(TickError::TickSpacingTooSmall(-8))
        );
        assert_eq!(
            is_tick_spacing_valid(MAX_TICK_SPACING + 1),
            Err(TickError::TickSpacingTooLarge(MAX_TICK_SPACING + 1))
        );
    }

    #[test]
    fn test_usable_ticks() {
        assert_eq!(min_usable_tick(8), MIN_TICK);
        assert_eq!(max_usable_tick(8), MAX_TICK);
        assert_eq!(min_usable_tick(60), -887_220);
        assert_eq!(max_usable_tick(60), 887_220);
        assert_eq!(min_usable_tick(200), -887_200);
        assert!(is_tick_in_bounds(max_usable_tick(7)).is_ok());
        assert!(is_tick_in_bounds(min_usable_tick(7)).is_ok());
        assert!(is_tick_in_bounds(MAX_TICK + 1).is_err());
    }
}
