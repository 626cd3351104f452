//! Error types for curve configuration, tick geometry and arithmetic.

/// A boundary value violates the pool's tick discretization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TickError {
    /// Tick is not a multiple of the tick spacing.
    #[error("Tick {tick} is not aligned to spacing {spacing}")]
    TickNotAligned { tick: i32, spacing: i32 },
    /// Lower tick is not strictly below the upper tick.
    #[error("Tick range misordered: lower {lower} >= upper {upper}")]
    TickRangeMisordered { lower: i32, upper: i32 },
    /// Tick spacing below the pool minimum.
    #[error("Tick spacing {0} is too small")]
    TickSpacingTooSmall(i32),
    /// Tick spacing above the pool maximum.
    #[error("Tick spacing {0} is too large")]
    TickSpacingTooLarge(i32),
    /// Tick outside `[MIN_TICK, MAX_TICK]`.
    #[error("Tick {0} is out of bounds")]
    TickOutOfBounds(i32),
}

/// Fixed-width arithmetic failures. Never wrapped, always surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Intermediate result exceeds the representable range.
    #[error("Arithmetic overflow")]
    Overflow,
    /// Division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Liquidity does not fit in 128 bits.
    #[error("Liquidity overflows u128")]
    LiquidityOverflow,
    /// Sqrt price outside `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`.
    #[error("Sqrt price out of bounds")]
    SqrtPriceOutOfBounds,
}

/// Caller-supplied curve configuration is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// No curve was supplied.
    #[error("No curves supplied")]
    EmptyCurves,
    /// A curve asks for zero positions.
    #[error("Curve {index} has zero positions")]
    ZeroPosition { index: usize },
    /// A curve carries a zero share.
    #[error("Curve {index} has a zero share")]
    ZeroShare { index: usize },
    /// Shares do not sum to exactly one WAD.
    #[error("Total shares must equal WAD")]
    InvalidTotalShares,
    /// Distal weight outside `(0, WAD]`.
    #[error("Distal weight {0} must be in (0, WAD]")]
    InvalidDistalWeight(u128),
}
