use multicurve_domain::{CurveError, MathError, TickError, TokenAmount};

/// Errors raised by the distribution engine.
///
/// Every variant is terminal: the caller discards the attempted configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MulticurveError {
    /// Malformed curve configuration.
    #[error(transparent)]
    Curve(#[from] CurveError),
    /// Tick geometry violation.
    #[error(transparent)]
    Tick(#[from] TickError),
    /// Arithmetic overflow or division by zero.
    #[error(transparent)]
    Math(#[from] MathError),
    /// The curve range has fewer tick-spacing slots than requested positions.
    #[error("{num_positions} positions do not fit in {slots} tick spacing slots")]
    TooManyPositions { num_positions: u16, slots: i64 },
    /// The supply cannot buy a single unit of liquidity over the range.
    #[error("Supply {0} is too small to mint any liquidity")]
    ZeroLiquidity(TokenAmount),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, MulticurveError>;
