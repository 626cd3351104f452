//! Core types and AMM math for multicurve liquidity distribution.
//!
//! This crate provides the building blocks shared by the distribution engine:
//! - Curve and position value types
//! - Tick and WAD constants inherited from the underlying AMM
//! - Q64.96 tick math and full-precision multiplication
//! - Liquidity/amount conversions for single-sided positions
//! - Tick alignment helpers

/// Protocol constants.
pub mod constants;
/// Curve descriptors.
pub mod curve;
/// Error types.
pub mod error;
/// Fixed-point and AMM math.
pub mod math;
/// Computed liquidity positions.
pub mod position;
/// Token amounts.
pub mod token;

pub use curve::Curve;
pub use error::{CurveError, MathError, TickError};
pub use position::{Position, Salt};
pub use token::TokenAmount;
