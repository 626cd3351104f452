//! Multicurve liquidity distribution engine.
//!
//! This crate turns a bonding-curve configuration into concentrated-liquidity
//! positions:
//! - Curve validation
//! - Log-normal discretization of a single curve
//! - Composition of many curves plus an optional head position
//! - Re-anchoring of a curve set at migration
//! - Terminal tail position
//!
//! Every function is pure and deterministic. Nothing is cached between calls.

/// Prelude module for convenient imports.
pub mod prelude;

/// Migration-time curve re-anchoring.
pub mod adjuster;
/// Multicurve composition.
pub mod composer;
/// Distribution tuning.
pub mod config;
/// Engine errors.
pub mod error;
/// Log-normal discretization of one curve.
pub mod log_normal;
/// Token amounts implied by computed positions.
pub mod reserves;
/// Terminal tail position.
pub mod tail;
/// Curve set validation.
pub mod validator;

pub use error::{MulticurveError, Result};
