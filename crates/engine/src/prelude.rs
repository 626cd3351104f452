//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use multicurve_engine::prelude::*;
//! ```

// Adjuster
pub use crate::adjuster::{AdjustedCurves, adjust_curves};

// Composer
pub use crate::composer::{calculate_positions, calculate_positions_with_config};

// Configuration
pub use crate::config::DistributionConfig;

// Errors
pub use crate::error::{MulticurveError, Result};

// Log-normal distributor
pub use crate::log_normal::{
    calculate_log_normal_distribution, calculate_log_normal_distribution_with_config,
};

// Reserves
pub use crate::reserves::{implied_amount, implied_total};

// Tail
pub use crate::tail::calculate_lp_tail;

// Validation
pub use crate::validator::validate;

// Domain types
pub use multicurve_domain::{
    Curve, CurveError, MathError, Position, Salt, TickError, TokenAmount,
};
