//! Command Line Interface for previewing multicurve liquidity distributions.
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{PoolConfig, parse_amount};
use dotenv::dotenv;
use multicurve_domain::math::liquidity_amounts::{get_amount0_delta, get_amount1_delta};
use multicurve_domain::math::{align_tick, get_sqrt_price_at_tick, get_tick_at_sqrt_price};
use multicurve_domain::{Curve, Position, Salt, TokenAmount};
use multicurve_engine::prelude::*;
use prettytable::{Table, row};
use primitive_types::U256;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "multicurve")]
#[command(about = "Multicurve liquidity distribution preview CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the positions for a pool configuration
    Positions {
        /// Path to the JSON pool configuration
        config: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Re-anchor the curves of a pool configuration at a new tick
    Adjust {
        /// Path to the JSON pool configuration
        config: PathBuf,

        /// Tick offset, aligned to the tick spacing
        #[arg(long, allow_negative_numbers = true)]
        offset: i32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the tail position past the outermost curve
    Tail {
        /// Path to the JSON pool configuration
        config: PathBuf,

        /// Tail supply in the token's smallest unit
        #[arg(long)]
        supply: String,
    },
    /// Convert a Q64.96 sqrt price into its tick
    Tick {
        /// Sqrt price as a decimal integer
        #[arg(long)]
        sqrt_price: String,

        /// Also print the tick rounded down to this spacing
        #[arg(long)]
        tick_spacing: Option<i32>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Positions { config, json } => {
            let pool = PoolConfig::load(config)?;
            let total_supply = pool.total_supply()?;
            let head_supply = pool.head_supply()?;

            info!(curves = pool.curves.len(), "Computing positions");
            let positions = calculate_positions_with_config(
                &pool.distribution(),
                &pool.curves,
                pool.tick_spacing,
                total_supply,
                head_supply,
                pool.is_token0,
            )?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&positions)?);
                return Ok(());
            }

            print_curves(&pool.curves);
            let curve_count = positions.len() - usize::from(!head_supply.is_zero());
            print_positions(&positions, curve_count, pool.is_token0)?;

            let implied = implied_total(&positions[..curve_count], pool.is_token0)?;
            println!("\nTotal supply:    {total_supply}");
            println!("Implied amount:  {implied}");
            println!("Dust:            {}", total_supply.saturating_sub(implied));
        }
        Commands::Adjust {
            config,
            offset,
            json,
        } => {
            let pool = PoolConfig::load(config)?;
            let adjusted = adjust_curves(&pool.curves, *offset, pool.tick_spacing, pool.is_token0)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&adjusted)?);
                return Ok(());
            }

            print_curves(&adjusted.curves);
            println!(
                "\nBoundaries: [{}, {}]",
                adjusted.lower_tick_boundary, adjusted.upper_tick_boundary
            );
        }
        Commands::Tail { config, supply } => {
            let pool = PoolConfig::load(config)?;
            let supply = parse_amount(supply)?;

            let adjusted = adjust_curves(&pool.curves, 0, pool.tick_spacing, pool.is_token0)?;
            let tail = calculate_lp_tail(
                Salt::from_index(pool.position_count()?),
                adjusted.lower_tick_boundary,
                adjusted.upper_tick_boundary,
                pool.is_token0,
                supply,
                pool.tick_spacing,
            )?;

            let minted = mint_amount(&tail, pool.is_token0)?;
            println!("Tail position");
            println!("  Ticks:     [{}, {}]", tail.tick_lower, tail.tick_upper);
            println!("  Liquidity: {}", tail.liquidity);
            println!("  Mint:      {minted} {}", token_label(pool.is_token0));
            println!("  Salt:      {}", tail.salt);
        }
        Commands::Tick {
            sqrt_price,
            tick_spacing,
        } => {
            let sqrt_price = U256::from_dec_str(sqrt_price.trim())
                .ok()
                .with_context(|| format!("Invalid sqrt price: {sqrt_price}"))?;
            let tick = get_tick_at_sqrt_price(sqrt_price)?;
            println!("Tick: {tick}");

            if let Some(spacing) = tick_spacing {
                multicurve_domain::math::is_tick_spacing_valid(*spacing)?;
                println!("Aligned tick: {}", align_tick(true, tick, *spacing));
            }
        }
    }

    Ok(())
}

fn print_curves(curves: &[Curve]) {
    let mut table = Table::new();
    table.set_titles(row!["Curve", "Tick lower", "Tick upper", "Width", "Positions", "Share %"]);
    for (index, curve) in curves.iter().enumerate() {
        let share = curve
            .share_fraction()
            .map(|f| (f * Decimal::ONE_HUNDRED).round_dp(4).to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            index,
            curve.tick_lower,
            curve.tick_upper,
            curve.width(),
            curve.num_positions,
            share
        ]);
    }
    table.printstd();
}

/// Prints positions with the amount a mint would pull, rounded up.
///
/// Positions past `curve_count` are head positions holding the paired token.
fn print_positions(positions: &[Position], curve_count: usize, is_token0: bool) -> Result<()> {
    let mut table = Table::new();
    table.set_titles(row!["#", "Tick lower", "Tick upper", "Width", "Liquidity", "Mint", "Token"]);
    for (index, position) in positions.iter().enumerate() {
        let holds_token0 = if index < curve_count {
            is_token0
        } else {
            !is_token0
        };
        let minted = mint_amount(position, holds_token0)?;
        table.add_row(row![
            index,
            position.tick_lower,
            position.tick_upper,
            position.width(),
            position.liquidity,
            minted,
            token_label(holds_token0)
        ]);
    }
    table.printstd();
    Ok(())
}

fn mint_amount(position: &Position, holds_token0: bool) -> Result<TokenAmount> {
    let sqrt_lower = get_sqrt_price_at_tick(position.tick_lower)?;
    let sqrt_upper = get_sqrt_price_at_tick(position.tick_upper)?;
    let amount = if holds_token0 {
        get_amount0_delta(sqrt_lower, sqrt_upper, position.liquidity, true)?
    } else {
        get_amount1_delta(sqrt_lower, sqrt_upper, position.liquidity, true)?
    };
    Ok(amount)
}

fn token_label(holds_token0: bool) -> &'static str {
    if holds_token0 { "token0" } else { "token1" }
}
