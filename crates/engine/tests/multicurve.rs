use multicurve_domain::constants::{MAX_TICK, MIN_TICK, WAD};
use multicurve_domain::math::get_tick_at_sqrt_price;
use multicurve_engine::prelude::*;
use primitive_types::U256;

fn staggered_curves() -> Vec<Curve> {
    (0..10)
        .map(|i| Curve::new(160_000 + i * 8, 240_000, 5, WAD / 10))
        .collect()
}

fn tokens(value: u128) -> TokenAmount {
    TokenAmount::from(value)
}

#[test]
fn test_staggered_curves_without_head() {
    let total = tokens(10u128.pow(27));
    let positions =
        calculate_positions(&staggered_curves(), 8, total, TokenAmount::zero(), true).unwrap();
    assert_eq!(positions.len(), 50);

    // Each curve decays from its proximal bucket outward
    for block in positions.chunks(5) {
        assert!(block.windows(2).all(|w| w[0].liquidity >= w[1].liquidity));
        assert_eq!(block[4].tick_upper, 240_000);
    }

    let implied = implied_total(&positions, true).unwrap();
    assert!(implied <= total);
    assert!(total.0 - implied.0 <= U256::from(50u64));
}

#[test]
fn test_staggered_curves_with_head() {
    let head_supply = tokens(10u128.pow(22));
    let positions = calculate_positions(
        &staggered_curves(),
        8,
        tokens(8 * 10u128.pow(18)),
        head_supply,
        true,
    )
    .unwrap();
    assert_eq!(positions.len(), 51);

    let head = positions[50];
    assert_eq!(head.tick_lower, MIN_TICK);
    assert_eq!(head.tick_upper, 160_000 - 8);
    assert!(head.liquidity > 0);

    // The head holds token1 below the curves
    let held = implied_amount(&head, false).unwrap();
    assert!(held <= head_supply);
}

#[test]
fn test_adjust_with_zero_offset() {
    let curves = staggered_curves();

    let adjusted = adjust_curves(&curves, 0, 8, true).unwrap();
    assert_eq!(adjusted.curves, curves);
    assert_eq!(adjusted.lower_tick_boundary, 160_000);
    assert_eq!(adjusted.upper_tick_boundary, 240_000);

    let mirrored = adjust_curves(&curves, 0, 8, false).unwrap();
    for (old, new) in curves.iter().zip(&mirrored.curves) {
        assert_eq!(new.tick_lower, -old.tick_upper);
        assert_eq!(new.tick_upper, -old.tick_lower);
        assert_eq!(new.num_positions, old.num_positions);
        assert_eq!(new.shares, old.shares);
    }
    assert_eq!(mirrored.lower_tick_boundary, -240_000);
    assert_eq!(mirrored.upper_tick_boundary, -160_000);
}

#[test]
fn test_tail_after_last_curve() {
    let tail = calculate_lp_tail(Salt::default(), 240_000, 240_000, true, tokens(WAD), 8).unwrap();
    assert_eq!(tail.tick_lower, 240_008);
    assert_eq!(tail.tick_upper, MAX_TICK);
    assert!(tail.liquidity > 0);
}

#[test]
fn test_migration_flow() {
    // Sale ends with the price at tick 200_003; re-anchor the curves there
    let sqrt_price = multicurve_domain::math::get_sqrt_price_at_tick(200_003).unwrap();
    let tick = get_tick_at_sqrt_price(sqrt_price).unwrap();
    assert_eq!(tick, 200_003);
    let offset = tick.div_euclid(8) * 8 - 160_000;

    let curves = [
        Curve::new(160_000, 200_000, 10, WAD / 4),
        Curve::new(180_000, 240_000, 20, WAD * 3 / 4),
    ];
    let adjusted = adjust_curves(&curves, offset, 8, true).unwrap();
    assert_eq!(adjusted.lower_tick_boundary, 200_000);
    assert_eq!(adjusted.upper_tick_boundary, 280_000);

    let supply = tokens(10u128.pow(24));
    let positions =
        calculate_positions(&adjusted.curves, 8, supply, TokenAmount::zero(), true).unwrap();
    assert_eq!(positions.len(), 30);

    let tail = calculate_lp_tail(
        Salt::from_index(positions.len() as u64),
        adjusted.lower_tick_boundary,
        adjusted.upper_tick_boundary,
        true,
        tokens(10u128.pow(20)),
        8,
    )
    .unwrap();
    assert_eq!(tail.tick_lower, 280_008);
    assert!(positions.iter().all(|p| p.tick_upper < tail.tick_lower));
}

#[test]
fn test_invalid_configurations() {
    let unbalanced = [Curve::new(0, 800, 1, WAD / 2), Curve::new(0, 800, 1, WAD / 2 + 1)];
    assert_eq!(
        calculate_positions(&unbalanced, 8, tokens(1), TokenAmount::zero(), true),
        Err(MulticurveError::Curve(CurveError::InvalidTotalShares))
    );
    assert_eq!(
        adjust_curves(&unbalanced, 0, 8, true),
        Err(MulticurveError::Curve(CurveError::InvalidTotalShares))
    );

    let no_positions = [Curve::new(0, 800, 0, WAD)];
    assert_eq!(
        calculate_positions(&no_positions, 8, tokens(1), TokenAmount::zero(), true),
        Err(MulticurveError::Curve(CurveError::ZeroPosition { index: 0 }))
    );

    let no_share = [Curve::new(0, 800, 1, 0), Curve::new(0, 800, 1, WAD)];
    assert_eq!(
        calculate_positions(&no_share, 8, tokens(1), TokenAmount::zero(), true),
        Err(MulticurveError::Curve(CurveError::ZeroShare { index: 0 }))
    );

    assert_eq!(
        calculate_positions(&staggered_curves(), 0, tokens(1), TokenAmount::zero(), true),
        Err(MulticurveError::Tick(TickError::TickSpacingTooSmall(0)))
    );
    assert_eq!(
        calculate_positions(&staggered_curves(), 40_000, tokens(1), TokenAmount::zero(), true),
        Err(MulticurveError::Tick(TickError::TickSpacingTooLarge(40_000)))
    );
}

#[test]
fn test_curves_from_json() {
    let json = r#"[
        {"tick_lower": 160000, "tick_upper": 240000, "num_positions": 5, "shares": 500000000000000000},
        {"tick_lower": 200000, "tick_upper": 240000, "num_positions": 5, "shares": 500000000000000000}
    ]"#;
    let curves: Vec<Curve> = serde_json::from_str(json).unwrap();
    let positions =
        calculate_positions(&curves, 8, tokens(10u128.pow(24)), TokenAmount::zero(), true).unwrap();
    assert_eq!(positions.len(), 10);
    assert_eq!(positions[5].tick_lower, 200_000);
}
