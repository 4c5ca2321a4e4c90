// crates/pilk-core/tests/position_view.rs
use pilk_core::view::{display_symbol, liquidation_distance_pct, SYMBOL_PLACEHOLDER};
use pilk_core::{PendingOrder, Position, PositionSide, PositionView, OrderView, Tone};

fn long_position() -> Position {
    let mut pos = Position::new(PositionSide::Long);
    pos.size = Some(0.015);
    pos.entry_price = Some(64000.0);
    pos.liq_price = Some(57600.0);
    pos.margin = Some(100.0);
    pos
}

#[test]
fn long_without_pnl_shows_zero_in_profit_colours() {
    let view = PositionView::from_position("BTC/USDT", &long_position());

    assert_eq!(view.pnl, 0.0);
    assert_eq!(view.pnl_text, "+0.00");
    assert_eq!(view.pnl_tone, Tone::Profit);
    assert_eq!(view.side_tone, Tone::Profit);
    assert_eq!(view.side_label, "LONG");
}

#[test]
fn short_with_loss_shows_loss_colours() {
    let mut pos = Position::new(PositionSide::Short);
    pos.pnl = Some(-5.0);

    let view = PositionView::from_position("ETH/USDT", &pos);

    assert_eq!(view.pnl_text, "-5.00");
    assert_eq!(view.pnl_tone, Tone::Loss);
    assert_eq!(view.side_tone, Tone::Loss);
    assert_eq!(view.side_label, "SHORT");
}

#[test]
fn pnl_and_side_colours_are_independent() {
    // Short in profit: side stays loss-coloured, pnl is profit-coloured.
    let mut pos = Position::new(PositionSide::Short);
    pos.pnl = Some(12.5);

    let view = PositionView::from_position("SOL", &pos);
    assert_eq!(view.pnl_text, "+12.50");
    assert_eq!(view.pnl_tone, Tone::Profit);
    assert_eq!(view.side_tone, Tone::Loss);
}

#[test]
fn negative_zero_pnl_is_not_printed_with_minus() {
    let mut pos = long_position();
    pos.pnl = Some(-0.0);

    let view = PositionView::from_position("BTC", &pos);
    assert_eq!(view.pnl_text, "+0.00");
    assert_eq!(view.pnl_tone, Tone::Profit);
}

#[test]
fn feed_symbol_suffix_is_stripped() {
    assert_eq!(display_symbol(Some("BTC:USDT"), "BTC/USDT"), "BTC");
    assert_eq!(display_symbol(Some("BTC/USDT:USDT"), "BTC/USDT"), "BTC/USDT");
    assert_eq!(display_symbol(Some("DOGE/USDT"), "DOGE"), "DOGE/USDT");
}

#[test]
fn missing_feed_symbol_falls_back_to_key() {
    assert_eq!(display_symbol(None, "ETH"), "ETH");

    let view = PositionView::from_position("ETH", &Position::new(PositionSide::Long));
    assert_eq!(view.display_symbol, "ETH");
    assert_eq!(view.key, "ETH");
}

#[test]
fn empty_symbol_uses_placeholder() {
    assert_eq!(display_symbol(None, ""), SYMBOL_PLACEHOLDER);
    assert_eq!(display_symbol(Some(":USDT"), "X"), SYMBOL_PLACEHOLDER);
}

#[test]
fn partial_record_renders_blank_fields() {
    let view = PositionView::from_position("XRP", &Position::new(PositionSide::Long));

    assert_eq!(view.size, "");
    assert_eq!(view.entry, "");
    assert_eq!(view.liq, "");
    assert_eq!(view.margin, "");
    assert_eq!(view.roe_text, "");
    assert_eq!(view.liq_distance_text, "");
    assert!(view.liq_distance_pct.is_none());
    assert!(!view.near_liquidation);
}

#[test]
fn numeric_fields_use_fixed_decimals() {
    let view = PositionView::from_position("BTC/USDT", &long_position());

    assert_eq!(view.size, "0.0150");
    assert_eq!(view.entry, "64000.00");
    assert_eq!(view.liq, "57600.00");
    assert_eq!(view.margin, "100.00");
}

#[test]
fn roe_is_pnl_over_margin() {
    let mut pos = long_position();
    pos.pnl = Some(-25.0);

    let view = PositionView::from_position("BTC/USDT", &pos);
    assert_eq!(view.roe_text, "-25.00%");
}

#[test]
fn liquidation_distance_from_implied_mark() {
    // Long 0.015 @ 64000, pnl +15 => mark 65000, liq 57600.
    let mut pos = long_position();
    pos.pnl = Some(15.0);

    let pct = liquidation_distance_pct(&pos).expect("all inputs present");
    let expected = (65000.0 - 57600.0) / 65000.0 * 100.0;
    assert!((pct - expected).abs() < 1e-9, "got {pct}, want {expected}");

    let view = PositionView::from_position("BTC/USDT", &pos);
    assert_eq!(view.liq_distance_text, format!("{:.1}%", expected));
    assert!(!view.near_liquidation);
}

#[test]
fn short_close_to_liquidation_is_flagged() {
    // Short 1.0 @ 100, liq 110, pnl -5 => mark 105, distance ~4.8%.
    let mut pos = Position::new(PositionSide::Short);
    pos.size = Some(1.0);
    pos.entry_price = Some(100.0);
    pos.liq_price = Some(110.0);
    pos.pnl = Some(-5.0);

    let view = PositionView::from_position("SOL", &pos);
    assert_eq!(view.liq_distance_text, "4.8%");
    assert!(view.near_liquidation);
}

#[test]
fn no_distance_without_reported_pnl_or_size() {
    let pos = long_position();
    assert!(liquidation_distance_pct(&pos).is_none(), "pnl missing");

    let mut zero = long_position();
    zero.pnl = Some(1.0);
    zero.size = Some(0.0);
    assert!(liquidation_distance_pct(&zero).is_none(), "size zero");
}

#[test]
fn pending_order_view() {
    let order = PendingOrder {
        symbol: "ETH/USDT".to_string(),
        side: PositionSide::Short,
        limit_price: Some(3500.0),
        margin: Some(50.0),
        leverage: Some(5.0),
        feed_symbol: Some("ETH/USDT:USDT".to_string()),
        tp: None,
        sl: None,
        timestamp: None,
    };

    let view = OrderView::from_order(&order);
    assert_eq!(view.display_symbol, "ETH/USDT");
    assert_eq!(view.side_label, "SHORT");
    assert_eq!(view.side_tone, Tone::Loss);
    assert_eq!(view.price, "3500.00");
    assert_eq!(view.margin, "50.00");
    assert_eq!(view.leverage, "5x");
}
