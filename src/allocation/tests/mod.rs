// Tests for the contribution allocation engine and its orchestration.

mod scorer_tests;

use rust_decimal::Decimal;

use crate::model_portfolio::{ModelFund, RecommendationSignal};
use crate::portfolio::{PortfolioSnapshot, Position};
use crate::rules::RuleSet;

// Helper to build a BUY-tagged model fund
pub(crate) fn buy_fund(ticker: &str, price: Decimal, ceiling: Decimal, target: Decimal) -> ModelFund {
    fund_with_signal(ticker, price, ceiling, target, RecommendationSignal::Buy)
}

pub(crate) fn fund_with_signal(
    ticker: &str,
    price: Decimal,
    ceiling: Decimal,
    target: Decimal,
    signal: RecommendationSignal,
) -> ModelFund {
    ModelFund {
        ticker: ticker.to_string(),
        segment: "Logistics".to_string(),
        current_price: price,
        average_price: price,
        ceiling_price: ceiling,
        target_allocation: target,
        signal,
    }
}

// Helper to build a held position; quantity and cost are irrelevant to
// the engine, which only reads current values.
pub(crate) fn position(ticker: &str, current_value: Decimal) -> Position {
    Position {
        ticker: ticker.to_string(),
        quantity: Decimal::ONE,
        average_cost: current_value,
        current_value,
    }
}

pub(crate) fn empty_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot::new("PORT-TEST", vec![])
}

pub(crate) fn snapshot_of(positions: Vec<Position>) -> PortfolioSnapshot {
    PortfolioSnapshot::new("PORT-TEST", positions)
}

pub(crate) fn sequential_rules() -> RuleSet {
    RuleSet {
        sequential_allocation: true,
        ..Default::default()
    }
}
