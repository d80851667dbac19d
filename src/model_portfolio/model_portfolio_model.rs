use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::decimal_serde::*;

/// Platform recommendation attached to a model fund. Only `Buy`-tagged
/// funds are contribution candidates; `Sell` and `Hold` are hard-excluded
/// before scoring.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationSignal {
    Buy,
    Sell,
    Hold,
}

/// One fund in the curated model portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelFund {
    pub ticker: String,
    pub segment: String,
    #[serde(with = "decimal_serde")]
    pub current_price: Decimal,
    #[serde(with = "decimal_serde")]
    pub average_price: Decimal,
    #[serde(with = "decimal_serde")]
    pub ceiling_price: Decimal,
    /// Target weight in the model portfolio, 0-100.
    #[serde(with = "decimal_serde")]
    pub target_allocation: Decimal,
    pub signal: RecommendationSignal,
}

impl ModelFund {
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(ValidationError::MissingField("ticker".to_string()).into());
        }
        if self.target_allocation < Decimal::ZERO || self.target_allocation > dec!(100) {
            return Err(ValidationError::InvalidInput(format!(
                "target allocation for {} must be between 0 and 100, got {}",
                self.ticker, self.target_allocation
            ))
            .into());
        }
        Ok(())
    }
}

/// Checks the active-model invariant: target allocations must not exceed
/// 100% in total. Enforced on the model-portfolio edit path, not by the
/// engine. Allows a small tolerance for decimal noise from imports.
pub fn validate_target_sum(funds: &[ModelFund]) -> Result<()> {
    let total: Decimal = funds.iter().map(|f| f.target_allocation).sum();
    if total > dec!(100) + dec!(0.01) {
        return Err(ValidationError::InvalidInput(format!(
            "model portfolio targets must not exceed 100%. Current sum: {:.2}%",
            total
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn fund(ticker: &str, target: Decimal) -> ModelFund {
        ModelFund {
            ticker: ticker.to_string(),
            segment: "Offices".to_string(),
            current_price: dec!(100),
            average_price: dec!(100),
            ceiling_price: dec!(110),
            target_allocation: target,
            signal: RecommendationSignal::Buy,
        }
    }

    #[test]
    fn target_allocation_outside_0_to_100_is_rejected() {
        assert!(fund("AAAA11", dec!(100)).validate().is_ok());
        assert!(fund("AAAA11", dec!(101)).validate().is_err());
        assert!(fund("AAAA11", dec!(-1)).validate().is_err());
    }

    #[test]
    fn target_sum_may_not_exceed_100() {
        let ok = vec![fund("AAAA11", dec!(60)), fund("BBBB11", dec!(40))];
        assert!(validate_target_sum(&ok).is_ok());

        let over = vec![fund("AAAA11", dec!(60)), fund("BBBB11", dec!(41))];
        assert!(validate_target_sum(&over).is_err());
    }

    #[test]
    fn signal_serializes_as_screaming_snake_strings() {
        let json = serde_json::to_string(&RecommendationSignal::Buy).unwrap();
        assert_eq!(json, "\"BUY\"");
    }
}
