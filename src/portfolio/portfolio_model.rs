use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::decimal_serde::*;

/// One fund currently held by the user. Immutable once the snapshot is taken.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub average_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_value: Decimal,
}

/// The user's holdings at the moment a recommendation run starts.
///
/// `total_value` covers every held position, whether or not the fund
/// appears in the model portfolio. The engine never re-reads external
/// state mid-run, so a snapshot fully determines the result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub portfolio_id: String,
    pub positions: Vec<Position>,
    #[serde(with = "decimal_serde")]
    pub total_value: Decimal,
    pub taken_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    /// Builds a snapshot from a position list, deriving the total value.
    pub fn new(portfolio_id: impl Into<String>, positions: Vec<Position>) -> Self {
        let total_value = positions.iter().map(|p| p.current_value).sum();
        Self {
            portfolio_id: portfolio_id.into(),
            positions,
            total_value,
            taken_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.portfolio_id.trim().is_empty() {
            return Err(ValidationError::MissingField("portfolioId".to_string()).into());
        }
        for position in &self.positions {
            if position.ticker.trim().is_empty() {
                return Err(ValidationError::MissingField("ticker".to_string()).into());
            }
            if position.quantity < Decimal::ZERO {
                return Err(ValidationError::NegativePositionField {
                    ticker: position.ticker.clone(),
                    field: "quantity",
                }
                .into());
            }
            if position.average_cost < Decimal::ZERO {
                return Err(ValidationError::NegativePositionField {
                    ticker: position.ticker.clone(),
                    field: "averageCost",
                }
                .into());
            }
            if position.current_value < Decimal::ZERO {
                return Err(ValidationError::NegativePositionField {
                    ticker: position.ticker.clone(),
                    field: "currentValue",
                }
                .into());
            }
        }
        if self.total_value < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "total portfolio value must not be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Total current value held in one ticker, summed across entries.
    pub fn value_held(&self, ticker: &str) -> Decimal {
        self.positions
            .iter()
            .filter(|p| p.ticker == ticker)
            .map(|p| p.current_value)
            .sum()
    }
}
