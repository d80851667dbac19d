use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rules::RuleSet;
use crate::utils::decimal_serde::*;

/// Per-fund scoring outcome for one run. Deviation and discount are the
/// raw values; the clamped forms only feed the composite score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    /// Current weight of the fund in the user's holdings, 0-100.
    #[serde(with = "decimal_serde")]
    pub actual_percent: Decimal,
    /// target% - actual%, positive = underweight.
    #[serde(with = "decimal_serde")]
    pub deviation: Decimal,
    /// Percent below ceiling price; negative means at/above ceiling.
    #[serde(with = "decimal_serde")]
    pub discount: Decimal,
    pub eligible: bool,
    #[serde(with = "decimal_serde")]
    pub score: Decimal,
    /// 1-based position after ranking.
    pub rank: usize,
}

/// One whole-share purchase in the recommendation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationLine {
    pub ticker: String,
    pub quantity: u64,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    /// Percentage points of portfolio weight this purchase adds, measured
    /// against the portfolio value after the full contribution.
    #[serde(with = "decimal_serde")]
    pub allocation_gain_percent: Decimal,
}

/// A model fund excluded from a run because its price data is unusable.
/// Reported alongside the result; only strict mode turns it into an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingAnomaly {
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
}

/// Output of one allocation run. Never persisted by the engine itself.
///
/// `balance_achieved` is structural: it is true when the remainder could
/// not buy one share of the cheapest selected fund, not when the portfolio
/// hits its target weights.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub lines: Vec<AllocationLine>,
    #[serde(with = "decimal_serde")]
    pub total_invested: Decimal,
    pub funds_recommended: usize,
    #[serde(with = "decimal_serde")]
    pub remainder: Decimal,
    pub balance_achieved: bool,
    pub warnings: Vec<PricingAnomaly>,
}

impl AllocationResult {
    /// The terminal outcome when no fund can absorb any of the cash.
    pub fn empty(cash_amount: Decimal) -> Self {
        Self {
            lines: Vec::new(),
            total_invested: Decimal::ZERO,
            funds_recommended: 0,
            remainder: cash_amount,
            balance_achieved: true,
            warnings: Vec::new(),
        }
    }
}

/// Audit snapshot of one run, handed to the result consumer: the inputs
/// that produced the recommendation plus the recommendation itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRunRecord {
    pub id: Uuid,
    pub portfolio_id: String,
    #[serde(with = "decimal_serde")]
    pub cash_amount: Decimal,
    pub rule_set: RuleSet,
    pub result: AllocationResult,
    pub created_at: DateTime<Utc>,
}
