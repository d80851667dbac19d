use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOW_NO_DISCOUNT, DEFAULT_DISCOUNT_WEIGHT, DEFAULT_IMBALANCE_WEIGHT,
    DEFAULT_MAX_FUNDS, DEFAULT_MIN_ACCEPTABLE_DISCOUNT, DEFAULT_SEQUENTIAL_ALLOCATION,
    DEFAULT_TOLERANCE_BAND,
};
use crate::errors::{ConfigurationError, Result};
use crate::utils::decimal_serde::*;

/// The single active configuration consumed by one allocation run.
///
/// The engine treats this as read-only input; the admin side owns its
/// lifecycle. When no rule set is configured, callers materialize
/// [`RuleSet::default`] rather than invoking the engine with nothing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Minimum discount (percent) a fund must trade at to stay eligible.
    #[serde(with = "decimal_serde")]
    pub min_acceptable_discount: Decimal,
    /// When true, funds at or above their ceiling price stay eligible,
    /// with their discount clamped to zero for scoring.
    pub allow_no_discount: bool,
    /// Imbalance tolerance band, in percentage points. Deviations inside
    /// the band contribute no urgency.
    #[serde(with = "decimal_serde")]
    pub tolerance_band: Decimal,
    /// Weight of the imbalance axis. Must sum to 100 with `discount_weight`.
    pub imbalance_weight: u32,
    /// Weight of the discount axis.
    pub discount_weight: u32,
    /// Cap on the number of funds recommended per run.
    pub max_funds: usize,
    /// true = sequential distribution, false = proportional.
    pub sequential_allocation: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_acceptable_discount: DEFAULT_MIN_ACCEPTABLE_DISCOUNT,
            allow_no_discount: DEFAULT_ALLOW_NO_DISCOUNT,
            tolerance_band: DEFAULT_TOLERANCE_BAND,
            imbalance_weight: DEFAULT_IMBALANCE_WEIGHT,
            discount_weight: DEFAULT_DISCOUNT_WEIGHT,
            max_funds: DEFAULT_MAX_FUNDS,
            sequential_allocation: DEFAULT_SEQUENTIAL_ALLOCATION,
        }
    }
}

impl RuleSet {
    /// Structural validation. Runs before any scoring; a violation fails
    /// the whole run, it is never silently renormalized.
    pub fn validate(&self) -> Result<()> {
        // Widen before summing: extreme weights must be rejected, not
        // overflow inside the check that rejects them.
        if u64::from(self.imbalance_weight) + u64::from(self.discount_weight) != 100 {
            return Err(ConfigurationError::WeightsMismatch {
                imbalance: self.imbalance_weight,
                discount: self.discount_weight,
            }
            .into());
        }
        if self.max_funds == 0 {
            return Err(ConfigurationError::NonPositiveFundCap.into());
        }
        if self.tolerance_band < Decimal::ZERO {
            return Err(ConfigurationError::NegativeTolerance(self.tolerance_band).into());
        }
        if self.min_acceptable_discount < dec!(-100) || self.min_acceptable_discount > dec!(100) {
            return Err(
                ConfigurationError::DiscountOutOfRange(self.min_acceptable_discount).into(),
            );
        }
        Ok(())
    }
}
