use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model_portfolio::ModelFund;
use crate::rules::RuleSet;

/// How far one fund trades below its ceiling price.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountScore {
    /// (ceiling - current) / ceiling * 100, unbounded sign.
    pub discount: Decimal,
    /// Discount floored at zero: a fund above its ceiling never earns a
    /// scoring bonus for being "attractive".
    pub clamped: Decimal,
    /// Hard gate. Ineligible funds are removed before ranking, never
    /// merely down-ranked.
    pub eligible: bool,
}

/// Scores price discipline against the ceiling price.
#[derive(Default, Debug, Clone)]
pub struct DiscountScorer {}

impl DiscountScorer {
    pub fn new() -> Self {
        DiscountScorer {}
    }

    /// Requires `fund.ceiling_price > 0`; the prioritization step screens
    /// out non-positive prices before calling this.
    pub fn score(&self, fund: &ModelFund, rules: &RuleSet) -> DiscountScore {
        let discount =
            (fund.ceiling_price - fund.current_price) / fund.ceiling_price * dec!(100);
        let eligible = rules.allow_no_discount || discount >= rules.min_acceptable_discount;
        let clamped = discount.max(Decimal::ZERO);

        DiscountScore {
            discount,
            clamped,
            eligible,
        }
    }
}
