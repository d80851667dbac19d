use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model_portfolio::ModelFund;
use crate::portfolio::PortfolioSnapshot;

/// How far one fund's current weight sits from its target weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ImbalanceScore {
    /// Current weight in the user's holdings, 0-100.
    pub actual_percent: Decimal,
    /// target% - actual%, positive = underweight.
    pub deviation: Decimal,
    /// Deviation after clamping: zero inside the tolerance band and for
    /// overweight funds, since a contribution cannot shrink a position.
    pub urgency: Decimal,
}

/// Scores how far the current allocation is from the target allocation,
/// per model fund.
///
/// Actual weights are computed against the total value of *all* held
/// positions, not just the ones present in the model portfolio. Held
/// funds absent from the model are not purchase candidates and get no
/// score of their own, but their value still dilutes every actual weight.
#[derive(Default, Debug, Clone)]
pub struct ImbalanceScorer {}

impl ImbalanceScorer {
    pub fn new() -> Self {
        ImbalanceScorer {}
    }

    /// Returns a score for every model fund ticker. A fund the user does
    /// not hold has actual% = 0 and full positive deviation.
    pub fn score(
        &self,
        snapshot: &PortfolioSnapshot,
        model_funds: &[ModelFund],
        tolerance_band: Decimal,
    ) -> HashMap<String, ImbalanceScore> {
        let total = snapshot.total_value;
        let mut scores = HashMap::with_capacity(model_funds.len());

        for fund in model_funds {
            let actual_percent = if total > Decimal::ZERO {
                snapshot.value_held(&fund.ticker) / total * dec!(100)
            } else {
                Decimal::ZERO
            };
            let deviation = fund.target_allocation - actual_percent;
            // Marginal imbalance must not distort ranking: anything inside
            // the tolerance band counts as zero urgency.
            let urgency = if deviation > tolerance_band {
                deviation
            } else {
                Decimal::ZERO
            };

            scores.insert(
                fund.ticker.clone(),
                ImbalanceScore {
                    actual_percent,
                    deviation,
                    urgency,
                },
            );
        }

        scores
    }
}
