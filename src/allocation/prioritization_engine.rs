use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::model_portfolio::{ModelFund, RecommendationSignal};
use crate::portfolio::PortfolioSnapshot;
use crate::rules::RuleSet;

use super::allocation_model::{CandidateScore, PricingAnomaly};
use super::discount_scorer::DiscountScorer;
use super::imbalance_scorer::ImbalanceScorer;

/// The ranked, capped candidate list plus the funds dropped for bad
/// price data.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidates {
    pub candidates: Vec<CandidateScore>,
    pub anomalies: Vec<PricingAnomaly>,
}

/// Filters ineligible funds, combines the two axis scores into one
/// composite ranking, and applies the fund-count cap.
#[derive(Default, Debug, Clone)]
pub struct PrioritizationEngine {
    imbalance_scorer: ImbalanceScorer,
    discount_scorer: DiscountScorer,
}

impl PrioritizationEngine {
    pub fn new() -> Self {
        PrioritizationEngine {
            imbalance_scorer: ImbalanceScorer::new(),
            discount_scorer: DiscountScorer::new(),
        }
    }

    /// Produces the candidate list the allocator will spend against.
    ///
    /// Exclusion order: non-BUY signal, unusable price (reported as an
    /// anomaly), then the discount eligibility gate. Survivors are scored
    /// with composite = (urgency * imbalanceWeight + clampedDiscount *
    /// discountWeight) / 100, sorted by score descending with ticker
    /// ascending as the tie-break, and truncated to `max_funds`. A
    /// zero-score candidate inside the cap stays: the cap is the only
    /// truncation rule.
    pub fn prioritize(
        &self,
        snapshot: &PortfolioSnapshot,
        model_funds: &[ModelFund],
        rules: &RuleSet,
    ) -> Result<RankedCandidates> {
        rules.validate()?;

        let imbalance = self
            .imbalance_scorer
            .score(snapshot, model_funds, rules.tolerance_band);
        let imbalance_weight = Decimal::from(rules.imbalance_weight);
        let discount_weight = Decimal::from(rules.discount_weight);

        let mut candidates: Vec<CandidateScore> = Vec::new();
        let mut anomalies: Vec<PricingAnomaly> = Vec::new();

        for fund in model_funds {
            if fund.signal != RecommendationSignal::Buy {
                debug!(
                    "Excluding {} from candidates: signal is {:?}",
                    fund.ticker, fund.signal
                );
                continue;
            }
            if fund.current_price <= Decimal::ZERO {
                warn!(
                    "Excluding {} from candidates: non-positive current price {}",
                    fund.ticker, fund.current_price
                );
                anomalies.push(PricingAnomaly {
                    ticker: fund.ticker.clone(),
                    price: fund.current_price,
                });
                continue;
            }
            if fund.ceiling_price <= Decimal::ZERO {
                warn!(
                    "Excluding {} from candidates: non-positive ceiling price {}",
                    fund.ticker, fund.ceiling_price
                );
                anomalies.push(PricingAnomaly {
                    ticker: fund.ticker.clone(),
                    price: fund.ceiling_price,
                });
                continue;
            }

            let discount = self.discount_scorer.score(fund, rules);
            if !discount.eligible {
                debug!(
                    "Excluding {} from candidates: discount {} below minimum {}",
                    fund.ticker, discount.discount, rules.min_acceptable_discount
                );
                continue;
            }

            // Every model fund has an imbalance score by construction.
            let Some(im) = imbalance.get(&fund.ticker) else {
                continue;
            };
            let score = (im.urgency * imbalance_weight + discount.clamped * discount_weight)
                / dec!(100);

            candidates.push(CandidateScore {
                ticker: fund.ticker.clone(),
                price: fund.current_price,
                actual_percent: im.actual_percent,
                deviation: im.deviation,
                discount: discount.discount,
                eligible: true,
                score,
                rank: 0,
            });
        }

        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.ticker.cmp(&b.ticker)));
        candidates.truncate(rules.max_funds);
        for (index, candidate) in candidates.iter_mut().enumerate() {
            candidate.rank = index + 1;
        }

        debug!(
            "Prioritization kept {} candidate(s), {} pricing anomaly(ies)",
            candidates.len(),
            anomalies.len()
        );

        Ok(RankedCandidates {
            candidates,
            anomalies,
        })
    }
}
