use log::{debug, warn};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::allocation_model::{AllocationLine, AllocationResult, CandidateScore};

/// Splits a cash contribution into whole-share purchases across the
/// ranked candidate list.
#[derive(Default, Debug, Clone)]
pub struct AllocationEngine {}

impl AllocationEngine {
    pub fn new() -> Self {
        AllocationEngine {}
    }

    /// Runs the mode selected by the rule set over the capped candidate
    /// list. `portfolio_total` is the snapshot's total value; it only
    /// feeds the per-line allocation gain, never the split itself.
    ///
    /// The returned result carries no warnings; the caller attaches the
    /// pricing anomalies collected during prioritization.
    pub fn allocate(
        &self,
        candidates: &[CandidateScore],
        cash_amount: Decimal,
        portfolio_total: Decimal,
        sequential: bool,
    ) -> AllocationResult {
        if candidates.is_empty() {
            debug!("No candidates to allocate against; returning full remainder");
            return AllocationResult::empty(cash_amount);
        }

        let quantities = if sequential {
            self.allocate_sequential(candidates, cash_amount)
        } else {
            self.allocate_proportional(candidates, cash_amount)
        };

        let mut lines: Vec<AllocationLine> = Vec::new();
        let mut total_invested = Decimal::ZERO;
        for (candidate, quantity) in candidates.iter().zip(quantities) {
            if quantity == 0 {
                continue;
            }
            let amount = Decimal::from(quantity) * candidate.price;
            total_invested += amount;
            lines.push(AllocationLine {
                ticker: candidate.ticker.clone(),
                quantity,
                price: candidate.price,
                amount,
                allocation_gain_percent: Decimal::ZERO,
            });
        }

        // Every line's gain uses the same denominator: the portfolio value
        // once the whole contribution has settled.
        let denominator = portfolio_total + total_invested;
        if denominator > Decimal::ZERO {
            for line in &mut lines {
                line.allocation_gain_percent = line.amount / denominator * dec!(100);
            }
        }

        let remainder = cash_amount - total_invested;
        let cheapest = candidates.iter().map(|c| c.price).min();
        let balance_achieved = match cheapest {
            Some(price) => remainder < price,
            None => true,
        };

        debug!(
            "Allocated {} across {} fund(s), remainder {}",
            total_invested,
            lines.len(),
            remainder
        );

        AllocationResult {
            funds_recommended: lines.len(),
            lines,
            total_invested,
            remainder,
            balance_achieved,
            warnings: Vec::new(),
        }
    }

    /// Spend on the highest-ranked fund first. A fund whose price exceeds
    /// the remaining cash is skipped, not a stopping point, so cheaper
    /// lower-ranked funds can still absorb a small remainder.
    fn allocate_sequential(&self, candidates: &[CandidateScore], cash_amount: Decimal) -> Vec<u64> {
        let mut remaining = cash_amount;
        let mut quantities = vec![0u64; candidates.len()];

        for (index, candidate) in candidates.iter().enumerate() {
            let quantity = whole_shares(remaining, candidate.price);
            if quantity == 0 {
                debug!(
                    "Skipping {}: price {} exceeds remaining cash {}",
                    candidate.ticker, candidate.price, remaining
                );
                continue;
            }
            remaining -= Decimal::from(quantity) * candidate.price;
            quantities[index] = quantity;
        }

        quantities
    }

    /// Split by normalized composite score, then redistribute the pooled
    /// leftover one whole share at a time in rank order.
    fn allocate_proportional(
        &self,
        candidates: &[CandidateScore],
        cash_amount: Decimal,
    ) -> Vec<u64> {
        let score_sum: Decimal = candidates.iter().map(|c| c.score).sum();
        // All-zero scores mean every selected fund is balanced and at its
        // ceiling; fall back to equal weighting instead of dividing by zero.
        let weights: Vec<Decimal> = if score_sum > Decimal::ZERO {
            candidates.iter().map(|c| c.score / score_sum).collect()
        } else {
            let equal = Decimal::ONE / Decimal::from(candidates.len() as u64);
            vec![equal; candidates.len()]
        };

        let mut quantities = vec![0u64; candidates.len()];
        let mut spent = Decimal::ZERO;
        for (index, candidate) in candidates.iter().enumerate() {
            let target_spend = cash_amount * weights[index];
            let quantity = whole_shares(target_spend, candidate.price);
            quantities[index] = quantity;
            spent += Decimal::from(quantity) * candidate.price;
        }

        // Offer the pooled leftover to funds in rank order, one share per
        // fund per pass, until a full pass buys nothing.
        let mut pool = cash_amount - spent;
        loop {
            let mut bought = false;
            for (index, candidate) in candidates.iter().enumerate() {
                if pool >= candidate.price {
                    quantities[index] += 1;
                    pool -= candidate.price;
                    bought = true;
                }
            }
            if !bought {
                break;
            }
        }

        quantities
    }
}

/// Largest whole-share count affordable within `budget`. Guards against
/// the division rounding up across a whole-number boundary.
fn whole_shares(budget: Decimal, price: Decimal) -> u64 {
    if price <= Decimal::ZERO || budget < price {
        return 0;
    }
    let floored = (budget / price).floor();
    let Some(mut quantity) = floored.to_u64() else {
        warn!("Share count {} does not fit a u64; treating as unaffordable", floored);
        return 0;
    };
    while quantity > 0 && Decimal::from(quantity) * price > budget {
        quantity -= 1;
    }
    quantity
}
