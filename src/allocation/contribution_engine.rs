use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::model_portfolio::ModelFund;
use crate::portfolio::PortfolioSnapshot;
use crate::rules::RuleSet;

use super::allocation_engine::AllocationEngine;
use super::allocation_model::AllocationResult;
use super::prioritization_engine::PrioritizationEngine;

/// The engine's public contract: a pure, synchronous computation over a
/// rule set and a snapshot of holdings and prices.
///
/// Identical inputs yield identical results; there is no internal
/// concurrency, I/O, or shared state, so runs for different users may
/// execute concurrently with no coordination.
#[derive(Default, Debug, Clone)]
pub struct ContributionEngine {
    prioritization: PrioritizationEngine,
    allocation: AllocationEngine,
}

impl ContributionEngine {
    pub fn new() -> Self {
        ContributionEngine {
            prioritization: PrioritizationEngine::new(),
            allocation: AllocationEngine::new(),
        }
    }

    /// Ranks the model funds and splits `cash_amount` into whole-share
    /// purchases.
    ///
    /// Fails fast with a `ConfigurationError` on a structurally invalid
    /// rule set and with a `ValidationError` on unusable inputs. "No
    /// eligible fund" is not an error: the result then has zero lines and
    /// the full amount as remainder.
    pub fn recommend(
        &self,
        snapshot: &PortfolioSnapshot,
        model_funds: &[ModelFund],
        rules: &RuleSet,
        cash_amount: Decimal,
    ) -> Result<AllocationResult> {
        rules.validate()?;
        if cash_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveCash(cash_amount).into());
        }
        if model_funds.is_empty() {
            return Err(ValidationError::EmptyModelPortfolio.into());
        }
        snapshot.validate()?;

        debug!(
            "Starting contribution run for portfolio {} with {} model fund(s) and cash {}",
            snapshot.portfolio_id,
            model_funds.len(),
            cash_amount
        );

        let ranked = self.prioritization.prioritize(snapshot, model_funds, rules)?;
        let mut result = self.allocation.allocate(
            &ranked.candidates,
            cash_amount,
            snapshot.total_value,
            rules.sequential_allocation,
        );
        result.warnings = ranked.anomalies;

        debug!(
            "Contribution run for portfolio {} invested {} across {} fund(s)",
            snapshot.portfolio_id, result.total_invested, result.funds_recommended
        );

        Ok(result)
    }
}
