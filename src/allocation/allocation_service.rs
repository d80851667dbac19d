use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::{MAX_CONTRIBUTION, MIN_CONTRIBUTION};
use crate::errors::{PricingError, Result, ValidationError};

use super::allocation_model::{AllocationResult, AllocationRunRecord};
use super::allocation_traits::{
    AllocationRecorder, ContributionServiceTrait, HoldingsProvider, ModelPortfolioProvider,
    RuleSetProvider,
};
use super::contribution_engine::ContributionEngine;

/// Orchestrates one recommendation run: fetches the input snapshots,
/// invokes the engine, and hands the audit record to the recorder.
pub struct ContributionService {
    holdings_provider: Arc<dyn HoldingsProvider>,
    model_portfolio_provider: Arc<dyn ModelPortfolioProvider>,
    rule_set_provider: Arc<dyn RuleSetProvider>,
    recorder: Arc<dyn AllocationRecorder>,
    engine: ContributionEngine,
    strict_pricing: bool,
}

impl ContributionService {
    pub fn new(
        holdings_provider: Arc<dyn HoldingsProvider>,
        model_portfolio_provider: Arc<dyn ModelPortfolioProvider>,
        rule_set_provider: Arc<dyn RuleSetProvider>,
        recorder: Arc<dyn AllocationRecorder>,
    ) -> Self {
        Self {
            holdings_provider,
            model_portfolio_provider,
            rule_set_provider,
            recorder,
            engine: ContributionEngine::new(),
            strict_pricing: false,
        }
    }

    /// Strict mode turns any pricing anomaly into a hard failure instead
    /// of excluding the fund and proceeding. Lenient is the default.
    pub fn with_strict_pricing(mut self, strict: bool) -> Self {
        self.strict_pricing = strict;
        self
    }
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    async fn recommend_contribution(
        &self,
        portfolio_id: &str,
        cash_amount: Decimal,
    ) -> Result<AllocationResult> {
        if cash_amount < MIN_CONTRIBUTION || cash_amount > MAX_CONTRIBUTION {
            return Err(ValidationError::CashOutOfBounds {
                amount: cash_amount,
                min: MIN_CONTRIBUTION,
                max: MAX_CONTRIBUTION,
            }
            .into());
        }

        let snapshot = self.holdings_provider.get_snapshot(portfolio_id).await?;
        let model_funds = self.model_portfolio_provider.get_active_funds().await?;
        let rules = match self.rule_set_provider.get_active_rule_set().await? {
            Some(rules) => rules,
            None => {
                debug!("No active rule set configured; using the documented default");
                Default::default()
            }
        };

        let result = self
            .engine
            .recommend(&snapshot, &model_funds, &rules, cash_amount)?;

        if self.strict_pricing {
            if let Some(anomaly) = result.warnings.first() {
                return Err(PricingError::NonPositivePrice {
                    ticker: anomaly.ticker.clone(),
                    price: anomaly.price,
                }
                .into());
            }
        }

        let record = AllocationRunRecord {
            id: Uuid::new_v4(),
            portfolio_id: portfolio_id.to_string(),
            cash_amount,
            rule_set: rules,
            result: result.clone(),
            created_at: Utc::now(),
        };
        // Audit is best-effort: a recommendation the user can act on beats
        // a failed run over a missing audit row.
        if let Err(e) = self.recorder.record_run(&record).await {
            error!(
                "Failed to record allocation run {} for portfolio {}: {}",
                record.id, portfolio_id, e
            );
        }

        Ok(result)
    }
}
