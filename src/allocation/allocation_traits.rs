use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::model_portfolio::ModelFund;
use crate::portfolio::PortfolioSnapshot;
use crate::rules::RuleSet;

use super::allocation_model::{AllocationResult, AllocationRunRecord};

/// Returns the user's current positions and total portfolio value.
/// Ownership checks happen behind this seam, before the engine runs.
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    async fn get_snapshot(&self, portfolio_id: &str) -> Result<PortfolioSnapshot>;
}

/// Returns the single active model portfolio's fund list. "No active
/// model portfolio" is a precondition failure surfaced here.
#[async_trait]
pub trait ModelPortfolioProvider: Send + Sync {
    async fn get_active_funds(&self) -> Result<Vec<ModelFund>>;
}

/// Returns the single active rule set, or `None` when nothing is
/// configured; the service then materializes the documented default.
#[async_trait]
pub trait RuleSetProvider: Send + Sync {
    async fn get_active_rule_set(&self) -> Result<Option<RuleSet>>;
}

/// Persists the audit record of a run. The engine knows nothing about
/// how or where.
#[async_trait]
pub trait AllocationRecorder: Send + Sync {
    async fn record_run(&self, record: &AllocationRunRecord) -> Result<()>;
}

#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    async fn recommend_contribution(
        &self,
        portfolio_id: &str,
        cash_amount: Decimal,
    ) -> Result<AllocationResult>;
}
