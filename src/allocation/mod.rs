pub mod allocation_engine;
pub mod allocation_model;
pub mod allocation_service;
pub mod allocation_traits;
pub mod contribution_engine;
pub mod discount_scorer;
pub mod imbalance_scorer;
pub mod prioritization_engine;

// Re-export the main public entry points and types
pub use allocation_engine::AllocationEngine;
pub use allocation_model::{
    AllocationLine, AllocationResult, AllocationRunRecord, CandidateScore, PricingAnomaly,
};
pub use allocation_service::ContributionService;
pub use allocation_traits::{
    AllocationRecorder, ContributionServiceTrait, HoldingsProvider, ModelPortfolioProvider,
    RuleSetProvider,
};
pub use contribution_engine::ContributionEngine;
pub use discount_scorer::{DiscountScore, DiscountScorer};
pub use imbalance_scorer::{ImbalanceScore, ImbalanceScorer};
pub use prioritization_engine::{PrioritizationEngine, RankedCandidates};

#[cfg(test)]
pub(crate) mod tests;
