pub mod model_portfolio_model;

pub use model_portfolio_model::{validate_target_sum, ModelFund, RecommendationSignal};
