use rust_decimal::Decimal;
use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the recommendation engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Rule set configuration invalid: {0}")]
    Config(#[from] ConfigurationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Pricing anomaly: {0}")]
    Pricing(#[from] PricingError),
}

/// Structural rule-set violations. Fatal to a run, never silently corrected.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("imbalance weight {imbalance} and discount weight {discount} must sum to 100")]
    WeightsMismatch { imbalance: u32, discount: u32 },

    #[error("maxFunds must be at least 1")]
    NonPositiveFundCap,

    #[error("tolerance band must not be negative, got {0}")]
    NegativeTolerance(Decimal),

    #[error("minimum acceptable discount {0} is outside the -100..=100 percent range")]
    DiscountOutOfRange(Decimal),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("cashAmount must be greater than zero, got {0}")]
    NonPositiveCash(Decimal),

    #[error("cashAmount {amount} is outside the accepted {min}..={max} range")]
    CashOutOfBounds {
        amount: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("model portfolio has no funds")]
    EmptyModelPortfolio,

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("position {ticker}: field '{field}' must not be negative")]
    NegativePositionField { ticker: String, field: &'static str },
}

/// A model fund carrying a price the engine cannot work with.
/// Only surfaced as an error in strict mode; lenient runs report the
/// anomaly alongside the result instead.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("fund {ticker} has non-positive price {price}")]
    NonPositivePrice { ticker: String, price: Decimal },
}
