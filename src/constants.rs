use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for score and valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Smallest contribution amount the service layer accepts
pub const MIN_CONTRIBUTION: Decimal = dec!(50);

/// Largest contribution amount the service layer accepts
pub const MAX_CONTRIBUTION: Decimal = dec!(1_000_000);

/// Default minimum acceptable discount (percent) when no rule set is configured
pub const DEFAULT_MIN_ACCEPTABLE_DISCOUNT: Decimal = dec!(0);

/// Default for considering funds trading at or above their ceiling price
pub const DEFAULT_ALLOW_NO_DISCOUNT: bool = true;

/// Default imbalance tolerance band, in percentage points
pub const DEFAULT_TOLERANCE_BAND: Decimal = dec!(2);

/// Default weight of the imbalance axis in the composite score
pub const DEFAULT_IMBALANCE_WEIGHT: u32 = 60;

/// Default weight of the discount axis in the composite score
pub const DEFAULT_DISCOUNT_WEIGHT: u32 = 40;

/// Default cap on the number of funds recommended per run
pub const DEFAULT_MAX_FUNDS: usize = 5;

/// Default distribution mode (false = proportional)
pub const DEFAULT_SEQUENTIAL_ALLOCATION: bool = false;
