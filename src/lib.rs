pub mod allocation;
pub mod constants;
pub mod errors;
pub mod model_portfolio;
pub mod portfolio;
pub mod rules;
pub mod utils;

pub use allocation::*;
pub use errors::{Error, Result};
pub use model_portfolio::*;
pub use portfolio::*;
pub use rules::*;
