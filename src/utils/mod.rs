pub mod decimal_serde;
