//! Use cases

pub mod calculation_service;
pub mod settlement_service;

pub use calculation_service::{quote, quote_both_methods, QuoteRequest};
pub use settlement_service::{settle, settle_file, SettlementRun};
