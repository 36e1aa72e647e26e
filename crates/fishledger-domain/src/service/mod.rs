//! Domain services

pub mod currency;
pub mod monetary;
pub mod rounding;
pub mod settlement;
pub mod transaction_calculator;
pub mod validation;
pub mod weight_normalizer;

pub use currency::{format_currency, format_weight, parse_amount, parse_currency};
pub use monetary::{calculate_base_amount, calculate_commission, calculate_final_amount};
pub use settlement::{generate_settlement_report, settle_slips, summarize, SettlementSummary};
pub use transaction_calculator::{
    calculate_transaction, calculate_transaction_with, compare_methods, MethodComparison,
};
pub use validation::{validate_input, MAX_GROSS_WEIGHT_KG, MAX_RATE_PER_KG};
pub use weight_normalizer::calculate_net_weight;
