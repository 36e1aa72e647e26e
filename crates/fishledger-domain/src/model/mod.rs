//! Domain model types

pub mod calculation;
pub mod transaction_slip;

pub use calculation::{CalculationDefaults, CalculationInput, CalculationResult};
pub use transaction_slip::{SettledTransaction, TransactionSlip};
