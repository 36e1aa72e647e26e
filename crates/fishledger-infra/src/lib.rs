//! Infrastructure layer - loaders and repository implementations

pub mod persistence;
pub mod transaction_csv;

pub use persistence::CsvTransactionSlipRepository;
pub use transaction_csv::{load_slips_from_csv, parse_slips};
