//! Repository implementations
//!
//! This module provides file-based implementations of the repository traits.

mod csv_transaction_slip_repo;

pub use csv_transaction_slip_repo::CsvTransactionSlipRepository;
