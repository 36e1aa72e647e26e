//! Repository adapters for slip sources

use std::path::PathBuf;

use fishledger_infra::persistence::CsvTransactionSlipRepository;

use crate::config::Config;

/// Open a CSV slip file; rows without a method fall back to the configured one
pub fn open_slip_repo(csv_path: PathBuf, config: &Config) -> CsvTransactionSlipRepository {
    CsvTransactionSlipRepository::new(csv_path, config.default_method)
}
