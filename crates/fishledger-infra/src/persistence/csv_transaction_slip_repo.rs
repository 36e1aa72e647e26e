//! CSV-backed implementation of TransactionSlipRepository

use std::path::{Path, PathBuf};

use fishledger_domain::model::TransactionSlip;
use fishledger_domain::repository::TransactionSlipRepository;
use fishledger_types::{DeductionMethod, Error};

use crate::transaction_csv::load_slips_from_csv;

/// Read-only slip source over a CSV file; the file is read on every call
pub struct CsvTransactionSlipRepository {
    csv_path: PathBuf,
    default_method: DeductionMethod,
}

impl CsvTransactionSlipRepository {
    pub fn new(csv_path: PathBuf, default_method: DeductionMethod) -> Self {
        Self {
            csv_path,
            default_method,
        }
    }

    /// Get the CSV path
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl TransactionSlipRepository for CsvTransactionSlipRepository {
    fn find_all(&self) -> Result<Vec<TransactionSlip>, Error> {
        load_slips_from_csv(&self.csv_path, self.default_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day.csv");
        std::fs::write(&path, "slip_no,gross_kg,rate,method\nS-1,15.700,120,B\nS-2,13.500,110,\n").unwrap();

        let repo = CsvTransactionSlipRepository::new(path.clone(), DeductionMethod::A);
        assert_eq!(repo.csv_path(), path.as_path());
        let slips = repo.find_all().unwrap();
        assert_eq!(slips.len(), 2);
        assert_eq!(slips[0].input.deduction_method, DeductionMethod::B);
        assert_eq!(slips[1].input.deduction_method, DeductionMethod::A);
    }
}
