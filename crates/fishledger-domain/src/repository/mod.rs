//! Repository trait definitions for slip sources

use fishledger_types::Error;

use crate::model::TransactionSlip;

/// Source of transaction slips to be settled
pub trait TransactionSlipRepository {
    /// Load all slips in their recorded order
    fn find_all(&self) -> Result<Vec<TransactionSlip>, Error>;
}
