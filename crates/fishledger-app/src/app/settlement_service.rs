//! Settlement Service - price a day's slips and total them

use std::path::Path;

use fishledger_domain::model::SettledTransaction;
use fishledger_domain::repository::TransactionSlipRepository;
use fishledger_domain::service::{generate_settlement_report, settle_slips, summarize, SettlementSummary};
use fishledger_types::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::repository::open_slip_repo;

/// Outcome of settling one slip source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRun {
    pub summary: SettlementSummary,
    pub transactions: Vec<SettledTransaction>,
}

impl SettlementRun {
    pub fn report(&self, currency_symbol: &str) -> String {
        generate_settlement_report(&self.summary, &self.transactions, currency_symbol)
    }
}

pub fn settle(repo: &dyn TransactionSlipRepository, config: &Config) -> Result<SettlementRun> {
    let slips = repo.find_all()?;
    let transactions = settle_slips(&slips, &config.defaults());
    let summary = summarize(&transactions);
    tracing::info!(
        slips = summary.total_slips,
        total = %summary.total_final_amount,
        "settled batch"
    );
    Ok(SettlementRun {
        summary,
        transactions,
    })
}

pub fn settle_file(csv_path: &Path, config: &Config) -> Result<SettlementRun> {
    let repo = open_slip_repo(csv_path.to_path_buf(), config);
    tracing::debug!("Settling slips from {}", repo.csv_path().display());
    settle(&repo, config)
}
