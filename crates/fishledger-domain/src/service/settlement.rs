//! Settlement of a batch of transaction slips

use chrono::NaiveDate;
use fishledger_types::DeductionMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{format_currency, format_weight};
use super::rounding::{round_money, round_weight};
use super::transaction_calculator::calculate_transaction_with;
use crate::model::{CalculationDefaults, SettledTransaction, TransactionSlip};

/// Totals over a batch of settled slips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub total_slips: usize,
    pub method_a_count: usize,
    pub method_b_count: usize,
    pub total_gross_weight_kg: Decimal,
    pub total_net_weight_kg: Decimal,
    pub total_base_amount: Decimal,
    pub total_commission_amount: Decimal,
    pub total_final_amount: Decimal,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn settle_slips(slips: &[TransactionSlip], defaults: &CalculationDefaults) -> Vec<SettledTransaction> {
    slips
        .iter()
        .map(|slip| SettledTransaction {
            result: calculate_transaction_with(&slip.input, defaults),
            slip: slip.clone(),
        })
        .collect()
}

/// Sum already-rounded per-slip values; totals are never recomputed from raw weights
pub fn summarize(settled: &[SettledTransaction]) -> SettlementSummary {
    let mut summary = SettlementSummary {
        total_slips: settled.len(),
        method_a_count: 0,
        method_b_count: 0,
        total_gross_weight_kg: Decimal::ZERO,
        total_net_weight_kg: Decimal::ZERO,
        total_base_amount: Decimal::ZERO,
        total_commission_amount: Decimal::ZERO,
        total_final_amount: Decimal::ZERO,
        first_date: None,
        last_date: None,
    };

    for entry in settled {
        let result = &entry.result;
        match result.deduction_method {
            DeductionMethod::A => summary.method_a_count += 1,
            DeductionMethod::B => summary.method_b_count += 1,
        }
        summary.total_gross_weight_kg += result.gross_weight_kg;
        summary.total_net_weight_kg += result.net_weight_kg;
        summary.total_base_amount += result.base_amount;
        summary.total_commission_amount += result.commission_amount;
        summary.total_final_amount += result.final_amount;

        if let Some(date) = entry.slip.date {
            summary.first_date = Some(summary.first_date.map_or(date, |d| d.min(date)));
            summary.last_date = Some(summary.last_date.map_or(date, |d| d.max(date)));
        }
    }

    summary
}

pub fn generate_settlement_report(
    summary: &SettlementSummary,
    settled: &[SettledTransaction],
    currency_symbol: &str,
) -> String {
    let money = |amount: Decimal| format_currency(amount, currency_symbol);

    let mut report = String::new();
    report.push_str("==========================================================================\n");
    report.push_str("                          Settlement Report                               \n");
    report.push_str("==========================================================================\n\n");

    report.push_str("[Summary]\n");
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) if first == last => {
            report.push_str(&format!("  Date:               {}\n", first));
        }
        (Some(first), Some(last)) => {
            report.push_str(&format!("  Period:             {} .. {}\n", first, last));
        }
        _ => {}
    }
    report.push_str(&format!("  Total slips:        {}\n", summary.total_slips));
    report.push_str(&format!(
        "  By method:          A {} / B {}\n",
        summary.method_a_count, summary.method_b_count
    ));
    report.push_str(&format!("  Gross weight:       {}\n", format_weight(summary.total_gross_weight_kg)));
    report.push_str(&format!("  Net weight:         {}\n", format_weight(summary.total_net_weight_kg)));
    report.push_str(&format!("  Base amount:        {}\n", money(summary.total_base_amount)));
    report.push_str(&format!("  Commission:         {}\n", money(summary.total_commission_amount)));
    report.push_str(&format!("  Final amount:       {}\n", money(summary.total_final_amount)));
    report.push('\n');

    if settled.is_empty() {
        report.push_str("[No Slips]\n\n");
    } else {
        report.push_str("[Slips]\n");
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<10} {:<14} {:>3} {:>10} {:>10} {:>10} {:>14}\n",
            "Slip No", "Party", "M", "Gross kg", "Net kg", "Rate", "Final"
        ));
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        for entry in settled {
            let result = &entry.result;
            report.push_str(&format!(
                "{:<10} {:<14} {:>3} {:>10} {:>10} {:>10} {:>14}\n",
                truncate_str(&entry.slip.slip_number, 10),
                truncate_str(entry.slip.party.as_deref().unwrap_or("-"), 14),
                result.deduction_method.code(),
                round_weight(result.gross_weight_kg).to_string(),
                result.net_weight_kg.to_string(),
                round_money(result.rate_per_kg).to_string(),
                money(result.final_amount)
            ));
        }
        report.push('\n');
    }

    report.push_str("==========================================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CalculationInput;
    use rust_decimal_macros::dec;

    fn slip(number: &str, date: Option<NaiveDate>, method: DeductionMethod) -> TransactionSlip {
        TransactionSlip {
            slip_number: number.to_string(),
            date,
            party: Some("Harbour Traders".to_string()),
            input: CalculationInput::new(dec!(15.700), dec!(120), method),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_settle_slips_keeps_order() {
        let slips = vec![
            slip("001", None, DeductionMethod::A),
            slip("002", None, DeductionMethod::B),
        ];
        let settled = settle_slips(&slips, &CalculationDefaults::default());
        assert_eq!(settled.len(), 2);
        assert_eq!(settled[0].slip.slip_number, "001");
        assert_eq!(settled[0].result.final_amount, dec!(1825.60));
        assert_eq!(settled[1].result.final_amount, dec!(1829.88));
    }

    #[test]
    fn test_summarize_totals() {
        let slips = vec![
            slip("001", ymd(2024, 3, 2), DeductionMethod::A),
            slip("002", ymd(2024, 3, 1), DeductionMethod::B),
            slip("003", None, DeductionMethod::B),
        ];
        let settled = settle_slips(&slips, &CalculationDefaults::default());
        let summary = summarize(&settled);
        assert_eq!(summary.total_slips, 3);
        assert_eq!(summary.method_a_count, 1);
        assert_eq!(summary.method_b_count, 2);
        assert_eq!(summary.total_gross_weight_kg, dec!(47.100));
        assert_eq!(summary.total_net_weight_kg, dec!(44.815));
        assert_eq!(summary.total_base_amount, dec!(5377.80));
        assert_eq!(summary.total_commission_amount, dec!(107.56));
        assert_eq!(summary.total_final_amount, dec!(5485.36));
        assert_eq!(summary.first_date, ymd(2024, 3, 1));
        assert_eq!(summary.last_date, ymd(2024, 3, 2));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_slips, 0);
        assert_eq!(summary.total_final_amount, Decimal::ZERO);
        assert!(summary.first_date.is_none());
    }

    #[test]
    fn test_generate_report() {
        let slips = vec![
            slip("001", ymd(2024, 3, 1), DeductionMethod::A),
            slip("002", ymd(2024, 3, 1), DeductionMethod::B),
        ];
        let settled = settle_slips(&slips, &CalculationDefaults::default());
        let report = generate_settlement_report(&summarize(&settled), &settled, "₹");
        assert!(report.contains("Settlement Report"));
        assert!(report.contains("Date:               2024-03-01"));
        assert!(report.contains("A 1 / B 1"));
        assert!(report.contains("₹3,655.48"));
        assert!(report.contains("₹1,825.60"));
        assert!(report.contains("14.950"));
        assert!(report.contains("Harbour Trad.."));
    }

    #[test]
    fn test_generate_report_without_slips() {
        let report = generate_settlement_report(&summarize(&[]), &[], "$");
        assert!(report.contains("[No Slips]"));
        assert!(report.contains("$0.00"));
    }
}
