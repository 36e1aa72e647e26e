//! CSV loader for transaction slips
//!
//! Expected header (column order is free, optional columns may be absent):
//! slip_no, date, party, gross_kg, rate, method, deduction_pct, commission_pct

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use fishledger_domain::model::{CalculationInput, TransactionSlip};
use fishledger_domain::service::{parse_amount, validate_input};
use fishledger_types::{DeductionMethod, Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SlipRecord {
    #[serde(alias = "slip_number", alias = "slip")]
    slip_no: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    party: String,
    #[serde(alias = "gross_weight_kg", alias = "gross")]
    gross_kg: String,
    #[serde(alias = "rate_per_kg")]
    rate: String,
    #[serde(default)]
    method: String,
    #[serde(default)]
    deduction_pct: String,
    #[serde(default)]
    commission_pct: String,
}

/// Load slips from a CSV file. Rows without a method use `default_method`.
pub fn load_slips_from_csv(path: &Path, default_method: DeductionMethod) -> Result<Vec<TransactionSlip>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let slips = parse_slips(file, default_method)?;
    tracing::info!("Loaded {} slips from {}", slips.len(), path.display());
    Ok(slips)
}

/// Parse slips from any CSV source.
///
/// Every row is validated; the first bad row aborts the load with its
/// 1-based data row number attached.
pub fn parse_slips<R: Read>(reader: R, default_method: DeductionMethod) -> Result<Vec<TransactionSlip>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut slips = Vec::new();
    for (index, record) in csv_reader.deserialize::<SlipRecord>().enumerate() {
        let row = index + 1;
        let slip = record
            .map_err(Error::from)
            .and_then(|record| record_to_slip(record, default_method))
            .map_err(|e| e.at_row(row))?;
        tracing::debug!(row, slip = %slip.slip_number, "parsed slip");
        slips.push(slip);
    }
    Ok(slips)
}

fn record_to_slip(record: SlipRecord, default_method: DeductionMethod) -> Result<TransactionSlip> {
    let method = if record.method.is_empty() {
        default_method
    } else {
        record.method.parse()?
    };

    let mut input = CalculationInput::new(
        parse_decimal("gross_kg", &record.gross_kg)?,
        parse_amount("rate", &record.rate)?,
        method,
    );
    input.deduction_percent = parse_optional_percent("deduction_pct", &record.deduction_pct)?;
    input.commission_percent = parse_optional_percent("commission_pct", &record.commission_pct)?;
    validate_input(&input)?;

    Ok(TransactionSlip {
        date: parse_optional_date(&record.date, &record.slip_no),
        party: Some(record.party).filter(|p| !p.is_empty()),
        slip_number: record.slip_no,
        input,
    })
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_optional_percent(field: &'static str, value: &str) -> Result<Option<Decimal>> {
    let value = value.trim_end_matches('%').trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_decimal(field, value).map(Some)
}

fn parse_optional_date(s: &str, slip_no: &str) -> Option<chrono::NaiveDate> {
    if s.is_empty() {
        return None;
    }
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];
    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    tracing::warn!("Slip {}: unrecognised date '{}', leaving it blank", slip_no, s);
    None
}
