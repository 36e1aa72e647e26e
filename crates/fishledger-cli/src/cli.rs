//! CLI definition using clap

use clap::{Parser, Subcommand};
use fishledger_domain::service::parse_amount;
use fishledger_types::{DeductionMethod, OutputFormat};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fishledger")]
#[command(version)]
#[command(about = "Fish-market transaction calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a single lot
    Calc {
        /// Gross weight in kg (kg.grams, e.g. 15.700)
        #[arg(long, short = 'g')]
        gross: Decimal,

        /// Rate per kg; a currency symbol and separators are accepted
        #[arg(long, short = 'r', value_parser = parse_rate)]
        rate: Decimal,

        /// Deduction method (A or B). Uses config value if not specified.
        #[arg(long, short = 'm')]
        method: Option<DeductionMethod>,

        /// Deduction percent. Uses config value if not specified.
        #[arg(long, short = 'd')]
        deduction: Option<Decimal>,

        /// Commission percent. Uses config value if not specified.
        #[arg(long, short = 'c')]
        commission: Option<Decimal>,
    },

    /// Price a lot under both deduction methods side by side
    Compare {
        /// Gross weight in kg (kg.grams, e.g. 15.700)
        #[arg(long, short = 'g')]
        gross: Decimal,

        /// Rate per kg; a currency symbol and separators are accepted
        #[arg(long, short = 'r', value_parser = parse_rate)]
        rate: Decimal,

        /// Deduction percent. Uses config value if not specified.
        #[arg(long, short = 'd')]
        deduction: Option<Decimal>,

        /// Commission percent. Uses config value if not specified.
        #[arg(long, short = 'c')]
        commission: Option<Decimal>,
    },

    /// Settle a CSV file of transaction slips
    Settle {
        /// CSV with columns slip_no, date, party, gross_kg, rate, method, deduction_pct, commission_pct
        csv: PathBuf,

        /// Also write the full settlement as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default deduction method (A or B)
        #[arg(long)]
        set_method: Option<DeductionMethod>,

        /// Set default deduction percent
        #[arg(long)]
        set_deduction: Option<Decimal>,

        /// Set default commission percent
        #[arg(long)]
        set_commission: Option<Decimal>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_rate(s: &str) -> Result<Decimal, String> {
    parse_amount("rate", s).map_err(|e| e.to_string())
}
