//! Command handlers

use std::path::{Path, PathBuf};

use fishledger_app::app::{quote, quote_both_methods, settle_file, QuoteRequest};
use fishledger_app::config::Config;
use fishledger_domain::service::validation::check_percent;
use fishledger_types::{DeductionMethod, OutputFormat, Result};
use rust_decimal::Decimal;

use crate::cli::{Cli, Commands};
use crate::output::{output_comparison, output_result, output_settlement};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Calc {
            gross,
            rate,
            method,
            deduction,
            commission,
        } => {
            let request = QuoteRequest {
                gross_weight_kg: gross,
                rate_per_kg: rate,
                method,
                deduction_percent: deduction,
                commission_percent: commission,
            };
            let result = quote(&request, &config)?;
            output_result(output_format, &result, &config.currency_symbol)
        }

        Commands::Compare {
            gross,
            rate,
            deduction,
            commission,
        } => {
            let request = QuoteRequest {
                gross_weight_kg: gross,
                rate_per_kg: rate,
                method: None,
                deduction_percent: deduction,
                commission_percent: commission,
            };
            let comparison = quote_both_methods(&request, &config)?;
            output_comparison(output_format, &comparison, &config.currency_symbol)
        }

        Commands::Settle { csv, output } => cmd_settle(&config, &csv, output, output_format),

        Commands::Config {
            show,
            set_method,
            set_deduction,
            set_commission,
            set_currency,
            set_output,
            reset,
        } => cmd_config(
            config,
            &config_path,
            ConfigChanges {
                show,
                set_method,
                set_deduction,
                set_commission,
                set_currency,
                set_output,
                reset,
            },
        ),
    }
}

fn cmd_settle(config: &Config, csv: &Path, output: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let run = settle_file(csv, config)?;

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&run)?)?;
        tracing::info!("Settlement written to {}", path.display());
    }

    output_settlement(output_format, &run, &config.currency_symbol)
}

struct ConfigChanges {
    show: bool,
    set_method: Option<DeductionMethod>,
    set_deduction: Option<Decimal>,
    set_commission: Option<Decimal>,
    set_currency: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
}

fn cmd_config(mut config: Config, config_path: &Path, changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(method) = changes.set_method {
        config.default_method = method;
        modified = true;
    }
    if let Some(percent) = changes.set_deduction {
        check_percent("deduction percent", percent)?;
        config.deduction_percent = percent;
        modified = true;
    }
    if let Some(percent) = changes.set_commission {
        check_percent("commission percent", percent)?;
        config.commission_percent = percent;
        modified = true;
    }
    if let Some(symbol) = changes.set_currency {
        config.currency_symbol = symbol;
        modified = true;
    }
    if let Some(format) = changes.set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration saved.");
    }

    if changes.show || !modified {
        println!("{}", config);
        println!("Config file:      {}", config_path.display());
    }

    Ok(())
}
