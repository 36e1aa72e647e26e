//! Output formatting module

use fishledger_app::app::SettlementRun;
use fishledger_domain::service::{format_currency, format_weight, MethodComparison};
use fishledger_domain::CalculationResult;
use fishledger_types::{OutputFormat, Result};

pub fn output_result(output_format: OutputFormat, result: &CalculationResult, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_result(result, symbol));
    }
    Ok(())
}

pub fn output_comparison(output_format: OutputFormat, comparison: &MethodComparison, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(comparison)?);
    } else {
        print!("{}", render_comparison(comparison, symbol));
    }
    Ok(())
}

pub fn output_settlement(output_format: OutputFormat, run: &SettlementRun, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(run)?);
    } else {
        print!("{}", run.report(symbol));
    }
    Ok(())
}

fn render_result(result: &CalculationResult, symbol: &str) -> String {
    let mut out = String::new();
    out.push_str("\nCalculation Result\n");
    out.push_str("==================\n");
    out.push_str(&format!(
        "Method:          {} ({})\n",
        result.deduction_method,
        result.deduction_method.label()
    ));
    out.push_str(&format!("Gross weight:    {}\n", format_weight(result.gross_weight_kg)));
    out.push_str(&format!(
        "Deduction:       {}% (-{})\n",
        result.deduction_percent,
        format_weight(result.deducted_weight_kg())
    ));
    out.push_str(&format!("Net weight:      {}\n", format_weight(result.net_weight_kg)));
    out.push_str(&format!("Rate:            {} / kg\n", format_currency(result.rate_per_kg, symbol)));
    out.push_str("------------------\n");
    out.push_str(&format!("Base amount:     {}\n", format_currency(result.base_amount, symbol)));
    out.push_str(&format!(
        "Commission:      {} ({}%)\n",
        format_currency(result.commission_amount, symbol),
        result.commission_percent
    ));
    out.push_str(&format!("Final amount:    {}\n", format_currency(result.final_amount, symbol)));
    out
}

fn render_comparison(comparison: &MethodComparison, symbol: &str) -> String {
    let a = &comparison.method_a;
    let b = &comparison.method_b;
    let mut out = String::new();
    out.push_str("\nMethod Comparison\n");
    out.push_str("=================\n");
    out.push_str(&format!("{:<14} {:>16} {:>16} {:>14}\n", "", "A", "B", "B - A"));
    out.push_str(&format!(
        "{:<14} {:>16} {:>16} {:>14}\n",
        "Net weight",
        format_weight(a.net_weight_kg),
        format_weight(b.net_weight_kg),
        format_weight(comparison.net_weight_delta_kg)
    ));
    for (label, av, bv) in [
        ("Base amount", a.base_amount, b.base_amount),
        ("Commission", a.commission_amount, b.commission_amount),
        ("Final amount", a.final_amount, b.final_amount),
    ] {
        out.push_str(&format!(
            "{:<14} {:>16} {:>16} {:>14}\n",
            label,
            format_currency(av, symbol),
            format_currency(bv, symbol),
            format_currency(bv - av, symbol)
        ));
    }
    match comparison.higher_paying() {
        Some(method) => out.push_str(&format!("\nMethod {} pays more ({})\n", method, method.label())),
        None => out.push_str("\nBoth methods pay the same\n"),
    }
    out
}
