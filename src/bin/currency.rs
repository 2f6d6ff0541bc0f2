//! Currency converter CLI
//!
//! Converts an amount between currencies using live rates from
//! open.er-api.com. Supports JSON output for scripting via --json flag

use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use money_tools::rates::{self, RateQuote};
use money_tools::render;

/// Convert AMOUNT from FROM_CURRENCY to TO_CURRENCY using live rates
#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount to convert
    amount: Option<f64>,

    /// Source currency code (e.g., USD)
    from_currency: Option<String>,

    /// Target currency code (e.g., PHP)
    to_currency: Option<String>,

    /// Just list available currencies and exit
    #[arg(long)]
    list: bool,

    /// Show more decimal places in rate
    #[arg(long)]
    precise: bool,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct ConversionRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Result")]
    result: String,
}

#[derive(Serialize)]
struct ConversionResponse<'a> {
    base: &'a str,
    target: &'a str,
    rate: f64,
    amount: f64,
    result: f64,
    updated: &'a str,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list {
        print_currency_list();
        return Ok(());
    }

    let (amount, from, to) = match (cli.amount, &cli.from_currency, &cli.to_currency) {
        (Some(amount), Some(from), Some(to)) => (amount, from.as_str(), to.as_str()),
        _ => {
            eprintln!("{}", "Error: Missing required arguments".red());
            eprintln!("Usage: currency AMOUNT FROM_CURRENCY TO_CURRENCY");
            eprintln!("Try 'currency --help' for more information.");
            process::exit(1);
        }
    };

    let quote = match rates::fetch_rate(from, to) {
        Ok(quote) => quote,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            process::exit(1);
        }
    };
    let result = rates::convert(amount, &quote);

    if cli.json {
        let response = ConversionResponse {
            base: &quote.base,
            target: &quote.target,
            rate: quote.rate,
            amount,
            result,
            updated: &quote.updated,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let decimals = if cli.precise { 6 } else { 4 };
    print_conversion(amount, result, &quote, decimals);
    Ok(())
}

fn print_currency_list() {
    println!("{}", "Supported currencies (partial list):".yellow());
    println!("USD, EUR, GBP, JPY, PHP, KRW, CAD, AUD, INR, CNY, ...");
    println!(
        "{}",
        "(fetches live from open.er-api.com — 170+ currencies)".dimmed()
    );
}

fn print_conversion(amount: f64, result: f64, quote: &RateQuote, decimals: usize) {
    let row = ConversionRow {
        from: format!("{} {}", render::grouped(amount, 2), quote.base),
        to: quote.target.clone(),
        rate: format!(
            "1 {} = {} {}",
            quote.base,
            render::grouped(quote.rate, decimals),
            quote.target
        ),
        result: format!("{} {}", render::grouped(result, 2), quote.target),
    };

    println!("\n{} {}", "Updated:".dimmed(), quote.updated);

    let table = Table::new([row])
        .with(Style::rounded())
        .with(Alignment::right())
        .to_string();
    println!("{table}");
}
