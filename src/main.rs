//! Profit Estimator CLI
//!
//! Command-line interface for compound growth estimates.
//! Supports JSON output for scripting via --json flag

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use money_tools::growth::{
    estimate, GrowthError, GrowthOutcome, GrowthRequest, GrowthResult, ProgressionTrace,
    ZeroGrowthReason,
};
use money_tools::render;

/// Profit Estimator CLI Tool - Compound Growth Calculator
#[derive(Parser)]
#[command(name = "profit-estimator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate compound growth and show detailed breakdown
    Estimate(EstimateArgs),
}

/// Arguments for the estimate command.
#[derive(Args, Debug)]
struct EstimateArgs {
    /// Initial investment amount (e.g., 1000.0)
    #[arg(long)]
    initial: f64,

    /// Estimated % gain per period (e.g., 5 for 5%)
    #[arg(long)]
    gain: f64,

    /// Name of the period (e.g., "monthly", "yearly", "weekly", "twice a day", "three times a week")
    #[arg(long)]
    period: String,

    /// Number of periods (e.g., 12, 60)
    #[arg(long)]
    increments: i64,

    /// Print the result as JSON instead of the breakdown
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EstimateResponse<'a> {
    request: &'a GrowthRequest,
    outcome: &'a GrowthOutcome,
}

#[derive(Serialize)]
struct EstimateErrorResponse {
    errors: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Estimate(args) => run_estimate(args),
    }
}

fn run_estimate(args: EstimateArgs) -> Result<()> {
    let json = args.json;
    let request = GrowthRequest {
        initial: args.initial,
        gain_percent: args.gain,
        period: args.period,
        increments: args.increments,
    };

    match estimate(&request) {
        Ok(outcome) if json => {
            let response = EstimateResponse {
                request: &request,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        Ok(outcome) => print_outcome(&request, &outcome),
        Err(error) if json => {
            let response = EstimateErrorResponse {
                errors: error.violations.iter().map(|v| v.to_string()).collect(),
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        Err(error) => print_errors(&error),
    }

    Ok(())
}

/// Lists every violation, then asks for corrected input. Reported, not
/// fatal: the process still exits 0.
fn print_errors(error: &GrowthError) {
    println!("Error(s) in input:");
    for violation in &error.violations {
        println!("  • {violation}");
    }
    println!("\nPlease correct and try again.");
}

fn print_outcome(request: &GrowthRequest, outcome: &GrowthOutcome) {
    match outcome {
        GrowthOutcome::ZeroGrowth {
            reason,
            final_amount,
        } => {
            match reason {
                ZeroGrowthReason::NoIncrements => {
                    println!("0 increments → no growth. Final = initial.")
                }
                ZeroGrowthReason::NoGain => println!("0% gain per period → no growth."),
            }
            println!("Final amount: {}", render::money(*final_amount));
            println!("Profit: $0.00");
        }
        GrowthOutcome::Compounded(result) => print_breakdown(request, result),
    }
}

fn print_breakdown(request: &GrowthRequest, result: &GrowthResult) {
    // Multi-occurrence periods compound more often than the increment count
    // suggests; say so up front.
    if result.descriptor.frequency > 1 {
        println!(
            "  Note: {} increments of {} = {} total occurrences",
            request.increments, request.period, result.actual_occurrences
        );
    }

    println!(
        "{}",
        "\n┌──────────────────────────────────────────────┐".bright_blue()
    );
    println!(
        "{}",
        "          Compound Growth Estimate             "
            .bright_blue()
            .bold()
    );
    println!(
        "{}",
        "└──────────────────────────────────────────────┘".bright_blue()
    );

    println!(
        "  Initial amount       :  {}",
        render::money(request.initial)
    );
    println!(
        "  Gain per {}  :  {}",
        request.period,
        render::signed_percent(request.gain_percent)
    );
    println!(
        "  Number of periods     :  {}",
        render::count(request.increments)
    );
    println!(
        "  Growth multiplier     :  {}",
        render::multiplier(result.multiplier)
    );
    println!();

    match ProgressionTrace::for_request(request) {
        Some(trace) => {
            println!("Progression (first few and last periods):");
            for point in trace {
                if i64::from(point.period) <= 5 || i64::from(point.period) == request.increments {
                    println!(
                        "  After {:2} {:<8} → {}",
                        point.period,
                        request.period,
                        render::money(point.amount)
                    );
                }
            }
            if request.increments > 10 {
                println!("  ...");
            }
        }
        None => println!(
            "(Detailed period-by-period breakdown skipped — {} periods is large)",
            request.increments
        ),
    }

    println!(
        "{}",
        format!(
            "\n  Final amount          :  {}",
            render::money(result.final_amount)
        )
        .green()
        .bold()
    );
    println!(
        "{}",
        format!("  Total profit          :  {}", render::money(result.profit))
            .green()
            .bold()
    );
    println!(
        "{}",
        format!(
            "  Total return          :  {}",
            render::signed_percent(result.profit_percent)
        )
        .green()
        .bold()
    );

    println!(
        "  ≈ Effective annual rate : {:.2}%",
        result.effective_annual_rate_percent
    );

    println!();
}
