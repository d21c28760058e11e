//! Ledgercast CLI — project a bank balance over a two-year horizon.
//!
//! Reads a TOML forecast document, prints the starting position and each
//! configured transaction, then one line per simulated day, and writes the
//! full ledger to a CSV file.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use ledgercast_core::config::ForecastConfig;
use ledgercast_core::engine::run_projection;
use ledgercast_core::reporting::write_ledger_csv;

#[derive(Parser)]
#[command(
    name = "ledgercast",
    about = "Project a bank balance forward from a set of recurring transactions"
)]
struct Cli {
    /// Path to the TOML forecast configuration.
    config: Option<PathBuf>,

    /// Destination for the day-by-day ledger CSV.
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(config_path) = cli.config else {
        // A missing config path is a usage problem, not a runtime error:
        // help on stdout, exit 1.
        Cli::command().print_help().context("print usage")?;
        std::process::exit(1);
    };

    let config = ForecastConfig::from_file(&config_path)
        .with_context(|| format!("load forecast from {}", config_path.display()))?;
    let plan = config.to_plan()?;

    println!("Balance: ${:.2}", plan.opening_balance);
    println!("Balance Date: {}", plan.start_date);
    for txn in &plan.transactions {
        println!(
            "Transaction: {} ({}, ${:.2}, {})",
            txn.name, txn.date, txn.amount, txn.recurrence
        );
    }

    let result = run_projection(&plan);
    println!("End Date: {}", result.end_date);

    for record in &result.records {
        println!("{} - {:.2}", record.date, record.balance);
    }

    write_ledger_csv(&cli.output, &result.records)
        .with_context(|| format!("write ledger to {}", cli.output.display()))?;

    Ok(())
}
