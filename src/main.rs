//! Loan Simulator CLI
//!
//! Runs one lending simulation and writes the daily records

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use loan_simulator::simulation::export;
use loan_simulator::{ScheduleKind, SimulationConfig, SimulationEngine};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Day-stepped lending simulation
#[derive(Parser, Debug)]
#[command(name = "loan-sim", version, about)]
struct Cli {
    /// Repayment schedule: 1 = 13.0 on day 12, 2 = 9.0 on day 3 and 4.0 on day 35
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    schedule: i64,

    /// Maximum loans attempted per day
    #[arg(long, default_value_t = 50)]
    max_lend: u32,

    /// Stop lending while future principal exceeds the starting cash
    #[arg(long)]
    cap_to_initial_cash: bool,

    /// Days to simulate
    #[arg(long, default_value_t = loan_simulator::simulation::DEFAULT_HORIZON_DAYS)]
    days: u32,

    /// Starting cash
    #[arg(long, default_value_t = loan_simulator::simulation::DEFAULT_INITIAL_CASH)]
    initial_cash: f64,

    /// JSON config file; replaces the simulation flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rows shown in table format
    #[arg(long, default_value_t = 30)]
    rows: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    if let Some(path) = &cli.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        return Ok(config);
    }

    Ok(SimulationConfig {
        schedule: ScheduleKind::try_from(cli.schedule)?,
        max_lend_per_day: cli.max_lend,
        cap_to_initial_cash: cli.cap_to_initial_cash,
        horizon_days: cli.days,
        initial_cash: cli.initial_cash,
    })
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let result = SimulationEngine::new(config)?.run()?;
    let records = &result.records;

    let rendered = match cli.format {
        OutputFormat::Table => {
            let summary = result.summary();
            let mut text = export::format_table(records, cli.rows);
            text.push_str(&format!(
                "\nSummary:\n  Days: {}\n  Loans issued: {}\n  Amount lent: {:.2}\n  Cash received: {:.2}\n  Final cash: {:.2}\n  Peak future principal: {:.2}\n  Minimum cash: {:.2}\n",
                summary.days,
                summary.total_issued,
                summary.total_lent,
                summary.total_received,
                summary.final_cash,
                summary.peak_principal,
                summary.min_cash,
            ));
            text
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            export::write_csv(records, &mut buf)?;
            String::from_utf8(buf).context("CSV output is not UTF-8")?
        }
        OutputFormat::Json => export::to_json(records)? + "\n",
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Results written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
