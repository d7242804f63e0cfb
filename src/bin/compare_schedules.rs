//! Compare the final day of both repayment schedules under the same policy
//!
//! Usage: cargo run --bin compare_schedules [max_lend] [--cap]

use anyhow::{Context, Result};
use loan_simulator::ScenarioRunner;

fn main() -> Result<()> {
    env_logger::init();

    let mut max_lend = 50;
    let mut cap = false;
    for arg in std::env::args().skip(1) {
        if arg == "--cap" {
            cap = true;
        } else {
            max_lend = arg
                .parse()
                .with_context(|| format!("invalid max_lend: {}", arg))?;
        }
    }

    let runner = ScenarioRunner::new();
    let results = runner.compare_schedules(max_lend, cap)?;

    println!("Final day, max {} loans/day, cap to initial cash: {}", max_lend, cap);
    println!(
        "{:>16} {:>5} {:>12} {:>8} {:>10} {:>10} {:>12} {:>8} {:>8} {:>12} {:>12}",
        "Schedule", "Day", "Money0", "NewNum", "NewAmt", "CfRecv", "Money", "Loans", "Expired", "Principal", "FutureCF"
    );
    println!("{}", "-".repeat(121));

    for result in &results {
        let Some(row) = result.final_record() else {
            continue;
        };
        println!(
            "{:>16} {:>5} {:>12.2} {:>8} {:>10.2} {:>10.2} {:>12.2} {:>8} {:>8} {:>12.2} {:>12.2}",
            result.config.schedule.to_string(),
            row.day,
            row.money0,
            row.new_loan_num,
            row.new_loan_amt,
            row.cf_received,
            row.money,
            row.loan_num,
            row.loan_expired_num,
            row.loan_principal,
            row.loan_future_cf,
        );
    }

    Ok(())
}
