//! backtest CLI
//!
//! Loads a JSON price series and compares lump-sum, dollar-cost-averaging,
//! and value-averaging outcomes over it.

mod cli;
mod feed;
mod report;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backtest_core::{
    PerformanceSummary, ScheduleConfig, best_buy_date, holding_view, rank, simulate_dca,
    simulate_va,
};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let series = feed::load_json(&cli.prices)?;
    tracing::info!(
        rows = series.len(),
        from = %series.first().date,
        to = %series.last().date,
        "loaded price series"
    );

    let start = cli.start.unwrap_or(series.first().date);
    let periods = cli.periods.unwrap_or(series.len() as u32);
    let config = ScheduleConfig::new(cli.amount, start, periods, cli.frequency.into());

    let dca = simulate_dca(&series, &config)?;
    let va = simulate_va(&series, &config)?;

    // Lump sum: same total budget, placed on the retrospective best day
    let best = best_buy_date(&series, cli.amount)?;
    let lump = holding_view(&series, best.buy_date, cli.amount)?;

    let summaries = rank(vec![
        PerformanceSummary::from_result(&lump)?,
        PerformanceSummary::from_result(&dca)?,
        PerformanceSummary::from_result(&va.result)?,
    ]);

    println!("{}", report::comparison_table(&summaries));
    println!("{}", report::best_day_note(&best));

    Ok(())
}
