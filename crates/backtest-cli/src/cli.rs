//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use backtest_core::Frequency;

/// Compare lump-sum, DCA, and value-averaging over a historical price series
#[derive(Debug, Parser)]
#[command(
    name = "backtest",
    version,
    about = "Compare lump-sum, DCA, and value-averaging strategies",
    long_about = "Loads a JSON price file and backtests three ways of deploying \
the same budget into the asset:\n\
\n\
  • Lump Sum - the whole budget on the best single day\n\
  • Dollar-Cost Averaging - a fixed amount every period\n\
  • Value Averaging - whatever keeps the portfolio on a growing target\n\
\n\
The price file is a JSON array of {\"date\": \"YYYY-MM-DD\", \"price\": \"...\"} records."
)]
pub struct Cli {
    /// Path to the JSON price file
    pub prices: PathBuf,

    /// Amount per period: the fixed DCA purchase, the VA target increment,
    /// and the per-day rate that sizes the lump-sum budget
    #[arg(long, default_value = "10")]
    pub amount: Decimal,

    /// First investment date (defaults to the first date in the file)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Number of investment periods (defaults to one per price row)
    #[arg(long)]
    pub periods: Option<u32>,

    /// Investment cadence
    #[arg(long, value_enum, default_value_t = FrequencyArg::Daily)]
    pub frequency: FrequencyArg,
}

/// Cadence flag, mapped onto the core's [`Frequency`]
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Monthly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Weekly => Self::Weekly,
            FrequencyArg::Monthly => Self::Monthly,
        }
    }
}
