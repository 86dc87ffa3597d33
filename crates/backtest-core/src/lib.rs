//! # backtest-core
//!
//! Backtests three ways of deploying capital into a single asset over a
//! historical price series:
//!
//! - **Lump Sum** - the whole budget on one day
//! - **Dollar-Cost Averaging (DCA)** - a fixed amount every period
//! - **Value Averaging (VA)** - whatever amount keeps the portfolio on a
//!   linearly growing value target
//!
//! Each simulation turns a [`PriceSeries`] plus a [`ScheduleConfig`] into
//! parallel invested-cash and portfolio-value series, and [`summary`]
//! reduces those to ranked (total invested, final value, return) rows.
//!
//! ## Example: $10/day over three closes at 100 / 50 / 200
//!
//! ```text
//! ┌──────────────────────┬──────────┬─────────────┬─────────┐
//! │ Strategy             │ Invested │ Final value │ Return  │
//! ├──────────────────────┼──────────┼─────────────┼─────────┤
//! │ lump_sum (best day)  │   $30.00 │     $120.00 │ +300.0% │
//! │ dollar_cost_averaging│   $30.00 │      $70.00 │ +133.3% │
//! │ value_averaging      │   $25.00 │      $80.00 │ +220.0% │
//! └──────────────────────┴──────────┴─────────────┴─────────┘
//! ```
//!
//! All money and unit quantities are `rust_decimal::Decimal`. The
//! simulations are pure and synchronous: data retrieval and rendering
//! belong to callers.

pub mod error;
pub mod model;
pub mod series;
pub mod strategy;
pub mod summary;

pub use error::{BacktestError, Result};
pub use model::{Frequency, InvestmentEvent, ScheduleConfig, StrategyPoint, StrategyResult};
pub use series::{PricePoint, PriceSeries};
pub use strategy::{
    LumpSumOutcome, TargetPoint, ValueAveragingOutcome, best_buy_date, holding_view,
    lump_sum_scan, simulate_dca, simulate_va,
};
pub use summary::{PerformanceSummary, rank, return_ratio};
