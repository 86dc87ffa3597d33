//! Investment Strategies
//!
//! Lump-sum, dollar-cost-averaging, and value-averaging simulations over
//! a historical price series.

mod dca;
mod lump_sum;
mod va;

pub use dca::simulate_dca;
pub use lump_sum::{LumpSumOutcome, best_buy_date, holding_view, lump_sum_scan};
pub use va::{TargetPoint, ValueAveragingOutcome, simulate_va};

use crate::error::{BacktestError, Result};
use crate::model::ScheduleConfig;
use crate::series::{PricePoint, PriceSeries};

/// Resolve a schedule against the available price history.
///
/// Each nominal date maps to the first trading day on or after it.
/// Dates past the end of the series are dropped rather than erroring,
/// so a period count larger than the history silently truncates.
fn resolve_schedule(series: &PriceSeries, config: &ScheduleConfig) -> Result<Vec<PricePoint>> {
    config.validate()?;

    let resolved: Vec<PricePoint> = config
        .candidate_dates()
        .into_iter()
        .filter_map(|date| series.first_on_or_after(date).copied())
        .collect();

    if resolved.is_empty() {
        return Err(BacktestError::InvalidInput(format!(
            "no price data on or after start date {}",
            config.start_date
        )));
    }

    if resolved.len() < config.periods as usize {
        tracing::debug!(
            requested = config.periods,
            executed = resolved.len(),
            "schedule truncated to available price history"
        );
    }

    Ok(resolved)
}
