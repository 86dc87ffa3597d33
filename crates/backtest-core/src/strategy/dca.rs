//! Dollar-Cost Averaging
//!
//! Fixed-amount purchases at a regular cadence, regardless of price.

use rust_decimal::Decimal;
use tracing::debug;

use super::resolve_schedule;
use crate::error::Result;
use crate::model::{InvestmentEvent, ScheduleConfig, StrategyPoint, StrategyResult};
use crate::series::PriceSeries;

/// Simulate fixed-amount periodic purchases.
///
/// Invests `config.amount` at every resolved schedule date, so the
/// invested total grows by exactly that amount per step and units held
/// never shrink. Portfolio value at each step is the running unit total
/// priced at that step's close.
pub fn simulate_dca(series: &PriceSeries, config: &ScheduleConfig) -> Result<StrategyResult> {
    let schedule = resolve_schedule(series, config)?;

    let mut points = Vec::with_capacity(schedule.len());
    let mut events = Vec::with_capacity(schedule.len());
    let mut invested = Decimal::ZERO;
    let mut units = Decimal::ZERO;

    for point in &schedule {
        let bought = config.amount / point.price;
        invested += config.amount;
        units += bought;

        events.push(InvestmentEvent {
            date: point.date,
            amount_invested: config.amount,
            units_purchased: bought,
        });
        points.push(StrategyPoint {
            date: point.date,
            cumulative_invested: invested,
            cumulative_units: units,
            portfolio_value: units * point.price,
        });
    }

    debug!(
        periods = points.len(),
        total_invested = %invested,
        "DCA simulation complete"
    );

    Ok(StrategyResult::new("dollar_cost_averaging", points, events))
}
