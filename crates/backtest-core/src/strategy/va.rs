//! Value Averaging
//!
//! Variable-amount purchases sized to keep cumulative portfolio value on
//! a linearly growing target. Buy-only: when a price rise carries the
//! portfolio past the target, the period's purchase is zero, never a sale.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::resolve_schedule;
use crate::error::Result;
use crate::model::{InvestmentEvent, ScheduleConfig, StrategyPoint, StrategyResult};
use crate::series::PriceSeries;

/// One period's nominal value goal
///
/// This is the goal line, not the real portfolio value. The true
/// trajectory lives in [`ValueAveragingOutcome::result`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPoint {
    pub date: NaiveDate,
    pub target_value: Decimal,
}

/// Output of a value-averaging run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueAveragingOutcome {
    /// True portfolio trajectory (price x units held per date)
    pub result: StrategyResult,

    /// Nominal goal per period, parallel to `result.points`
    pub targets: Vec<TargetPoint>,
}

/// Simulate purchases that chase a growing value target.
///
/// Target(i) = amount x (i+1). Each step buys exactly the shortfall
/// between the target and the current holding's value at that day's
/// close, or nothing when the holding already meets the target. The
/// recurrence depends on the prior step's unit total, so it runs as a
/// single sequential pass over one running accumulator.
pub fn simulate_va(
    series: &PriceSeries,
    config: &ScheduleConfig,
) -> Result<ValueAveragingOutcome> {
    let schedule = resolve_schedule(series, config)?;

    let mut points = Vec::with_capacity(schedule.len());
    let mut events = Vec::with_capacity(schedule.len());
    let mut targets = Vec::with_capacity(schedule.len());
    let mut invested = Decimal::ZERO;
    let mut units = Decimal::ZERO;
    let mut skipped = 0usize;

    for (i, point) in schedule.iter().enumerate() {
        let target = config.amount * Decimal::from(i as u64 + 1);
        let shortfall = target - point.price * units;

        let bought = if shortfall > Decimal::ZERO {
            shortfall / point.price
        } else {
            // Already at or above target; an extended zero-purchase run
            // after an early price spike is expected, not an error.
            skipped += 1;
            Decimal::ZERO
        };
        let spent = point.price * bought;

        invested += spent;
        units += bought;

        events.push(InvestmentEvent {
            date: point.date,
            amount_invested: spent,
            units_purchased: bought,
        });
        targets.push(TargetPoint {
            date: point.date,
            target_value: target,
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
        skipped,
        total_invested = %invested,
        "VA simulation complete"
    );

    Ok(ValueAveragingOutcome {
        result: StrategyResult::new("value_averaging", points, events),
        targets,
    })
}
