//! Lump Sum
//!
//! Single upfront purchase of the whole budget on one day. The scan rates
//! every day in the series as the hypothetical buy date; the holding view
//! turns one chosen date into a full trajectory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};
use crate::model::{InvestmentEvent, StrategyPoint, StrategyResult};
use crate::series::PriceSeries;

/// Outcome of buying the whole budget on one candidate day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpSumOutcome {
    /// Hypothetical buy date
    pub buy_date: NaiveDate,

    /// Whole budget, the per-day rate times the series length
    pub total_invested: Decimal,

    /// Units bought at the buy date's close
    pub units: Decimal,

    /// Value of those units at the final date's close
    pub final_value: Decimal,

    /// final_value / total_invested - 1
    pub return_ratio: Decimal,
}

/// Budget implied by a per-day rate over the full series
fn total_budget(series: &PriceSeries, daily_rate: Decimal) -> Result<Decimal> {
    if daily_rate <= Decimal::ZERO {
        return Err(BacktestError::InvalidInput(format!(
            "daily rate must be positive, got {daily_rate}"
        )));
    }
    Ok(daily_rate * Decimal::from(series.len() as u64))
}

/// Rate every day in the series as the single buy date.
pub fn lump_sum_scan(series: &PriceSeries, daily_rate: Decimal) -> Result<Vec<LumpSumOutcome>> {
    let total = total_budget(series, daily_rate)?;
    let final_price = series.last().price;

    Ok(series
        .iter()
        .map(|point| {
            let units = total / point.price;
            let final_value = units * final_price;
            LumpSumOutcome {
                buy_date: point.date,
                total_invested: total,
                units,
                final_value,
                return_ratio: final_value / total - Decimal::ONE,
            }
        })
        .collect())
}

/// Buy date with the best final value - the cheapest close, earliest on ties.
pub fn best_buy_date(series: &PriceSeries, daily_rate: Decimal) -> Result<LumpSumOutcome> {
    let mut outcomes = lump_sum_scan(series, daily_rate)?.into_iter();

    // The scan is never empty: the series has at least one point
    let Some(mut best) = outcomes.next() else {
        return Err(BacktestError::InvalidInput("price series is empty".into()));
    };
    for candidate in outcomes {
        if candidate.final_value > best.final_value {
            best = candidate;
        }
    }
    Ok(best)
}

/// Trajectory of a single purchase held to the end of the series.
///
/// Invested cash and units are zero before the buy date, then jump to the
/// whole budget and stay constant; value tracks `units * price(t)` from
/// the buy date on.
pub fn holding_view(
    series: &PriceSeries,
    buy_date: NaiveDate,
    daily_rate: Decimal,
) -> Result<StrategyResult> {
    let total = total_budget(series, daily_rate)?;

    let Some(buy_price) = series.price_on(buy_date) else {
        return Err(BacktestError::InvalidInput(format!(
            "buy date {buy_date} is not in the price series"
        )));
    };
    let units = total / buy_price;

    let points = series
        .iter()
        .map(|point| {
            let held = if point.date < buy_date {
                Decimal::ZERO
            } else {
                units
            };
            let invested = if point.date < buy_date {
                Decimal::ZERO
            } else {
                total
            };
            StrategyPoint {
                date: point.date,
                cumulative_invested: invested,
                cumulative_units: held,
                portfolio_value: held * point.price,
            }
        })
        .collect();

    let events = vec![InvestmentEvent {
        date: buy_date,
        amount_invested: total,
        units_purchased: units,
    }];

    Ok(StrategyResult::new("lump_sum", points, events))
}
