//! Domain Models
//!
//! Configuration and result types shared by the three strategies.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// Investment cadence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Nominal date of the i-th period counting from `start`
    ///
    /// Monthly steps use calendar months, clamped to the month end
    /// (Jan 31 + 1 month = Feb 29/28).
    pub fn nth_date(self, start: NaiveDate, i: u32) -> NaiveDate {
        match self {
            Self::Daily => start + Duration::days(i64::from(i)),
            Self::Weekly => start + Duration::days(7 * i64::from(i)),
            Self::Monthly => start + Months::new(i),
        }
    }
}

/// Periodic investment schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Amount per period: the fixed purchase for DCA, the target value
    /// increment for VA
    pub amount: Decimal,

    /// First nominal investment date
    pub start_date: NaiveDate,

    /// Number of periods
    pub periods: u32,

    /// Interval between periods
    pub frequency: Frequency,
}

impl ScheduleConfig {
    pub fn new(
        amount: Decimal,
        start_date: NaiveDate,
        periods: u32,
        frequency: Frequency,
    ) -> Self {
        Self {
            amount,
            start_date,
            periods,
            frequency,
        }
    }

    /// Reject degenerate schedules before any simulation runs
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(BacktestError::InvalidInput(format!(
                "per-period amount must be positive, got {}",
                self.amount
            )));
        }
        if self.periods == 0 {
            return Err(BacktestError::InvalidInput(
                "period count must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Nominal investment dates, before resolution against a price series
    pub fn candidate_dates(&self) -> Vec<NaiveDate> {
        (0..self.periods)
            .map(|i| self.frequency.nth_date(self.start_date, i))
            .collect()
    }
}

/// A single executed purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentEvent {
    /// Trade date (resolved against the price series)
    pub date: NaiveDate,

    /// Cash spent on this date; zero for VA periods already at target
    pub amount_invested: Decimal,

    /// Units bought at this date's close
    pub units_purchased: Decimal,
}

/// One entry of a strategy's output series
///
/// `portfolio_value` is always `price(date) * cumulative_units`, computed
/// from the same units figure carried in the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPoint {
    pub date: NaiveDate,
    pub cumulative_invested: Decimal,
    pub cumulative_units: Decimal,
    pub portfolio_value: Decimal,
}

/// Full output of one strategy run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Strategy identifier ("lump_sum", "dollar_cost_averaging", ...)
    pub strategy: String,

    /// Trajectory, one entry per investment date
    pub points: Vec<StrategyPoint>,

    /// Executed purchases, one per investment date
    pub events: Vec<InvestmentEvent>,
}

impl StrategyResult {
    pub fn new(
        strategy: impl Into<String>,
        points: Vec<StrategyPoint>,
        events: Vec<InvestmentEvent>,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            points,
            events,
        }
    }

    /// Total cash put in over the whole run
    pub fn total_invested(&self) -> Decimal {
        self.points
            .last()
            .map_or(Decimal::ZERO, |p| p.cumulative_invested)
    }

    /// Portfolio value at the final date
    pub fn final_value(&self) -> Decimal {
        self.points
            .last()
            .map_or(Decimal::ZERO, |p| p.portfolio_value)
    }

    /// First purchase date, skipping zero-amount periods
    pub fn first_purchase_date(&self) -> Option<NaiveDate> {
        self.events
            .iter()
            .find(|e| e.units_purchased > Decimal::ZERO)
            .map(|e| e.date)
    }

    /// Last purchase date, skipping zero-amount periods
    pub fn last_purchase_date(&self) -> Option<NaiveDate> {
        self.events
            .iter()
            .rev()
            .find(|e| e.units_purchased > Decimal::ZERO)
            .map(|e| e.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_schedule() {
        let config = ScheduleConfig::new(dec!(10), date(2024, 1, 1), 3, Frequency::Daily);
        assert_eq!(
            config.candidate_dates(),
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_weekly_schedule() {
        let config = ScheduleConfig::new(dec!(10), date(2024, 1, 1), 2, Frequency::Weekly);
        assert_eq!(
            config.candidate_dates(),
            vec![date(2024, 1, 1), date(2024, 1, 8)]
        );
    }

    #[test]
    fn test_monthly_schedule_clamps_month_end() {
        let config = ScheduleConfig::new(dec!(10), date(2024, 1, 31), 2, Frequency::Monthly);
        // 2024 is a leap year
        assert_eq!(
            config.candidate_dates(),
            vec![date(2024, 1, 31), date(2024, 2, 29)]
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let config = ScheduleConfig::new(dec!(0), date(2024, 1, 1), 3, Frequency::Daily);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_periods() {
        let config = ScheduleConfig::new(dec!(10), date(2024, 1, 1), 0, Frequency::Daily);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_result_totals() {
        let result = StrategyResult::new(
            "test",
            vec![
                StrategyPoint {
                    date: date(2024, 1, 1),
                    cumulative_invested: dec!(10),
                    cumulative_units: dec!(0.1),
                    portfolio_value: dec!(10),
                },
                StrategyPoint {
                    date: date(2024, 1, 2),
                    cumulative_invested: dec!(20),
                    cumulative_units: dec!(0.3),
                    portfolio_value: dec!(15),
                },
            ],
            Vec::new(),
        );

        assert_eq!(result.total_invested(), dec!(20));
        assert_eq!(result.final_value(), dec!(15));
    }
}
