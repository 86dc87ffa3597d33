//! Performance Summary
//!
//! Reduces each strategy's output series to a comparable
//! (total invested, final value, return) row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};
use crate::model::StrategyResult;

/// Fractional return on invested capital: final / invested - 1
pub fn return_ratio(final_value: Decimal, total_invested: Decimal) -> Result<Decimal> {
    if total_invested == Decimal::ZERO {
        return Err(BacktestError::DivisionByZero(
            "total invested is zero".into(),
        ));
    }
    Ok(final_value / total_invested - Decimal::ONE)
}

/// One comparison row for a strategy run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub strategy: String,

    /// Single buy date, or the first..last purchase window
    pub buy_window: String,

    pub total_invested: Decimal,
    pub final_value: Decimal,

    /// final_value / total_invested - 1
    pub return_ratio: Decimal,
}

impl PerformanceSummary {
    pub fn from_result(result: &StrategyResult) -> Result<Self> {
        let total_invested = result.total_invested();
        let final_value = result.final_value();
        let ratio = return_ratio(final_value, total_invested)?;

        let buy_window = match (result.first_purchase_date(), result.last_purchase_date()) {
            (Some(first), Some(last)) if first == last => first.to_string(),
            (Some(first), Some(last)) => format!("{first}..{last}"),
            _ => "-".to_string(),
        };

        Ok(Self {
            strategy: result.strategy.clone(),
            buy_window,
            total_invested,
            final_value,
            return_ratio: ratio,
        })
    }
}

/// Sort summaries by return ratio, best first.
pub fn rank(mut summaries: Vec<PerformanceSummary>) -> Vec<PerformanceSummary> {
    summaries.sort_by(|a, b| b.return_ratio.cmp(&a.return_ratio));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frequency, ScheduleConfig};
    use crate::series::PriceSeries;
    use crate::strategy::{holding_view, simulate_dca};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> PriceSeries {
        PriceSeries::from_pairs([(d(1), dec!(100)), (d(2), dec!(50)), (d(3), dec!(200))])
            .unwrap()
    }

    #[test]
    fn test_return_ratio() {
        assert_eq!(return_ratio(dec!(120), dec!(30)).unwrap(), dec!(3));
        assert_eq!(return_ratio(dec!(15), dec!(30)).unwrap(), dec!(-0.5));
    }

    #[test]
    fn test_return_ratio_rejects_zero_invested() {
        assert!(return_ratio(dec!(120), dec!(0)).is_err());
    }

    #[test]
    fn test_summary_from_dca_result() {
        let config = ScheduleConfig::new(dec!(10), d(1), 3, Frequency::Daily);
        let result = simulate_dca(&sample(), &config).unwrap();
        let summary = PerformanceSummary::from_result(&result).unwrap();

        assert_eq!(summary.strategy, "dollar_cost_averaging");
        assert_eq!(summary.buy_window, "2024-01-01..2024-01-03");
        assert_eq!(summary.total_invested, dec!(30));
        assert_eq!(summary.final_value, dec!(70));
        // 70/30 - 1
        assert_eq!(
            summary.return_ratio,
            dec!(70) / dec!(30) - Decimal::ONE
        );
    }

    #[test]
    fn test_summary_single_buy_date() {
        let result = holding_view(&sample(), d(2), dec!(10)).unwrap();
        let summary = PerformanceSummary::from_result(&result).unwrap();

        assert_eq!(summary.buy_window, "2024-01-02");
        assert_eq!(summary.return_ratio, dec!(3));
    }

    #[test]
    fn test_rank_sorts_best_first() {
        let config = ScheduleConfig::new(dec!(10), d(1), 3, Frequency::Daily);
        let dca = simulate_dca(&sample(), &config).unwrap();
        let lump = holding_view(&sample(), d(2), dec!(10)).unwrap();

        let ranked = rank(vec![
            PerformanceSummary::from_result(&dca).unwrap(),
            PerformanceSummary::from_result(&lump).unwrap(),
        ]);

        assert_eq!(ranked[0].strategy, "lump_sum");
        assert_eq!(ranked[1].strategy, "dollar_cost_averaging");
        assert!(ranked[0].return_ratio >= ranked[1].return_ratio);
    }
}
