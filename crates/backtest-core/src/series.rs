//! Historical Price Series
//!
//! Ordered daily closing prices for a single asset. The series is the
//! sole market input to every simulation; it is validated once at
//! construction and immutable afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// A single closing price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the close
    pub date: NaiveDate,

    /// Closing price in USD
    pub price: Decimal,
}

/// An ordered, date-indexed price history
///
/// Invariants: non-empty, dates strictly ascending (no duplicates),
/// prices strictly positive. Gap-filling is a data-preparation concern
/// upstream of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a list of price points
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(BacktestError::InvalidInput(
                "price series is empty".into(),
            ));
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(BacktestError::InvalidInput(format!(
                    "price dates must be strictly ascending: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        if let Some(bad) = points.iter().find(|p| p.price <= Decimal::ZERO) {
            return Err(BacktestError::InvalidInput(format!(
                "non-positive price {} on {}",
                bad.price, bad.date
            )));
        }

        Ok(Self { points })
    }

    /// Build from (date, price) pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, Decimal)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, price)| PricePoint { date, price })
                .collect(),
        )
    }

    /// Number of trading days in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false once constructed; kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Earliest price point
    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    /// Latest price point
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// Exact close on a date, if the series has one
    pub fn price_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].price)
    }

    /// First price point dated on or after `date`
    pub fn first_on_or_after(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        self.points.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> PriceSeries {
        PriceSeries::from_pairs([
            (d(1), dec!(100)),
            (d(2), dec!(50)),
            (d(5), dec!(200)),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert!(PriceSeries::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_unsorted_dates() {
        let result = PriceSeries::from_pairs([(d(2), dec!(50)), (d(1), dec!(100))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let result = PriceSeries::from_pairs([(d(1), dec!(100)), (d(1), dec!(101))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let result = PriceSeries::from_pairs([(d(1), dec!(0))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_on() {
        let series = sample();
        assert_eq!(series.price_on(d(2)), Some(dec!(50)));
        assert_eq!(series.price_on(d(3)), None);
    }

    #[test]
    fn test_first_on_or_after() {
        let series = sample();

        // Exact hit
        assert_eq!(series.first_on_or_after(d(2)).unwrap().date, d(2));
        // Gap resolves forward
        assert_eq!(series.first_on_or_after(d(3)).unwrap().date, d(5));
        // Past the end
        assert!(series.first_on_or_after(d(6)).is_none());
    }

    #[test]
    fn test_first_and_last() {
        let series = sample();
        assert_eq!(series.first().date, d(1));
        assert_eq!(series.last().price, dec!(200));
    }
}
