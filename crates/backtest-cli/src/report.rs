//! Report Rendering
//!
//! Plain-text comparison output, the presentation collaborator sitting on
//! top of the core's summary rows.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use backtest_core::{LumpSumOutcome, PerformanceSummary};

/// Ranked strategy comparison table.
pub fn comparison_table(summaries: &[PerformanceSummary]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<24} {:<24} {:>12} {:>13} {:>10}\n",
        "Strategy", "Buy window", "Invested", "Final value", "Return"
    ));
    out.push_str(&"─".repeat(88));
    out.push('\n');

    for summary in summaries {
        out.push_str(&format!(
            "{:<24} {:<24} ${:>11.2} ${:>12.2} {:>9}\n",
            summary.strategy,
            summary.buy_window,
            summary.total_invested,
            summary.final_value,
            percent(summary.return_ratio),
        ));
    }

    out
}

/// One-line note about the retrospective best lump-sum day.
pub fn best_day_note(best: &LumpSumOutcome) -> String {
    format!(
        "Best lump-sum buy date (hindsight): {} - {:.6} units, worth ${:.2} at the end ({})",
        best.buy_date,
        best.units,
        best.final_value,
        percent(best.return_ratio),
    )
}

fn percent(ratio: Decimal) -> String {
    let pct = (ratio * dec!(100)).round_dp(1);
    if pct >= Decimal::ZERO {
        format!("+{pct}%")
    } else {
        format!("{pct}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_strategy() {
        let summaries = vec![
            PerformanceSummary {
                strategy: "lump_sum".into(),
                buy_window: "2024-01-02".into(),
                total_invested: dec!(30),
                final_value: dec!(120),
                return_ratio: dec!(3),
            },
            PerformanceSummary {
                strategy: "dollar_cost_averaging".into(),
                buy_window: "2024-01-01..2024-01-03".into(),
                total_invested: dec!(30),
                final_value: dec!(70),
                return_ratio: dec!(1.3333),
            },
        ];

        let table = comparison_table(&summaries);
        assert!(table.contains("lump_sum"));
        assert!(table.contains("dollar_cost_averaging"));
        assert!(table.contains("+300.0%"));
        assert!(table.contains("+133.3%"));
    }

    #[test]
    fn test_percent_formats_sign() {
        assert_eq!(percent(dec!(0.5)), "+50.0%");
        assert_eq!(percent(dec!(-0.25)), "-25.0%");
    }
}
