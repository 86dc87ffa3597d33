//! Price Feed
//!
//! Loads a price series from a JSON file. The core never does I/O; this
//! module is the external data-retrieval collaborator it expects.

use std::fs;
use std::path::Path;

use anyhow::Context;

use backtest_core::{PricePoint, PriceSeries};

/// Parse a JSON array of `{"date": "YYYY-MM-DD", "price": "..."}` records.
///
/// Prices are decimal strings, not JSON numbers, so no float rounding
/// sneaks in on the way to `Decimal`.
pub fn parse_json(raw: &str) -> anyhow::Result<PriceSeries> {
    let points: Vec<PricePoint> =
        serde_json::from_str(raw).context("parsing price records")?;
    let series = PriceSeries::new(points).context("validating price series")?;
    Ok(series)
}

/// Load and validate a price series from a file.
pub fn load_json(path: &Path) -> anyhow::Result<PriceSeries> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading price file {}", path.display()))?;
    parse_json(&raw).with_context(|| format!("in price file {}", path.display()))
}
