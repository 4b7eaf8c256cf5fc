//! Input validation and series cleaning.

use chrono::NaiveDate;
use quantlab_core::types::{Bar, BarSeries};
use tracing::debug;

/// Validate an exchange-qualified A-share symbol: six digits followed
/// by a `.SZ` or `.SH` market suffix.
pub fn validate_symbol(symbol: &str) -> bool {
    let Some((code, market)) = symbol.split_once('.') else {
        return false;
    };
    if market != "SZ" && market != "SH" {
        return false;
    }
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

/// Validate an 8-digit `YYYYMMDD` date string. Year is bounded to
/// 2000-2030, month to 1-12, day to 1-31; no month-length cross-check.
pub fn validate_date(date: &str) -> bool {
    if date.len() != 8 || !date.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let year: u32 = date[..4].parse().unwrap_or(0);
    let month: u32 = date[4..6].parse().unwrap_or(0);
    let day: u32 = date[6..8].parse().unwrap_or(0);

    (2000..=2030).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Check that a retrieved series is usable: non-empty with at least one
/// finite close.
pub fn validate_market_data(series: &BarSeries) -> bool {
    !series.is_empty() && series.iter().any(|b| b.close.is_finite())
}

/// Clean a retrieved series: drop malformed bars (non-positive prices,
/// `high < low`, negative volume), sort by timestamp, and drop duplicate
/// timestamps keeping the first occurrence. The result satisfies the
/// strictly-increasing timestamp invariant the pipeline relies on.
pub fn clean_market_data(series: BarSeries) -> BarSeries {
    let before = series.len();
    let mut bars: Vec<Bar> = series.iter().filter(|b| b.is_well_formed()).copied().collect();
    bars.sort_by_key(|b| b.timestamp);
    bars.dedup_by_key(|b| b.timestamp);

    if bars.len() != before {
        debug!(
            symbol = %series.symbol,
            before,
            after = bars.len(),
            "dropped malformed or duplicate bars during cleaning"
        );
    }

    BarSeries::new(series.symbol, bars)
}

/// Inclusive millisecond bounds for a `YYYYMMDD` date range, or `None`
/// when either endpoint does not parse as a calendar date.
pub fn date_range_bounds(start: &str, end: &str) -> Option<(i64, i64)> {
    let start = NaiveDate::parse_from_str(start, "%Y%m%d").ok()?;
    let end = NaiveDate::parse_from_str(end, "%Y%m%d").ok()?;
    let lo = start.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis();
    let hi = end.and_hms_opt(23, 59, 59)?.and_utc().timestamp_millis();
    Some((lo, hi))
}
