//! Revenue projection math for the ROI calculator demo.

use serde::Serialize;

/// Assumed conversion-rate uplift for the projected scenario (+35%).
const UPLIFT: f64 = 1.35;

/// Monthly and annual revenue projections, rounded for display.
///
/// Replaced wholesale per calculation; no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoiReport {
    pub current_revenue: i64,
    pub improved_revenue: i64,
    pub monthly_gain: i64,
    pub annual_gain: i64,
}

/// Parse a numeric form field, defaulting to zero on failure.
///
/// Missing or non-numeric input is not an error in this demo; it simply
/// contributes nothing to the projection.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Project current vs. uplifted revenue from traffic figures.
///
/// # Arguments
/// * `monthly_visitors` - Visitors per month
/// * `conversion_rate_percent` - Conversion rate as a percentage (e.g. 5 for 5%)
/// * `average_order_value` - Revenue per converted visitor
///
/// Pure and deterministic: identical inputs always yield identical output.
pub fn calculate(
    monthly_visitors: f64,
    conversion_rate_percent: f64,
    average_order_value: f64,
) -> RoiReport {
    let current = monthly_visitors * (conversion_rate_percent / 100.0) * average_order_value;
    let improved =
        monthly_visitors * (conversion_rate_percent * UPLIFT / 100.0) * average_order_value;
    let monthly_gain = improved - current;

    RoiReport {
        current_revenue: current.round() as i64,
        improved_revenue: improved.round() as i64,
        monthly_gain: monthly_gain.round() as i64,
        annual_gain: (monthly_gain * 12.0).round() as i64,
    }
}
