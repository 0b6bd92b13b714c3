//! Display formatting for the decimal-text fields the market API sends.

use crate::domain::parse_decimal;

/// Rendered in place of a value that could not be parsed.
pub const MISSING_VALUE: &str = "-";

/// Significant digits kept for sub-cent prices.
const SUB_CENT_SIGNIFICANT_DIGITS: i32 = 4;

/// Formats a USD price with "Trader Precision".
/// - `>= 1`: 2 decimals with thousands separators ($95,123.50)
/// - `>= 0.01`: 4 decimals ($0.0123)
/// - below a cent: 4 significant digits, trailing zeros dropped ($0.00000123)
pub fn format_price(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(price) => format_price_value(price),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_price_value(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let sign = if price < 0.0 { "-" } else { "" };
    let abs_price = price.abs();

    // Bands are picked on the rounded value so 0.99999 shows as $1.00, not $1.0000.
    let body = if round_dp(abs_price, 2) >= 1.0 {
        group_thousands(&format!("{:.2}", abs_price))
    } else if round_dp(abs_price, 4) >= 0.01 {
        format!("{:.4}", abs_price)
    } else {
        let magnitude = abs_price.log10().floor() as i32;
        let decimals = (SUB_CENT_SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, abs_price))
    };

    format!("{}${}", sign, body)
}

/// Abbreviates a large quantity with a magnitude suffix (T, B, M, K).
/// The scaled value is rounded half away from zero to 2 decimals.
pub fn format_number(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(value) => format_number_value(value),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_number_value(value: f64) -> String {
    const SCALES: [(f64, &str); 5] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K"), (1.0, "")];

    let abs_value = value.abs();
    let mut idx = SCALES
        .iter()
        .position(|(threshold, _)| abs_value >= *threshold)
        .unwrap_or(SCALES.len() - 1);
    let mut scaled = round_dp(value / SCALES[idx].0, 2);

    // 999_999.999 rounds to 1000.00 of "K": move up to "1.00M".
    if scaled.abs() >= 1000.0 && idx > 0 {
        idx -= 1;
        scaled = round_dp(value / SCALES[idx].0, 2);
    }

    format!("{:.2}{}", scaled, SCALES[idx].1)
}

/// Direction of a 24h move, used for colour and arrow choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

/// Absolute percentage with 2 decimals plus the move direction.
/// Only a strictly positive change counts as `Up`.
pub fn format_change(raw: &str) -> (String, ChangeDirection) {
    match parse_decimal(raw) {
        Some(change) => {
            let direction = if change > 0.0 {
                ChangeDirection::Up
            } else {
                ChangeDirection::Down
            };
            (format!("{:.2}%", round_dp(change.abs(), 2)), direction)
        }
        None => (MISSING_VALUE.to_string(), ChangeDirection::Down),
    }
}

// Half away from zero, like `f64::round`.
fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

// "1234567.89" -> "1,234,567.89"
fn group_thousands(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
