//! Compact text rendering for point labels and categorical axis ticks.

use crate::core::value::RawValue;

const COMPACT_SIGNIFICANT_DIGITS: i32 = 4;

/// Magnitude tiers, largest first.
const COMPACT_TIERS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Renders a raw record value as short display text.
///
/// Null renders empty, booleans as `Yes`/`No`, dates as `YYYY-MM-DD` and
/// numbers in compact notation (`1234` -> `1.234K`).
#[must_use]
pub fn to_compact_string(value: &RawValue) -> String {
    match value {
        RawValue::Null => String::new(),
        RawValue::Boolean(true) => "Yes".to_owned(),
        RawValue::Boolean(false) => "No".to_owned(),
        RawValue::Number(number) => format_compact_number(*number),
        RawValue::Text(text) => text.clone(),
        RawValue::Date(date) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Formats a number with at most four significant digits and a magnitude suffix.
#[must_use]
pub fn format_compact_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    let mut tier = COMPACT_TIERS
        .iter()
        .position(|(scale, _)| magnitude >= *scale);
    let mut rounded = round_significant(scaled(value, tier), COMPACT_SIGNIFICANT_DIGITS);

    // 999_990 rounds to 1000K and must carry into the next tier.
    if rounded.abs() >= 1000.0 {
        let next = match tier {
            None => Some(COMPACT_TIERS.len() - 1),
            Some(0) => None,
            Some(index) => Some(index - 1),
        };
        if next.is_some() {
            tier = next;
            rounded = round_significant(scaled(value, tier), COMPACT_SIGNIFICANT_DIGITS);
        }
    }

    let suffix = tier.map_or("", |index| COMPACT_TIERS[index].1);
    format!("{rounded}{suffix}")
}

fn scaled(value: f64, tier: Option<usize>) -> f64 {
    tier.map_or(value, |index| value / COMPACT_TIERS[index].0)
}

fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let exponent = value.abs().log10().floor() as i32;
    let power = digits - 1 - exponent;
    if power >= 0 {
        let factor = 10_f64.powi(power);
        (value * factor).round() / factor
    } else {
        let factor = 10_f64.powi(-power);
        (value / factor).round() * factor
    }
}
