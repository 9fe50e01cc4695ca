//! Formatting helpers for presenting metrics.

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

/// Shown wherever a value is missing or can't be rendered.
pub const PLACEHOLDER: &str = "—";

const DISPLAY_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

const NAIVE_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
];

/// `0.9567` -> `"95.67%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.2}%", value * 100.0)
}

/// Rounded to three decimals, printed without trailing zeros (`0.5`, `0.123`, `1`).
pub fn format_threshold(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    rounded.to_string()
}

/// Thousands grouping in the en-US style: `1234567` -> `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Render a metrics timestamp for display. Unparseable input is shown verbatim.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    parse_timestamp(raw)
        .and_then(|stamp| stamp.format(DISPLAY_FORMAT).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// RFC 3339 keeps its own offset; naive ISO stamps are taken as wall-clock time.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(stamp.date(), stamp.time()));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(raw, format).ok())
}
