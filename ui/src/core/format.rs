//! Formatting helpers for presenting snapshot values.
//!
//! Every helper is total: missing or malformed input degrades to [`PLACEHOLDER`]
//! instead of failing the render.

use serde_json::Value;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

/// Display string substituted for missing or invalid numeric data.
pub const PLACEHOLDER: &str = "—";

/// Coerce a raw JSON value into a finite number.
///
/// Numbers and numeric strings (surrounding whitespace ignored) coerce; everything
/// else, including empty strings and non-finite results, yields `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == PLACEHOLDER {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Shortest round-trip rendering of a number: `40.0` → `40`, `2.5` → `2.5`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing `-0`.
        return "0".to_string();
    }
    format!("{value}")
}

/// `"<n>%"` with the value unrounded, or the placeholder.
pub fn format_percent(value: &Value) -> String {
    match coerce_number(value) {
        Some(n) => format!("{}%", format_number(n)),
        None => PLACEHOLDER.to_string(),
    }
}

/// `"<n> days"` with the value unrounded, or the placeholder.
pub fn format_days(value: &Value) -> String {
    match coerce_number(value) {
        Some(n) => format!("{} days", format_number(n)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Opaque pass-through text for fields like `date` or `watch`.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .map(format_number)
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Local `YYYY-MM-DD HH:MM` rendering of the snapshot's update time.
///
/// A missing or blank timestamp shows `now`; one that can't be parsed shows the placeholder.
/// The result uses `now`'s offset.
pub fn format_updated(iso: Option<&str>, now: OffsetDateTime) -> String {
    let stamp = match iso.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => now,
        Some(raw) => match parse_timestamp(raw) {
            Some(parsed) => parsed.to_offset(now.offset()),
            None => return PLACEHOLDER.to_string(),
        },
    };
    stamp
        .format(&format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// RFC 3339, or offset-less date-times and bare dates taken as UTC.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(parsed.assume_utc());
    }
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}
