use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Parse a dataset/series date key.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps; only the calendar date is
/// kept. Timestamps with an offset keep the date as written, not a locally shifted one.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if let Ok(d) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(key, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    chrono::DateTime::parse_from_rfc3339(key)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Label shown beside the timeline slider: `M/D/YYYY`, or the raw key when it is not a date.
pub fn display_date(key: &str) -> String {
    match parse_date_key(key) {
        Some(d) => d.format("%-m/%-d/%Y").to_string(),
        None => key.to_owned(),
    }
}

/// Compact axis label: `M/D`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d").to_string()
}

/// Continuous day number used as the domain of time scales.
pub fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of [`day_number`], rounding to the nearest whole day.
pub fn date_from_day_number(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let rounded = days.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(rounded as i32)
}

#[cfg(test)]
#[path = "../../tests/unit/data/date.rs"]
mod tests;
