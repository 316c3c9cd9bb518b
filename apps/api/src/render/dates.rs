use chrono::NaiveDate;

/// Formats a stored date string as `Mon YYYY` (e.g. `Mar 2021`).
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM`. Anything else (a bare year, free
/// text) is returned unchanged; an empty input yields an empty string.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `start - end`, with `Present` for ongoing entries.
pub fn format_period(start: &str, end: Option<&str>, current: bool) -> String {
    let start = format_month_year(start);
    let end = if current {
        "Present".to_string()
    } else {
        end.map(format_month_year).unwrap_or_default()
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}
