use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats an INR amount as `₹` followed by comma-grouped thousands, keeping
/// at most two fractional digits.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "₹0".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    let mut out = format!("{}₹{}", sign, group_thousands(whole));
    if fraction > 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn format_optional_inr(value: Option<f64>) -> String {
    value.map(format_inr).unwrap_or_else(|| "-".to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders backend timestamps (`2025-11-20T10:15:00`, RFC 3339 or a bare
/// date) as `YYYY-MM-DD`. Anything else is shown as-is.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

pub fn badge_text(raw: &str) -> String {
    raw.replace('_', " ")
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("-")
        .to_string()
}
