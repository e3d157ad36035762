use time::{Duration, OffsetDateTime};

/// The instant one week after `now`.
pub fn next_week(now: OffsetDateTime) -> OffsetDateTime {
    now + Duration::weeks(1)
}

/// Whole days between `now` and `date`, rounded up, in either direction.
pub fn days_from_today(date: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let seconds = (date - now).abs().as_seconds_f64();
    (seconds / 86_400.0).ceil() as i64
}

/// Formats a dollar amount the en-US way, e.g. `$1,234.50` or `-$3.00`.
pub fn format_currency(value: f64) -> String {
    let scaled = (value.abs() * 100.0).round();
    // Past u64 range the cast would saturate; print the raw number instead.
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return value.to_string();
    }

    let cents = scaled as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (idx, digit) in dollars.chars().enumerate() {
        if idx > 0 && (dollars.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
