use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ParsedTimezone {
    Named(Tz),
    Fixed(FixedOffset),
}

/// Accepts `+05:30`, `-0300` or `+3`.
fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.chars().next()? {
        '+' => (1, &trimmed[1..]),
        '-' => (-1, &trimmed[1..]),
        _ => return None,
    };

    let rest = rest.trim();
    if rest.is_empty() || !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else if rest.len() > 2 {
        let (h, m) = rest.split_at(rest.len() - 2);
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else {
        (rest.parse::<i32>().ok()?, 0)
    };

    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_timezone(raw: &str) -> Option<ParsedTimezone> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if upper.starts_with("UTC") || upper.starts_with("GMT") {
        let offset = trimmed.get(3..).unwrap_or("");
        if offset.trim().is_empty() {
            return FixedOffset::east_opt(0).map(ParsedTimezone::Fixed);
        }
        return parse_fixed_offset(offset).map(ParsedTimezone::Fixed);
    }

    if let Some(offset) = parse_fixed_offset(trimmed) {
        return Some(ParsedTimezone::Fixed(offset));
    }

    trimmed.parse::<Tz>().ok().map(ParsedTimezone::Named)
}

/// Trimmed timezone name if it parses, else `None`.
pub fn normalize_timezone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    parse_timezone(trimmed).map(|_| {
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("gmt") {
            "UTC".to_string()
        } else {
            trimmed.to_string()
        }
    })
}

/// Calendar date at `utc_dt` in the given zone; unknown zones fall back to UTC.
pub fn local_today(raw_tz: &str, utc_dt: DateTime<Utc>) -> NaiveDate {
    match parse_timezone(raw_tz) {
        Some(ParsedTimezone::Named(tz)) => utc_dt.with_timezone(&tz).date_naive(),
        Some(ParsedTimezone::Fixed(offset)) => utc_dt.with_timezone(&offset).date_naive(),
        None => utc_dt.date_naive(),
    }
}
