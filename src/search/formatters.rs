//! Display formatting for search results and profile fields
//!
//! Pure display/wire conversions: dates, month-year ranges, Indian-style
//! currency grouping, experience and notice-period labels.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::models::NoticePeriod;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Feb 3, 2026" style, matching the result card footer.
pub fn format_date(value: &DateTime<Utc>) -> String {
    format!(
        "{} {}, {}",
        MONTHS[value.month0() as usize],
        value.day(),
        value.year()
    )
}

/// "Jan 2020 – Mar 2022", with an open end rendered as "Present".
pub fn format_date_range(start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> String {
    let start_part = format!("{} {}", MONTHS[start.month0() as usize], start.year());
    let end_part = match end {
        Some(end) => format!("{} {}", MONTHS[end.month0() as usize], end.year()),
        None => "Present".to_string(),
    };
    format!("{start_part} – {end_part}")
}

/// Indian digit grouping: last three digits, then groups of two.
/// `1234567` becomes `12,34,567`.
pub fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut idx = head_bytes.len();
    while idx > 2 {
        groups.push(std::str::from_utf8(&head_bytes[idx - 2..idx]).unwrap_or(""));
        idx -= 2;
    }
    groups.push(std::str::from_utf8(&head_bytes[..idx]).unwrap_or(""));
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Dropdown label for a whole-year experience value; `None` renders the
/// unselected placeholder.
pub fn format_experience(value: Option<u8>) -> String {
    match value {
        None => "Years".to_string(),
        Some(1) => "1 Year".to_string(),
        Some(n) => format!("{n} Years"),
    }
}

/// Experience values offered by the dropdowns: 0 through 20 years.
pub fn experience_options() -> impl Iterator<Item = u8> {
    0..=20
}

/// Label for an optional notice-period selection.
pub fn format_notice_period(value: Option<NoticePeriod>) -> String {
    match value {
        None => "Any".to_string(),
        Some(period) => period.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(2026, 2, 3)), "Feb 3, 2026");
        assert_eq!(format_date(&date(2024, 12, 31)), "Dec 31, 2024");
    }

    #[test]
    fn test_format_date_range_closed() {
        assert_eq!(
            format_date_range(&date(2020, 1, 1), Some(&date(2022, 3, 15))),
            "Jan 2020 – Mar 2022"
        );
    }

    #[test]
    fn test_format_date_range_open() {
        assert_eq!(
            format_date_range(&date(2023, 6, 1), None),
            "Jun 2023 – Present"
        );
    }

    #[test]
    fn test_group_inr() {
        assert_eq!(group_inr(0), "0");
        assert_eq!(group_inr(999), "999");
        assert_eq!(group_inr(1000), "1,000");
        assert_eq!(group_inr(123456), "1,23,456");
        assert_eq!(group_inr(1234567), "12,34,567");
        assert_eq!(group_inr(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_experience() {
        assert_eq!(format_experience(None), "Years");
        assert_eq!(format_experience(Some(0)), "0 Years");
        assert_eq!(format_experience(Some(1)), "1 Year");
        assert_eq!(format_experience(Some(5)), "5 Years");
    }

    #[test]
    fn test_format_notice_period() {
        assert_eq!(format_notice_period(None), "Any");
        assert_eq!(
            format_notice_period(Some(NoticePeriod::FifteenDays)),
            "15 Days"
        );
    }
}
