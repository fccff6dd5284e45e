//! Calendar-day arithmetic shared by the grid, navigation, and selection code.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use thiserror::Error;

/// Format of the stable key identifying a day cell (`data-day`).
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure to read a day key back into a date.
pub enum DayKeyError {
    /// The key is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid day key `{key}`: {source}")]
    Invalid {
        /// The rejected key.
        key: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// Stable `YYYY-MM-DD` key for a day.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key.
///
/// # Errors
///
/// Returns [`DayKeyError::Invalid`] when `raw` is not a real calendar date.
pub fn parse_day_key(raw: &str) -> Result<NaiveDate, DayKeyError> {
    NaiveDate::parse_from_str(raw.trim(), DAY_KEY_FORMAT).map_err(|source| DayKeyError::Invalid {
        key: raw.to_string(),
        source,
    })
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts a month by `delta` months, saturating at the representable range.
pub fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let month = first_of_month(month);
    let shifted = if delta >= 0 {
        month.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        month.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(month)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Start of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let offset =
        (7 + date.weekday().num_days_from_sunday() - week_starts_on.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Two-letter weekday label used in the grid header.
pub fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

/// Accessible label for a day button, e.g. `Sunday, March 10, 2024`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Caption text for a displayed month, e.g. `March 2024`.
pub fn month_caption(month: NaiveDate) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn day_keys_round_trip() {
        let date = ymd(2024, 3, 10);
        assert_eq!(day_key(date), "2024-03-10");
        assert_eq!(parse_day_key("2024-03-10"), Ok(date));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        let err = parse_day_key("2024-02-30").expect_err("not a real day");
        assert!(matches!(err, DayKeyError::Invalid { ref key, .. } if key == "2024-02-30"));
        assert!(parse_day_key("10/03/2024").is_err());
    }

    #[test]
    fn month_arithmetic_crosses_years() {
        assert_eq!(add_months(ymd(2024, 1, 31), -1), ymd(2023, 12, 1));
        assert_eq!(add_months(ymd(2024, 11, 15), 2), ymd(2025, 1, 1));
        assert_eq!(last_of_month(ymd(2024, 2, 3)), ymd(2024, 2, 29));
    }

    #[test]
    fn week_start_respects_configured_weekday() {
        // 2024-03-01 is a Friday.
        assert_eq!(start_of_week(ymd(2024, 3, 1), Weekday::Sun), ymd(2024, 2, 25));
        assert_eq!(start_of_week(ymd(2024, 3, 1), Weekday::Mon), ymd(2024, 2, 26));
        assert_eq!(start_of_week(ymd(2024, 3, 3), Weekday::Sun), ymd(2024, 3, 3));
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(day_label(ymd(2024, 3, 10)), "Sunday, March 10, 2024");
        assert_eq!(month_caption(ymd(2024, 3, 10)), "March 2024");
    }
}
