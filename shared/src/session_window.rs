//! Turns the wall-clock times typed into the session form into persistable
//! start/end timestamps anchored on a reference date.
//!
//! All values are local wall-clock strings. Nothing here converts between
//! timezones. Times are compared as fixed-width `HH:MM` strings, which orders
//! them chronologically once the format has been checked.

use crate::error::{Result, SharedError};
use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Time of day used when a stored timestamp carries none.
pub const DEFAULT_START_TIME: &str = "09:00";
/// End time offered on a blank session form.
pub const DEFAULT_END_TIME: &str = "10:00";
/// Capacity offered on a blank session form.
pub const DEFAULT_CAPACITY: i64 = 10;
pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 25;

const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref TIME_OF_DAY_REGEX: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

/// Raw values collected by the session form on submit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SessionTimeInput {
    /// Session name, checked before the times
    pub name: String,

    /// Start time as `HH:MM` (24-hour)
    #[validate(regex(path = "TIME_OF_DAY_REGEX", message = "Start time must be a valid HH:MM time"))]
    pub start_time: String,

    /// End time as `HH:MM` (24-hour)
    #[validate(regex(path = "TIME_OF_DAY_REGEX", message = "End time must be a valid HH:MM time"))]
    pub end_time: String,

    /// Capacity as typed, before clamping
    pub capacity_raw: i64,
}

/// Validated start/end timestamps and capacity, ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionTimeWindow {
    /// `YYYY-MM-DD HH:MM:00`
    pub start_date_time: String,
    /// `YYYY-MM-DD HH:MM:00`, strictly after `start_date_time`
    pub end_date_time: String,
    /// Always within `MIN_CAPACITY..=MAX_CAPACITY`
    pub capacity: u32,
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether `value` is a zero-padded 24-hour `HH:MM` time.
pub fn is_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_REGEX.is_match(value)
}

/// Returns the `HH:MM` part of a `YYYY-MM-DD HH:MM:SS` timestamp, or
/// [`DEFAULT_START_TIME`] when the timestamp is absent or malformed.
pub fn extract_time_of_day(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.get(11..16))
        .filter(|time| is_time_of_day(time))
        .unwrap_or(DEFAULT_START_TIME)
        .to_string()
}

/// Returns the `YYYY-MM-DD` part of a timestamp, or today's date when the
/// timestamp is absent.
pub fn extract_date_part(timestamp: Option<&str>) -> String {
    extract_date_part_on(timestamp, today())
}

/// Same as [`extract_date_part`] with the fallback date supplied by the caller.
///
/// A timestamp whose first ten characters are not a calendar date also falls
/// back to `today`.
pub fn extract_date_part_on(timestamp: Option<&str>, today: NaiveDate) -> String {
    timestamp
        .and_then(|ts| ts.get(0..10))
        .filter(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok())
        .map(str::to_string)
        .unwrap_or_else(|| today.format(DATE_FORMAT).to_string())
}

/// Joins a date and a time of day into `"{date} {time}:00"`.
pub fn combine(date: &str, time: &str) -> String {
    format!("{} {}:00", date, time)
}

/// Forces a typed capacity into `MIN_CAPACITY..=MAX_CAPACITY`.
pub fn clamp_capacity(raw: i64) -> u32 {
    // Both bounds fit in u32, so the cast after clamping is lossless.
    raw.clamp(MIN_CAPACITY as i64, MAX_CAPACITY as i64) as u32
}

/// Validates the form input and builds the session time window.
///
/// When `prior_start` is the stored start of the session being edited, its
/// calendar date is kept and only the times of day change. New sessions are
/// anchored on today.
pub fn validate_and_build(
    input: &SessionTimeInput,
    prior_start: Option<&str>,
) -> Result<SessionTimeWindow> {
    validate_and_build_on(input, prior_start, today())
}

/// Same as [`validate_and_build`] with today's date supplied by the caller.
pub fn validate_and_build_on(
    input: &SessionTimeInput,
    prior_start: Option<&str>,
    today: NaiveDate,
) -> Result<SessionTimeWindow> {
    if input.name.trim().is_empty() {
        return Err(SharedError::EmptyName);
    }

    input.validate()?;

    if input.end_time <= input.start_time {
        return Err(SharedError::InvalidTimeOrder {
            start: input.start_time.clone(),
            end: input.end_time.clone(),
        });
    }

    let capacity = clamp_capacity(input.capacity_raw);
    if i64::from(capacity) != input.capacity_raw {
        debug!(
            "Clamped capacity {} to {} for session '{}'",
            input.capacity_raw, capacity, input.name
        );
    }

    let reference_date = extract_date_part_on(prior_start, today);
    let window = SessionTimeWindow {
        start_date_time: combine(&reference_date, &input.start_time),
        end_date_time: combine(&reference_date, &input.end_time),
        capacity,
    };

    debug!(
        "Built session window {} - {} (capacity {})",
        window.start_date_time, window.end_date_time, window.capacity
    );
    Ok(window)
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn time_of_day() -> impl Strategy<Value = String> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    proptest! {
        #[test]
        fn ordered_pairs_build_ordered_windows(start in time_of_day(), end in time_of_day()) {
            prop_assume!(end > start);
            let input = SessionTimeInput {
                name: "Circuit".to_string(),
                start_time: start,
                end_time: end,
                capacity_raw: 10,
            };
            let window = validate_and_build_on(&input, None, fixed_today()).unwrap();
            prop_assert!(window.end_date_time > window.start_date_time);
            prop_assert!(window.start_date_time.starts_with("2024-06-01 "));
            prop_assert!(window.end_date_time.ends_with(":00"));
        }

        #[test]
        fn unordered_pairs_are_rejected(start in time_of_day(), end in time_of_day()) {
            prop_assume!(end <= start);
            let input = SessionTimeInput {
                name: "Circuit".to_string(),
                start_time: start,
                end_time: end,
                capacity_raw: 10,
            };
            let result = validate_and_build_on(&input, None, fixed_today());
            let is_order_error = matches!(result, Err(SharedError::InvalidTimeOrder { .. }));
            prop_assert!(is_order_error);
        }

        #[test]
        fn capacity_always_in_range(raw in any::<i64>()) {
            let capacity = clamp_capacity(raw);
            prop_assert!((MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity));
            if (1..=25).contains(&raw) {
                prop_assert_eq!(i64::from(capacity), raw);
            }
        }
    }
}
