//! Business calendar arithmetic.
//!
//! A business day runs 09:00–17:00, a business week Monday–Friday. All
//! functions here are pure: they take a timestamp and return a new one, so the
//! rules can be tested without running the sequencer.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use tracing::warn;

use crate::error::StartDateError;

/// Hour at which the business day opens.
pub const OPENING_HOUR: u32 = 9;

/// Hour at which the business day closes (exclusive).
pub const CLOSING_HOUR: u32 = 17;

/// On-site service time per work item, in minutes.
pub const SERVICE_MINUTES_PER_ITEM: i64 = 45;

fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(OPENING_HOUR, 0, 0).expect("opening hour is a valid time")
}

fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(CLOSING_HOUR, 0, 0).expect("closing hour is a valid time")
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Days from a weekend day to the following Monday.
fn days_until_monday(day: Weekday) -> Days {
    Days::new(7 - day.num_days_from_monday() as u64)
}

// Every function below uses checked chrono arithmetic and returns `None` when
// the result would leave chrono's representable range.

/// Moves a weekend timestamp to the following Monday at 09:00.
///
/// Weekday timestamps are returned unchanged.
pub fn snap_to_next_business_start(t: NaiveDateTime) -> Option<NaiveDateTime> {
    let day = t.weekday();
    if !is_weekend(day) {
        return Some(t);
    }
    let monday = t.date().checked_add_days(days_until_monday(day))?;
    Some(monday.and_time(opening_time()))
}

/// 09:00 on the calendar day after `t`, moved past a weekend if needed.
pub fn roll_to_next_day(t: NaiveDateTime) -> Option<NaiveDateTime> {
    let next = t.date().succ_opt()?.and_time(opening_time());
    snap_to_next_business_start(next)
}

/// Moves a weekend timestamp to Monday, keeping its clock time.
fn shift_past_weekend(t: NaiveDateTime) -> Option<NaiveDateTime> {
    let day = t.weekday();
    if is_weekend(day) {
        t.checked_add_days(days_until_monday(day))
    } else {
        Some(t)
    }
}

/// Converts fractional oracle minutes into a whole-second duration.
///
/// Non-finite or out-of-range values yield `None`.
pub fn travel_duration(minutes: f64) -> Option<Duration> {
    let seconds = (minutes * 60.0).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_seconds(seconds as i64)
}

/// Arrival time after leaving at `departed` and travelling `travel_minutes`.
///
/// Arrivals at or after closing move to the next business day's opening;
/// arrivals before opening wait until 09:00 the same day. The result always
/// falls on a weekday.
pub fn resolve_arrival(departed: NaiveDateTime, travel_minutes: f64) -> Option<NaiveDateTime> {
    let arrival = departed.checked_add_signed(travel_duration(travel_minutes)?)?;
    if arrival.hour() >= CLOSING_HOUR {
        roll_to_next_day(arrival)
    } else if arrival.hour() < OPENING_HOUR {
        snap_to_next_business_start(arrival.date().and_time(opening_time()))
    } else {
        snap_to_next_business_start(arrival)
    }
}

/// Departure time after `service_minutes` of work starting at `arrival`.
///
/// Work that would end at or after 17:00 spills over: the minutes past the
/// arrival day's close are added to the next business day's opening.
pub fn resolve_departure(arrival: NaiveDateTime, service_minutes: i64) -> Option<NaiveDateTime> {
    let departure = arrival.checked_add_signed(Duration::try_minutes(service_minutes)?)?;
    if departure.hour() < CLOSING_HOUR {
        return Some(departure);
    }

    let close = arrival.date().and_time(closing_time());
    let overtime = departure.signed_duration_since(close);
    shift_past_weekend(roll_to_next_day(arrival)?.checked_add_signed(overtime)?)
}

/// First instant of a planning run starting on `date`: 09:00, on a weekday.
///
/// A weekend date at the very end of chrono's range stays where it is.
pub fn planning_start(date: NaiveDate) -> NaiveDateTime {
    let opening = date.and_time(opening_time());
    snap_to_next_business_start(opening).unwrap_or(opening)
}

/// Parses a start date designator.
///
/// Accepts `YYYY-MM-DD`, `DD.MM.YYYY` and ISO week designators `YYYY-Www`
/// (optionally `YYYY-Www-D`); a week designator resolves to that week's Monday.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate, StartDateError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(StartDateError::Empty);
    }

    if let Some(date) = parse_iso_week(value) {
        return Ok(date);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .map_err(|_| StartDateError::Unrecognized(value.to_string()))
}

fn parse_iso_week(value: &str) -> Option<NaiveDate> {
    let (year, rest) = value.split_once("-W").or_else(|| value.split_once("-w"))?;
    let year: i32 = year.parse().ok()?;
    // The weekday suffix is accepted but the plan always starts on Monday.
    let week = rest.split('-').next()?;
    let week: u32 = week.parse().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}

/// Resolves the caller's start designator into the run's first instant.
///
/// Missing designators start on `today`. Unparseable ones are logged and also
/// fall back to `today`.
pub fn resolve_start(raw: Option<&str>, today: NaiveDate) -> NaiveDateTime {
    let date = match raw.map(parse_start_date) {
        None | Some(Err(StartDateError::Empty)) => today,
        Some(Ok(date)) => date,
        Some(Err(err)) => {
            warn!(error = %err, "unparseable start date, planning from today");
            today
        }
    };
    planning_start(date)
}
