//! Interactive prompt helpers.
//!
//! Parse failures on free-text entries are recovered locally: each attempt
//! returns a `Result` with a bounded error enum and the prompt loops until
//! the input parses. Only an interrupt (Ctrl-C / Esc) leaves the loop, as an
//! `InquireError` the caller maps to a clean exit.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crossterm::style::Stylize;
use inquire::{Confirm, CustomType, DateSelect, InquireError, Password, Text};
use regex::Regex;
use thiserror::Error;

static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})(?::(\d{1,2}))?\s*-\s*(\d{1,2})(?::(\d{1,2}))?\s*$").unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("expected HH[:MM]-HH[:MM]")]
    Malformed,

    #[error("hour or minute out of range")]
    OutOfRange,

    #[error("start must come before end")]
    EmptyRange,
}

/// Parse a `HH[:MM]-HH[:MM]` range into wall-clock bounds on the given day.
/// Omitted minutes default to `:00`.
pub fn parse_time_range(
    input: &str,
    day: NaiveDate,
) -> Result<(NaiveDateTime, NaiveDateTime), TimeRangeError> {
    let caps = TIME_RANGE_RE
        .captures(input)
        .ok_or(TimeRangeError::Malformed)?;

    let time_at = |hour_group: usize, minute_group: usize| -> Result<NaiveTime, TimeRangeError> {
        let hour: u32 = caps[hour_group].parse().map_err(|_| TimeRangeError::Malformed)?;
        let minute: u32 = match caps.get(minute_group) {
            Some(m) => m.as_str().parse().map_err(|_| TimeRangeError::Malformed)?,
            None => 0,
        };
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeRangeError::OutOfRange)
    };

    let start = time_at(1, 2)?;
    let end = time_at(3, 4)?;
    if start >= end {
        return Err(TimeRangeError::EmptyRange);
    }

    Ok((day.and_time(start), day.and_time(end)))
}

pub fn ask_include_informal() -> Result<bool, InquireError> {
    Confirm::new("Include informal rooms?")
        .with_default(false)
        .prompt()
}

pub fn ask_password(user: &str) -> Result<String, InquireError> {
    Password::new(&format!("Password for {user}:"))
        .without_confirmation()
        .prompt()
}

/// SelectDate: today by default, otherwise a rendered month calendar with
/// today highlighted and past dates excluded.
pub fn ask_meeting_date(today: NaiveDate) -> Result<NaiveDate, InquireError> {
    let use_today = Confirm::new(&format!("Meeting today ({})?", today.format("%d/%m/%Y")))
        .with_default(true)
        .prompt()?;
    if use_today {
        return Ok(today);
    }

    DateSelect::new("Meeting day?")
        .with_starting_date(today)
        .with_min_date(today)
        .with_week_start(chrono::Weekday::Mon)
        .prompt()
}

/// Preferred-window entry, re-asked until it parses.
pub fn ask_time_window(
    day: NaiveDate,
    default: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), InquireError> {
    loop {
        let entry = Text::new("Preferred time (HH:MM-HH:MM)?")
            .with_default(default)
            .prompt()?;
        match parse_time_range(&entry, day) {
            Ok(range) => return Ok(range),
            Err(err) => eprintln!("{} {err}", format!("Bad time range {entry:?}:").red()),
        }
    }
}

/// Duration entry in minutes; zero is re-asked, bad numbers are handled by
/// the prompt itself.
pub fn ask_duration(default_minutes: i64) -> Result<i64, InquireError> {
    loop {
        let minutes = CustomType::<u32>::new("Meeting duration in minutes?")
            .with_default(default_minutes as u32)
            .prompt()?;
        if minutes > 0 {
            return Ok(i64::from(minutes));
        }
        eprintln!("{}", "Duration must be at least one minute.".red());
    }
}

pub fn ask_subject() -> Result<String, InquireError> {
    Text::new("Meeting subject?")
        .with_default("New Appointment")
        .prompt()
}
