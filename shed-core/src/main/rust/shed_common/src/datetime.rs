use std::ffi::{OsStr,OsString};
use std::fmt;

use chrono::{NaiveDateTime,TimeDelta};
use thiserror::Error;

/// the canonical timestamp format used by our tools (local, no timezone suffix)
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

const SECS_PER_DAY: i64 = 86400;
const SECS_PER_HOUR: i64 = 3600;

#[derive(Error,Debug)]
pub enum ShedDatetimeError {
    #[error("invalid datetime spec '{0}' (expected yyyy-mm-dd HH:MM:SS)")]
    DatetimeFormatError(String),
}

pub fn parse_naive_datetime (spec: &str) -> Result<NaiveDateTime,ShedDatetimeError> {
    NaiveDateTime::parse_from_str( spec, DATETIME_FMT)
        .map_err(|_| ShedDatetimeError::DatetimeFormatError(spec.to_string()))
}

//--- support for structopt parsers

/// fallible arg parser (to be used with 'parse(try_from_os_str = ..)') so that malformed
/// values end up as a usage error instead of a panic
pub fn try_parse_naive_datetime_arg (s: &OsStr) -> Result<NaiveDateTime,OsString> {
    match s.to_str() {
        Some(spec) => parse_naive_datetime(spec).map_err( |e| OsString::from(e.to_string())),
        None => Err( OsString::from(format!("datetime spec not valid utf8: {:?}", s)))
    }
}

/// a TimeDelta decomposed into display units, truncating integer arithmetic
/// (days are split into weeks/days, the sub-day remainder into hours/minutes/seconds).
/// Computed over the absolute number of seconds so callers get growing values on
/// either side of a reference timestamp
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct DurationBreakdown {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationBreakdown {
    pub fn of (td: &TimeDelta) -> Self {
        let total_secs = td.num_seconds().abs();
        let days_total = total_secs / SECS_PER_DAY;
        let day_secs = total_secs % SECS_PER_DAY;

        DurationBreakdown {
            weeks: days_total / 7,
            days: days_total % 7,
            hours: day_secs / SECS_PER_HOUR,
            minutes: (day_secs % SECS_PER_HOUR) / 60,
            seconds: (day_secs % SECS_PER_HOUR) % 60,
        }
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} weeks, {} days, {} hours, {}m{}s", self.weeks, self.days, self.hours, self.minutes, self.seconds)
    }
}
