//! Calendar date value: ordering, closed ranges, day-by-day iteration
//! and calendar interval arithmetic.
//!
//! `Date` is a plain year/month/day triple. It is never validated on
//! construction; validity only matters once arithmetic is delegated to
//! chrono, which reports impossible dates as [`DomainError::InvalidDate`].

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Mul, RangeInclusive};
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::domain::error::{DomainError, DomainResult};

/// Immutable calendar date.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day_of_month: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day_of_month: u32) -> Self {
        Self {
            year,
            month,
            day_of_month,
        }
    }

    /// Strictly-before check, the named form of `self < other`.
    pub fn is_before(&self, other: &Date) -> bool {
        self < other
    }

    /// Whether `self` lies in the closed range `[first, last]`.
    pub fn in_range(&self, first: Date, last: Date) -> bool {
        first.range_to(last).contains(self)
    }

    /// Build the closed range `[self, end_inclusive]`.
    pub fn range_to(self, end_inclusive: Date) -> DateRange {
        DateRange::new(self, end_inclusive)
    }

    /// Whether chrono accepts this triple as a real calendar date.
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_ok()
    }

    pub fn next_day(&self) -> DomainResult<Date> {
        self.add_interval(TimeInterval::Day, 1)
    }

    /// Add `count` units of `interval`, with standard calendar rollover.
    ///
    /// `count` may be zero (identity, no validation) or negative. Adding years
    /// to Feb 29 lands on Feb 28 when the target year is not a leap year.
    ///
    /// # Errors
    /// * [`DomainError::InvalidDate`] if `self` is not a real calendar date
    /// * [`DomainError::DateOutOfRange`] if the result leaves chrono's range
    pub fn add_interval(self, interval: TimeInterval, count: i32) -> DomainResult<Date> {
        if count == 0 {
            return Ok(self);
        }
        let start = self.to_naive()?;
        let count = i64::from(count);
        let shifted = match interval {
            TimeInterval::Day => shift_days(start, count),
            TimeInterval::Week => shift_days(start, count * 7),
            TimeInterval::Year => shift_months(start, count * 12),
        };
        shifted
            .map(Date::from)
            .ok_or_else(|| DomainError::DateOutOfRange {
                date: self.to_string(),
                amount: format!("{} {}", count, interval),
            })
    }

    /// Checked form of `self + repeated`.
    pub fn checked_add(self, repeated: RepeatedTimeInterval) -> DomainResult<Date> {
        self.add_interval(repeated.interval, repeated.count)
    }

    fn to_naive(self) -> DomainResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day_of_month).ok_or(
            DomainError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day_of_month,
            },
        )
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year, self.month, self.day_of_month
        )
    }
}

/// Parses `YYYY-MM-DD`, with an optional sign on the year (`-001-01-01`),
/// the same form `Display` writes. Only the syntax is checked, not the calendar.
impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidDateFormat(s.to_string());
        let text = s.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let parts: Vec<&str> = unsigned.split('-').collect();
        let [year, month, day] = parts[..] else {
            return Err(invalid());
        };
        if [year, month, day]
            .iter()
            .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        Ok(Date::new(
            if negative { -year } else { year },
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        ))
    }
}

/// 29 February of a year divisible by four.
///
/// Century years that are not leap years (1900, 2100) are still reported
/// as leap days.
/// Use [`is_gregorian_leap_day`] for the calendar-correct answer.
pub fn is_leap_day(date: &Date) -> bool {
    let Date {
        year,
        month,
        day_of_month,
    } = *date;
    year % 4 == 0 && month == 2 && day_of_month == 29
}

/// 29 February of a Gregorian leap year.
pub fn is_gregorian_leap_day(date: &Date) -> bool {
    date.month == 2 && date.day_of_month == 29 && date.is_valid()
}

// ============================================================
// Ranges
// ============================================================

/// Closed date range `[start, end_inclusive]`.
///
/// `start <= end_inclusive` is assumed; an inverted range is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: Date,
    pub end_inclusive: Date,
}

impl DateRange {
    pub const fn new(start: Date, end_inclusive: Date) -> Self {
        Self {
            start,
            end_inclusive,
        }
    }

    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end_inclusive
    }

    /// Fresh day-by-day iterator starting at `start`.
    pub fn iter(&self) -> DateIter {
        DateIter {
            next: Some(self.start),
            end_inclusive: self.end_inclusive,
        }
    }
}

impl From<RangeInclusive<Date>> for DateRange {
    fn from(range: RangeInclusive<Date>) -> Self {
        let (start, end_inclusive) = range.into_inner();
        DateRange::new(start, end_inclusive)
    }
}

impl<'a> IntoIterator for &'a DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> DateIter {
        self.iter()
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> DateIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
///
/// If the next day cannot be computed (the current value is not a real
/// calendar date), the current value is still yielded and iteration ends.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<Date>,
    end_inclusive: Date,
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next.take()?;
        if current > self.end_inclusive {
            return None;
        }
        self.next = current.next_day().ok();
        Some(current)
    }
}

impl FusedIterator for DateIter {}

// ============================================================
// Intervals
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeInterval {
    Day,
    Week,
    Year,
}

impl TimeInterval {
    pub fn times(self, count: i32) -> RepeatedTimeInterval {
        RepeatedTimeInterval::new(self, count)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeInterval::Day => "day",
            TimeInterval::Week => "week",
            TimeInterval::Year => "year",
        };
        f.write_str(name)
    }
}

/// An interval taken `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatedTimeInterval {
    pub interval: TimeInterval,
    pub count: i32,
}

impl RepeatedTimeInterval {
    pub const fn new(interval: TimeInterval, count: i32) -> Self {
        Self { interval, count }
    }
}

/// Parses `day`, `week` or `year` (case-insensitive).
impl FromStr for TimeInterval {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(TimeInterval::Day),
            "week" | "weeks" => Ok(TimeInterval::Week),
            "year" | "years" => Ok(TimeInterval::Year),
            _ => Err(DomainError::InvalidInterval(s.to_string())),
        }
    }
}

impl fmt::Display for RepeatedTimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.interval, self.count)
    }
}

/// Parses `week` (count 1) or `week*3`; the count may be negative.
impl FromStr for RepeatedTimeInterval {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidInterval(s.to_string());
        match s.split_once('*') {
            Some((interval, count)) => Ok(RepeatedTimeInterval::new(
                interval.parse().map_err(|_| invalid())?,
                count.trim().parse().map_err(|_| invalid())?,
            )),
            None => Ok(s.parse::<TimeInterval>()?.into()),
        }
    }
}

impl From<TimeInterval> for RepeatedTimeInterval {
    fn from(interval: TimeInterval) -> Self {
        RepeatedTimeInterval::new(interval, 1)
    }
}

impl Mul<i32> for TimeInterval {
    type Output = RepeatedTimeInterval;

    fn mul(self, count: i32) -> RepeatedTimeInterval {
        self.times(count)
    }
}

/// Adds one interval to a date.
///
/// Panics if the date is not a real calendar date or the result overflows.
/// Use [`Date::add_interval`] to handle that without panicking.
impl Add<TimeInterval> for Date {
    type Output = Date;

    fn add(self, interval: TimeInterval) -> Date {
        self + RepeatedTimeInterval::from(interval)
    }
}

/// Adds a repeated interval to a date.
///
/// Panics if the date is not a real calendar date or the result overflows.
/// Use [`Date::checked_add`] to handle that without panicking.
impl Add<RepeatedTimeInterval> for Date {
    type Output = Date;

    fn add(self, repeated: RepeatedTimeInterval) -> Date {
        self.checked_add(repeated)
            .expect("adding interval to date failed")
    }
}
