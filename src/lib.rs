//! Weekday arithmetic for the Doomsday method, the step-by-step tutorial
//! checker built on it, and the timed weekday quiz.

mod cheat_sheet;
mod config;
mod consts;
mod doomsday;
mod prelude;
mod quiz;
mod tutorial;
mod types;
mod weekday;

pub use cheat_sheet::CheatSheet;
pub use config::{Config, ConfigError, QuizConfig};
pub use consts::*;
pub use doomsday::{
    AnchorRule, Calculator, DoomsdayTrace, TraceField, anchor_for_century, compute_trace,
    month_anchor_date,
};
pub use quiz::{DateGenerator, Difficulty, Quiz};
pub use tutorial::{
    CalculationLedger, Expected, Recorder, SessionError, SessionState, StepContext,
    SuccessMessage, TutorialKind, TutorialSession, TutorialStep, Verification,
};
pub use types::{Day, Month, Year, is_leap_year};
pub use weekday::{Locale, LookupError, Weekday, weekday_name};

use crate::prelude::*;
use std::str::FromStr;

/// A validated calendar date. The day always exists in its month and year,
/// so the doomsday arithmetic on it can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}.{}.{}", "day.get()", "month.get()", "year.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, checking that `day` exists in `month` of `year`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year);
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already validated parts
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Weekday of this date, using the Gregorian century anchors.
    pub fn weekday(&self) -> Weekday {
        compute_trace(self).weekday()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts the on-screen `D.M.Y` form (`14.3.2025`, year may be negative)
    /// and ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(DATE_SEPARATOR) {
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [day, month, year] => Self::from_tokens(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected D{DATE_SEPARATOR}M{DATE_SEPARATOR}Y, got {trimmed}"
                ))),
            }
        } else {
            let parts: Vec<&str> = trimmed.split(ISO_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [year, month, day] => Self::from_tokens(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected YYYY{ISO_SEPARATOR}MM{ISO_SEPARATOR}DD, got {trimmed}"
                ))),
            }
        }
    }
}

impl CalendarDate {
    fn from_tokens(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(year, month, day)
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
