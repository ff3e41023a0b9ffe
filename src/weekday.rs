use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DAYS_IN_WEEK, prelude::*};

/// Languages the weekday answers can be given in. Displayed and
/// serialized by tag (`en`, `no`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    #[display(fmt = "no")]
    #[serde(rename = "no", alias = "nb")]
    Norwegian,
}

impl Locale {
    /// Every supported locale, in lookup order
    pub const ALL: [Self; 2] = [Self::English, Self::Norwegian];

    const fn names(self) -> &'static [&'static str; 7] {
        match self {
            Self::English => &[
                "sunday",
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
            ],
            Self::Norwegian => &[
                "søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
            ],
        }
    }
}

impl FromStr for Locale {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "no" | "nb" | "norwegian" | "norsk" => Ok(Self::Norwegian),
            _ => Err(LookupError::InvalidLocale(s.to_owned())),
        }
    }
}

/// Error type for weekday name lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Locale tag is not one of the supported languages.
    #[error("Unsupported locale: {0:?} (expected en or no)")]
    InvalidLocale(String),

    /// Weekday index is outside 0-6.
    #[error("Weekday index {0} out of range (must be 0-6)")]
    IndexOutOfRange(i64),
}

/// Day of the week, numbered the way the doomsday method counts: Sunday is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up the weekday for an index in `0..=6`.
    ///
    /// # Errors
    /// Returns `LookupError::IndexOutOfRange` for any other index.
    pub fn from_index(index: i64) -> Result<Self, LookupError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(LookupError::IndexOutOfRange(index))
    }

    /// Reduces any integer modulo 7 (floor) and returns that weekday.
    pub const fn from_index_wrapping(index: i32) -> Self {
        Self::ALL[index.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    /// Quiz shortcut keys: '0' is Sunday through '6' for Saturday.
    pub fn from_digit_key(key: char) -> Option<Self> {
        key.to_digit(10)
            .and_then(|d| Self::from_index(i64::from(d)).ok())
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase name in the given language
    pub const fn name(self, locale: Locale) -> &'static str {
        locale.names()[self as usize]
    }

    /// True if `answer` names this weekday in any supported language.
    /// Surrounding whitespace and letter case are ignored.
    pub fn matches(self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        Locale::ALL.iter().any(|&locale| self.name(locale) == answer)
    }

    /// Parses a weekday name in any supported language.
    pub fn from_name(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.matches(answer))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Locale::English))
    }
}

/// Name of weekday `index` in the language tagged `locale`.
///
/// # Errors
/// Returns `LookupError::InvalidLocale` for an unsupported tag and
/// `LookupError::IndexOutOfRange` when `index` is not in `0..=6`.
pub fn weekday_name(index: i64, locale: &str) -> Result<&'static str, LookupError> {
    let locale: Locale = locale.parse()?;
    Ok(Weekday::from_index(index)?.name(locale))
}
