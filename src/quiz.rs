//! Timed weekday quiz: a stream of random dates, one point award per
//! correctly named weekday, and a countdown clock.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::days_in_month;
use crate::{CalendarDate, Calculator, Config, HARD_YEARS, MAX_MONTH, MIN_DAY, NORMAL_YEARS, Weekday};

/// Largest day number any month can have
const LONGEST_MONTH: u8 = 31;

/// Which years quiz dates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Only the current year
    Easy,
    /// 1900-2099
    #[default]
    Normal,
    /// 1000-2099
    Hard,
}

impl Difficulty {
    pub const fn years(self, current_year: i32) -> RangeInclusive<i32> {
        match self {
            Self::Easy => current_year..=current_year,
            Self::Normal => NORMAL_YEARS.0..=NORMAL_YEARS.1,
            Self::Hard => HARD_YEARS.0..=HARD_YEARS.1,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = u8;

    /// Menu order: 0 easy, 1 normal, 2 hard
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Easy),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Hard),
            other => Err(other),
        }
    }
}

/// Seeded source of quiz dates. The same seed, difficulty and current year
/// always yield the same sequence.
#[derive(Debug, Clone)]
pub struct DateGenerator {
    rng: Pcg32,
    years: RangeInclusive<i32>,
}

impl DateGenerator {
    pub fn new(seed: u64, difficulty: Difficulty, current_year: i32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            years: difficulty.years(current_year),
        }
    }

    /// Draws a date uniformly among all valid dates in the year range by
    /// rejecting day numbers the month does not have.
    pub fn next_date(&mut self) -> CalendarDate {
        loop {
            let year = self.rng.random_range(self.years.clone());
            let month = self.rng.random_range(1..=MAX_MONTH);
            let day = self.rng.random_range(MIN_DAY..=LONGEST_MONTH);
            if day > days_in_month(year, month) {
                continue;
            }
            if let Ok(date) = CalendarDate::new(year, month, day) {
                return date;
            }
        }
    }
}

impl Iterator for DateGenerator {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_date())
    }
}

/// One timed round of the quiz.
#[derive(Debug, Clone)]
pub struct Quiz {
    generator: DateGenerator,
    calculator: Calculator,
    current: CalendarDate,
    points_per_correct: u32,
    score: u32,
    time_left: u32,
}

impl Quiz {
    /// Starts a round. Without a configured seed a random one is drawn.
    pub fn new(config: &Config, current_year: i32) -> Self {
        let seed = config.quiz.seed.unwrap_or_else(rand::random);
        debug!(seed, difficulty = ?config.quiz.difficulty, "quiz started");
        let mut generator = DateGenerator::new(seed, config.quiz.difficulty, current_year);
        let current = generator.next_date();
        Self {
            generator,
            calculator: config.calculator(),
            current,
            points_per_correct: config.quiz.points_per_correct,
            score: 0,
            time_left: config.quiz.time_limit_secs,
        }
    }

    pub const fn current_date(&self) -> &CalendarDate {
        &self.current
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    pub const fn is_over(&self) -> bool {
        self.time_left == 0
    }

    /// Scores `guess` for the current date and moves on to a new date,
    /// right or wrong. Returns whether the guess was correct. Once time is
    /// up nothing changes and every guess counts as wrong.
    pub fn answer(&mut self, guess: Weekday) -> bool {
        if self.is_over() {
            return false;
        }
        let correct = self.calculator.weekday(&self.current) == guess;
        if correct {
            self.score = self.score.saturating_add(self.points_per_correct);
        }
        debug!(date = %self.current, %guess, correct, score = self.score, "quiz answer");
        self.current = self.generator.next_date();
        correct
    }

    /// Counts one second off the clock. Returns true when time is up.
    pub fn tick(&mut self) -> bool {
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            debug!(score = self.score, "quiz over");
        }
        self.is_over()
    }
}
