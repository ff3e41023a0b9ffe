//! The Doomsday method: weekday of any proleptic Gregorian date, with every
//! intermediate number a learner writes down along the way.
//!
//! All arithmetic uses floor division (`div_euclid`/`rem_euclid`), so negative
//! years and negative day differences stay in range.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::{
    ANCHOR_BASE, ANCHOR_CYCLE, ANCHOR_STEP, DAYS_IN_WEEK, DOZEN, FEBRUARY, FEBRUARY_ANCHOR_LEAP,
    JANUARY, JANUARY_ANCHOR_LEAP, LEAP_DIVISOR, LEGACY_CENTURY_ANCHORS, LEGACY_FALLBACK_ANCHOR,
    MONTH_ANCHOR_DATES,
};
use crate::{CalendarDate, Month, Weekday, Year};

/// How the century anchor (the weekday of a century's first doomsday) is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorRule {
    /// `(5 * (century mod 4) + 2) mod 7`, valid for every century.
    #[default]
    Gregorian,
    /// Only the 1900s, 2000s and 2100s are tabulated. Every other century
    /// gets anchor 2, which is wrong outside 1900-2199.
    Legacy,
}

impl AnchorRule {
    /// Anchor weekday index in `0..=6` for the century containing `year`.
    pub fn anchor_for(self, year: Year) -> u8 {
        let century = year.century();
        match self {
            Self::Gregorian => {
                let anchor = (ANCHOR_STEP * century.rem_euclid(ANCHOR_CYCLE) + ANCHOR_BASE)
                    .rem_euclid(DAYS_IN_WEEK);
                Weekday::from_index_wrapping(anchor).index()
            }
            Self::Legacy => LEGACY_CENTURY_ANCHORS
                .iter()
                .find(|(c, _)| *c == century)
                .map_or(LEGACY_FALLBACK_ANCHOR, |&(_, anchor)| anchor),
        }
    }
}

/// Century anchor of `year` under the default (Gregorian) rule.
pub fn anchor_for_century(year: i32) -> u8 {
    AnchorRule::default().anchor_for(Year::new(year))
}

/// Doomsday day-of-month for `month`.
pub const fn month_anchor_date(month: Month, is_leap_year: bool) -> u8 {
    match month.get() {
        JANUARY if is_leap_year => JANUARY_ANCHOR_LEAP,
        FEBRUARY if is_leap_year => FEBRUARY_ANCHOR_LEAP,
        m => MONTH_ANCHOR_DATES[m as usize],
    }
}

/// Every number produced while working out one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoomsdayTrace {
    /// How many times 12 fits into the last two digits of the year
    pub century_fit: i32,
    /// What is left of the last two digits after removing the dozens
    pub year_remainder: i32,
    /// The remainder divided by 4, rounded down
    pub remainder_fit4: i32,
    pub century_anchor: i32,
    /// Sum of the four numbers above
    pub year_total: i32,
    /// `year_total mod 7`: weekday index of every doomsday in the year
    pub doomsday_of_year: i32,
    pub month_anchor_date: i32,
    /// Day of month minus the month's doomsday; negative before the anchor
    pub day_difference: i32,
    /// `doomsday_of_year + day_difference`, before reduction
    pub weekday_total: i32,
    /// Final weekday, always in `0..=6`
    pub weekday_index: i32,
}

impl DoomsdayTrace {
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_index_wrapping(self.weekday_index)
    }

    /// Weekday on which every doomsday of the year falls
    pub const fn doomsday_weekday(&self) -> Weekday {
        Weekday::from_index_wrapping(self.doomsday_of_year)
    }

    pub const fn get(&self, field: TraceField) -> i32 {
        match field {
            TraceField::CenturyFit => self.century_fit,
            TraceField::YearRemainder => self.year_remainder,
            TraceField::RemainderFit4 => self.remainder_fit4,
            TraceField::CenturyAnchor => self.century_anchor,
            TraceField::YearTotal => self.year_total,
            TraceField::DoomsdayOfYear => self.doomsday_of_year,
            TraceField::MonthAnchorDate => self.month_anchor_date,
            TraceField::DayDifference => self.day_difference,
            TraceField::WeekdayTotal => self.weekday_total,
            TraceField::WeekdayIndex => self.weekday_index,
        }
    }

    /// All values in calculation order, paired with their names.
    pub fn values(&self) -> Vec<(TraceField, i32)> {
        TraceField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .collect()
    }
}

/// Names one intermediate value of a [`DoomsdayTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceField {
    CenturyFit,
    YearRemainder,
    RemainderFit4,
    CenturyAnchor,
    YearTotal,
    DoomsdayOfYear,
    MonthAnchorDate,
    DayDifference,
    WeekdayTotal,
    WeekdayIndex,
}

impl TraceField {
    pub const ALL: [Self; 10] = [
        Self::CenturyFit,
        Self::YearRemainder,
        Self::RemainderFit4,
        Self::CenturyAnchor,
        Self::YearTotal,
        Self::DoomsdayOfYear,
        Self::MonthAnchorDate,
        Self::DayDifference,
        Self::WeekdayTotal,
        Self::WeekdayIndex,
    ];
}

/// Doomsday calculator configured with a century anchor rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Calculator {
    pub anchor_rule: AnchorRule,
}

impl Calculator {
    pub const fn new(anchor_rule: AnchorRule) -> Self {
        Self { anchor_rule }
    }

    /// Runs the method on `date`. Never fails: `CalendarDate` already
    /// guarantees the day exists.
    pub fn compute_trace(&self, date: &CalendarDate) -> DoomsdayTrace {
        let year = date.year_typed();
        let two_digits = year.two_digits();

        let century_fit = two_digits.div_euclid(DOZEN);
        let year_remainder = two_digits.rem_euclid(DOZEN);
        let remainder_fit4 = year_remainder.div_euclid(LEAP_DIVISOR);
        let century_anchor = i32::from(self.anchor_rule.anchor_for(year));
        let year_total = century_fit + year_remainder + remainder_fit4 + century_anchor;
        let doomsday_of_year = year_total.rem_euclid(DAYS_IN_WEEK);

        let month_anchor_date = i32::from(month_anchor_date(date.month_typed(), year.is_leap()));
        let day_difference = i32::from(date.day()) - month_anchor_date;
        let weekday_total = doomsday_of_year + day_difference;
        let weekday_index = weekday_total.rem_euclid(DAYS_IN_WEEK);

        trace!(%date, doomsday_of_year, weekday_index, "computed doomsday trace");

        DoomsdayTrace {
            century_fit,
            year_remainder,
            remainder_fit4,
            century_anchor,
            year_total,
            doomsday_of_year,
            month_anchor_date,
            day_difference,
            weekday_total,
            weekday_index,
        }
    }

    pub fn weekday(&self, date: &CalendarDate) -> Weekday {
        self.compute_trace(date).weekday()
    }
}

/// Runs the method on `date` with the default (Gregorian) anchor rule.
pub fn compute_trace(date: &CalendarDate) -> DoomsdayTrace {
    Calculator::default().compute_trace(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::is_leap_year;
    use proptest::prelude::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    /// Zeller's congruence, shifted so Sunday is 0.
    fn zeller(year: i32, month: u8, day: u8) -> i32 {
        let (y, m) = if month < 3 {
            (year - 1, i32::from(month) + 12)
        } else {
            (year, i32::from(month))
        };
        let k = y.rem_euclid(100);
        let j = y.div_euclid(100);
        let h = (i32::from(day) + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) + 5 * j)
            .rem_euclid(7);
        // h: 0 = Saturday
        (h + 6).rem_euclid(7)
    }

    /// Days since 1970-01-01 (a Thursday), proleptic Gregorian.
    fn civil_weekday(year: i32, month: u8, day: u8) -> i32 {
        let y = i64::from(if month <= 2 { year - 1 } else { year });
        let m = i64::from(month);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        let days = era * 146_097 + doe - 719_468;
        i32::try_from((days + 4).rem_euclid(7)).unwrap()
    }

    #[test]
    fn test_trace_for_pi_day_2025() {
        let trace = compute_trace(&date(2025, 3, 14));
        assert_eq!(trace.century_fit, 2);
        assert_eq!(trace.year_remainder, 1);
        assert_eq!(trace.remainder_fit4, 0);
        assert_eq!(trace.century_anchor, 2);
        assert_eq!(trace.year_total, 5);
        assert_eq!(trace.doomsday_of_year, 5);
        assert_eq!(trace.month_anchor_date, 14);
        assert_eq!(trace.day_difference, 0);
        assert_eq!(trace.weekday_total, 5);
        assert_eq!(trace.weekday_index, 5);
        assert_eq!(trace.weekday(), Weekday::Friday);
    }

    #[test]
    fn test_known_dates() {
        // 1969-07-20 Moon landing, a Sunday
        assert_eq!(compute_trace(&date(1969, 7, 20)).weekday(), Weekday::Sunday);
        // 2000-01-01, a Saturday
        assert_eq!(compute_trace(&date(2000, 1, 1)).weekday(), Weekday::Saturday);
        // 1900-01-01, a Monday
        assert_eq!(compute_trace(&date(1900, 1, 1)).weekday(), Weekday::Monday);
        // 2024-02-29, a Thursday
        assert_eq!(compute_trace(&date(2024, 2, 29)).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_century_anchors() {
        assert_eq!(anchor_for_century(1999), 3);
        assert_eq!(anchor_for_century(2025), 2);
        assert_eq!(anchor_for_century(2150), 0);
        assert_eq!(anchor_for_century(2250), 5);
        assert_eq!(anchor_for_century(1800), 5);
        assert_eq!(anchor_for_century(1776), 0);
        // 400-year cycle holds for negative years
        assert_eq!(anchor_for_century(-1), anchor_for_century(399));
    }

    #[test]
    fn test_legacy_anchor_table() {
        let legacy = AnchorRule::Legacy;
        assert_eq!(legacy.anchor_for(Year::new(1950)), 3);
        assert_eq!(legacy.anchor_for(Year::new(2000)), 2);
        assert_eq!(legacy.anchor_for(Year::new(2199)), 0);
        // Untabulated centuries fall back to 2 whatever their real anchor
        assert_eq!(legacy.anchor_for(Year::new(1800)), 2);
        assert_eq!(legacy.anchor_for(Year::new(1500)), 2);
    }

    #[test]
    fn test_legacy_rule_wrong_outside_table() {
        // 1776-07-04 was a Thursday
        let independence = date(1776, 7, 4);
        assert_eq!(Calculator::default().weekday(&independence), Weekday::Thursday);
        assert_ne!(
            Calculator::new(AnchorRule::Legacy).weekday(&independence),
            Weekday::Thursday
        );
    }

    #[test]
    fn test_month_anchor_dates() {
        let month = |m| Month::new(m).unwrap();
        assert_eq!(month_anchor_date(month(2), true), 29);
        assert_eq!(month_anchor_date(month(2), false), 28);
        assert_eq!(month_anchor_date(month(1), true), 4);
        assert_eq!(month_anchor_date(month(1), false), 3);
        assert_eq!(month_anchor_date(month(3), true), 14);
        assert_eq!(month_anchor_date(month(12), false), 12);
    }

    #[test]
    fn test_month_anchor_date_only_for_real_months() {
        // Raw month numbers must pass through `Month` first
        assert!(Month::new(0).is_err());
        assert!(Month::new(13).is_err());
        for m in 1..=12 {
            let anchor = month_anchor_date(Month::new(m).unwrap(), false);
            assert!((3..=28).contains(&anchor), "month {m}: {anchor}");
        }
    }

    #[test]
    fn test_doomsday_dates_have_zero_difference() {
        for year in [1900, 1999, 2000, 2023, 2024, 2099] {
            let leap = is_leap_year(year);
            for month in 1..=12 {
                let anchor = month_anchor_date(Month::new(month).unwrap(), leap);
                let trace = compute_trace(&date(year, month, anchor));
                assert_eq!(trace.day_difference, 0);
                assert_eq!(trace.weekday_index, trace.doomsday_of_year);
            }
        }
    }

    #[test]
    fn test_negative_difference_normalized() {
        let d = date(2025, 3, 1);
        let trace = compute_trace(&d);
        assert_eq!(trace.day_difference, -13);
        assert_eq!(trace.weekday_total, -8);
        assert!((0..=6).contains(&trace.weekday_index));
        assert_eq!(trace.weekday_index, civil_weekday(2025, 3, 1));
        assert_eq!(trace.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_trace_is_pure() {
        let d = date(1987, 11, 23);
        assert_eq!(compute_trace(&d), compute_trace(&d));
    }

    #[test]
    fn test_values_in_calculation_order() {
        let trace = compute_trace(&date(2025, 3, 14));
        let values = trace.values();
        assert_eq!(values.len(), TraceField::ALL.len());
        assert_eq!(values[0], (TraceField::CenturyFit, 2));
        assert_eq!(values[5], (TraceField::DoomsdayOfYear, 5));
        assert_eq!(values[9], (TraceField::WeekdayIndex, 5));
    }

    #[test]
    fn test_reference_helpers_agree() {
        assert_eq!(zeller(2025, 3, 14), 5);
        assert_eq!(civil_weekday(2025, 3, 14), 5);
        assert_eq!(civil_weekday(1970, 1, 1), 4);
    }

    fn valid_date(years: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = CalendarDate> {
        (years, 1u8..=12, 1u8..=31).prop_filter_map("day exists", |(y, m, d)| {
            CalendarDate::new(y, m, d).ok()
        })
    }

    proptest! {
        #[test]
        fn matches_zeller_1000_to_2099(d in valid_date(1000..=2099)) {
            let trace = compute_trace(&d);
            prop_assert_eq!(trace.weekday_index, zeller(d.year(), d.month(), d.day()));
        }

        #[test]
        fn legacy_matches_inside_tabulated_centuries(d in valid_date(1900..=2199)) {
            let legacy = Calculator::new(AnchorRule::Legacy).compute_trace(&d);
            prop_assert_eq!(legacy, compute_trace(&d));
        }

        #[test]
        fn matches_civil_count_for_any_year(d in valid_date(-100_000..=100_000)) {
            let trace = compute_trace(&d);
            prop_assert!((0..=6).contains(&trace.weekday_index));
            prop_assert!((0..=6).contains(&trace.doomsday_of_year));
            prop_assert_eq!(trace.weekday_index, civil_weekday(d.year(), d.month(), d.day()));
        }
    }
}
