use std::fmt;

use crate::{AnchorRule, Locale, MAX_MONTH, Month, Weekday, Year, month_anchor_date};

/// Centuries shown on the card, by their first year
const LISTED_CENTURIES: [i32; 3] = [1900, 2000, 2100];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The reference card learners keep open beside the tutorial: month
/// doomsdays, the leap-year rule, century anchors and weekday numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheatSheet {
    pub anchor_rule: AnchorRule,
}

impl CheatSheet {
    pub const fn new(anchor_rule: AnchorRule) -> Self {
        Self { anchor_rule }
    }
}

impl fmt::Display for CheatSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Month Doomsdays")?;
        for (month, name) in (1..=MAX_MONTH).zip(MONTH_ABBREVIATIONS) {
            let month = Month::new(month).map_err(|_| fmt::Error)?;
            let common = month_anchor_date(month, false);
            let leap = month_anchor_date(month, true);
            if common == leap {
                writeln!(f, "{name}: {common}")?;
            } else {
                writeln!(f, "{name}: {common} / {leap}*")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "* Leap Year Rule:")?;
        writeln!(f, "Divisible by 4 -> Leap Year")?;
        writeln!(f, "But divisible by 100 -> NOT")?;
        writeln!(f, "Except divisible by 400 -> Leap")?;
        writeln!(f)?;

        writeln!(f, "Century Anchors")?;
        for first_year in LISTED_CENTURIES {
            let anchor = self.anchor_rule.anchor_for(Year::new(first_year));
            let weekday = Weekday::from_index_wrapping(i32::from(anchor));
            writeln!(f, "{first_year}s -> {anchor} ({})", short_name(weekday))?;
        }
        writeln!(f)?;

        write!(f, "Weekday Numbers")?;
        for weekday in Weekday::ALL {
            write!(f, "\n{} = {}", weekday.index(), short_name(weekday))?;
        }
        Ok(())
    }
}

/// "Wed" for Wednesday
fn short_name(weekday: Weekday) -> String {
    let name = weekday.name(Locale::English);
    let mut chars = name.chars().take(3);
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
