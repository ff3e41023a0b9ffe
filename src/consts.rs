/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Day of month that always falls on the year's doomsday, per month
/// (index 0 is unused). January and February shift in leap years.
pub const MONTH_ANCHOR_DATES: [u8; 13] = [
    0,  // index 0 unused
    3,  // January (4 in leap years)
    28, // February (29 in leap years)
    14, // March (Pi day)
    4,  // April (4/4)
    9,  // May (9-to-5 at 7-11)
    6,  // June (6/6)
    11, // July (7-11)
    8,  // August (8/8)
    5,  // September (9-to-5 at 7-11)
    10, // October (10/10)
    7,  // November (7-11)
    12, // December (12/12)
];

/// January doomsday in leap years
pub const JANUARY_ANCHOR_LEAP: u8 = 4;
/// February doomsday in leap years (the leap day itself)
pub const FEBRUARY_ANCHOR_LEAP: u8 = 29;

/// Days in a week; every weekday index is reduced modulo this
pub const DAYS_IN_WEEK: i32 = 7;

/// Years per century
pub const YEARS_PER_CENTURY: i32 = 100;
/// The two-digit year is split into dozens first...
pub const DOZEN: i32 = 12;
/// ...then the leftover is divided by four for its leap days
pub const LEAP_DIVISOR: i32 = 4;

/// Century anchors repeat every four centuries
pub(crate) const ANCHOR_CYCLE: i32 = 4;
/// anchor(c) = (ANCHOR_STEP * (c mod 4) + ANCHOR_BASE) mod 7
pub(crate) const ANCHOR_STEP: i32 = 5;
pub(crate) const ANCHOR_BASE: i32 = 2;

/// Centuries tabulated by the legacy anchor table: (century, anchor)
pub const LEGACY_CENTURY_ANCHORS: [(i32, u8); 3] = [(19, 3), (20, 2), (21, 0)];
/// Anchor the legacy table answers for every untabulated century
pub const LEGACY_FALLBACK_ANCHOR: u8 = 2;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator of the on-screen `D.M.Y` format
pub const DATE_SEPARATOR: char = '.';
/// Separator of the ISO 8601 `YYYY-MM-DD` format
pub const ISO_SEPARATOR: char = '-';

/// Feedback shown when a tutorial answer does not match
pub const RETRY_MESSAGE: &str = "Wrong, try again.";
/// Feedback for answers submitted after the last step was solved
pub const COMPLETE_MESSAGE: &str = "Tutorial already complete.";

/// Seconds on the clock at the start of a quiz round
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 120;
/// Points awarded for each correctly named weekday
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;
/// Year range of the normal quiz difficulty (inclusive)
pub const NORMAL_YEARS: (i32, i32) = (1900, 2099);
/// Year range of the hard quiz difficulty (inclusive)
pub const HARD_YEARS: (i32, i32) = (1000, 2099);
