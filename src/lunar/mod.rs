//! Vietnamese lunisolar calendar (âm lịch).
//!
//! Months begin on the local day of a new moon. The month containing the
//! winter solstice is month 11; a span between two month-11 starts that holds
//! thirteen new moons gets a leap month, namely the first month during
//! which the sun does not enter a new 30° sector.
//!
//! New moons and sun longitudes come from [`crate::astro`]; only their local
//! day matters, so results depend on the [`TimeZone`] (UTC+7 by default).
//! Vietnamese and Chinese calendars occasionally disagree because of the
//! one-hour difference.

use std::fmt::{self as std_fmt, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::astro::{self, SYNODIC_MONTH};
use crate::config::TimeZone;
use crate::date::{self, Date};
use crate::error::Error;

pub mod fmt;

/// Julian day of the reference new moon (`k = 0`), 1900-01-01 13:51 UT.
const EPOCH_NEW_MOON: f64 = 2415021.076998695;
/// Day number used when estimating the lunation index of month 11.
const EPOCH_DAY: i32 = 2415021;
/// Upper bound of the leap-month scan, counted in lunations after month 11.
const LEAP_SCAN_LIMIT: i32 = 14;

/// Month name; `Common` for a regular month, `Leap` for an intercalary
/// month (tháng nhuận), which repeats the number of the month before it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Returns the month number, regardless of leap.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for leap months.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// Vietnamese month name, e.g. "Tháng Giêng", "Tháng Hai nhuận".
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// A date of the lunar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Day of month, `1..=30`.
    pub day: u32,
    pub month: Month,
    /// Lunar year; it starts on Tết (day 1 of month 1).
    pub year: i32,
}

impl LunarDate {
    /// Converts a date into the lunar calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, LunarDate, TimeZone};
    /// use amlich::lunar::Month::*;
    ///
    /// let date = Date::from_gregorian(2024, 2, 10).unwrap();
    /// let lunar = LunarDate::from_date(date, TimeZone::INDOCHINA);
    /// assert_eq!((1, Common(1), 2024), (lunar.day, lunar.month, lunar.year));
    /// ```
    pub fn from_date(date: Date, tz: TimeZone) -> Self {
        let (d, m, y) = date::julian_day_to_solar(date.jdn());
        solar_to_lunar(d, m, y, tz)
    }
    /// Converts back into a date. See [`lunar_to_solar`].
    pub fn to_date(&self, tz: TimeZone) -> Result<Date, Error> {
        lunar_to_solar(self.day, self.month.num(), self.year, self.month.is_leap(), tz)
    }
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month.num())?;
        if self.month.is_leap() {
            f.write_str(" nhuận")?;
        }
        write!(f, "/{:04}", self.year)
    }
}

/// Returns the local day number of the `k`-th new moon.
pub fn new_moon_day(k: i32, tz: TimeZone) -> i32 {
    (astro::new_moon(k) + 0.5 + tz.day_fraction()).floor() as i32
}

/// Returns the day number on which month 11 (the winter-solstice month) of
/// solar year `year` begins.
pub fn month11_start(year: i32, tz: TimeZone) -> i32 {
    let off = date::solar_to_julian_day(31, 12, year) - EPOCH_DAY;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i32;
    let nm = new_moon_day(k, tz);
    // solstice not reached yet: month 11 is the previous lunation
    if astro::sun_longitude_sector(nm, tz) >= 9 {
        new_moon_day(k - 1, tz)
    } else {
        nm
    }
}

/// Given the start of a month 11 that is followed by thirteen months,
/// returns how many lunations after it the leap month begins.
///
/// The scan stops at the first month whose sun sector repeats that of the
/// month before, and never goes past lunation 14.
pub fn leap_month_offset(a11: i32, tz: TimeZone) -> i32 {
    let k = ((a11 as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH + 0.5).floor() as i32;
    let sector = |i: i32| astro::sun_longitude_sector(new_moon_day(k + i, tz), tz);

    let mut i = 1;
    let mut arc = sector(i);
    loop {
        let last = arc;
        i += 1;
        arc = sector(i);
        if arc == last || i >= LEAP_SCAN_LIMIT {
            break;
        }
    }
    trace!(a11, offset = i - 1, "leap month scan");
    i - 1
}

/// Converts a solar date into the lunar calendar.
///
/// Inputs are not validated; an impossible date is first normalised by
/// [`date::solar_to_julian_day`]. Precision is best for 1800–2100.
///
/// # Example
///
/// ```
/// use amlich::TimeZone;
/// use amlich::lunar::{solar_to_lunar, Month::*};
///
/// let lunar = solar_to_lunar(22, 3, 2023, TimeZone::INDOCHINA);
/// assert_eq!((1, Leap(2), 2023), (lunar.day, lunar.month, lunar.year));
/// ```
pub fn solar_to_lunar(day: i32, month: i32, year: i32, tz: TimeZone) -> LunarDate {
    let day_number = date::solar_to_julian_day(day, month, year);
    // the mean-lunation estimate can be one lunation late near a new moon
    let mut k = ((day_number as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32 + 1;
    let mut month_start = new_moon_day(k, tz);
    while month_start > day_number {
        k -= 1;
        month_start = new_moon_day(k, tz);
    }

    let mut a11 = month11_start(year, tz);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = month11_start(year - 1, tz);
    } else {
        lunar_year = year + 1;
        b11 = month11_start(year + 1, tz);
    }

    let diff = (month_start - a11).div_euclid(29);
    let mut is_leap = false;
    let mut lunar_month = diff + 11;
    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz);
        if diff >= leap_offset {
            lunar_month = diff + 10;
            is_leap = diff == leap_offset;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }
    trace!(day_number, month_start, a11, b11, diff, "solar to lunar");

    let num = lunar_month as u32;
    LunarDate {
        day: (day_number - month_start + 1) as u32,
        month: if is_leap {
            Month::Leap(num)
        } else {
            Month::Common(num)
        },
        year: lunar_year,
    }
}

/// Converts a lunar date into a solar date.
///
/// The day is not checked against the month length, so day 30 of a 29-day
/// month is the first day of the next month.
///
/// Returns `Err` if `year` is outside [`date::YEAR_RANGE`], if `month` is
/// not in `1..=12`, or if `is_leap` is set but that month is not the leap
/// month of `year`.
///
/// # Example
///
/// ```
/// use amlich::TimeZone;
/// use amlich::lunar::lunar_to_solar;
///
/// let date = lunar_to_solar(1, 1, 2024, false, TimeZone::INDOCHINA).unwrap();
/// assert_eq!("2024-02-10", date.iso_gregorian());
/// assert!(lunar_to_solar(1, 3, 2023, true, TimeZone::INDOCHINA).is_err());
/// ```
pub fn lunar_to_solar(
    day: u32,
    month: u32,
    year: i32,
    is_leap: bool,
    tz: TimeZone,
) -> Result<Date, Error> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    if !date::YEAR_RANGE.contains(&year) {
        return Err(Error::InvalidDate {
            year,
            month: month as i32,
            day: day as i32,
        });
    }
    let (a11, b11) = if month < 11 {
        (month11_start(year - 1, tz), month11_start(year, tz))
    } else {
        (month11_start(year, tz), month11_start(year + 1, tz))
    };
    let k = (0.5 + (a11 as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32;
    let mut off = (month as i32 - 11).rem_euclid(12);

    let not_leap = Error::NotLeapMonth { year, month };
    if b11 - a11 > 365 {
        let leap_offset = leap_month_offset(a11, tz);
        let leap_month = (leap_offset - 3).rem_euclid(12) + 1;
        if is_leap && month as i32 != leap_month {
            return Err(not_leap);
        } else if is_leap || off >= leap_offset {
            off += 1;
        }
    } else if is_leap {
        return Err(not_leap);
    }

    let month_start = new_moon_day(k + off, tz);
    Ok(Date::from_jdn(month_start + day as i32 - 1))
}

/// Returns the solar term (tiết khí, `0..=23`) in effect at the end of the
/// local day `date`. Term 0 is the vernal equinox (Xuân phân); names are in
/// [`fmt::solar_term`].
///
/// # Example
///
/// ```
/// use amlich::{Date, TimeZone};
/// use amlich::lunar::{fmt, solar_term_for};
///
/// let date = Date::from_gregorian(2024, 2, 4).unwrap();
/// assert_eq!("Lập xuân", fmt::solar_term(solar_term_for(date, TimeZone::INDOCHINA)));
/// ```
pub fn solar_term_for(date: Date, tz: TimeZone) -> u32 {
    astro::solar_term_index(date.jdn() + 1, tz) as u32
}

/// Returns the sexagenary (can chi) number of a lunar year, `1..=60`.
///
/// # Example
///
/// ```
/// use amlich::lunar::{fmt, sexagenary_for_year};
///
/// assert_eq!("Giáp Thìn", fmt::sexagenary(sexagenary_for_year(2024)));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// Returns the sexagenary number of month `month` of lunar year `year`.
/// A leap month shares the number of the month it repeats.
///
/// # Example
///
/// ```
/// use amlich::lunar::{fmt, sexagenary_for_month};
///
/// assert_eq!("Bính Dần", fmt::sexagenary(sexagenary_for_month(2024, 1)));
/// ```
pub fn sexagenary_for_month(year: i32, month: u32) -> u32 {
    ((year.rem_euclid(60) * 12 + month as i32 + 13).rem_euclid(60) + 1) as u32
}

/// Span from one month 11 up to (not including) the next, i.e. roughly from
/// one winter solstice to the next.
///
/// The span is named after the solar year holding most of it; its months
/// 11 and 12 belong to the previous lunar year.
///
/// # Example
///
/// ```
/// use amlich::{Date, TimeZone};
/// use amlich::lunar::{LunarCycle, Month::*};
///
/// let cycle = LunarCycle::new(2023, TimeZone::INDOCHINA);
/// assert_eq!(Some(2), cycle.leap_month());
///
/// let date = Date::from_gregorian(2023, 3, 22).unwrap();
/// let lunar = cycle.ymd_for(date).unwrap();
/// assert_eq!((1, Leap(2), 2023), (lunar.day, lunar.month, lunar.year));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarCycle {
    /// Solar year holding most of the span.
    pub year: i32,
    pub time_zone: TimeZone,
    /// Every month start, plus the next span's month 11 marking the end.
    pub months: Vec<NewMoon>,
}

/// Start of a lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewMoon {
    pub month: Month,
    pub date: Date,
}

/// The date given lies outside the span; tells on which side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherCycle {
    Before,
    After,
}

impl LunarCycle {
    /// Computes the span ending with month 11 of solar year `year`.
    pub fn new(year: i32, tz: TimeZone) -> Self {
        let a11 = month11_start(year - 1, tz);
        let b11 = month11_start(year, tz);
        let k = (0.5 + (a11 as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32;
        let (count, leap_offset) = if b11 - a11 > 365 {
            (13, Some(leap_month_offset(a11, tz)))
        } else {
            (12, None)
        };
        debug!(year, a11, b11, ?leap_offset, "lunar cycle");

        let ordinal = |i: i32, shift: i32| ((i + shift - 1) % 12 + 1) as u32;
        let mut months = Vec::with_capacity(count as usize + 1);
        for i in 0..count {
            let month = match leap_offset {
                Some(off) if i == off => Month::Leap(ordinal(i, 10)),
                Some(off) if i > off => Month::Common(ordinal(i, 10)),
                _ => Month::Common(ordinal(i, 11)),
            };
            months.push(NewMoon {
                month,
                date: Date::from_jdn(new_moon_day(k + i, tz)),
            });
        }
        months.push(NewMoon {
            month: Month::Common(11),
            date: Date::from_jdn(b11),
        });

        LunarCycle {
            year,
            time_zone: tz,
            months,
        }
    }
    /// Finds the span holding `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, TimeZone};
    /// use amlich::lunar::LunarCycle;
    ///
    /// let date = Date::from_gregorian(2023, 12, 13).unwrap();
    /// assert_eq!(2024, LunarCycle::from_date(date, TimeZone::INDOCHINA).year);
    /// ```
    pub fn from_date(date: Date, tz: TimeZone) -> Self {
        let mut y = date.gregorian().0;
        loop {
            let cycle = Self::new(y, tz);
            let (start, end) = cycle.bounds();
            if (start..end).contains(&date) {
                return cycle;
            }
            y += if date < start { -1 } else { 1 };
        }
    }

    fn bounds(&self) -> (Date, Date) {
        let start = self.months[0].date;
        let end = self.months[self.months.len() - 1].date;
        (start, end)
    }

    /// Number of the leap month, if the span has one.
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }

    /// Returns the lunar date of `date`, or which side of the span it lies
    /// on.
    pub fn ymd_for(&self, date: Date) -> Result<LunarDate, OtherCycle> {
        let (begin, end) = self.bounds();
        if date < begin {
            return Err(OtherCycle::Before);
        } else if date >= end {
            return Err(OtherCycle::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = self.months[idx];
        let year = if m.month.num() >= 11 {
            self.year - 1
        } else {
            self.year
        };
        Ok(LunarDate {
            day: (date - m.date + 1) as u32,
            month: m.month,
            year,
        })
    }
}
