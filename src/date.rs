//! Calendar-independent date and Julian day conversions.
//!
//! Julian day numbers (JDN) count whole days; 2000-01-01 is JDN 2451545.
//! Dates from 1582-10-15 on are read in the Gregorian calendar, earlier dates
//! in the Julian calendar, matching the civil reform.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// First JDN read in the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: i32 = 2299161;

/// JDN of the day before chrono's day 1 (0001-01-01, proleptic Gregorian).
const CHRONO_CE_OFFSET: i32 = 1721425;

/// Years accepted by [`Date::from_gregorian`]; the day-number arithmetic
/// stays within `i32` across this range.
pub const YEAR_RANGE: RangeInclusive<i32> = -1_000_000..=1_000_000;

/// Converts a calendar date into its Julian day number.
///
/// The Gregorian formula is tried first; if the result falls before the
/// reform, the Julian calendar formula is used instead. Inputs are not
/// checked, so `(30, 2, 2023)` yields the JDN of 2023-03-02.
///
/// # Example
///
/// ```
/// use amlich::date::solar_to_julian_day;
///
/// assert_eq!(2451545, solar_to_julian_day(1, 1, 2000));
/// assert_eq!(2299160, solar_to_julian_day(4, 10, 1582));
/// ```
pub fn solar_to_julian_day(day: i32, month: i32, year: i32) -> i32 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let base = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    let jd = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    if jd < GREGORIAN_REFORM_JDN {
        base - 32083
    } else {
        jd
    }
}

/// Converts a Julian day number back into `(day, month, year)`.
///
/// # Example
///
/// ```
/// use amlich::date::julian_day_to_solar;
///
/// assert_eq!((15, 10, 1582), julian_day_to_solar(2299161));
/// assert_eq!((4, 10, 1582), julian_day_to_solar(2299160));
/// ```
pub fn julian_day_to_solar(jd: i32) -> (i32, i32, i32) {
    let (b, c) = if jd >= GREGORIAN_REFORM_JDN {
        let a = jd + 32044;
        let b = (4 * a + 3).div_euclid(146097);
        (b, a - (146097 * b).div_euclid(4))
    } else {
        (0, jd + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (day, month, year)
}

/// A calendar-independent date.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a calendar date.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`. Dates before
    /// 1582-10-15 are read in the Julian calendar, so 1500-02-29 exists while
    /// 1582-10-10 does not. Years outside [`YEAR_RANGE`] are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        let invalid = Error::InvalidDate { year, month, day };
        if !YEAR_RANGE.contains(&year) || !(1..=12).contains(&month) || day < 1 {
            return Err(invalid);
        }
        let jdn = solar_to_julian_day(day, month, year);
        if julian_day_to_solar(jdn) != (day, month, year) {
            return Err(invalid);
        }
        Ok(Self::from_jdn(jdn))
    }
    /// Represents the date in the civil calendar, in `(year, month, day)`
    /// format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let (d, m, y) = julian_day_to_solar(self.jdn);
        (y, m, d)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2024, 2, 10).unwrap();
    /// assert_eq!("2024-02-10", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }
    /// Returns the sexagenary (can chi) day number of the date, numbered from
    /// 1 (Giáp Tý) to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::lunar::fmt;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary());
    /// assert_eq!("Mậu Ngọ", fmt::sexagenary(date.sexagenary()));
    /// ```
    pub fn sexagenary(&self) -> u32 {
        ((self.jdn + 49).rem_euclid(60) + 1) as u32
    }

    /// Converts the date into a `chrono` date (proleptic Gregorian).
    ///
    /// Returns `None` outside chrono's supported range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.jdn - CHRONO_CE_OFFSET)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::from_jdn(date.num_days_from_ce() + CHRONO_CE_OFFSET)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses `YYYY-MM-DD`; a leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::ParseDate(s.to_owned());
        let (sign, rest) = match s.trim().strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.trim()),
        };
        let mut it = rest.split('-');
        let mut next = || -> Result<i32, Error> {
            it.next()
                .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(err)?
                .parse()
                .map_err(|_| err())
        };
        let (y, m, d) = (next()?, next()?, next()?);
        if it.next().is_some() {
            return Err(err());
        }
        Date::from_gregorian(sign * y, m, d)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in the Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`), `0` for other months.
    pub fn days_in_month(&self, month: i32) -> i32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 28 + self.is_leap() as i32,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn reform_boundary() {
        assert_eq!(2299161, solar_to_julian_day(15, 10, 1582));
        assert_eq!(2299160, solar_to_julian_day(4, 10, 1582));
        assert_eq!((15, 10, 1582), julian_day_to_solar(2299161));
        assert_eq!((4, 10, 1582), julian_day_to_solar(2299160));
        // 1500 is leap in the Julian calendar only
        let feb29 = solar_to_julian_day(29, 2, 1500);
        assert_eq!(feb29 + 1, solar_to_julian_day(1, 3, 1500));
        assert_eq!((29, 2, 1500), julian_day_to_solar(feb29));
    }

    #[test]
    fn permissive_inputs() {
        assert_eq!(
            solar_to_julian_day(2, 3, 2023),
            solar_to_julian_day(30, 2, 2023)
        );
        assert_eq!(
            solar_to_julian_day(1, 1, 2024),
            solar_to_julian_day(1, 13, 2023)
        );
    }

    #[test]
    fn invalid_dates() {
        for (y, m, d) in [
            (2023, 2, 29),
            (2023, 13, 1),
            (2023, 0, 1),
            (2023, 4, 31),
            (2023, 1, 0),
            (1582, 10, 10),
            (9_999_999, 1, 1),
            (-9_999_999, 1, 1),
            (i32::MAX, 12, 31),
        ] {
            assert_eq!(
                Err(Error::InvalidDate {
                    year: y,
                    month: m,
                    day: d
                }),
                Date::from_gregorian(y, m, d)
            );
        }
        assert!(Date::from_gregorian(2024, 2, 29).is_ok());
        assert!(Date::from_gregorian(1500, 2, 29).is_ok());
    }

    #[test]
    fn year_range_limits() {
        for year in [*YEAR_RANGE.start(), *YEAR_RANGE.end()] {
            for (m, d) in [(1, 1), (12, 31)] {
                let date = Date::from_gregorian(year, m, d).unwrap();
                assert_eq!((year, m, d), date.gregorian(), "{year}-{m}-{d}");
            }
        }
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn to_sexagenary() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(18, date.sexagenary());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(56, date.sexagenary());
    }

    #[test]
    fn parse() {
        assert_eq!(
            Ok(Date::from_jdn(2460351)),
            "2024-02-10".parse::<Date>()
        );
        for s in ["2024/02/10", "2024-02", "2024-02-10-1", "2024-+2-10", ""] {
            assert_eq!(Err(Error::ParseDate(s.into())), s.parse::<Date>(), "{s:?}");
        }
        assert!(matches!(
            "2023-02-29".parse::<Date>(),
            Err(Error::InvalidDate { .. })
        ));
        assert_eq!(
            Err(Error::InvalidDate {
                year: 9_999_999,
                month: 1,
                day: 1
            }),
            "9999999-01-01".parse::<Date>()
        );
        assert!(matches!(
            "-9999999-01-01".parse::<Date>(),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let date = Date::from(naive);
        assert_eq!((2024, 2, 10), date.gregorian());
        assert_eq!(Some(naive), date.to_naive());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
        assert_eq!("2021-09-08", Date::from_jdn(2459466).to_string());
    }

    #[test]
    fn month_lengths() {
        use YearType::*;
        assert_eq!(29, Leap.days_in_month(2));
        assert_eq!(28, Common.days_in_month(2));
        assert_eq!(30, Common.days_in_month(11));
        assert_eq!(0, Common.days_in_month(13));
    }
}
