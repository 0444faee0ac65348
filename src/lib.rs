//! Conversion between Gregorian dates and the Vietnamese lunisolar calendar
//! (âm lịch).
//!
//! New moons and solar longitudes are computed from a short astronomical
//! series rather than read from tables, so any year can be converted, with
//! full accuracy roughly between 1800 and 2100.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use amlich::{Date, LunarDate, TimeZone};
//! use amlich::lunar::{fmt, Month::*};
//!
//! let date = Date::from_gregorian(2024, 2, 10).unwrap();
//! let lunar = LunarDate::from_date(date, TimeZone::INDOCHINA);
//!
//! assert_eq!((1, Common(1), 2024), (lunar.day, lunar.month, lunar.year));
//! assert_eq!("Giáp Thìn", fmt::year(lunar.year));
//! ```
//!
//! The plain functions [`date::solar_to_julian_day`],
//! [`date::julian_day_to_solar`] and [`lunar::solar_to_lunar`] take and
//! return bare integers and never fail.

pub mod astro;
pub mod config;
pub mod date;
pub mod error;
pub mod lunar;

pub use config::{Config, TimeZone};
pub use date::{Date, YearType};
pub use error::Error;
pub use lunar::{LunarCycle, LunarDate, Month};
