//! Time zone offset and converter configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Offset of local civil time from UTC, in whole hours east of Greenwich.
///
/// New moons and solar terms are computed in universal time; the offset
/// decides which local day an instant falls on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct TimeZone {
    hours: i32,
}

impl TimeZone {
    /// Indochina Time (UTC+7), used by the Vietnamese calendar.
    pub const INDOCHINA: TimeZone = TimeZone { hours: 7 };
    /// China Standard Time (UTC+8).
    pub const CHINA: TimeZone = TimeZone { hours: 8 };
    pub const UTC: TimeZone = TimeZone { hours: 0 };

    /// Creates an offset without range checks.
    pub const fn from_hours(hours: i32) -> Self {
        Self { hours }
    }
    /// Creates an offset, rejecting values outside `-14..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::TimeZone;
    ///
    /// assert_eq!(7, TimeZone::new(7).unwrap().hours());
    /// assert!(TimeZone::new(15).is_err());
    /// ```
    pub fn new(hours: i32) -> Result<Self, Error> {
        if (-14..=14).contains(&hours) {
            Ok(Self { hours })
        } else {
            Err(Error::TimeZoneOutOfRange(hours))
        }
    }
    pub fn hours(&self) -> i32 {
        self.hours
    }
    /// The offset as a fraction of a day.
    pub fn day_fraction(&self) -> f64 {
        self.hours as f64 / 24.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::INDOCHINA
    }
}

impl TryFrom<i32> for TimeZone {
    type Error = Error;
    fn try_from(hours: i32) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<TimeZone> for i32 {
    fn from(tz: TimeZone) -> i32 {
        tz.hours
    }
}

/// Converter settings, usually read from a TOML file.
///
/// ```toml
/// time_zone = 7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Offset used to place astronomical events on local days.
    #[serde(default)]
    pub time_zone: TimeZone,
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Config, TimeZone};
    ///
    /// let config = Config::from_toml_str("time_zone = 8").unwrap();
    /// assert_eq!(TimeZone::CHINA, config.time_zone);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(|e| Error::Config(e.message().to_owned()))
    }
}
