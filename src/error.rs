//! Error type for the typed entry points of this crate.
//!
//! The free conversion functions never fail; only the validating
//! constructors, parsers and the lunar-to-solar inverse report errors.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The day/month/year triple does not name a day of the calendar.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// The text could not be parsed as a `YYYY-MM-DD` date.
    #[error("cannot parse date from {0:?}, expected YYYY-MM-DD")]
    ParseDate(String),

    /// Lunar month number outside `1..=12`.
    #[error("lunar month must be in 1..=12, got {0}")]
    InvalidMonth(u32),

    /// A leap month was requested for a month that is not leap in that year.
    #[error("month {month} of lunar year {year} is not a leap month")]
    NotLeapMonth { year: i32, month: u32 },

    /// UTC offset outside `-14..=14` hours.
    #[error("time zone offset must be within ±14 hours, got {0}")]
    TimeZoneOutOfRange(i32),

    /// A configuration file could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let data = [
            (
                Error::InvalidDate {
                    year: 2023,
                    month: 2,
                    day: 30,
                },
                "invalid date 2023-02-30",
            ),
            (
                Error::ParseDate("2023/01/01".into()),
                "cannot parse date from \"2023/01/01\", expected YYYY-MM-DD",
            ),
            (Error::InvalidMonth(13), "lunar month must be in 1..=12, got 13"),
            (
                Error::NotLeapMonth {
                    year: 2023,
                    month: 3,
                },
                "month 3 of lunar year 2023 is not a leap month",
            ),
            (
                Error::TimeZoneOutOfRange(15),
                "time zone offset must be within ±14 hours, got 15",
            ),
        ];
        for (err, std) in data {
            assert_eq!(std, err.to_string());
        }
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Error>();
    }
}
