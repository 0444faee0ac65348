use amlich::date::{julian_day_to_solar, solar_to_julian_day};
use amlich::{Date, LunarDate, TimeZone};
use proptest::prelude::*;

/// JDN of 0001-01-01 (Julian calendar) and 3000-12-31.
const FIRST_JDN: i32 = 1721424;
const LAST_JDN: i32 = 2817152;

#[test]
fn julian_day_round_trip_every_day() {
    for jdn in FIRST_JDN..=LAST_JDN {
        let (d, m, y) = julian_day_to_solar(jdn);
        assert_eq!(jdn, solar_to_julian_day(d, m, y), "{y}-{m}-{d}");
    }
}

#[test]
fn reform_gap() {
    let before = solar_to_julian_day(4, 10, 1582);
    let after = solar_to_julian_day(15, 10, 1582);
    assert_eq!(1, after - before);
    assert_eq!(after, 2299161);
}

proptest! {
    /// Every valid calendar date survives `solar_to_julian_day` and back.
    #[test]
    fn calendar_round_trip(y in 1i32..=3000, m in 1i32..=12, d in 1i32..=31) {
        prop_assume!(Date::from_gregorian(y, m, d).is_ok());
        prop_assert_eq!((d, m, y), julian_day_to_solar(solar_to_julian_day(d, m, y)));
    }

    /// Consecutive solar days never move backwards in the lunar calendar.
    #[test]
    fn lunar_dates_advance(days in 0i32..73000) {
        let base = Date::from_gregorian(1900, 1, 1).unwrap() + days;
        let key = |l: LunarDate| (l.year, l.month.num(), l.month.is_leap(), l.day);
        let today = LunarDate::from_date(base, TimeZone::INDOCHINA);
        let tomorrow = LunarDate::from_date(base + 1, TimeZone::INDOCHINA);
        prop_assert!(key(tomorrow) > key(today));
        if tomorrow.day != 1 {
            prop_assert_eq!(today.day + 1, tomorrow.day);
            prop_assert_eq!(today.month, tomorrow.month);
        }
    }

    /// Converting to the lunar calendar and back returns the same day.
    #[test]
    fn lunar_round_trip(days in 0i32..730000, tz in prop::sample::select(vec![0, 7, 8])) {
        let tz = TimeZone::from_hours(tz);
        let date = Date::from_gregorian(1000, 1, 1).unwrap() + days;
        let lunar = LunarDate::from_date(date, tz);
        prop_assert!((1..=30).contains(&lunar.day));
        prop_assert!((1..=12).contains(&lunar.month.num()));
        prop_assert_eq!(Ok(date), lunar.to_date(tz));
    }
}
