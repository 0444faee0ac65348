//! Conversions checked against published Vietnamese calendars.

use amlich::lunar::{self, LunarCycle, Month::*};
use amlich::{Date, LunarDate, TimeZone};

const VN: TimeZone = TimeZone::INDOCHINA;

fn lunar_of(y: i32, m: i32, d: i32, tz: TimeZone) -> LunarDate {
    lunar::solar_to_lunar(d, m, y, tz)
}

#[test]
fn tet_2024() {
    let lunar = lunar_of(2024, 2, 10, VN);
    assert_eq!(1, lunar.day);
    assert_eq!(Common(1), lunar.month);
    assert_eq!(2024, lunar.year);
    assert!(!lunar.is_leap_month());
}

#[test]
fn leap_second_month_2023() {
    let start = Date::from_gregorian(2023, 1, 22).unwrap();
    let end = Date::from_gregorian(2024, 2, 10).unwrap();

    let mut months = Vec::new();
    for offset in 0..(end - start) {
        let lunar = LunarDate::from_date(start + offset, VN);
        assert_eq!(2023, lunar.year);
        if months.last() != Some(&lunar.month) {
            months.push(lunar.month);
        }
    }

    assert_eq!(13, months.len());
    let seconds: Vec<_> = months.iter().copied().filter(|m| m.num() == 2).collect();
    assert_eq!(vec![Common(2), Leap(2)], seconds);
    assert_eq!(1, months.iter().filter(|m| m.is_leap()).count());
}

#[test]
fn time_zone_shifts_day() {
    // new moon of 2023-01-21 around 20:55 UT
    let vn = lunar_of(2023, 1, 22, VN);
    let utc = lunar_of(2023, 1, 22, TimeZone::UTC);
    assert_eq!((Common(1), 2023), (vn.month, vn.year));
    assert_eq!((vn.month, vn.year), (utc.month, utc.year));
    assert_eq!(vn.day + 1, utc.day);

    // one day earlier the month rolls over under UTC only
    let vn = lunar_of(2023, 1, 21, VN);
    let utc = lunar_of(2023, 1, 21, TimeZone::UTC);
    assert_eq!((30, Common(12), 2022), (vn.day, vn.month, vn.year));
    assert_eq!((1, Common(1), 2023), (utc.day, utc.month, utc.year));
}

#[test]
fn tet_1985_differs_from_china() {
    let vn = lunar_of(1985, 1, 21, VN);
    assert_eq!((1, Common(1), 1985), (vn.day, vn.month, vn.year));
    let cn = lunar_of(1985, 1, 21, TimeZone::CHINA);
    assert_eq!((1, Common(12), 1984), (cn.day, cn.month, cn.year));
    let cn = lunar_of(1985, 2, 20, TimeZone::CHINA);
    assert_eq!((1, Common(1), 1985), (cn.day, cn.month, cn.year));
}

#[test]
fn leap_months_by_year() {
    for (year, leap) in [
        (2017, Some(6)),
        (2020, Some(4)),
        (2023, Some(2)),
        (2024, None),
        (2025, Some(6)),
        (2028, Some(5)),
    ] {
        assert_eq!(leap, LunarCycle::new(year, VN).leap_month(), "{year}");
    }
}

#[test]
fn cycle_agrees_with_conversion() {
    for year in [1985, 2017, 2023, 2033, 2034] {
        let cycle = LunarCycle::new(year, VN);
        let start = cycle.months[0].date;
        let end = cycle.months[cycle.months.len() - 1].date;
        for offset in 0..(end - start) {
            let date = start + offset;
            assert_eq!(
                Ok(LunarDate::from_date(date, VN)),
                cycle.ymd_for(date),
                "{date}"
            );
        }
    }
}

#[test]
fn monotonic_days() {
    let key = |l: LunarDate| (l.year, l.month.num(), l.month.is_leap(), l.day);
    let start = Date::from_gregorian(1900, 1, 1).unwrap();
    let end = Date::from_gregorian(2100, 1, 1).unwrap();
    let mut prev = key(LunarDate::from_date(start, VN));
    for offset in 1..(end - start) {
        let next = key(LunarDate::from_date(start + offset, VN));
        assert!(next > prev, "{} : {:?} -> {:?}", start + offset, prev, next);
        prev = next;
    }
}
