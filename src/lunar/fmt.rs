//! Vietnamese names for lunar calendar values.

/// Numerals used in month and day names, `1..=10`; item 0 is unused.
const NUM_VIETNAMESE: &[&str] = &[
    "", "Một", "Hai", "Ba", "Bốn", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười",
];

/// Renders a sexagenary number (`1..=60`) as its can chi name.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Giáp Tý", fmt::sexagenary(1));
/// assert_eq!("Ất Tỵ", fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static STEMS: &[&str] = &[
        "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm",
    ];
    static BRANCHES: &[&str] = &[
        "Hợi", "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất",
    ];
    format!("{} {}", STEMS[(num % 10) as usize], BRANCHES[(num % 12) as usize])
}

/// Returns the month name. Month 1 is "Tháng Giêng", month 12 "Tháng Chạp";
/// leap months end with "nhuận".
///
/// # Example
///
/// ```
/// use amlich::lunar::{fmt, Month::*};
///
/// assert_eq!("Tháng Giêng", fmt::month(Common(1)));
/// assert_eq!("Tháng Hai nhuận", fmt::month(Leap(2)));
/// assert_eq!("Tháng Mười Một", fmt::month(Common(11)));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: super::Month) -> String {
    let num = m.num();
    let mut rt = String::from("Tháng ");
    rt += match num {
        1 => "Giêng",
        2..=3 | 5..=10 => NUM_VIETNAMESE[num as usize],
        4 => "Tư",
        11 => "Mười Một",
        12 => "Chạp",
        _ => panic!("month {} not in 1..=12", num),
    };
    if m.is_leap() {
        rt += " nhuận";
    }
    rt
}

/// Returns the day name: "Mùng Một" to "Mùng Mười" for the first ten days,
/// "Rằm" for the full-moon day 15, the plain number otherwise.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Mùng Năm", fmt::day(5));
/// assert_eq!("Rằm", fmt::day(15));
/// assert_eq!("23", fmt::day(23));
/// ```
///
/// # Panics
///
/// Panics if the day is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("Mùng {}", NUM_VIETNAMESE[d as usize]),
        15 => "Rằm".to_owned(),
        11..=30 => d.to_string(),
        _ => panic!("day {} not in 1..=30", d),
    }
}

/// Solar term (tiết khí) name; `0..=23` runs from Xuân phân (vernal
/// equinox) in steps of 15°.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Đông chí", fmt::solar_term(18));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Xuân phân", "Thanh minh", "Cốc vũ", "Lập hạ", "Tiểu mãn", "Mang chủng", "Hạ chí",
        "Tiểu thử", "Đại thử", "Lập thu", "Xử thử", "Bạch lộ", "Thu phân", "Hàn lộ",
        "Sương giáng", "Lập đông", "Tiểu tuyết", "Đại tuyết", "Đông chí", "Tiểu hàn", "Đại hàn",
        "Lập xuân", "Vũ thủy", "Kinh trập",
    ];
    NAMES[(term % 24) as usize]
}

/// Full can chi name of a lunar year, e.g. "Giáp Thìn" for 2024.
pub fn year(year: i32) -> String {
    sexagenary(super::sexagenary_for_year(year))
}
