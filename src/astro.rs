//! Low-precision lunar and solar theory.
//!
//! New moons follow the truncated series in Jean Meeus, *Astronomical
//! Formulae for Calculators*; the sun's apparent longitude uses its mean
//! longitude plus the equation of centre. Both are adequate to place events
//! on the correct day for roughly 1800 to 2100. Outside that window the
//! results lose precision gradually.
//!
//! All instants are real-valued Julian days in universal time.

use std::f64::consts::PI;

use crate::config::TimeZone;

const DEG: f64 = PI / 180.0;

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Lunar theory, epoch 1900 January 0.5 (`k = 0`).
mod moon {
    /// Lunations per Julian century.
    pub const LUNATIONS_PER_CENTURY: f64 = 1236.85;

    /// Mean new moon: `JD = c0 + c1 k + c2 T² + c3 T³`.
    pub const MEAN_NEW_MOON: [f64; 4] = [2415020.75933, 29.53058868, 0.0001178, -0.000000155];
    /// Periodic term `0.00033 sin(166.56 + 132.87 T - 0.009173 T²)`.
    pub const MEAN_NEW_MOON_PERIODIC: [f64; 4] = [0.00033, 166.56, 132.87, -0.009173];

    /// Sun's mean anomaly, degrees: `c0 + c1 k + c2 T² + c3 T³`.
    pub const SUN_ANOMALY: [f64; 4] = [359.2242, 29.10535608, -0.0000333, -0.00000347];
    /// Moon's mean anomaly, degrees.
    pub const MOON_ANOMALY: [f64; 4] = [306.0253, 385.81691806, 0.0107306, 0.00001236];
    /// Moon's argument of latitude, degrees.
    pub const ARG_LATITUDE: [f64; 4] = [21.2964, 390.67050646, -0.0016528, -0.00000239];

    /// Sun anomaly term amplitude `a0 + a1 T`.
    pub const SUN_ANOMALY_AMPLITUDE: [f64; 2] = [0.1734, -0.000393];

    /// Remaining perturbations as `(amplitude, M, M', F)` multiples of the
    /// sun's anomaly, the moon's anomaly and the argument of latitude.
    pub const PERTURBATIONS: [(f64, f64, f64, f64); 12] = [
        (0.0021, 2.0, 0.0, 0.0),
        (-0.4068, 0.0, 1.0, 0.0),
        (0.0161, 0.0, 2.0, 0.0),
        (-0.0004, 0.0, 3.0, 0.0),
        (0.0104, 0.0, 0.0, 2.0),
        (-0.0051, 1.0, 1.0, 0.0),
        (-0.0074, 1.0, -1.0, 0.0),
        (0.0004, 1.0, 0.0, 2.0),
        (-0.0004, -1.0, 0.0, 2.0),
        (-0.0006, 0.0, 1.0, 2.0),
        (0.0010, 0.0, -1.0, 2.0),
        (0.0005, 1.0, 2.0, 0.0),
    ];

    /// Below this `T` (the 8th century) the historical delta-T fit applies.
    pub const DELTA_T_SPLIT: f64 = -11.0;
    /// Historical delta-T in days: `c0 + c1 T + c2 T² + c3 T³ + c4 T⁴`.
    pub const DELTA_T_HISTORICAL: [f64; 5] = [0.001, 0.000839, 0.0002261, -0.00000845, -0.000000081];
    /// Delta-T in days for later dates: `c0 + c1 T + c2 T²`.
    pub const DELTA_T_MODERN: [f64; 3] = [-0.000278, 0.000265, 0.000262];
}

/// Solar theory, epoch J2000.0.
mod sun {
    pub const J2000: f64 = 2451545.0;
    pub const DAYS_PER_CENTURY: f64 = 36525.0;

    /// Mean anomaly, degrees: `c0 + c1 T + c2 T² + c3 T³`.
    pub const MEAN_ANOMALY: [f64; 4] = [357.52910, 35999.05030, -0.0001559, -0.00000048];
    /// Mean longitude, degrees: `c0 + c1 T + c2 T²`.
    pub const MEAN_LONGITUDE: [f64; 3] = [280.46645, 36000.76983, 0.0003032];

    /// Equation of centre, `sin M` coefficient `c0 + c1 T + c2 T²`.
    pub const CENTRE_1: [f64; 3] = [1.914600, -0.004817, -0.000014];
    /// Equation of centre, `sin 2M` coefficient `c0 + c1 T`.
    pub const CENTRE_2: [f64; 2] = [0.019993, -0.000101];
    /// Equation of centre, `sin 3M` coefficient.
    pub const CENTRE_3: f64 = 0.000290;
}

/// Returns the instant (Julian day, UT) of the `k`-th new moon after the one
/// of 1900-01-01 (JD 2415021.077).
///
/// # Example
///
/// ```
/// use amlich::astro::new_moon;
///
/// // 1999-12-07 22:32 UT
/// assert!((new_moon(1236) - 2451520.44).abs() < 0.01);
/// ```
pub fn new_moon(k: i32) -> f64 {
    use moon::*;

    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let [p0, p1, p2, p3] = MEAN_NEW_MOON_PERIODIC;
    let mean = MEAN_NEW_MOON[0] + MEAN_NEW_MOON[1] * k + MEAN_NEW_MOON[2] * t2
        + MEAN_NEW_MOON[3] * t3
        + p0 * ((p1 + p2 * t + p3 * t2) * DEG).sin();

    let angle = |c: [f64; 4]| c[0] + c[1] * k + c[2] * t2 + c[3] * t3;
    let m = angle(SUN_ANOMALY);
    let mpr = angle(MOON_ANOMALY);
    let f = angle(ARG_LATITUDE);

    let mut correction =
        (SUN_ANOMALY_AMPLITUDE[0] + SUN_ANOMALY_AMPLITUDE[1] * t) * (m * DEG).sin();
    for (amp, cm, cmpr, cf) in PERTURBATIONS {
        correction += amp * ((cm * m + cmpr * mpr + cf * f) * DEG).sin();
    }

    mean + correction - delta_t(t)
}

/// Difference between dynamical and universal time, in days, for `t` Julian
/// centuries since 1900.
fn delta_t(t: f64) -> f64 {
    use moon::*;

    let t2 = t * t;
    let t3 = t2 * t;
    if t < DELTA_T_SPLIT {
        let [c0, c1, c2, c3, c4] = DELTA_T_HISTORICAL;
        c0 + c1 * t + c2 * t2 + c3 * t3 + c4 * t * t3
    } else {
        let [c0, c1, c2] = DELTA_T_MODERN;
        c0 + c1 * t + c2 * t2
    }
}

/// Returns the sun's apparent ecliptic longitude, in radians within
/// `[0, 2π)`, at the Julian day `jd`.
pub fn sun_longitude(jd: f64) -> f64 {
    use sun::*;

    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let m = MEAN_ANOMALY[0] + MEAN_ANOMALY[1] * t + MEAN_ANOMALY[2] * t2 + MEAN_ANOMALY[3] * t * t2;
    let l0 = MEAN_LONGITUDE[0] + MEAN_LONGITUDE[1] * t + MEAN_LONGITUDE[2] * t2;
    let centre = (CENTRE_1[0] + CENTRE_1[1] * t + CENTRE_1[2] * t2) * (m * DEG).sin()
        + (CENTRE_2[0] + CENTRE_2[1] * t) * (2.0 * m * DEG).sin()
        + CENTRE_3 * (3.0 * m * DEG).sin();
    let l = (l0 + centre) * DEG;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Sun longitude at local midnight starting day `day_number`.
fn sun_longitude_at_local_midnight(day_number: i32, tz: TimeZone) -> f64 {
    sun_longitude(day_number as f64 - 0.5 - tz.day_fraction())
}

/// Returns which 30° sector (`0..=11`) the sun occupies at the local
/// midnight that begins day `day_number`.
///
/// Sector 9 starts at the winter solstice (270°).
pub fn sun_longitude_sector(day_number: i32, tz: TimeZone) -> i32 {
    (sun_longitude_at_local_midnight(day_number, tz) / (PI / 6.0)).floor() as i32
}

/// Returns which 15° solar term (`0..=23`) the sun occupies at the local
/// midnight that begins day `day_number`. Term 0 starts at the vernal
/// equinox.
pub fn solar_term_index(day_number: i32, tz: TimeZone) -> i32 {
    (sun_longitude_at_local_midnight(day_number, tz) / (PI / 12.0)).floor() as i32
}
