//! Rounding helpers shared by the derivation steps.

/// Round to the nearest integer, halves towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// `floor(a / 2)` for signed sums.
pub(crate) fn half_floor(value: i32) -> i32 {
    value.div_euclid(2)
}

/// `floor(prof * multiplier)`, the scaled part of any proficient total.
pub(crate) fn scaled_proficiency(prof: i32, multiplier: f64) -> i32 {
    (f64::from(prof) * multiplier).floor() as i32
}
