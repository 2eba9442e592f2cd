// Float helpers that stay available without `std`.

pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// Rounds to the nearest integer, with halves rounding towards positive infinity.
///
/// `-2.5` rounds to `-2`, not `-3`. NaN maps to `0`; out-of-range values saturate.
pub(crate) fn round_half_up(x: f64) -> i64 {
    let y = x + 0.5;
    let t = y as i64;
    if (t as f64) > y { t - 1 } else { t }
}
