//! Rounding applied at response boundaries.
//!
//! Every operation rounds through these helpers rather than at call sites:
//! `f64::round` semantics, half away from zero. Amounts and shares in this
//! engine are non-negative, so that behaves as round-half-up.

/// Rounds to two decimal places (monetary amounts).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place (percentage shares).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
