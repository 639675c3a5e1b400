//! Currency rounding helpers.
//!
//! All monetary amounts in PartsHub are plain `f64` values rounded to two
//! decimal places at every computation point. There is no currency or locale
//! handling beyond this.

/// Round a monetary amount to two decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
