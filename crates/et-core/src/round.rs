//! Decimal rounding used for every published figure.
//!
//! Each output value is rounded on its own, half away from zero, to a fixed
//! number of decimals.  Intermediate values are never rounded unless they are
//! themselves a published figure (e.g. per-mode emissions feeding the
//! percentage column).

/// Round `value` to `decimals` places, half away from zero.
///
/// Non-finite inputs are returned unchanged.  Negative zero is folded to
/// `0.0` so that formatted output never shows `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}
