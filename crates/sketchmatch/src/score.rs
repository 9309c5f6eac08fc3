//! Distance → bounded similarity.
//!
//! Each metric owns a decay rate; the score is `100·exp(−rate·d)` clamped to
//! [0, 100]. The rates are empirical policy constants (see `cfg`): good
//! matches land above ~50–75, poor ones below ~20.

/// Similarity in [0, 100] for a raw distance. NaN maps to 0, `+∞` to 0.
#[inline]
pub fn similarity(distance: f64, decay: f64) -> f64 {
    if distance.is_nan() {
        return 0.0;
    }
    let s = 100.0 * (-distance * decay).exp();
    if s.is_nan() {
        0.0
    } else {
        s.clamp(0.0, 100.0)
    }
}
