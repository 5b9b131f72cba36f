//! Angle utilities for the degree-stepped line search.

/// Number of discrete angles searched by the polar accumulator (1° step).
pub const DEG_STEPS: usize = 180;

/// Converts whole degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Precomputed sine/cosine values for every whole degree in [0°, 180°).
pub struct TrigTable {
    pub sin: [f64; DEG_STEPS],
    pub cos: [f64; DEG_STEPS],
}

impl TrigTable {
    pub fn degrees() -> Self {
        let mut sin = [0.0f64; DEG_STEPS];
        let mut cos = [0.0f64; DEG_STEPS];
        for (deg, (s, c)) in sin.iter_mut().zip(cos.iter_mut()).enumerate() {
            let rad = deg_to_rad(deg as f64);
            *s = rad.sin();
            *c = rad.cos();
        }
        Self { sin, cos }
    }
}
