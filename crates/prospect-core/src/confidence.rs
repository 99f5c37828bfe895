use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Confidence score clamped to [0.0, 1.0].
/// Represents how strongly the evidence so far supports a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Neutral prior for a freshly generated hypothesis.
    pub const NEUTRAL: f64 = 0.5;

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN collapses to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Cap at `ceiling` (itself clamped to [0.0, 1.0]).
    pub fn capped(self, ceiling: f64) -> Self {
        Self::new(self.0.min(ceiling))
    }

    /// Normalized binary entropy in [0.0, 1.0].
    ///
    /// Peaks at 0.5 (maximum uncertainty) and reaches 0.0 at either extreme.
    pub fn entropy(self) -> f64 {
        let p = self.0;
        if p <= 0.0 || p >= 1.0 {
            return 0.0;
        }
        -(p * p.log2() + (1.0 - p) * (1.0 - p).log2())
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add<f64> for Confidence {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for Confidence {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}
