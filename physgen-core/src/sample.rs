//! Sampling ranges for randomized parameter draws
//!
//! A `SampleRange` is the half-open interval `[min, max)` a draw samples
//! uniformly from. Unit entries carry an optional default range; callers can
//! override it per draw.

use crate::PhysgenError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Checks that both bounds are finite and `min < max`
    pub fn validate(&self) -> Result<(), PhysgenError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PhysgenError::InvalidRange(format!(
                "bounds must be finite, got [{}, {})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(PhysgenError::InvalidRange(format!(
                "min must be less than max, got [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when `min <= value < max`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Uniform draw from `[min, max)`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..self.max)
    }

    /// Both bounds multiplied by `factor`, for unit-system adjustments
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

impl From<(f64, f64)> for SampleRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl TryFrom<&[f64]> for SampleRange {
    type Error = PhysgenError;

    /// Accepts exactly two bounds; anything else is `InvalidRange`
    fn try_from(bounds: &[f64]) -> Result<Self, Self::Error> {
        match bounds {
            [min, max] => {
                let range = Self {
                    min: *min,
                    max: *max,
                };
                range.validate()?;
                Ok(range)
            }
            _ => Err(PhysgenError::InvalidRange(format!(
                "expected exactly two bounds, got {}",
                bounds.len()
            ))),
        }
    }
}
