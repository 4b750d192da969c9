use nalgebra::Vector2;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A single range/bearing sighting of a landmark, in the observer's frame.
///
/// The bearing is in radians, measured from the observer's forward axis and
/// increasing toward the observer's right. This is not the standard math
/// convention (angle from the horizontal axis); swapping the roles of sine
/// and cosine when converting breaks the geometry, which is why the
/// conversion lives here as [`PolarObservation::observer_offset`] rather
/// than being left to callers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolarObservation {
    /// Distance from the observer to the landmark. Non-negative.
    pub range: f64,
    /// Angle from the observer's forward axis, in radians, increasing to the right.
    pub bearing: f64,
}

impl PolarObservation {
    /// Creates an observation from a range and a bearing in radians.
    pub fn new(range: f64, bearing: f64) -> Self {
        Self { range, bearing }
    }

    /// Converts the sighting into a cartesian offset in the observer's frame,
    /// where `+y` is forward and `+x` is to the observer's right.
    ///
    /// Defined for every finite range and bearing.
    ///
    /// ```
    /// use resect_core::PolarObservation;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // A landmark at bearing π/2 is directly to the observer's right.
    /// let offset = PolarObservation::new(2.0, FRAC_PI_2).observer_offset();
    /// assert!((offset.x - 2.0).abs() < 1e-12);
    /// assert!(offset.y.abs() < 1e-12);
    /// ```
    pub fn observer_offset(self) -> Vector2<f64> {
        Vector2::new(self.range * self.bearing.sin(), self.range * self.bearing.cos())
    }
}
