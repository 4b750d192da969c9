use crate::{LandmarkWorldMatch, PolarObservation, WorldPoint};
use nalgebra::{Point2, Vector2};
use sample_consensus::Model;
use std::f64::consts::{PI, TAU};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The absolute position and heading of the observer on the field.
///
/// The heading is in radians and measures how far the observer's forward
/// axis is swung away from the absolute "up" direction `(0, 1)`, toward
/// `+x`. A heading of `0` means the observer faces straight up the field.
///
/// Besides being the solver output, a pose can run the observation model in
/// the forward direction: [`ObserverPose::observe`] predicts the range and
/// bearing at which a landmark would be sighted from this pose. That is used
/// for residuals during consensus and for synthesizing ground-truth
/// sightings in tests.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObserverPose {
    /// Absolute position of the observer.
    pub position: Point2<f64>,
    /// Heading in radians; `0` faces absolute `+y`, increasing toward `+x`.
    pub heading: f64,
}

impl ObserverPose {
    /// Creates a pose from an absolute position and a heading in radians.
    pub fn new(position: Point2<f64>, heading: f64) -> Self {
        Self { position, heading }
    }

    /// The absolute-frame direction the observer is facing.
    pub fn forward_axis(self) -> Vector2<f64> {
        Vector2::new(self.heading.sin(), self.heading.cos())
    }

    /// The absolute-frame direction of the observer's right-hand side.
    ///
    /// Together with [`ObserverPose::forward_axis`] this forms the
    /// orthonormal basis of the observer frame.
    pub fn right_axis(self) -> Vector2<f64> {
        Vector2::new(self.heading.cos(), -self.heading.sin())
    }

    /// Predicts the sighting of a landmark from this pose.
    ///
    /// The returned bearing is wrapped into `(-π, π]`. The inverse
    /// operation, recovering the pose from sightings, is what resection
    /// solvers do.
    pub fn observe(self, landmark: WorldPoint) -> PolarObservation {
        let delta = *landmark - self.position;
        // Absolute swing of the landmark direction away from (0, 1), toward +x.
        let swing = delta.x.atan2(delta.y);
        PolarObservation::new(delta.norm(), wrap_angle(swing - self.heading))
    }
}

impl Model<LandmarkWorldMatch> for ObserverPose {
    fn residual(&self, data: &LandmarkWorldMatch) -> f64 {
        let &LandmarkWorldMatch(observation, landmark) = data;
        let predicted = self.observe(landmark);
        (predicted.observer_offset() - observation.observer_offset()).norm()
    }
}

/// Wraps an angle in radians into `(-π, π]`.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn observing_from_origin_facing_up_reads_off_the_landmark() {
        let pose = ObserverPose::new(Point2::origin(), 0.0);
        let observation = pose.observe(WorldPoint(Point2::new(3.0, 7.0)));
        assert_relative_eq!(observation.observer_offset(), Vector2::new(3.0, 7.0), epsilon = 1e-12);
    }

    #[test]
    fn bearing_wraps_behind_the_observer() {
        let pose = ObserverPose::new(Point2::origin(), 0.0);
        let observation = pose.observe(WorldPoint(Point2::new(0.0, -4.0)));
        assert_relative_eq!(observation.range, 4.0, epsilon = 1e-12);
        assert_relative_eq!(observation.bearing, PI, epsilon = 1e-12);
    }

    #[test]
    fn heading_rotates_the_observer_frame() {
        let pose = ObserverPose::new(Point2::new(2.0, -1.0), 0.5);
        let landmark = WorldPoint(Point2::new(-3.0, 4.0));
        let observation = pose.observe(landmark);
        // Rebuild the absolute offset from the observer basis.
        let rebuilt = observation.observer_offset().x * pose.right_axis()
            + observation.observer_offset().y * pose.forward_axis();
        assert_relative_eq!(rebuilt, *landmark - pose.position, epsilon = 1e-12);
    }

    #[test]
    fn residual_is_zero_for_a_consistent_sighting() {
        let pose = ObserverPose::new(Point2::new(1.0, 2.0), 1.2);
        let landmark = WorldPoint(Point2::new(5.0, 5.0));
        let matched = LandmarkWorldMatch(pose.observe(landmark), landmark);
        assert!(pose.residual(&matched) < 1e-12);

        let shifted = ObserverPose::new(Point2::new(1.5, 2.0), 1.2);
        assert!(shifted.residual(&matched) > 0.1);
    }
}
