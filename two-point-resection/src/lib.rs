//! This package recovers a 2D observer pose (absolute position and heading)
//! from sightings of exactly two landmarks whose absolute positions are
//! known, a problem classically called
//! [resection](https://en.wikipedia.org/wiki/Position_resection).
//! Two landmarks are the minimal amount required for a finite number of
//! solutions, making this a minimal solver in the same sense as a P3P
//! solver in computer vision.
//!
//! Each sighting is a [`PolarObservation`](resect_core::PolarObservation)
//! with the range `d` and the bearing `α` of the landmark, where the bearing
//! is measured from the observer's forward axis, increasing to the right.
//! The solver runs a four-stage pipeline, each stage a pure function:
//!
//! 1. Each sighting is converted into an observer-frame offset
//!    `(a, b) = (d·sin α, d·cos α)`.
//! 2. The two offsets and the two absolute positions `(x_i, y_i)` are
//!    treated as input/output pairs of one linear map from the observer
//!    frame to the absolute frame, and Cramer's rule recovers the map's
//!    forward column `Vy`:
//!
//!    ```text
//!    Vy = (a1·(x2, y2) − a2·(x1, y1)) / (a1·b2 − a2·b1)
//!    ```
//!
//!    The right column `Vx` comes from the same routine with the roles of
//!    the offset components exchanged, sharing the same determinant.
//! 3. The heading is the angle between absolute "up" `(0, 1)` and `Vy`,
//!    computed as `acos(Vy.y / |Vy|)`.
//! 4. The observer position is placed by walking back from the first
//!    landmark: `position = (x1, y1) − d1·(sin(heading + α1), cos(heading + α1))`.
//!
//! When the determinant in step 2 is within tolerance of zero the two
//! offsets are linearly dependent and no unique basis exists; the solver
//! reports [`DegenerateConfiguration`] instead of dividing through and
//! emitting NaN.
//!
//! ## Known limitations
//!
//! Because step 3 uses an arccosine of a single ratio, the recovered heading
//! lies in `[0, π]` and cannot distinguish a forward axis swung left of
//! absolute "up" from one swung right by the same amount. The ambiguity is
//! part of the solver's contract and is preserved deliberately; callers that
//! need a full-range heading must disambiguate externally.
//!
//! The linear map of step 2 absorbs the translation between the frames into
//! its columns, so the recovered basis (and with it the heading) is exact
//! when the observer stands at the absolute origin and drifts as the
//! observer moves away from it.

use arrayvec::ArrayVec;
use resect_core::{
    nalgebra::{Point2, Vector2},
    sample_consensus::Estimator,
    DegenerateConfiguration, LandmarkWorldMatch, ObserverPose, WorldPoint,
};

/// Which column of the observer basis to solve for.
///
/// Both solves share the same governing determinant, so degeneracy is
/// detected identically no matter which column is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasisColumn {
    /// The absolute-frame direction of the observer's right axis (`Vx`).
    Right,
    /// The absolute-frame direction of the observer's forward axis (`Vy`).
    Forward,
}

/// Minimal two-landmark resection solver.
///
/// Stateless apart from its tolerance; safe to share and reuse across
/// cycles and threads.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TwoPointResection {
    /// Magnitudes at or below this are treated as zero when checking the
    /// governing determinant and the recovered forward axis.
    pub epsilon: f64,
}

impl TwoPointResection {
    /// Creates a solver with the default tolerance.
    ///
    /// Same as calling [`Default::default`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the degeneracy tolerance.
    ///
    /// Default is `1e-9`.
    #[must_use]
    pub fn epsilon(self, epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Recovers the observer pose from two landmark sightings.
    ///
    /// The first sighting is also the anchor used to place the observer
    /// position once the heading is known, so if the two sightings differ in
    /// quality, pass the better one first. Pure and deterministic; the only
    /// failure is [`DegenerateConfiguration`] when the two observer-frame
    /// offsets are linearly dependent. The returned heading lies in `[0, π]`
    /// (see the crate docs for the sign ambiguity).
    ///
    /// ```
    /// use resect_core::nalgebra::Point2;
    /// use resect_core::{LandmarkWorldMatch, ObserverPose, WorldPoint};
    /// use two_point_resection::TwoPointResection;
    ///
    /// let truth = ObserverPose::new(Point2::origin(), 0.0);
    /// let near = WorldPoint(Point2::new(3.0, 7.0));
    /// let far = WorldPoint(Point2::new(0.0, 9.0));
    ///
    /// let pose = TwoPointResection::new()
    ///     .resect(
    ///         LandmarkWorldMatch(truth.observe(near), near),
    ///         LandmarkWorldMatch(truth.observe(far), far),
    ///     )
    ///     .unwrap();
    ///
    /// assert!(pose.position.coords.norm() < 1e-9);
    /// assert!(pose.heading.abs() < 1e-9);
    /// ```
    pub fn resect(
        &self,
        first: LandmarkWorldMatch,
        second: LandmarkWorldMatch,
    ) -> Result<ObserverPose, DegenerateConfiguration> {
        let LandmarkWorldMatch(first_observation, first_world) = first;
        let LandmarkWorldMatch(second_observation, second_world) = second;

        let forward = self.basis_column(
            BasisColumn::Forward,
            first_observation.observer_offset(),
            first_world,
            second_observation.observer_offset(),
            second_world,
        )?;
        let heading = self.heading(forward)?;

        // Walk back from the first landmark along the sighting direction,
        // rotated into the absolute frame by the solved heading.
        let swing = heading + first_observation.bearing;
        let position = Point2::new(
            first_world.x - first_observation.range * swing.sin(),
            first_world.y - first_observation.range * swing.cos(),
        );
        Ok(ObserverPose::new(position, heading))
    }

    /// Recovers both basis columns `(right, forward)` of the observer frame
    /// expressed in absolute coordinates.
    ///
    /// Useful for diagnostics: for a well-conditioned sighting pair taken at
    /// the absolute origin the two columns come back orthonormal, and any
    /// departure from that measures how inconsistent the sightings are.
    pub fn observer_basis(
        &self,
        first: LandmarkWorldMatch,
        second: LandmarkWorldMatch,
    ) -> Result<(Vector2<f64>, Vector2<f64>), DegenerateConfiguration> {
        let LandmarkWorldMatch(first_observation, first_world) = first;
        let LandmarkWorldMatch(second_observation, second_world) = second;
        let first_local = first_observation.observer_offset();
        let second_local = second_observation.observer_offset();

        let right = self.basis_column(
            BasisColumn::Right,
            first_local,
            first_world,
            second_local,
            second_world,
        )?;
        let forward = self.basis_column(
            BasisColumn::Forward,
            first_local,
            first_world,
            second_local,
            second_world,
        )?;
        Ok((right, forward))
    }

    /// Solves one column of the 2x2 basis by Cramer's rule.
    ///
    /// With observer-frame offsets `(a_i, b_i)` and absolute positions
    /// `w_i`, the forward column is `(a1·w2 − a2·w1) / (a1·b2 − a2·b1)` and
    /// the right column is the complementary elimination over the same
    /// determinant.
    fn basis_column(
        &self,
        column: BasisColumn,
        first_local: Vector2<f64>,
        first_world: WorldPoint,
        second_local: Vector2<f64>,
        second_world: WorldPoint,
    ) -> Result<Vector2<f64>, DegenerateConfiguration> {
        let (a1, b1) = (first_local.x, first_local.y);
        let (a2, b2) = (second_local.x, second_local.y);
        let determinant = a1 * b2 - a2 * b1;
        if determinant.abs() <= self.epsilon {
            return Err(DegenerateConfiguration);
        }

        let w1 = first_world.coords;
        let w2 = second_world.coords;
        let numerator = match column {
            BasisColumn::Forward => a1 * w2 - a2 * w1,
            BasisColumn::Right => b2 * w1 - b1 * w2,
        };
        Ok(numerator / determinant)
    }

    /// The angle between absolute "up" `(0, 1)` and the forward axis.
    ///
    /// The ratio is clamped before the arccosine so floating-point noise on
    /// a unit-length axis cannot push it out of domain. A vanishing forward
    /// axis has no direction to measure; that cannot happen when the basis
    /// solve succeeded on real input, but it is checked rather than assumed.
    fn heading(&self, forward: Vector2<f64>) -> Result<f64, DegenerateConfiguration> {
        let norm = forward.norm();
        if norm <= self.epsilon {
            return Err(DegenerateConfiguration);
        }
        Ok((forward.y / norm).clamp(-1.0, 1.0).acos())
    }
}

impl Default for TwoPointResection {
    fn default() -> Self {
        Self { epsilon: 1e-9 }
    }
}

impl Estimator<LandmarkWorldMatch> for TwoPointResection {
    type Model = ObserverPose;
    type ModelIter = ArrayVec<ObserverPose, 1>;
    const MIN_SAMPLES: usize = 2;

    fn estimate<I>(&self, mut data: I) -> Self::ModelIter
    where
        I: Iterator<Item = LandmarkWorldMatch> + Clone,
    {
        let first = data
            .next()
            .expect("must provide 2 samples at minimum to TwoPointResection");
        let second = data
            .next()
            .expect("must provide 2 samples at minimum to TwoPointResection");
        self.resect(first, second).into_iter().collect()
    }
}
