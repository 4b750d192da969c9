use approx::assert_relative_eq;
use arrsac::Arrsac;
use rand::{rngs::SmallRng, SeedableRng};
use resect_core::nalgebra::Point2;
use resect_core::sample_consensus::Consensus;
use resect_core::{LandmarkWorldMatch, ObserverPose, WorldPoint};
use two_point_resection::TwoPointResection;

const EPSILON_APPROX: f64 = 1e-6;

#[test]
fn arrsac_manual() {
    let mut arrsac = Arrsac::new(0.01, SmallRng::seed_from_u64(0));

    // Ground truth observer at the origin, facing 0.6 rad right of "up".
    let truth = ObserverPose::new(Point2::origin(), 0.6);

    // Surveyed landmark map. No two of these are collinear with the
    // observer, so every sampled pair yields a model.
    let landmarks = [
        [3.0, 7.0],
        [0.0, 9.0],
        [-4.0, 6.0],
        [8.0, 2.0],
        [-5.0, 3.0],
        [6.0, -4.0],
    ]
    .map(|[x, y]| WorldPoint(Point2::new(x, y)));

    let samples: Vec<LandmarkWorldMatch> = landmarks
        .iter()
        .map(|&landmark| LandmarkWorldMatch(truth.observe(landmark), landmark))
        .collect();

    let pose = arrsac
        .model(&TwoPointResection::new(), samples.iter().copied())
        .unwrap();

    assert_relative_eq!(pose.position, truth.position, epsilon = EPSILON_APPROX);
    assert_relative_eq!(pose.heading, truth.heading, epsilon = EPSILON_APPROX);
}
