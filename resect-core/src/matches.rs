use crate::{PolarObservation, WorldPoint};

/// A landmark sighting paired with the landmark's known absolute position.
///
/// The observation comes from the perception layer each cycle; the world
/// point comes from the static landmark map. Solvers consume these pairs and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LandmarkWorldMatch(pub PolarObservation, pub WorldPoint);
