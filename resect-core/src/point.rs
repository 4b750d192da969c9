use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::Point2;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A point in absolute ("world") coordinates on the field.
///
/// Landmark positions come from a static landmark map that is surveyed ahead
/// of time, so a `WorldPoint` is trusted exactly; all uncertainty lives in
/// the [`PolarObservation`](crate::PolarObservation) that sights it.
///
/// For points or offsets in the observer's own frame, use a bare
/// `nalgebra::Vector2<f64>`; the frame distinction is carried by the type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WorldPoint(pub Point2<f64>);
