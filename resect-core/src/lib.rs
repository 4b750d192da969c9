//! # Resect Core
//!
//! This library provides the common types for 2D range/bearing landmark
//! resection. A resection solver takes sightings of landmarks whose absolute
//! positions are known ahead of time and recovers where the observer stands
//! and which way it faces. The types here are shared by every crate in the
//! workspace so that solvers, consensus drivers, and consumers can work
//! together without conversions.
//!
//! The core concepts are:
//!
//! * [`WorldPoint`] - a landmark's absolute position on the field
//! * [`PolarObservation`] - a range/bearing sighting in the observer's own frame
//! * [`LandmarkWorldMatch`] - a sighting paired with the known absolute position
//! * [`ObserverPose`] - an absolute position plus heading, the solver output
//!
//! ## Frames and conventions
//!
//! Absolute ("world") coordinates are an arbitrary fixed field frame. The
//! observer frame has its origin at the observer, its `y` axis pointing in
//! whatever direction the observer currently faces ("forward"), and its `x`
//! axis to the observer's right. Bearings are measured from the forward axis
//! and increase toward the right. Note that this is *not* the math-textbook
//! convention of measuring from the `x` axis: a landmark dead ahead has
//! bearing `0`, one directly to the right has bearing `π/2`.
//!
//! ```text
//!        forward (+y)
//!           ^
//!           |   * landmark at bearing ~π/6
//!           |  /
//!           | /
//!           |/
//!           O----> right (+x)
//! ```
//!
//! Everything here is a plain `Copy` value type with no identity beyond its
//! components. Nothing retains state between solver invocations and nothing
//! performs I/O.

mod error;
mod matches;
mod observation;
mod point;
mod pose;

pub use error::*;
pub use matches::*;
pub use nalgebra;
pub use observation::*;
pub use point::*;
pub use pose::*;
pub use sample_consensus;
