use thiserror::Error;

/// The sighting pair admits no unique solution.
///
/// Raised when the observer-frame offsets of the two sighted landmarks are
/// linearly dependent (parallel, anti-parallel, or one of them zero), which
/// makes the determinant of the governing 2x2 system vanish. A solver must
/// report this explicitly instead of letting the division produce NaN or
/// infinity: a silently corrupted pose is worse than a dropped cycle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("degenerate landmark configuration: observer-frame offsets are linearly dependent")]
pub struct DegenerateConfiguration;
