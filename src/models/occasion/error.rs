use thiserror::Error;

use super::OccasionType;

/// Failures produced by the occasion engine.
///
/// `InvalidDateFormat` is isolated to a single occasion source and never
/// escapes a dashboard or search call. The other variants describe a broken
/// query anchor, or an unidentifiable toggle, and abort the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OccasionError {
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("invalid reference date: {0:?}")]
    InvalidReferenceDate(String),

    #[error("invalid range: {start:?} .. {end:?}")]
    InvalidRange { start: String, end: String },

    #[error("{0} needs the spouse or child name it belongs to")]
    MissingRelatedPerson(OccasionType),
}
