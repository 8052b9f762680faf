//! Error types for track construction.
//!
//! Malformed input is rejected when a track is built, so the scorer never
//! sees a track that violates its invariants.

use std::fmt;

/// Errors that can occur when constructing a [`super::Track`].
#[derive(Debug, Clone, PartialEq)]
pub enum TrackError {
    /// A track must contain at least one hypothesis.
    EmptyTrack,

    /// Hypothesis timestamps must be strictly increasing.
    NonMonotonicTimestamps {
        /// Index of the offending hypothesis
        index: usize,
        /// Timestamp of the previous hypothesis
        previous: f64,
        /// Timestamp at `index`
        current: f64,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::EmptyTrack => write!(f, "track has no hypotheses"),
            TrackError::NonMonotonicTimestamps {
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "timestamps not strictly increasing at hypothesis {}: {} -> {}",
                    index, previous, current
                )
            }
        }
    }
}

impl std::error::Error for TrackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(TrackError::EmptyTrack.to_string().contains("no hypotheses"));

        let err = TrackError::NonMonotonicTimestamps {
            index: 3,
            previous: 2.5,
            current: 2.5,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains("2.5"));
    }
}
