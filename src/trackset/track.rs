//! Validated object track.

use super::{BoxModelHypothesis, TrackError};
use crate::motion::MotionEstimator;

/// A time-ordered sequence of hypotheses belonging to one physical object.
///
/// Tracks are validated at construction: they are never empty and their
/// timestamps are strictly increasing. Both invariants hold for the lifetime
/// of the value, so consumers can index freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    hypotheses: Vec<BoxModelHypothesis>,
}

impl Track {
    /// Create a track from an ordered hypothesis sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EmptyTrack`] for an empty sequence and
    /// [`TrackError::NonMonotonicTimestamps`] when a timestamp does not
    /// strictly increase over its predecessor.
    pub fn new(hypotheses: Vec<BoxModelHypothesis>) -> Result<Self, TrackError> {
        if hypotheses.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        for (i, pair) in hypotheses.windows(2).enumerate() {
            let previous = pair[0].timestamp();
            let current = pair[1].timestamp();
            // NaN timestamps cannot order and are rejected as well.
            if current <= previous || current.is_nan() || previous.is_nan() {
                return Err(TrackError::NonMonotonicTimestamps {
                    index: i + 1,
                    previous,
                    current,
                });
            }
        }
        Ok(Self { hypotheses })
    }

    /// Create a builder for incremental construction.
    pub fn builder() -> TrackBuilder {
        TrackBuilder::new()
    }

    /// Number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Always `false`: a track cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of motion samples, i.e. steps between consecutive hypotheses.
    #[inline]
    pub fn motion_samples(&self) -> usize {
        self.hypotheses.len() - 1
    }

    /// The track's first (origin) hypothesis.
    #[inline]
    pub fn first(&self) -> &BoxModelHypothesis {
        &self.hypotheses[0]
    }

    /// The track's most recent hypothesis.
    #[inline]
    pub fn last(&self) -> &BoxModelHypothesis {
        &self.hypotheses[self.hypotheses.len() - 1]
    }

    /// Hypothesis at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&BoxModelHypothesis> {
        self.hypotheses.get(index)
    }

    /// All hypotheses in time order.
    #[inline]
    pub fn hypotheses(&self) -> &[BoxModelHypothesis] {
        &self.hypotheses
    }

    /// Iterate over hypotheses in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxModelHypothesis> {
        self.hypotheses.iter()
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a BoxModelHypothesis;
    type IntoIter = std::slice::Iter<'a, BoxModelHypothesis>;

    fn into_iter(self) -> Self::IntoIter {
        self.hypotheses.iter()
    }
}

/// Incremental [`Track`] construction.
///
/// A hypothesis generator appends hypotheses as detections are associated,
/// applies a motion estimator, and finishes with [`build`](Self::build),
/// which runs the track validation.
///
/// # Example
///
/// ```rust
/// use trackset_scorer_rs::{
///     BoxModelHypothesis, FiniteDifferenceEstimator, PointCluster, Pose, Track,
/// };
///
/// let track = Track::builder()
///     .push(BoxModelHypothesis::new(
///         Pose::new(0.0, 0.0, 0.0),
///         PointCluster::new(vec![], 0.0),
///     ))
///     .push(BoxModelHypothesis::new(
///         Pose::new(1.0, 0.0, 0.0),
///         PointCluster::new(vec![], 1.0),
///     ))
///     .estimate_motion(&FiniteDifferenceEstimator)
///     .build()
///     .unwrap();
///
/// assert_eq!(track.motion_samples(), 1);
/// assert!((track.hypotheses()[1].motion_state.v - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Default)]
pub struct TrackBuilder {
    hypotheses: Vec<BoxModelHypothesis>,
}

impl TrackBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hypothesis.
    pub fn push(mut self, hypothesis: BoxModelHypothesis) -> Self {
        self.hypotheses.push(hypothesis);
        self
    }

    /// Fill the motion state of every hypothesis after the first using the
    /// given estimator. The first hypothesis keeps its origin state.
    pub fn estimate_motion(mut self, estimator: &dyn MotionEstimator) -> Self {
        for i in 1..self.hypotheses.len() {
            let (before, rest) = self.hypotheses.split_at_mut(i);
            let prev = &before[i - 1];
            let curr = &mut rest[0];
            curr.motion_state = estimator.estimate(prev, curr);
        }
        self
    }

    /// Validate and build the track.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Track::new`].
    pub fn build(self) -> Result<Track, TrackError> {
        Track::new(self.hypotheses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackset::{PointCluster, Pose};

    fn hypothesis_at(t: f64) -> BoxModelHypothesis {
        BoxModelHypothesis::new(Pose::new(0.0, 0.0, 0.0), PointCluster::new(vec![], t))
    }

    #[test]
    fn test_empty_track_rejected() {
        assert_eq!(Track::new(vec![]), Err(TrackError::EmptyTrack));
    }

    #[test]
    fn test_single_hypothesis_track_is_valid() {
        let track = Track::new(vec![hypothesis_at(0.0)]).unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.motion_samples(), 0);
    }

    #[test]
    fn test_non_monotonic_timestamps_rejected() {
        let err = Track::new(vec![hypothesis_at(0.0), hypothesis_at(1.0), hypothesis_at(1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            TrackError::NonMonotonicTimestamps {
                index: 2,
                previous: 1.0,
                current: 1.0,
            }
        );
    }

    #[test]
    fn test_ordering_accessors() {
        let track = Track::new(vec![hypothesis_at(0.0), hypothesis_at(0.5), hypothesis_at(1.0)])
            .unwrap();
        assert_eq!(track.first().timestamp(), 0.0);
        assert_eq!(track.last().timestamp(), 1.0);
        assert_eq!(track.get(1).map(|h| h.timestamp()), Some(0.5));
        assert_eq!(track.get(3), None);
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let direct = Track::new(vec![hypothesis_at(0.0), hypothesis_at(1.0)]).unwrap();
        let built = Track::builder()
            .push(hypothesis_at(0.0))
            .push(hypothesis_at(1.0))
            .build()
            .unwrap();
        assert_eq!(direct, built);
    }
}
