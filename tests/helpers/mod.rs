//! Shared fixture builders for the integration tests.
//!
//! Centralizes track construction so individual tests only state what is
//! special about their scenario.

use trackset_scorer_rs::{
    BoxModelHypothesis, HypothesisState, PointCluster, Pose, Track, TrackSet,
};

/// A hypothesis with an empty cluster at `t`, zeroed metrics, origin state.
pub fn hypothesis_at(t: f64) -> BoxModelHypothesis {
    BoxModelHypothesis::new(Pose::new(0.0, 0.0, 0.0), PointCluster::new(vec![], t))
}

/// A track of `n` hypotheses one second apart, zeroed metrics.
pub fn track_of_len(n: usize) -> Track {
    Track::new((0..n).map(|i| hypothesis_at(i as f64)).collect()).unwrap()
}

/// A track whose stored motion states are given per step; the first
/// hypothesis keeps the origin state, one hypothesis is added per entry.
pub fn track_with_motion(steps: &[(f64, f64)]) -> Track {
    let mut hypotheses = vec![hypothesis_at(0.0)];
    for (i, &(v, w)) in steps.iter().enumerate() {
        hypotheses
            .push(hypothesis_at((i + 1) as f64).with_motion_state(HypothesisState::new(v, w)));
    }
    Track::new(hypotheses).unwrap()
}

/// A single-track set around one hypothesis carrying the given metrics.
pub fn single_hypothesis_set(dn: f64, c2: f64, c3: f64) -> TrackSet {
    let track = Track::new(vec![hypothesis_at(0.0).with_consistency(dn, c2, c3)]).unwrap();
    TrackSet::new(vec![track])
}
