//! Score observability.
//!
//! Observers receive intermediate values during an evaluation without
//! touching the result: the scorer stays pure and a caller decides whether
//! anything is rendered, logged or captured. The default [`NoOpObserver`]
//! compiles to nothing.

use super::scorer::ScoreBreakdown;
use super::variance::MotionVariance;
use super::weights::ScoringWeights;

/// Callbacks fired during one evaluation.
///
/// All methods default to empty; implement only the events you need.
/// Observers are not called for empty sets, which short-circuit before any
/// aggregation happens.
pub trait ScoreObserver {
    /// Per-track speed/yaw-rate variances, in track order.
    fn on_track_variances(&mut self, _variances: &[MotionVariance]) {}

    /// The six raw feature aggregates.
    fn on_features(&mut self, _breakdown: &ScoreBreakdown) {}

    /// The combined result.
    fn on_score(&mut self, _logscore: f64, _score: f64) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ScoreObserver for NoOpObserver {}

/// Observer that emits the weighted breakdown through the `log` facade at
/// debug level.
///
/// Holds its own copy of the weights so the logged terms are the actual
/// contributions to the logscore, matching what the combiner adds up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    weights: ScoringWeights,
}

impl LogObserver {
    /// Create an observer that weights the logged terms with `weights`.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl ScoreObserver for LogObserver {
    fn on_features(&mut self, breakdown: &ScoreBreakdown) {
        let w = &self.weights;
        log::debug!(
            "Slen = {:.6}, Smot = {:.6}, Sms1 = {:.6}, Sms2 = {:.6}, Sms3 = {:.6}, Salb = {:.6}",
            w.track_length * breakdown.track_length,
            w.motion_smoothness * breakdown.motion_smoothness,
            w.geometric_deviation * breakdown.geometric_deviation,
            w.behind_model * breakdown.behind_model,
            w.inside_model * breakdown.inside_model,
            w.filter_confidence * breakdown.filter_confidence,
        );
    }

    fn on_score(&mut self, logscore: f64, score: f64) {
        log::debug!("logscore = {:.6}, score = {:.6e}", logscore, score);
    }
}

/// Observer that records everything it sees, for tests and offline
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CaptureObserver {
    variances: Vec<Vec<MotionVariance>>,
    features: Vec<ScoreBreakdown>,
    scores: Vec<(f64, f64)>,
}

impl CaptureObserver {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-track variances of each observed evaluation.
    pub fn variances(&self) -> &[Vec<MotionVariance>] {
        &self.variances
    }

    /// Breakdown of each observed evaluation.
    pub fn features(&self) -> &[ScoreBreakdown] {
        &self.features
    }

    /// `(logscore, score)` of each observed evaluation.
    pub fn scores(&self) -> &[(f64, f64)] {
        &self.scores
    }

    /// Number of observed evaluations.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing was observed yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoreObserver for CaptureObserver {
    fn on_track_variances(&mut self, variances: &[MotionVariance]) {
        self.variances.push(variances.to_vec());
    }

    fn on_features(&mut self, breakdown: &ScoreBreakdown) {
        self.features.push(*breakdown);
    }

    fn on_score(&mut self, logscore: f64, score: f64) {
        self.scores.push((logscore, score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoringWeights, TrackSetScorer};
    use crate::trackset::{BoxModelHypothesis, PointCluster, Pose, Track, TrackSet};

    fn two_track_set() -> TrackSet {
        let tracks: Vec<Track> = (0..2)
            .map(|_| {
                Track::new(vec![BoxModelHypothesis::new(
                    Pose::new(0.0, 0.0, 0.0),
                    PointCluster::new(vec![], 0.0),
                )])
                .unwrap()
            })
            .collect();
        TrackSet::new(tracks)
    }

    #[test]
    fn test_capture_records_each_evaluation() {
        let scorer = TrackSetScorer::default();
        let set = two_track_set();
        let mut capture = CaptureObserver::new();

        scorer.evaluate_with(&set, &mut capture);
        scorer.evaluate_with(&set, &mut capture);

        assert_eq!(capture.len(), 2);
        assert_eq!(capture.variances()[0].len(), 2);
        assert_eq!(capture.features()[0], capture.features()[1]);
    }

    #[test]
    fn test_observation_does_not_perturb_result() {
        let scorer = TrackSetScorer::default();
        let set = two_track_set();
        let mut capture = CaptureObserver::new();
        let mut logger = LogObserver::new(ScoringWeights::default());

        let plain = scorer.evaluate(&set);
        let observed = scorer.evaluate_with(&set, &mut capture);
        let logged = scorer.evaluate_with(&set, &mut logger);

        assert_eq!(plain, observed);
        assert_eq!(plain, logged);
        assert_eq!(capture.scores()[0], (plain.logscore, plain.score));
    }

    #[test]
    fn test_observer_not_called_for_empty_set() {
        let scorer = TrackSetScorer::default();
        let mut capture = CaptureObserver::new();
        scorer.evaluate_with(&TrackSet::empty(), &mut capture);
        assert!(capture.is_empty());
    }
}
