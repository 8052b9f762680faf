//! The track-set scorer: aggregation plus log-linear combination.

use std::fmt;

use serde::Serialize;

use super::features;
use super::observer::{NoOpObserver, ScoreObserver};
use super::variance::{FilterStateVariance, MotionVariance, MotionVarianceStrategy};
use super::weights::ScoringWeights;
use crate::trackset::TrackSet;

/// The six raw (unweighted) feature aggregates of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Track-length aggregate (Slen)
    pub track_length: f64,
    /// Motion-smoothness aggregate (Smot)
    pub motion_smoothness: f64,
    /// Geometric-deviation aggregate (Sms1)
    pub geometric_deviation: f64,
    /// Behind-model aggregate (Sms2)
    pub behind_model: f64,
    /// Inside-model aggregate (Sms3)
    pub inside_model: f64,
    /// Filter-confidence aggregate (Salb)
    pub filter_confidence: f64,
}

/// Result of evaluating one candidate track set.
///
/// Ranking across candidates should compare [`logscore`](Self::logscore):
/// it is monotone in [`score`](Self::score) and does not overflow when large
/// sets push the aggregates up. The exponentiated `score` is retained for
/// reporting and legacy diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Log-domain combined score; `-inf` for an empty set
    pub logscore: f64,
    /// `exp(logscore)`; 0 for an empty set
    pub score: f64,
    /// Raw feature aggregates
    pub breakdown: ScoreBreakdown,
}

impl ScoreReport {
    /// Serialize to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Scores candidate track sets against the current measurements.
///
/// A pure, read-only evaluator: it never mutates a track set and carries no
/// per-call state, so one scorer can serve many threads evaluating
/// independent candidates.
pub struct TrackSetScorer {
    weights: ScoringWeights,
    variance_strategy: Box<dyn MotionVarianceStrategy + Send + Sync>,
}

impl TrackSetScorer {
    /// Create a scorer using the stored-motion-state variance source.
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_strategy(weights, Box::new(FilterStateVariance))
    }

    /// Create a scorer with an explicit motion-variance strategy.
    pub fn with_strategy(
        weights: ScoringWeights,
        variance_strategy: Box<dyn MotionVarianceStrategy + Send + Sync>,
    ) -> Self {
        Self {
            weights,
            variance_strategy,
        }
    }

    /// The configured weights.
    #[inline]
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Evaluate a candidate.
    ///
    /// An empty set short-circuits to `score = 0`, `logscore = -inf` with a
    /// zeroed breakdown, before any aggregator runs.
    pub fn evaluate(&self, set: &TrackSet) -> ScoreReport {
        self.evaluate_with(set, &mut NoOpObserver)
    }

    /// Evaluate a candidate, feeding intermediate values to an observer.
    ///
    /// Observation is a side channel: the returned report is identical to
    /// what [`evaluate`](Self::evaluate) produces. The observer is not
    /// called for an empty set.
    pub fn evaluate_with(
        &self,
        set: &TrackSet,
        observer: &mut dyn ScoreObserver,
    ) -> ScoreReport {
        if set.is_empty() {
            return ScoreReport {
                logscore: f64::NEG_INFINITY,
                score: 0.0,
                breakdown: ScoreBreakdown::default(),
            };
        }

        let variances = features::per_track_variances(set, self.variance_strategy.as_ref());
        observer.on_track_variances(&variances);

        let motion_smoothness =
            variances.iter().map(MotionVariance::total).sum::<f64>() / set.len() as f64;

        let breakdown = ScoreBreakdown {
            track_length: features::track_length_score(set),
            motion_smoothness,
            geometric_deviation: features::geometric_deviation_score(set),
            behind_model: features::behind_model_score(set),
            inside_model: features::inside_model_score(set),
            filter_confidence: features::filter_confidence_score(set),
        };
        observer.on_features(&breakdown);

        let logscore = self.combine(&breakdown);
        let score = logscore.exp();
        observer.on_score(logscore, score);

        ScoreReport {
            logscore,
            score,
            breakdown,
        }
    }

    /// Log-domain score of a candidate. `-inf` for an empty set.
    pub fn logscore(&self, set: &TrackSet) -> f64 {
        self.evaluate(set).logscore
    }

    /// Exponentiated score of a candidate. 0 for an empty set.
    pub fn score(&self, set: &TrackSet) -> f64 {
        self.evaluate(set).score
    }

    fn combine(&self, b: &ScoreBreakdown) -> f64 {
        let w = &self.weights;
        w.track_length * b.track_length - w.motion_smoothness * b.motion_smoothness
            - w.geometric_deviation * b.geometric_deviation
            - w.behind_model * b.behind_model
            - w.inside_model * b.inside_model
            + w.filter_confidence * b.filter_confidence
    }
}

impl Default for TrackSetScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl fmt::Debug for TrackSetScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackSetScorer")
            .field("weights", &self.weights)
            .field("variance_strategy", &self.variance_strategy.name())
            .finish()
    }
}
