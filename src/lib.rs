/*!
# Track-set probability scoring for point-cloud multi-object tracking

Given a candidate explanation of how segmented range-sensor detections link
into object tracks over time (a [`TrackSet`]), this crate computes a scalar
likelihood used to rank competing explanations and keep the best one: the
model-selection step of a tracking-by-detection pipeline.

## Features

- Validated track/track-set data model (tracks are non-empty with strictly
  increasing timestamps by construction)
- Five evidence aggregators: track length, motion smoothness, geometric
  deviation, behind-model and inside-model measurement consistency, plus
  filter mode confidence
- Log-linear combination with configurable weights
- Log-domain candidate selection (overflow-safe), optionally parallel via
  the `rayon` feature
- Pluggable motion-variance strategies and a motion-estimator seam for an
  external IMM-style filter bank

## Modules

- [`trackset`] - Data model: poses, point clusters, hypotheses, tracks, sets
- [`motion`] - Motion-state estimation contract and finite-difference helper
- [`scoring`] - Feature aggregators, weights, scorer, selection, observers

## Example

```rust
use trackset_scorer_rs::{
    BoxModelHypothesis, PointCluster, Pose, ScoringWeights, Track, TrackSet,
    TrackSetScorer,
};

// One track of three hypotheses, one second apart.
let track = Track::new(
    (0..3)
        .map(|i| {
            BoxModelHypothesis::new(
                Pose::new(i as f64, 0.0, 0.0),
                PointCluster::new(vec![], i as f64),
            )
        })
        .collect(),
)
.unwrap();

let candidate = TrackSet::new(vec![track]);
let scorer = TrackSetScorer::new(ScoringWeights::default());
let report = scorer.evaluate(&candidate);

assert!(report.logscore.is_finite());
assert!(report.score > 0.0);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Track-set data model
///
/// Defines the immutable per-time-step hypothesis record and the validated
/// track/track-set containers the scorer evaluates.
pub mod trackset;

/// Motion-state estimation contract
///
/// The seam through which an external filter bank (e.g. an IMM estimator)
/// supplies per-step speed, yaw rate and mode confidence.
pub mod motion;

/// Track-set scoring
///
/// Feature aggregators, the log-linear combiner, candidate selection and
/// score observability.
pub mod scoring;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Data model
pub use trackset::{
    BoxModelHypothesis, HypothesisState, PointCluster, Pose, Track, TrackBuilder, TrackError,
    TrackSet,
};

// Motion contract
pub use motion::{FiniteDifferenceEstimator, MotionEstimator};

// Scoring
pub use scoring::{
    BestCandidate, CaptureObserver, FilterStateVariance, FiniteDifferenceVariance, LogObserver,
    MotionVariance, MotionVarianceStrategy, NoOpObserver, ScoreBreakdown, ScoreObserver,
    ScoreReport, ScoringWeights, TrackSetScorer,
};

pub use scoring::select_best;
#[cfg(feature = "rayon")]
pub use scoring::select_best_par;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
