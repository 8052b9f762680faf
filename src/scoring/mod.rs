//! Track-set scoring.
//!
//! The scoring pipeline reduces a [`crate::trackset::TrackSet`] to five
//! evidence aggregates (track length, motion smoothness, geometric
//! deviation, behind-model and inside-model measurement consistency, filter
//! confidence) and combines them log-linearly under configurable weights:
//!
//! ```text
//! logscore = l_len * Slen - l_mot * Smot - l_dev * Sms1
//!          - l_behind * Sms2 - l_inside * Sms3 + l_conf * Salb
//! score    = exp(logscore)
//! ```
//!
//! Selection across candidates compares `logscore` directly; the
//! exponentiated `score` is kept for reporting and can overflow for large
//! sets, which the log-domain comparison sidesteps.

pub mod features;
pub mod observer;
pub mod scorer;
pub mod selection;
pub mod variance;
pub mod weights;

pub use features::{
    behind_model_score, filter_confidence_score, geometric_deviation_score, inside_model_score,
    motion_smoothness_score, per_track_variances, track_length_score,
};
pub use observer::{CaptureObserver, LogObserver, NoOpObserver, ScoreObserver};
pub use scorer::{ScoreBreakdown, ScoreReport, TrackSetScorer};
#[cfg(feature = "rayon")]
pub use selection::select_best_par;
pub use selection::{select_best, BestCandidate};
pub use variance::{
    FilterStateVariance, FiniteDifferenceVariance, MotionVariance, MotionVarianceStrategy,
};
pub use weights::{ScoringWeights, ScoringWeightsBuilder};

// ============================================================================
// Default weights
// ============================================================================

/// Default weight on the track-length aggregate.
pub const DEFAULT_TRACK_LENGTH_WEIGHT: f64 = 0.8;

/// Default weight on the motion-smoothness penalty.
pub const DEFAULT_MOTION_SMOOTHNESS_WEIGHT: f64 = 0.0;

/// Default weight on the geometric-deviation penalty.
pub const DEFAULT_GEOMETRIC_DEVIATION_WEIGHT: f64 = 1.0;

/// Default weight on the behind-model penalty.
pub const DEFAULT_BEHIND_MODEL_WEIGHT: f64 = 1.0;

/// Default weight on the inside-model term.
pub const DEFAULT_INSIDE_MODEL_WEIGHT: f64 = 0.0;

/// Default weight on the filter-confidence term.
pub const DEFAULT_FILTER_CONFIDENCE_WEIGHT: f64 = 0.0;

/// Variance assigned to both speed and yaw rate for tracks too short to
/// estimate a variance (fewer than two motion samples). Keeps short tracks
/// from looking perfectly smooth and keeps the per-track average defined.
pub const NEUTRAL_MOTION_VARIANCE: f64 = 1.0;
