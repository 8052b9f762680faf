//! Motion-state estimation contract.
//!
//! The scorer consumes per-step motion states; it never produces them. This
//! module defines the seam through which they arrive: a [`MotionEstimator`]
//! fills [`HypothesisState`] for every hypothesis after a track's first,
//! typically via [`crate::trackset::TrackBuilder::estimate_motion`].
//!
//! A pipeline with a mode-conditioned filter bank (e.g. an interacting
//! multiple model estimator combining constant-velocity and constant-turn
//! filters) implements the trait over its own state and reports the
//! probability mass of the most likely mode as `mode_confidence`. Pipelines
//! without one can use the built-in [`FiniteDifferenceEstimator`], which
//! leaves `mode_confidence` unset.

use crate::trackset::{BoxModelHypothesis, HypothesisState};

/// Produces the motion state for the step from `prev` to `curr`.
///
/// Implementations must populate `v` and `w`; `mode_confidence` is optional
/// and should be left `None` when no filter confidence is available.
pub trait MotionEstimator {
    /// Estimate the motion state for the step ending at `curr`.
    fn estimate(&self, prev: &BoxModelHypothesis, curr: &BoxModelHypothesis) -> HypothesisState;
}

/// Kinematics from pose and timestamp deltas alone.
///
/// Speed is the travelled planar distance over elapsed time; yaw rate is the
/// normalized heading change over elapsed time. Carries no mode confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiniteDifferenceEstimator;

impl MotionEstimator for FiniteDifferenceEstimator {
    fn estimate(&self, prev: &BoxModelHypothesis, curr: &BoxModelHypothesis) -> HypothesisState {
        step_between(prev, curr)
    }
}

/// Finite-difference kinematics between two consecutive hypotheses.
///
/// Returns the origin state when the timestamps do not advance; such a pair
/// is rejected by track validation anyway.
pub fn step_between(prev: &BoxModelHypothesis, curr: &BoxModelHypothesis) -> HypothesisState {
    let delta_t = curr.timestamp() - prev.timestamp();
    if delta_t.is_nan() || delta_t <= 0.0 {
        return HypothesisState::origin();
    }
    let v = curr.pose.distance_to(&prev.pose) / delta_t;
    let w = curr.pose.heading_delta(&prev.pose) / delta_t;
    HypothesisState::new(v, w)
}
