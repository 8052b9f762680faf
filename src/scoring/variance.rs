//! Per-track motion-variance strategies.
//!
//! The smoothness penalty needs the variance of speed and yaw rate over a
//! track's motion samples. Two sources for those samples exist: the motion
//! states stored on the hypotheses (filled by whatever estimator the
//! pipeline attached), or finite differences recomputed from poses and
//! timestamps on the fly. The stored-state source is the default; the
//! finite-difference one serves pipelines that score before any estimator
//! has run.

use smallvec::SmallVec;

use crate::motion::step_between;
use crate::trackset::{BoxModelHypothesis, Track};

/// Speed and yaw-rate variance of one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVariance {
    /// Variance of linear speed
    pub v: f64,
    /// Variance of yaw rate
    pub w: f64,
}

impl MotionVariance {
    /// The neutral variance assigned to tracks with fewer than two motion
    /// samples.
    pub const NEUTRAL: MotionVariance = MotionVariance {
        v: super::NEUTRAL_MOTION_VARIANCE,
        w: super::NEUTRAL_MOTION_VARIANCE,
    };

    /// Combined speed and yaw-rate variance.
    #[inline]
    pub fn total(&self) -> f64 {
        self.v + self.w
    }
}

/// Source of per-track speed/yaw-rate variance.
///
/// Implementations must be pure: the track is borrowed immutably and the
/// same track must always yield the same variance.
pub trait MotionVarianceStrategy {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Variance of `v` and `w` over the track's motion samples, or
    /// [`MotionVariance::NEUTRAL`] when fewer than two samples exist.
    fn track_variance(&self, track: &Track) -> MotionVariance;
}

/// Variance of the motion states stored on the hypotheses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterStateVariance;

impl MotionVarianceStrategy for FilterStateVariance {
    fn name(&self) -> &'static str {
        "filter-state"
    }

    fn track_variance(&self, track: &Track) -> MotionVariance {
        steps_variance(track, |_prev, curr| {
            (curr.motion_state.v, curr.motion_state.w)
        })
    }
}

/// Variance of finite-difference kinematics recomputed from poses and
/// timestamps. Ignores any stored motion state and never writes one back.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiniteDifferenceVariance;

impl MotionVarianceStrategy for FiniteDifferenceVariance {
    fn name(&self) -> &'static str {
        "finite-difference"
    }

    fn track_variance(&self, track: &Track) -> MotionVariance {
        steps_variance(track, |prev, curr| {
            let state = step_between(prev, curr);
            (state.v, state.w)
        })
    }
}

/// Population variance of per-step samples over indices `1..len`, with the
/// sample count as divisor. Tracks with fewer than two motion samples get
/// the neutral variance.
fn steps_variance(
    track: &Track,
    step: impl Fn(&BoxModelHypothesis, &BoxModelHypothesis) -> (f64, f64),
) -> MotionVariance {
    if track.motion_samples() <= 1 {
        return MotionVariance::NEUTRAL;
    }

    let samples: SmallVec<[(f64, f64); 16]> = track
        .hypotheses()
        .windows(2)
        .map(|pair| step(&pair[0], &pair[1]))
        .collect();
    let n = samples.len() as f64;

    let mut mean_v = 0.0;
    let mut mean_w = 0.0;
    for &(v, w) in &samples {
        mean_v += v;
        mean_w += w;
    }
    mean_v /= n;
    mean_w /= n;

    let mut var_v = 0.0;
    let mut var_w = 0.0;
    for &(v, w) in &samples {
        var_v += (v - mean_v) * (v - mean_v);
        var_w += (w - mean_w) * (w - mean_w);
    }

    MotionVariance {
        v: var_v / n,
        w: var_w / n,
    }
}
