//! Per-time-step box-model hypothesis.

use super::{PointCluster, Pose};

/// Per-step motion estimate attached to a hypothesis.
///
/// For the first hypothesis of a track there is no step to measure; it keeps
/// the [`origin`](HypothesisState::origin) state. For every later hypothesis
/// the values are supplied by a motion estimator before the track is scored
/// (see [`crate::motion::MotionEstimator`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HypothesisState {
    /// Instantaneous linear speed (m/s)
    pub v: f64,
    /// Instantaneous yaw rate (rad/s)
    pub w: f64,
    /// Confidence of the most likely motion mode, if a filter bank produced
    /// this state. `None` means no filter was attached.
    pub mode_confidence: Option<f64>,
}

impl HypothesisState {
    /// State of a track's first hypothesis: no step, no filter.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Create a state without filter confidence.
    pub fn new(v: f64, w: f64) -> Self {
        Self {
            v,
            w,
            mode_confidence: None,
        }
    }

    /// Create a state carrying a filter's mode confidence.
    pub fn with_confidence(v: f64, w: f64, mode_confidence: f64) -> Self {
        Self {
            v,
            w,
            mode_confidence: Some(mode_confidence),
        }
    }

    /// Whether a motion filter produced this state.
    #[inline]
    pub fn filter_present(&self) -> bool {
        self.mode_confidence.is_some()
    }
}

/// Immutable per-time-step record: a box model fitted to one segmented
/// cluster, its measurement-consistency metrics, and a motion estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxModelHypothesis {
    /// Fitted box pose
    pub pose: Pose,
    /// The cluster the box was fitted to, with its scan timestamp
    pub cluster: PointCluster,
    /// Geometric deviation of the fitted box from the cluster. Larger is worse.
    pub dn: f64,
    /// Measure of non-maximal returns consistent with lying behind the box
    /// (plausible occlusion). Larger is worse.
    pub c2: f64,
    /// Measure of returns falling inside the box. Larger is better.
    pub c3: f64,
    /// Motion estimate for the step ending at this hypothesis
    pub motion_state: HypothesisState,
}

impl BoxModelHypothesis {
    /// Create a hypothesis with zeroed consistency metrics and the origin
    /// motion state.
    pub fn new(pose: Pose, cluster: PointCluster) -> Self {
        Self {
            pose,
            cluster,
            dn: 0.0,
            c2: 0.0,
            c3: 0.0,
            motion_state: HypothesisState::origin(),
        }
    }

    /// Set the geometric/measurement-consistency metrics.
    pub fn with_consistency(mut self, dn: f64, c2: f64, c3: f64) -> Self {
        self.dn = dn;
        self.c2 = c2;
        self.c3 = c3;
        self
    }

    /// Set the motion state.
    pub fn with_motion_state(mut self, state: HypothesisState) -> Self {
        self.motion_state = state;
        self
    }

    /// Timestamp of the scan this hypothesis was fitted to.
    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.cluster.timestamp()
    }
}
