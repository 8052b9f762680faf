//! Feature aggregators over a track set.
//!
//! Each aggregator reduces a whole [`TrackSet`] to one scalar. All of them
//! return 0 for an empty set; none divides by a zero track count.

use smallvec::SmallVec;

use super::variance::{MotionVariance, MotionVarianceStrategy};
use crate::trackset::{Track, TrackSet};

/// Track-length aggregate (Slen): total hypothesis count normalized by the
/// square root of the track count.
///
/// Rewards explanations that account for more measurements while damping the
/// reward for splitting the same evidence into many short tracks.
pub fn track_length_score(set: &TrackSet) -> f64 {
    let sum = set.total_hypotheses();
    if sum > 0 {
        sum as f64 / (set.len() as f64).sqrt()
    } else {
        0.0
    }
}

/// Inside-model aggregate (Sms3): sum of `c3` over every hypothesis.
pub fn inside_model_score(set: &TrackSet) -> f64 {
    set.iter()
        .flat_map(Track::iter)
        .map(|h| h.c3)
        .sum()
}

/// Behind-model aggregate (Sms2): sum of `c2` over every hypothesis.
pub fn behind_model_score(set: &TrackSet) -> f64 {
    set.iter()
        .flat_map(Track::iter)
        .map(|h| h.c2)
        .sum()
}

/// Geometric-deviation aggregate (Sms1): sum of `dn` over every hypothesis.
pub fn geometric_deviation_score(set: &TrackSet) -> f64 {
    set.iter()
        .flat_map(Track::iter)
        .map(|h| h.dn)
        .sum()
}

/// Per-track speed/yaw-rate variances under the given strategy.
///
/// Transient scratch for [`motion_smoothness_score`]; also exposed so
/// diagnostics can show which track dominates the smoothness penalty.
pub fn per_track_variances(
    set: &TrackSet,
    strategy: &dyn MotionVarianceStrategy,
) -> SmallVec<[MotionVariance; 8]> {
    set.iter().map(|t| strategy.track_variance(t)).collect()
}

/// Motion-smoothness aggregate (Smot): mean over tracks of the combined
/// speed and yaw-rate variance.
pub fn motion_smoothness_score(set: &TrackSet, strategy: &dyn MotionVarianceStrategy) -> f64 {
    if set.is_empty() {
        return 0.0;
    }
    let variances = per_track_variances(set, strategy);
    variances.iter().map(MotionVariance::total).sum::<f64>() / set.len() as f64
}

/// Filter-confidence aggregate (Salb): sum of each track's first-hypothesis
/// mode confidence, for tracks where a filter produced one.
///
/// Only the first hypothesis is consulted; tracks whose first hypothesis has
/// no filter attached contribute nothing.
pub fn filter_confidence_score(set: &TrackSet) -> f64 {
    set.iter()
        .filter_map(|t| t.first().motion_state.mode_confidence)
        .sum()
}
