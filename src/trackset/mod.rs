//! Track-set data model.
//!
//! A [`TrackSet`] is one candidate global partition of segmented detections
//! into object tracks, the unit the scorer evaluates and a hypothesis
//! generator enumerates. Everything here is owned by value: a set owns its
//! tracks, a track owns its hypotheses, and no hypothesis can be shared
//! between two tracks.
//!
//! Tracks are validated at construction ([`Track::new`] returns a
//! [`TrackError`] for empty or non-monotonic input), so downstream code never
//! has to re-check the invariants on the hot scoring path.

mod cluster;
mod errors;
mod hypothesis;
mod pose;
mod set;
mod track;

pub use cluster::PointCluster;
pub use errors::TrackError;
pub use hypothesis::{BoxModelHypothesis, HypothesisState};
pub use pose::{normalize_angle, Pose};
pub use set::TrackSet;
pub use track::{Track, TrackBuilder};
