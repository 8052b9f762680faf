//! Candidate track set.

use super::Track;

/// One candidate global partition of the current detections into object
/// tracks.
///
/// A set may be empty ("no tracks explains the scene"); the scorer gives an
/// empty set a score of zero rather than failing. Insertion order carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    /// Create a set from tracks.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The empty candidate: no tracks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of tracks.
    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the set contains no tracks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total number of hypotheses across all tracks.
    pub fn total_hypotheses(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// All tracks.
    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over tracks.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Add a track to the set.
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }
}

impl FromIterator<Track> for TrackSet {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrackSet {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
