//! Candidate selection over scored track sets.
//!
//! Selection compares candidates in the log domain: `logscore` is monotone
//! in `score`, and comparing it directly keeps ranking exact when large sets
//! would push `exp` past the representable range.

use super::scorer::{ScoreReport, TrackSetScorer};
use crate::trackset::TrackSet;

/// The winning candidate of a selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestCandidate {
    /// Index of the candidate in the order it was supplied
    pub index: usize,
    /// Its evaluation
    pub report: ScoreReport,
}

/// Evaluate every candidate and keep the one with the greatest `logscore`.
///
/// The first candidate wins ties. Returns `None` when `candidates` is empty;
/// note that an empty *track set* is still a scoreable candidate (at
/// `logscore = -inf`) and can win when nothing beats it.
pub fn select_best<'a, I>(scorer: &TrackSetScorer, candidates: I) -> Option<BestCandidate>
where
    I: IntoIterator<Item = &'a TrackSet>,
{
    let mut best: Option<BestCandidate> = None;
    for (index, set) in candidates.into_iter().enumerate() {
        let report = scorer.evaluate(set);
        log::trace!(
            "candidate {}: {} tracks, logscore = {:.6}",
            index,
            set.len(),
            report.logscore
        );
        let better = match &best {
            None => true,
            Some(current) => report.logscore > current.report.logscore,
        };
        if better {
            best = Some(BestCandidate { index, report });
        }
    }
    best
}

/// Parallel [`select_best`].
///
/// Candidates are independent and the scorer is read-only, so evaluations
/// run on the rayon pool with no synchronization. The result is identical to
/// the sequential version, including the first-wins tie rule.
#[cfg(feature = "rayon")]
pub fn select_best_par(scorer: &TrackSetScorer, candidates: &[TrackSet]) -> Option<BestCandidate> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .enumerate()
        .map(|(index, set)| BestCandidate {
            index,
            report: scorer.evaluate(set),
        })
        .reduce_with(|a, b| {
            if b.report.logscore > a.report.logscore
                || (b.report.logscore == a.report.logscore && b.index < a.index)
            {
                b
            } else {
                a
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringWeights;
    use crate::trackset::{BoxModelHypothesis, PointCluster, Pose, Track};

    fn set_with_hypotheses(n: usize) -> TrackSet {
        let track = Track::new(
            (0..n)
                .map(|i| {
                    BoxModelHypothesis::new(
                        Pose::new(0.0, 0.0, 0.0),
                        PointCluster::new(vec![], i as f64),
                    )
                })
                .collect(),
        )
        .unwrap();
        TrackSet::new(vec![track])
    }

    fn length_only_scorer() -> TrackSetScorer {
        TrackSetScorer::new(
            ScoringWeights::builder()
                .track_length(1.0)
                .motion_smoothness(0.0)
                .geometric_deviation(0.0)
                .behind_model(0.0)
                .build(),
        )
    }

    #[test]
    fn test_selects_longest_explanation() {
        let scorer = length_only_scorer();
        let candidates = vec![
            set_with_hypotheses(2),
            set_with_hypotheses(5),
            set_with_hypotheses(3),
        ];
        let best = select_best(&scorer, &candidates).unwrap();
        assert_eq!(best.index, 1);
        assert!((best.report.logscore - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let scorer = length_only_scorer();
        let candidates = vec![set_with_hypotheses(3), set_with_hypotheses(3)];
        let best = select_best(&scorer, &candidates).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let scorer = length_only_scorer();
        assert_eq!(select_best(&scorer, &[]), None);
    }

    #[test]
    fn test_empty_set_is_a_valid_candidate() {
        let scorer = length_only_scorer();
        let candidates = vec![TrackSet::empty()];
        let best = select_best(&scorer, &candidates).unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.report.score, 0.0);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_sequential() {
        let scorer = length_only_scorer();
        let candidates: Vec<TrackSet> = (1..20).map(set_with_hypotheses).collect();
        let sequential = select_best(&scorer, &candidates).unwrap();
        let parallel = select_best_par(&scorer, &candidates).unwrap();
        assert_eq!(sequential, parallel);
    }
}
