//! Criterion benchmarks for track-set scoring.
//!
//! Run with: cargo bench
//! Run specific group: cargo bench -- evaluate

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trackset_scorer_rs::{
    select_best, BoxModelHypothesis, HypothesisState, PointCluster, Pose, ScoringWeights, Track,
    TrackSet, TrackSetScorer,
};

// =============================================================================
// Synthetic candidate generation
// =============================================================================

fn synthetic_track(rng: &mut StdRng, len: usize) -> Track {
    let mut x = rng.gen_range(-50.0..50.0);
    let mut y = rng.gen_range(-50.0..50.0);
    let mut hypotheses = Vec::with_capacity(len);
    for i in 0..len {
        x += rng.gen_range(0.0..2.0);
        y += rng.gen_range(-0.5..0.5);
        let mut h = BoxModelHypothesis::new(
            Pose::new(x, y, rng.gen_range(-3.0..3.0)),
            PointCluster::new(vec![], i as f64 * 0.1),
        )
        .with_consistency(
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..5.0),
            rng.gen_range(0.0..20.0),
        );
        if i > 0 {
            h = h.with_motion_state(HypothesisState::new(
                rng.gen_range(0.0..15.0),
                rng.gen_range(-0.5..0.5),
            ));
        }
        hypotheses.push(h);
    }
    Track::new(hypotheses).expect("synthetic timestamps are increasing")
}

fn synthetic_set(rng: &mut StdRng, num_tracks: usize, track_len: usize) -> TrackSet {
    (0..num_tracks)
        .map(|_| synthetic_track(rng, track_len))
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let scorer = TrackSetScorer::new(
        ScoringWeights::builder()
            .motion_smoothness(0.75)
            .inside_model(0.1)
            .build(),
    );

    let mut group = c.benchmark_group("evaluate");
    for (num_tracks, track_len) in [(5, 10), (20, 20), (50, 50)] {
        let mut rng = StdRng::seed_from_u64(42);
        let set = synthetic_set(&mut rng, num_tracks, track_len);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", num_tracks, track_len)),
            &set,
            |b, set| b.iter(|| scorer.evaluate(set)),
        );
    }
    group.finish();
}

fn bench_select_best(c: &mut Criterion) {
    let scorer = TrackSetScorer::new(ScoringWeights::default());
    let mut rng = StdRng::seed_from_u64(7);
    let candidates: Vec<TrackSet> = (0..100)
        .map(|_| synthetic_set(&mut rng, 10, 15))
        .collect();

    c.bench_function("select_best/100_candidates", |b| {
        b.iter(|| select_best(&scorer, &candidates))
    });
}

criterion_group!(benches, bench_evaluate, bench_select_best);
criterion_main!(benches);
