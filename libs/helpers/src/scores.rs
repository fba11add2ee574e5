use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, LogNormal};

use tophits::base::Score;

/// Lower bound of the "good" tier: the report block only holds scores
/// above it, the rest of the list only scores below it
pub const REPORT_THRESHOLD: Score = 100.;

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Generates shuffled scores in three tiers
///
/// * `alignment_limit` really good scores, in `[1000, 2000)`
/// * `report_limit - alignment_limit` good scores, in `[100, 200)`
/// * the remaining bad scores, in `[10, 20)`
pub fn tiered_scores(
    samples: usize,
    report_limit: usize,
    alignment_limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<Score> {
    assert!(
        alignment_limit <= report_limit && report_limit <= samples,
        "Expected A <= H <= n, got A={}, H={}, n={}",
        alignment_limit,
        report_limit,
        samples
    );

    let mut scores = Vec::with_capacity(samples);
    for ix in 0..samples {
        let (low, width) = if ix < alignment_limit {
            (1000., 1000.)
        } else if ix < report_limit {
            (REPORT_THRESHOLD, 100.)
        } else {
            (10., 10.)
        };
        scores.push(low + width * rng.gen::<Score>());
    }

    scores.shuffle(rng);
    scores
}

/// Generates log-normal scores (with many close values)
pub fn lognormal_scores(samples: usize, rng: &mut dyn RngCore) -> Vec<Score> {
    let log_normal = LogNormal::new(0., 1.).unwrap();
    (0..samples).map(|_| log_normal.sample(rng)).collect()
}

/// Sorted copy of the scores, best first
pub fn sorted_desc(scores: &[Score]) -> Vec<Score> {
    let mut v = scores.to_vec();
    v.sort_by(|a, b| b.total_cmp(a));
    v
}
