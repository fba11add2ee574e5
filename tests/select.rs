use helpers::scores::{
    lognormal_scores, seeded_rng, sorted_desc, tiered_scores, REPORT_THRESHOLD,
};
use log::debug;
use ntest::timeout;
use rstest::rstest;
use tophits::{base::Score, Candidate, TopHits};

/// Initialize the logger
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fill(scores: &[Score], report_limit: usize, alignment_limit: usize) -> TopHits {
    let mut hits = TopHits::new(report_limit, alignment_limit).expect("valid limits");
    for &score in scores {
        hits.register(Candidate::new(score).display_score(score as f32))
            .expect("registration failed");
    }
    hits
}

fn ranked_scores(hits: &TopHits) -> Vec<Score> {
    hits.iter().map(|hit| hit.score).collect()
}

#[rstest]
#[case(1000, 100, 10, Some(1))]
#[case(1000, 100, 10, Some(7))]
#[case(1000, 100, 10, None)]
#[case(100, 100, 10, Some(2))]
#[case(50, 1, 0, Some(3))]
#[case(10_000, 500, 50, Some(4))]
fn test_select_threshold(
    #[case] samples: usize,
    #[case] report_limit: usize,
    #[case] alignment_limit: usize,
    #[case] seed: Option<u64>,
) {
    init_logger();
    let mut rng = seeded_rng(seed);
    let scores = tiered_scores(samples, report_limit, alignment_limit, &mut rng);

    let mut hits = fill(&scores, report_limit, alignment_limit);
    hits.select_top();

    assert_eq!(hits.len(), samples);
    for (rank, hit) in hits.iter().enumerate() {
        if rank < report_limit {
            assert!(
                f64::from(hit.display_score) >= REPORT_THRESHOLD,
                "Rank {} has score {} in the report block",
                rank,
                hit.display_score
            );
        } else {
            assert!(
                f64::from(hit.display_score) < REPORT_THRESHOLD,
                "Rank {} has score {} outside the report block",
                rank,
                hit.display_score
            );
        }
    }
}

#[rstest]
#[case(0, 10)]
#[case(5, 10)]
#[case(10, 10)]
#[case(11, 10)]
#[case(5000, 1)]
#[case(5000, 37)]
#[case(5000, 4999)]
fn test_select_partition(#[case] samples: usize, #[case] report_limit: usize) {
    init_logger();
    let mut rng = seeded_rng(Some(samples as u64));
    let scores = lognormal_scores(samples, &mut rng);

    let mut hits = fill(&scores, report_limit, 0);
    let best = hits.best_score();
    hits.select_top();

    let expected = sorted_desc(&scores);
    let observed = ranked_scores(&hits);
    let cut = report_limit.min(samples);
    debug!("Checking partition at {} of {} hits", cut, samples);

    assert_eq!(sorted_desc(&observed[..cut]), expected[..cut].to_vec());
    assert_eq!(sorted_desc(&observed[cut..]), expected[cut..].to_vec());

    // Selection only moves hits around
    assert_eq!(hits.len(), samples);
    assert_eq!(hits.sort_count(), 0);
    assert_eq!(hits.best_score().to_bits(), best.to_bits());
}

#[test]
fn test_select_with_ties() {
    // Many equal scores around the boundary
    let scores: Vec<Score> = (0..200).map(|ix| (ix % 5) as Score).collect();
    let mut hits = fill(&scores, 60, 0);
    hits.select_top();

    let observed = ranked_scores(&hits);
    let expected = sorted_desc(&scores);
    assert_eq!(sorted_desc(&observed[..60]), expected[..60].to_vec());
    assert_eq!(sorted_desc(&observed[60..]), expected[60..].to_vec());
    assert_eq!(hits.threshold(), Some(3.));
}

#[test]
fn test_select_is_repeatable() {
    let mut rng = seeded_rng(Some(11));
    let scores = lognormal_scores(2000, &mut rng);
    let mut hits = fill(&scores, 25, 5);

    hits.select_top();
    let first = sorted_desc(&ranked_scores(&hits)[..25]);
    hits.select_top();
    let second = sorted_desc(&ranked_scores(&hits)[..25]);
    assert_eq!(first, second);

    // New hits go at the end, a new selection takes them into account
    hits.register(Candidate::new(1e9)).unwrap();
    hits.select_top();
    assert!(hits.reported().iter().any(|hit| hit.score == 1e9));
    assert_eq!(hits.reported().len(), 25);
}

#[test]
#[timeout(20000)]
fn test_select_large() {
    let mut rng = seeded_rng(Some(5));
    let scores = lognormal_scores(200_000, &mut rng);
    let mut hits = fill(&scores, 100, 10);
    hits.select_top();

    let expected = sorted_desc(&scores);
    assert_eq!(hits.threshold(), Some(expected[99]));
}
