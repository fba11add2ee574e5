//! Self checks of the hit list on three-tier random scores

use std::{fs::File, path::Path};

use log::info;

use tophits::{base::BoxResult, Candidate, TopHits, TopHitsOptions};

use crate::scores::{seeded_rng, tiered_scores, REPORT_THRESHOLD};

/// Reads the options (default ones if no file is given), overridden by
/// explicit limits
///
/// Fails unless `A <= H <= samples`.
pub fn load_options(
    config: Option<&Path>,
    report_limit: Option<usize>,
    alignment_limit: Option<usize>,
    samples: usize,
) -> BoxResult<TopHitsOptions> {
    let mut options = match config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => TopHitsOptions::default(),
    };
    if let Some(h) = report_limit {
        options.report_limit = h;
    }
    if let Some(a) = alignment_limit {
        options.alignment_limit = a;
    }

    if options.alignment_limit > options.report_limit || options.report_limit > samples {
        return Err(format!(
            "Expected A <= H <= n, got A={}, H={}, n={}",
            options.alignment_limit, options.report_limit, samples
        )
        .into());
    }
    Ok(options)
}

fn fill(scores: &[f64], options: &TopHitsOptions) -> BoxResult<TopHits> {
    let mut hits = TopHits::with_options(options)?;
    for &score in scores {
        hits.register(Candidate::new(score).display_score(score as f32))?;
    }
    Ok(hits)
}

/// The first H ranks hold every score above the threshold, and only those
pub fn check_select_top(scores: &[f64], options: &TopHitsOptions) -> BoxResult<()> {
    let mut hits = fill(scores, options)?;
    hits.select_top();

    for (rank, hit) in hits.iter().enumerate() {
        let reported = rank < hits.report_limit();
        if (f64::from(hit.display_score) >= REPORT_THRESHOLD) != reported {
            return Err(format!("select_top() fails test at rank {}", rank).into());
        }
    }
    Ok(())
}

/// The first H ranks are above the threshold and ordered
pub fn check_rank_all(scores: &[f64], options: &TopHitsOptions, verbose: bool) -> BoxResult<()> {
    let mut hits = fill(scores, options)?;
    let sorts = hits.sort_count();
    hits.rank_all();

    if verbose {
        for hit in hits.iter() {
            println!("{:8.2}  rank_all()", hit.display_score);
        }
        println!("{}\tNumber of sorts", hits.sort_count());
        println!("{:8.2}\tBest", hits.best_score());
    }

    if hits.sort_count() != sorts + 1 {
        return Err("rank_all() did not count its sort".into());
    }
    for rank in 0..hits.report_limit().saturating_sub(1) {
        let score = hits.get(rank)?.display_score;
        let next = hits.get(rank + 1)?.display_score;
        if f64::from(score) < REPORT_THRESHOLD || score < next {
            return Err(format!("rank_all() fails test at rank {}", rank).into());
        }
    }
    Ok(())
}

/// Generates the scores for this seed and runs both checks
pub fn run_checks(
    seed: u64,
    samples: usize,
    options: &TopHitsOptions,
    verbose: bool,
) -> BoxResult<()> {
    info!("Checking with {:?} and seed {}", options, seed);

    let mut rng = seeded_rng(Some(seed));
    let scores = tiered_scores(
        samples,
        options.report_limit,
        options.alignment_limit,
        &mut rng,
    );
    if verbose {
        for score in scores.iter() {
            println!("{:8.2}\tTest set", score);
        }
    }

    check_select_top(&scores, options)?;
    check_rank_all(&scores, options, verbose)
}
