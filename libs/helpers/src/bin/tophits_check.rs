//! Internal verification of the hit list: exits with status 0 when the
//! selection and ranking passes behave as expected

use std::path::PathBuf;

use clap::Parser;

use helpers::check::{load_options, run_checks};
use tophits::base::BoxResult;

#[derive(Parser, Debug)]
#[command(name = "tophits-check", about = "internal verification of the hit list")]
struct Args {
    /// Random seed (drawn at random if not given)
    #[arg(short, long, env = "TOPHITS_SEED")]
    seed: Option<u64>,

    /// Print the test set and the ranking
    #[arg(short, long)]
    verbose: bool,

    /// Number of reported hits (H)
    #[arg(short = 'H', long)]
    report_limit: Option<usize>,

    /// Number of hits keeping their alignment (A)
    #[arg(short = 'A', long)]
    alignment_limit: Option<usize>,

    /// Number of random scores
    #[arg(short = 'n', long, default_value_t = 1000)]
    samples: usize,

    /// JSON file with the hit list options
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> BoxResult<()> {
    env_logger::init();
    let args = Args::parse();
    let options = load_options(
        args.config.as_deref(),
        args.report_limit,
        args.alignment_limit,
        args.samples,
    )?;

    let seed = args.seed.unwrap_or_else(rand::random);
    if args.verbose {
        println!("{}\tSEED", seed);
    }

    run_checks(seed, args.samples, &options, args.verbose)?;

    if args.verbose {
        println!("tophits-check is OK");
    }
    Ok(())
}
