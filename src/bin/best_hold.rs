//! Best-hold advisor binary.
//!
//! Usage:
//!   cargo run --release --bin best_hold -- [CARDS...] [OPTIONS]
//!
//! With five card tokens (e.g. `HA D10 CQ SK S2`) the given hand is analyzed;
//! with none, a random hand is dealt.
//!
//! Options:
//!   --seed <N>           Seed for the random deal
//!   --config <FILE>      Search configuration JSON file
//!   --threads <N>        Number of worker threads (default: all cores)
//!   --sequential         Run single-threaded
//!   --precision <N>      Decimal digits in expected scores (default: 2)
//!   --odds               Show outcome odds for the recommended hold
//!   --output <FILE>      Also write the report as JSON
//!   -v, --verbose        Debug logging

use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use draw_poker_ev::cards::{build_deck, Hand};
use draw_poker_ev::report::AnalysisReport;
use draw_poker_ev::search::{outcome_counts, Analyzer, SearchConfig, NUM_HOLDS};

#[derive(Parser, Debug)]
#[command(name = "best_hold", about = "Exact expected-value hold advisor for five-card draw")]
struct Args {
    /// Five cards: suit letter (H/D/C/S) then rank (A, 2-10, J, Q, K)
    cards: Vec<String>,

    /// Seed for the random deal when no cards are given
    #[arg(long)]
    seed: Option<u64>,

    /// Search configuration JSON file
    #[arg(long, short)]
    config: Option<String>,

    /// Number of worker threads
    #[arg(long, short)]
    threads: Option<usize>,

    /// Run single-threaded
    #[arg(long)]
    sequential: bool,

    /// Decimal digits in expected scores
    #[arg(long)]
    precision: Option<u32>,

    /// Show outcome odds for the recommended hold
    #[arg(long)]
    odds: bool,

    /// Write the report as JSON to this file
    #[arg(long, short)]
    output: Option<String>,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    if args.sequential {
        config = config.with_parallel(false);
    }
    if let Some(precision) = args.precision {
        config = config.with_precision(precision);
    }
    config.validate()?;

    let deck = build_deck();
    let hand = if args.cards.is_empty() {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Hand::random(&deck, &mut rng)?
    } else {
        Hand::parse(&args.cards, &deck)?
    };
    log::info!("analyzing {}", hand);

    let bar = ProgressBar::new(NUM_HOLDS as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:32}] {pos}/{len} holds {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let analysis = Analyzer::new(config.clone())
        .with_progress(|_| bar.inc(1))
        .run(&deck, &hand)?;
    bar.finish_and_clear();

    let mut report = AnalysisReport::from_analysis(&analysis, &config);
    if args.odds {
        let counts = outcome_counts(&deck, &hand, &analysis.best.best.held)?;
        report = report.with_outcomes(&counts);
    }
    report.print_summary();

    if let Some(path) = &args.output {
        report.save_json(path)?;
        log::info!("saved report to {}", path);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("failed to initialize logger: {}", e);
    }
}

fn print_usage() {
    eprintln!("Usage: best_hold [card1 card2 card3 card4 card5]");
    eprintln!("Example: best_hold HA D10 CQ SK S2");
    eprintln!("Card format: [H|D|C|S][A|2-10|J|Q|K]");
    eprintln!("H=♥ D=♦ C=♣ S=♠");
}
