//! closest-pair CLI
//!
//! Usage:
//!     closest-pair solve points.txt 'fixtures/*.txt'
//!     closest-pair generate 111.txt --points 111
//!     closest-pair trial --trials 100 --csv trials.csv

use clap::{Parser, Subcommand};
use csv::Writer;
use glob::glob;
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use closest_pair::export::{write_distance, write_points};
use closest_pair::generate::{Generate, UniformPoints};
use closest_pair::import::read_points;
use closest_pair::rng::{os_random_seed64, rng64};
use closest_pair::trial::{run_trials, Supervisor, TrialSummary};
use closest_pair::trial_config::{SeededTrialConfig, TrialConfig};
use closest_pair::{BruteForce, DivideAndConquer, Solver};

/// Smallest distance between any two points of a planar point set
#[derive(Parser)]
#[command(name = "closest-pair")]
#[command(version)]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve point files and write <name>_distance.txt next to each
    Solve {
        /// Point files or glob patterns
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Use the exhaustive pairwise scan instead of divide and conquer
        #[arg(long)]
        brute_force: bool,

        /// Also print each distance to stdout
        #[arg(long)]
        print: bool,
    },

    /// Write a file of uniformly random points
    Generate {
        /// Output file
        output: PathBuf,

        /// Number of points
        #[arg(short, long, default_value = "111")]
        points: usize,

        /// Lower coordinate bound
        #[arg(long, default_value = "0.0")]
        min: f64,

        /// Upper coordinate bound (exclusive)
        #[arg(long, default_value = "100.0")]
        max: f64,

        /// Random seed, drawn from the OS if omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Cross-check both solvers on random point sets
    Trial {
        /// YAML trial config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Points per trial
        #[arg(short, long)]
        points: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write one CSV row per trial to this file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Solve {
            patterns,
            brute_force,
            print,
        } => solve(&patterns, brute_force, print).map(|_| true),
        Commands::Generate {
            output,
            points,
            min,
            max,
            seed,
        } => generate(&output, points, (min, max), seed).map(|_| true),
        Commands::Trial {
            config,
            trials,
            points,
            seed,
            csv,
            progress,
        } => trial(config, trials, points, seed, csv, progress).map(|s| s.all_matched()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn solve(patterns: &[String], brute_force: bool, print: bool) -> Result<(), Box<dyn Error>> {
    let solver: &dyn Solver = if brute_force {
        &BruteForce
    } else {
        &DivideAndConquer
    };

    for file in expand_patterns(patterns)? {
        let points = read_points(&file)?;
        let distance = solver.closest_pair(&points)?;
        info!(file = %file.display(), solver = solver.name(), distance, "solved");
        write_distance(distance, &file)?;
        if print {
            println!("{}: {:?}", file.display(), distance);
        }
    }

    Ok(())
}

/// A pattern matching nothing is taken as a plain path so that reading it reports the
/// missing file.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let matched = glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        if matched.is_empty() {
            files.push(PathBuf::from(pattern));
        } else {
            files.extend(matched);
        }
    }

    Ok(files)
}

fn generate(
    output: &Path,
    points: usize,
    range: (f64, f64),
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let config = SeededTrialConfig {
        seed: seed.unwrap_or_else(os_random_seed64),
        trials: 1,
        points,
        range,
    };
    config.validate()?;

    let mut rng = rng64(u128::from(config.seed));
    let set = UniformPoints::new(config.points, config.range, &mut rng).generate();
    write_points(output, &set)?;

    Ok(())
}

fn trial(
    config: Option<PathBuf>,
    trials: Option<usize>,
    points: Option<usize>,
    seed: Option<u64>,
    csv: Option<PathBuf>,
    progress: bool,
) -> Result<TrialSummary, Box<dyn Error>> {
    let mut cfg = match config {
        Some(path) => TrialConfig::load(path)?.cfg(),
        None => SeededTrialConfig {
            seed: os_random_seed64(),
            ..SeededTrialConfig::default()
        },
    };
    if let Some(trials) = trials {
        cfg.trials = trials;
    }
    if let Some(points) = points {
        cfg.points = points;
    }
    if let Some(seed) = seed {
        cfg.seed = seed;
    }

    let summary = match csv {
        Some(path) => run_with(&cfg, Supervisor::new(Writer::from_path(path)?), progress)?,
        None => run_with(&cfg, Supervisor::default(), progress)?,
    };
    println!("{}", summary);

    Ok(summary)
}

fn run_with<W: Write>(
    cfg: &SeededTrialConfig,
    mut supervisor: Supervisor<W>,
    progress: bool,
) -> Result<TrialSummary, Box<dyn Error>> {
    Ok(run_trials(cfg, &mut supervisor, progress)?)
}
