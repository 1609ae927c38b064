mod error;
mod supervisor;

pub use error::TrialError;
pub use supervisor::{Supervisor, TrialRecord, TrialSummary};

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::info;

use crate::generate::{Generate, UniformPoints};
use crate::geometry::{Point, PointSet};
use crate::rng::rng64;
use crate::solver::{BruteForce, DivideAndConquer, InvalidInputError, Solver};
use crate::trial_config::SeededTrialConfig;

/// Runs the configured number of trials. Every trial draws a fresh point set, solves it
/// with both solvers and hands the outcome to the supervisor.
pub fn run_trials<W: Write>(
    config: &SeededTrialConfig,
    supervisor: &mut Supervisor<W>,
    progress: bool,
) -> Result<TrialSummary, TrialError> {
    config.validate()?;
    info!(
        seed = config.seed,
        trials = config.trials,
        points = config.points,
        "starting trials"
    );

    let bar = if progress {
        let bar = ProgressBar::new(config.trials as u64);
        bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} trials"));
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut rng = rng64(u128::from(config.seed));
    for trial in 0..config.trials {
        let set = UniformPoints::new(config.points, config.range, &mut rng).generate();
        supervisor.record(run_trial(trial, &set)?)?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    supervisor.flush()?;

    let summary = supervisor.summary();
    info!("{}", summary);
    Ok(summary)
}

/// Solves one point set with both solvers and compares the results exactly.
pub fn run_trial(trial: usize, points: &PointSet) -> Result<TrialRecord, InvalidInputError> {
    let (brute_force, brute_force_time) = timed(&BruteForce, points)?;
    let (divide_and_conquer, divide_and_conquer_time) = timed(&DivideAndConquer, points)?;

    Ok(TrialRecord {
        trial,
        points: points.len(),
        brute_force,
        divide_and_conquer,
        matched: brute_force == divide_and_conquer,
        brute_force_micros: brute_force_time.as_micros() as u64,
        divide_and_conquer_micros: divide_and_conquer_time.as_micros() as u64,
    })
}

fn timed(solver: &dyn Solver, points: &[Point]) -> Result<(f64, Duration), InvalidInputError> {
    let start = Instant::now();
    let distance = solver.closest_pair(points)?;
    Ok((distance, start.elapsed()))
}
