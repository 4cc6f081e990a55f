use std::hint::black_box;
use std::io::{self, Error, ErrorKind, Write};

use indicatif::ProgressBar;
use rand::Rng;

use crate::approx::{BitHack, Exact, Hardware, InvSqrt};
use crate::stats::error_metrics::{agreement_ratio, compute_rmse};
use crate::stats::trial_timings::TrialTimings;
use crate::timing::Stopwatch;
use crate::ui::console::{self, SystemInfo};
use crate::ui::report::write_report;
use crate::utils::helpers::wall_clock_rng;

pub mod buffers;
pub mod config;

pub use buffers::SampleBuffers;
pub use config::{BenchmarkConfig, BUFFER_SIZE, ITERATIONS, TOLERANCE, TRIALS};

// ============================================================================
// TRIALS
// ============================================================================

/// Buffers left by the last trial plus every trial's duration
#[derive(Debug, Clone)]
pub struct TrialRun<const N: usize> {
    pub buffers: SampleBuffers<N>,
    pub timings: TrialTimings,
}

/// Time `method` over fresh random inputs, once per configured trial.
///
/// Each trial regenerates the inputs, then overwrites the output buffer
/// `config.iterations` times. Only the overwrite passes are timed. Trials run
/// one after another on the calling thread; the progress bar ticks between
/// them.
pub fn run_trials<const N: usize, M, R>(
    config: &BenchmarkConfig,
    method: &M,
    rng: &mut R,
    progress: &ProgressBar,
) -> TrialRun<N>
where
    M: InvSqrt + ?Sized,
    R: Rng,
{
    let mut buffers = SampleBuffers::<N>::new();
    let mut timings = TrialTimings::with_capacity(config.trials);
    let stopwatch = Stopwatch::new();

    for _ in 0..config.trials {
        buffers.regenerate(rng);

        let start = stopwatch.elapsed_milliseconds();
        for _ in 0..config.iterations {
            buffers.apply(black_box(method));
            // Keeps repeated passes from being folded into one.
            black_box(&mut buffers);
        }
        let end = stopwatch.elapsed_milliseconds();

        // Millisecond delta divided by 1000, same arithmetic as the
        // historical output, so the sample is in seconds.
        timings.record((end - start) / 1000.0);
        progress.inc(1);
    }
    progress.finish_and_clear();

    TrialRun { buffers, timings }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// First input on which the three methods disagree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub input: f32,
    pub bit_hack: f32,
    pub hardware: f32,
    pub exact: f32,
}

/// Scan `inputs` in ascending order and return the first index where
/// `bit_hack` disagrees with `hardware` or with `exact` by more than the
/// `max/min` ratio `tolerance`. Stops at the first disagreement.
pub fn cross_check<A, H, E>(
    inputs: &[f32],
    bit_hack: &A,
    hardware: &H,
    exact: &E,
    tolerance: f32,
) -> Option<Mismatch>
where
    A: InvSqrt + ?Sized,
    H: InvSqrt + ?Sized,
    E: InvSqrt + ?Sized,
{
    inputs.iter().enumerate().find_map(|(index, &input)| {
        let approximate = bit_hack.inv_sqrt(input);
        let estimate = hardware.inv_sqrt(input);
        let reference = exact.inv_sqrt(input);

        let disagrees = agreement_ratio(approximate, estimate) > tolerance
            || agreement_ratio(approximate, reference) > tolerance;
        disagrees.then_some(Mismatch {
            index,
            input,
            bit_hack: approximate,
            hardware: estimate,
            exact: reference,
        })
    })
}

// ============================================================================
// REPORT
// ============================================================================

/// Figures printed on the summary line
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub total_operations: u64,
    pub best_seconds: f64,
    pub ns_per_operation: f64,
    pub rmse: f64,
}

impl BenchmarkReport {
    pub fn new(total_operations: u64, best_seconds: f64, rmse: f64) -> Self {
        let ns_per_operation = if total_operations == 0 {
            0.0
        } else {
            best_seconds * 1_000_000_000.0 / total_operations as f64
        };
        Self {
            total_operations,
            best_seconds,
            ns_per_operation,
            rmse,
        }
    }

    /// Best trial and RMSE of the last trial's outputs against `reference`
    pub fn from_run<const N: usize, E: InvSqrt + ?Sized>(
        config: &BenchmarkConfig,
        run: &TrialRun<N>,
        reference: &E,
    ) -> io::Result<Self> {
        let best = run.timings.best()
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "No trial samples recorded"))?;
        let rmse = compute_rmse(run.buffers.input(), run.buffers.output(), reference);
        Ok(Self::new(config.operations_per_trial(N), best, rmse))
    }
}

/// Everything one benchmark pass produced
#[derive(Debug, Clone)]
pub struct BenchmarkOutcome<const N: usize> {
    pub run: TrialRun<N>,
    pub report: BenchmarkReport,
    pub mismatch: Option<Mismatch>,
}

/// Run the trials on the bit-hack method, cross-check the last trial's
/// inputs and write the report lines to `out`.
pub fn execute<const N: usize, R: Rng, W: Write>(
    config: &BenchmarkConfig,
    rng: &mut R,
    out: &mut W,
    progress: &ProgressBar,
) -> io::Result<BenchmarkOutcome<N>> {
    config.validate()?;

    let run = run_trials::<N, _, _>(config, &BitHack, rng, progress);
    let report = BenchmarkReport::from_run(config, &run, &Exact)?;
    let mismatch = cross_check(run.buffers.input(), &BitHack, &Hardware, &Exact, config.tolerance);

    write_report(out, &report, mismatch.as_ref())?;

    Ok(BenchmarkOutcome { run, report, mismatch })
}

pub fn run_benchmark() -> io::Result<()> {
    let config = BenchmarkConfig::default();
    let system = SystemInfo::gather();

    console::print_title();
    console::print_system_info(&system);
    console::print_parameters(&config, BUFFER_SIZE, &BitHack);

    let progress = console::trial_progress_bar(config.trials as u64)?;
    let mut rng = wall_clock_rng();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = execute::<BUFFER_SIZE, _, _>(&config, &mut rng, &mut out, &progress)?;
    out.flush()?;

    console::print_trial_summary(&outcome.run.timings, &outcome.report, system.cpu_frequency_mhz);
    match &outcome.mismatch {
        Some(mismatch) => console::print_mismatch_notice(mismatch, config.tolerance),
        None => console::print_agreement(BUFFER_SIZE, config.tolerance),
    }

    Ok(())
}
