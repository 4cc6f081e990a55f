//! Colored diagnostics on stderr
//!
//! Everything here goes to stderr so stdout carries only the report lines.

use std::io::{self, Error, ErrorKind};

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use sysinfo::System;

use crate::approx::hardware::{self, RsqrtBackend};
use crate::approx::InvSqrt;
use crate::core::{BenchmarkConfig, BenchmarkReport, Mismatch};
use crate::stats::trial_timings::TrialTimings;

// ============================================================================
// SYSTEM INFORMATION
// ============================================================================

/// Host facts shown in the header
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub cpu_brand: String,
    pub logical_cpus: usize,
    pub cpu_frequency_mhz: Option<u64>,
    pub rsqrt_backend: RsqrtBackend,
}

impl SystemInfo {
    pub fn gather() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let cpus = sys.cpus();

        let cpu_brand = cpuid_brand()
            .or_else(|| cpus.first().map(|cpu| cpu.brand().trim().to_string()))
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            os: os_info::get().to_string(),
            cpu_brand,
            logical_cpus: cpus.len(),
            cpu_frequency_mhz: cpus.first().map(|cpu| cpu.frequency()).filter(|&mhz| mhz > 0),
            rsqrt_backend: hardware::backend(),
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn cpuid_brand() -> Option<String> {
    raw_cpuid::CpuId::new()
        .get_processor_brand_string()
        .map(|brand| brand.as_str().trim().to_string())
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn cpuid_brand() -> Option<String> {
    None
}

/// Estimated CPU cycles spent per calculation at the nominal frequency
pub fn cycles_per_operation(ns_per_operation: f64, cpu_frequency_mhz: Option<u64>) -> Option<f64> {
    cpu_frequency_mhz.map(|mhz| ns_per_operation * mhz as f64 / 1000.0)
}

// ============================================================================
// HEADER
// ============================================================================

pub fn print_title() {
    let separator = "=".repeat(60);
    let title = format!("Inverse Square Root Benchmark v{}", crate::VERSION);
    eprintln!("\n{}", separator);
    eprintln!("{:^60}", title.as_str().bold().cyan());
    eprintln!("{}\n", separator);
}

pub fn print_system_info(info: &SystemInfo) {
    eprintln!("{}", "System Information".bold().yellow());
    eprintln!("━━━━━━━━━━━━━━━━━━━");
    eprintln!("OS: {}", info.os);
    eprintln!("CPU: {}", info.cpu_brand);
    eprintln!("Logical CPUs: {}", info.logical_cpus);
    match info.cpu_frequency_mhz {
        Some(mhz) => eprintln!("CPU frequency: {} MHz", mhz),
        None => eprintln!("CPU frequency: unknown"),
    }
    if info.rsqrt_backend.is_hardware() {
        eprintln!("Reciprocal sqrt estimate: {}", info.rsqrt_backend.name().green());
    } else {
        eprintln!("Reciprocal sqrt estimate: {}", info.rsqrt_backend.name().yellow());
        eprintln!("⚠️ No SIMD estimate on this CPU. The hardware column is the exact value.");
    }
    eprintln!();
}

pub fn print_parameters<M: InvSqrt + ?Sized>(config: &BenchmarkConfig, buffer_len: usize, timed: &M) {
    eprintln!("{}", "Benchmark Parameters".bold().yellow());
    eprintln!("━━━━━━━━━━━━━━━━━━━━");
    eprintln!("▸ Timed method: {}", timed.name());
    eprintln!("▸ Buffer size: {}", buffer_len);
    eprintln!("▸ Iterations per trial: {}", config.iterations);
    eprintln!("▸ Trials: {} (best reported)", config.trials);
    eprintln!("▸ Calculations per trial: {}", config.operations_per_trial(buffer_len));
    eprintln!("▸ Agreement tolerance: {:.2}%", tolerance_percent(config.tolerance));
    eprintln!();
}

// ============================================================================
// PROGRESS
// ============================================================================

/// Progress bar ticked once per finished trial
pub fn trial_progress_bar(trials: u64) -> io::Result<ProgressBar> {
    let pb = ProgressBar::new(trials);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials {wide_msg}")
            .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?
            .progress_chars("##-"),
    );
    Ok(pb)
}

// ============================================================================
// SUMMARY
// ============================================================================

pub fn print_trial_summary(timings: &TrialTimings, report: &BenchmarkReport, cpu_frequency_mhz: Option<u64>) {
    let stats = match timings.statistics() {
        Some(stats) => stats,
        None => {
            eprintln!("{}", "No trials recorded".bold().red());
            return;
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Trial statistic", "Value"]);

    table.add_row(vec!["Trials".to_string(), timings.len().to_string()]);
    table.add_row(vec!["Best".to_string(), format!("{:.6} s", stats.min)]);
    table.add_row(vec!["Median".to_string(), format!("{:.6} s", stats.median)]);
    table.add_row(vec!["Mean (outliers removed)".to_string(), format!("{:.6} s", stats.mean)]);
    table.add_row(vec!["P95".to_string(), format!("{:.6} s", stats.p95)]);
    table.add_row(vec!["Worst".to_string(), format!("{:.6} s", stats.max)]);
    table.add_row(vec!["MAD".to_string(), format!("{:.6} s", stats.mad)]);
    table.add_row(vec!["Std dev".to_string(), format!("{:.6} s", stats.stdev)]);
    table.add_row(vec!["Outliers removed".to_string(), stats.outliers_removed.to_string()]);
    table.add_row(vec!["Median / best".to_string(), format!("{:.3}x", stats.jitter_ratio())]);
    table.add_row(vec!["Per calculation".to_string(), format!("{:.6} ns", report.ns_per_operation)]);
    if let Some(cycles) = cycles_per_operation(report.ns_per_operation, cpu_frequency_mhz) {
        table.add_row(vec!["Cycles per calculation (est.)".to_string(), format!("{:.2}", cycles)]);
    }
    table.add_row(vec!["RMSE vs exact".to_string(), format!("{:.6}", report.rmse)]);

    eprintln!("\n{}", "Trial Summary".bold().yellow());
    eprintln!("{table}");
}

pub fn print_mismatch_notice(mismatch: &Mismatch, tolerance: f32) {
    eprintln!(
        "{} methods differ by more than {:.2}% at index {} (input {:.6})",
        "⚠️ Cross-check:".bold().yellow(),
        tolerance_percent(tolerance),
        mismatch.index,
        mismatch.input
    );
}

pub fn print_agreement(buffer_len: usize, tolerance: f32) {
    eprintln!(
        "{} all methods agree within {:.2}% on {} inputs",
        "✓ Cross-check:".bold().green(),
        tolerance_percent(tolerance),
        buffer_len
    );
}

fn tolerance_percent(tolerance: f32) -> f64 {
    (tolerance as f64 - 1.0) * 100.0
}
