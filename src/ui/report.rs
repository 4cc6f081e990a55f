//! Report lines written to stdout
//!
//! The format is fixed so earlier runs stay comparable:
//!
//! ```text
//! 33554432 calculations in 0.031250s, 0.931323ns per calculation, RMSE: 0.000112
//! 17	0.010000	9.982522	9.997559	10.000000
//! ```
//!
//! The second line appears only when the cross-check finds a disagreement.

use std::fmt;
use std::io::{self, Write};

use crate::core::{BenchmarkReport, Mismatch};

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} calculations in {:.6}s, {:.6}ns per calculation, RMSE: {:.6}",
            self.total_operations, self.best_seconds, self.ns_per_operation, self.rmse
        )
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            self.index, self.input, self.bit_hack, self.hardware, self.exact
        )
    }
}

/// Write the summary line and, if present, the mismatch line
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &BenchmarkReport,
    mismatch: Option<&Mismatch>,
) -> io::Result<()> {
    writeln!(writer, "{}", report)?;
    if let Some(mismatch) = mismatch {
        writeln!(writer, "{}", mismatch)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_format() {
        let report = BenchmarkReport::new(33_554_432, 0.03125, 0.000112);
        assert_eq!(
            report.to_string(),
            "33554432 calculations in 0.031250s, 0.931323ns per calculation, RMSE: 0.000112"
        );
    }

    #[test]
    fn mismatch_line_is_tab_separated() {
        let mismatch = Mismatch {
            index: 17,
            input: 0.01,
            bit_hack: 9.982522,
            hardware: 9.997559,
            exact: 10.0,
        };
        assert_eq!(mismatch.to_string(), "17\t0.010000\t9.982522\t9.997559\t10.000000");
    }

    #[test]
    fn writes_one_line_without_mismatch() {
        let report = BenchmarkReport::new(4, 1.0, 0.5);
        let mut out = Vec::new();
        write_report(&mut out, &report, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn writes_two_lines_with_mismatch() {
        let report = BenchmarkReport::new(4, 1.0, 0.5);
        let mismatch = Mismatch { index: 2, input: 0.0001, bit_hack: 1.0, hardware: 2.0, exact: 3.0 };
        let mut out = Vec::new();
        write_report(&mut out, &report, Some(&mismatch)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("2\t0.000100\t"));
    }
}
