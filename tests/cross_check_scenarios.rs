use invsqrt_benchmark::approx::{BitHack, Exact, Hardware, InvSqrt};
use invsqrt_benchmark::core::{cross_check, Mismatch};
use invsqrt_benchmark::ui::report::write_report;
use invsqrt_benchmark::core::BenchmarkReport;

/// Bit-hack that falls apart below a threshold
struct BreaksBelow(f32);

impl InvSqrt for BreaksBelow {
    fn name(&self) -> &'static str {
        "breaks-below"
    }

    fn inv_sqrt(&self, x: f32) -> f32 {
        let y = BitHack.inv_sqrt(x);
        if x < self.0 { y * 0.9 } else { y }
    }
}

#[test]
fn mixed_magnitudes_agree_within_one_percent() {
    // One Newton step keeps the bit-hack within 0.2% even at 0.0001.
    let inputs = [4.0f32, 100.0, 0.0001];
    assert_eq!(cross_check(&inputs, &BitHack, &Hardware, &Exact, 1.01), None);

    assert!((BitHack.inv_sqrt(4.0) - 0.5).abs() < 0.001);
    assert_eq!(Exact.inv_sqrt(4.0), 0.5);
    assert!((Hardware.inv_sqrt(100.0) - 0.1).abs() < 0.001);
    assert_eq!(Exact.inv_sqrt(100.0), 0.1);
}

#[test]
fn breakdown_at_small_magnitude_reports_that_index() {
    let inputs = [4.0f32, 100.0, 0.0001];
    let mismatch = cross_check(&inputs, &BreaksBelow(0.001), &Hardware, &Exact, 1.01)
        .expect("small input should disagree");

    assert_eq!(mismatch.index, 2);
    assert_eq!(mismatch.input, 0.0001);
    assert_eq!(mismatch.exact, 100.0);
}

#[test]
fn only_the_first_disagreement_is_reported() {
    let inputs = [50.0f32, 0.0005, 20.0, 0.0002];
    let mismatch = cross_check(&inputs, &BreaksBelow(0.001), &Hardware, &Exact, 1.01).unwrap();
    assert_eq!(mismatch.index, 1);
}

#[test]
fn looser_tolerance_accepts_the_breakdown() {
    let inputs = [0.0001f32];
    assert_eq!(cross_check(&inputs, &BreaksBelow(0.001), &Hardware, &Exact, 1.2), None);
}

#[test]
fn mismatch_line_follows_summary() {
    let inputs = [4.0f32, 100.0, 0.0001];
    let mismatch: Mismatch = cross_check(&inputs, &BreaksBelow(0.001), &Hardware, &Exact, 1.01).unwrap();
    let report = BenchmarkReport::new(3, 0.5, 0.0);

    let mut out = Vec::new();
    write_report(&mut out, &report, Some(&mismatch)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let fields: Vec<&str> = text.lines().nth(1).unwrap().split('\t').collect();

    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0], "2");
    assert_eq!(fields[1], "0.000100");
    assert_eq!(fields[4], "100.000000");
}
