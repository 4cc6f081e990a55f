//! Approximation error against a reference method

use crate::approx::InvSqrt;

/// Root-mean-square error of `outputs` against `reference` applied to `inputs`.
///
/// Pairs are taken index by index up to the shorter slice. Returns 0.0 when
/// there is nothing to compare.
pub fn compute_rmse<R: InvSqrt + ?Sized>(inputs: &[f32], outputs: &[f32], reference: &R) -> f64 {
    let count = inputs.len().min(outputs.len());
    if count == 0 {
        return 0.0;
    }
    let sum_sq: f64 = inputs.iter()
        .zip(outputs)
        .map(|(&x, &approx)| {
            let diff = reference.inv_sqrt(x) as f64 - approx as f64;
            diff * diff
        })
        .sum();
    (sum_sq / count as f64).sqrt()
}

/// `max(a, b) / min(a, b)`, the agreement measure of the cross-check.
#[inline]
pub fn agreement_ratio(a: f32, b: f32) -> f32 {
    a.max(b) / a.min(b)
}
