//! Inverse square root implementations under test
//!
//! Every method maps one positive `f32` to an estimate of `1/sqrt(x)`.
//! The driver is generic over [`InvSqrt`] so any of them can be timed
//! or cross-checked against the others.

pub mod bit_hack;
pub mod exact;
pub mod hardware;

pub use bit_hack::fast_inv_sqrt;
pub use exact::exact_inv_sqrt;
pub use hardware::{hardware_rsqrt, hardware_rsqrt_into, RsqrtBackend};

/// A single-value inverse square root method
pub trait InvSqrt {
    /// Short label used in diagnostics
    fn name(&self) -> &'static str;

    fn inv_sqrt(&self, x: f32) -> f32;
}

/// Magic-constant bit-hack with one Newton-Raphson step
#[derive(Debug, Clone, Copy, Default)]
pub struct BitHack;

/// SIMD reciprocal-square-root estimate, no refinement
#[derive(Debug, Clone, Copy, Default)]
pub struct Hardware;

/// `1.0 / sqrt(x)`, the ground truth
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl InvSqrt for BitHack {
    fn name(&self) -> &'static str {
        "bit-hack"
    }

    #[inline(always)]
    fn inv_sqrt(&self, x: f32) -> f32 {
        fast_inv_sqrt(x)
    }
}

impl InvSqrt for Hardware {
    fn name(&self) -> &'static str {
        "hardware"
    }

    #[inline(always)]
    fn inv_sqrt(&self, x: f32) -> f32 {
        hardware_rsqrt(x)
    }
}

impl InvSqrt for Exact {
    fn name(&self) -> &'static str {
        "exact"
    }

    #[inline(always)]
    fn inv_sqrt(&self, x: f32) -> f32 {
        exact_inv_sqrt(x)
    }
}
