//! Hardware reciprocal-square-root estimate
//!
//! Loads one value into lane 0 of a SIMD register, runs the estimate
//! instruction and stores lane 0 back. No Newton-Raphson step is applied.
//! The NEON estimate is coarser than the refined bit-hack; the 12-bit SSE
//! estimate is slightly tighter than it.
//!
//! Precision contract (maximum relative error against `1/sqrt(x)`):
//! - SSE `rsqrtss`: 1.5 * 2^-12
//! - NEON `frsqrte`: about 2^-8, bounded here by 2^-7
//! - Portable fallback: exact computation. Timing this fallback measures
//!   a real square root and division, which changes what the benchmark
//!   means.

/// Which instruction backs [`hardware_rsqrt_into`] on this machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsqrtBackend {
    Sse,
    Neon,
    Portable,
}

impl RsqrtBackend {
    /// Instruction name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            RsqrtBackend::Sse => "SSE rsqrtss",
            RsqrtBackend::Neon => "NEON frsqrte",
            RsqrtBackend::Portable => "portable 1/sqrt (no SIMD estimate)",
        }
    }

    pub fn is_hardware(&self) -> bool {
        !matches!(self, RsqrtBackend::Portable)
    }

    /// Upper bound on relative error for this backend
    pub fn max_relative_error(&self) -> f32 {
        match self {
            RsqrtBackend::Sse => 1.5 / 4096.0,
            RsqrtBackend::Neon => 1.0 / 128.0,
            RsqrtBackend::Portable => 1.0e-6,
        }
    }
}

lazy_static::lazy_static! {
    static ref BACKEND: RsqrtBackend = detect_backend();
}

/// Backend detected once per process
pub fn backend() -> RsqrtBackend {
    *BACKEND
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_backend() -> RsqrtBackend {
    let cpuid = raw_cpuid::CpuId::new();
    if cpuid.get_feature_info().map_or(false, |info| info.has_sse()) {
        RsqrtBackend::Sse
    } else {
        RsqrtBackend::Portable
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_backend() -> RsqrtBackend {
    RsqrtBackend::Neon
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_backend() -> RsqrtBackend {
    RsqrtBackend::Portable
}

/// Write the estimate of `1/sqrt(*input)` into `*out`.
///
/// Both slots are caller-owned; nothing is allocated.
#[inline]
pub fn hardware_rsqrt_into(out: &mut f32, input: &f32) {
    match backend() {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        RsqrtBackend::Sse => unsafe { sse::rsqrt_ss(out, input) },
        #[cfg(target_arch = "aarch64")]
        RsqrtBackend::Neon => unsafe { neon::rsqrte(out, input) },
        _ => *out = super::exact::exact_inv_sqrt(*input),
    }
}

/// Value-returning form of [`hardware_rsqrt_into`]
#[inline]
pub fn hardware_rsqrt(x: f32) -> f32 {
    let mut out = 0.0f32;
    hardware_rsqrt_into(&mut out, &x);
    out
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod sse {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::{_mm_load_ss, _mm_rsqrt_ss, _mm_store_ss};
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::{_mm_load_ss, _mm_rsqrt_ss, _mm_store_ss};

    /// # Safety
    ///
    /// The CPU must support SSE.
    #[target_feature(enable = "sse")]
    pub unsafe fn rsqrt_ss(out: &mut f32, input: &f32) {
        let lane = _mm_load_ss(input);
        _mm_store_ss(out, _mm_rsqrt_ss(lane));
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use std::arch::aarch64::{vdup_n_f32, vget_lane_f32, vrsqrte_f32};

    /// # Safety
    ///
    /// NEON is always available on aarch64.
    #[target_feature(enable = "neon")]
    pub unsafe fn rsqrte(out: &mut f32, input: &f32) {
        let lanes = vdup_n_f32(*input);
        *out = vget_lane_f32::<0>(vrsqrte_f32(lanes));
    }
}
