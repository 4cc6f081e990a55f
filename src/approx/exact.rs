//! Reference inverse square root

/// `1.0 / x.sqrt()` using the platform's exact square root.
#[inline(always)]
pub fn exact_inv_sqrt(x: f32) -> f32 {
    1.0 / x.sqrt()
}
