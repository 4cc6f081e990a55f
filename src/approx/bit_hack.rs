//! Fast inverse square root via integer bit manipulation
//!
//! The float's bits are reinterpreted as an integer with `to_bits`, which
//! is a defined same-size cast, halved and subtracted from a magic
//! constant. The result read back as a float is a guess within a few
//! percent; one Newton-Raphson step brings it to about 0.2% relative error.

/// Magic constant from the original Quake III routine
pub const MAGIC: u32 = 0x5f3759df;

/// Approximate `1/sqrt(x)` with exactly one Newton-Raphson refinement.
///
/// No domain check. Zero, negative, NaN and infinite inputs produce
/// meaningless values.
#[inline(always)]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let guess = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
    guess * (1.5 - half * guess * guess)
}
