//! RGBE pixel conversion.

/// One Radiance pixel: red, green and blue mantissas plus a shared exponent.
pub type Rgbe = [u8; 4];

/// `2^(exponent - 128)`.
///
/// Built from the bits of an `f64`, where the whole range is normal, then
/// narrowed; every result is a power of two that `f32` represents exactly.
#[inline]
pub fn exponent_scale(exponent: u8) -> f32 {
    let biased = (i64::from(exponent) - 128 + 1023) as u64;
    f64::from_bits(biased << 52) as f32
}

/// Expands a pixel to RGBA32F with alpha fixed at 1.0.
#[inline]
pub fn rgbe_to_rgba32f(pixel: Rgbe) -> [f32; 4] {
    let scale = exponent_scale(pixel[3]);
    [
        f32::from(pixel[0]) / 256.0 * scale,
        f32::from(pixel[1]) / 256.0 * scale,
        f32::from(pixel[2]) / 256.0 * scale,
        1.0,
    ]
}
