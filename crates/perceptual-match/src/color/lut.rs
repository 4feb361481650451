//! Gamma transfer functions
//!
//! 8-bit decoding goes through a table generated by build.rs; everything
//! else evaluates the IEC 61966-2-1 formulas directly in f64.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Decode a normalized sRGB channel (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    let srgb = srgb.clamp(0.0, 1.0);
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light to a normalized sRGB channel.
///
/// Input is clamped to 0.0..=1.0, so out-of-gamut results of perceptual
/// transforms land on the gamut boundary.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
