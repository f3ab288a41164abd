//! Packed-channel height decoding.
//!
//! Packed heightmaps spread a 24-bit fixed-point height over the red, green
//! and blue channels of an 8-bit-per-channel image: red holds the high byte,
//! green the middle byte and blue the fractional byte.

/// Reconstruct a normalized height in `[0, 1)` from three channel bytes.
///
/// Computes `(256 * r + g + b / 256) / 65536`.
///
/// The formula is exact for 24-bit packed heightmaps. It also works on plain
/// grayscale heightmaps (`r == g == b`), at the cost of a relative error of
/// `2^-8 + 2^-16`, just under 0.4%, compared to reading the gray level
/// directly as `r / 256`.
///
/// # Examples
///
/// ```
/// use heightfield::packed::normalized_height_packed;
///
/// assert_eq!(normalized_height_packed(0, 0, 0), 0.0);
/// assert_eq!(normalized_height_packed(128, 0, 0), 0.5);
/// assert!(normalized_height_packed(255, 255, 255) < 1.0);
/// ```
pub fn normalized_height_packed(r: u8, g: u8, b: u8) -> f32 {
    (256.0 * r as f32 + g as f32 + 0.003_906_25 * b as f32) / 65536.0
}
