//! Height fields from headerless RAW elevation files.
//!
//! A RAW file holds nothing but `width × height` samples in row-major order,
//! with its origin at the bottom-left corner. Samples are either one byte
//! (0–255) or two little-endian bytes (0–65535).
//!
//! # Bit Depth Detection
//!
//! RAW files carry no header, so the bit depth is inferred from the file size
//! as `(size / (width * height)) * 8` using integer division. This is a
//! best-effort heuristic: a corrupt file whose size happens to fall between
//! one and three times `width * height` bytes is still accepted, and trailing
//! bytes beyond the last full sample are ignored.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{HeightFieldError, Result};
use crate::grid::HeightField;
use crate::range::HeightRange;

/// Sample size of a RAW file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// One byte per sample, 0–255
    Eight,
    /// Two little-endian bytes per sample, 0–65535
    Sixteen,
}

impl BitDepth {
    /// Infer the bit depth of a RAW file from its size in bytes.
    ///
    /// Returns `None` if the size implies anything other than 8 or 16 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use heightfield::raw::BitDepth;
    ///
    /// assert_eq!(BitDepth::infer(16, 4, 4), Some(BitDepth::Eight));
    /// assert_eq!(BitDepth::infer(32, 4, 4), Some(BitDepth::Sixteen));
    /// assert_eq!(BitDepth::infer(48, 4, 4), None);
    /// ```
    pub fn infer(size: usize, width: usize, height: usize) -> Option<Self> {
        match bits_per_sample(size, width, height) {
            8 => Some(BitDepth::Eight),
            16 => Some(BitDepth::Sixteen),
            _ => None,
        }
    }

    /// Returns the number of bits per sample.
    pub fn bits(&self) -> usize {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Returns the number of bytes per sample.
    pub fn bytes(&self) -> usize {
        self.bits() / 8
    }

    /// Returns the largest sample value, which maps to the top of the range.
    pub fn max_value(&self) -> f32 {
        match self {
            BitDepth::Eight => 255.0,
            BitDepth::Sixteen => 65535.0,
        }
    }
}

/// Bits per sample implied by a file size, `0` if the grid has no samples.
fn bits_per_sample(size: usize, width: usize, height: usize) -> usize {
    width
        .checked_mul(height)
        .and_then(|samples| size.checked_div(samples))
        .map_or(0, |bytes| bytes.saturating_mul(8))
}

/// Check the parameters of a RAW load before touching the file.
fn validate(path: &Path, width: usize, height: usize, range: HeightRange) -> Result<()> {
    if width < 2 || height < 2 || range.max < 0.0 {
        return Err(HeightFieldError::InvalidRawParameters {
            path: path.to_path_buf(),
            width,
            height,
            max_height: range.max,
        });
    }
    Ok(())
}

/// Load a height field from a RAW file.
///
/// The parameters are validated before the file is opened.
///
/// # Arguments
///
/// * `path` - Path to the `.raw` file
/// * `width` - Samples per row (at least 2)
/// * `height` - Number of rows (at least 2)
/// * `range` - Heights that the smallest and largest samples map onto
///
/// # Errors
///
/// Returns an error if:
/// - `width` or `height` is below 2, or `range.max` is negative
/// - The file cannot be opened or memory-mapped
/// - The file size implies neither 8-bit nor 16-bit samples
pub fn load<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    range: HeightRange,
) -> Result<HeightField> {
    let path = path.as_ref();
    validate(path, width, height, range)?;

    let file = File::open(path)?;

    // SAFETY: Memory mapping is safe as long as the file is not modified
    // while mapped. The file is opened read-only and the mapping is dropped
    // before this function returns.
    let mmap = unsafe { Mmap::map(&file)? };

    from_bytes(&mmap, width, height, range, path)
}

/// Build a height field from the bytes of a RAW file.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the byte count implies
/// neither 8-bit nor 16-bit samples.
pub fn from_bytes(
    bytes: &[u8],
    width: usize,
    height: usize,
    range: HeightRange,
    path: &Path,
) -> Result<HeightField> {
    validate(path, width, height, range)?;

    let depth = BitDepth::infer(bytes.len(), width, height).ok_or_else(|| {
        HeightFieldError::InvalidRawBitDepth {
            path: path.to_path_buf(),
            size: bytes.len(),
            bits: bits_per_sample(bytes.len(), width, height),
        }
    })?;

    let row_bytes = width * depth.bytes();
    let rows = bytes[..row_bytes * height].chunks_exact(row_bytes).rev();
    let max_value = depth.max_value();

    let mut field = HeightField::new(width, height);
    for (dst, src) in field.heights_mut().chunks_exact_mut(width).zip(rows) {
        match depth {
            BitDepth::Eight => {
                for (cell, &sample) in dst.iter_mut().zip(src) {
                    *cell = range.apply(sample as f32 / max_value);
                }
            }
            BitDepth::Sixteen => {
                for (cell, sample) in dst.iter_mut().zip(src.chunks_exact(2)) {
                    let value = u16::from_le_bytes([sample[0], sample[1]]);
                    *cell = range.apply(value as f32 / max_value);
                }
            }
        }
    }

    Ok(field)
}
