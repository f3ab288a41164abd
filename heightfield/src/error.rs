//! Error types for the heightfield library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a height field.
///
/// Every variant is a recoverable load failure: the load attempt is
/// abandoned and no grid is produced. Caller mistakes such as passing a
/// `max_height` below `min_height` are not represented here, they are
/// contract violations checked with `debug_assert!`.
#[derive(Error, Debug)]
pub enum HeightFieldError {
    /// IO error when reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The image could not be decoded.
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The path is too short to carry a `.xxx` extension.
    #[error("Unrecognized file extension for heightfield image: {path}")]
    UnrecognizedExtension { path: PathBuf },

    /// The extension is neither `.png` nor `.raw`.
    #[error("Unsupported heightfield image format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The decoded image is not 8-bit RGB or RGBA.
    #[error("Unsupported pixel format {format} for heightfield image: {path}")]
    UnsupportedPixelFormat { path: PathBuf, format: String },

    /// Width, height or maximum height rejected for a RAW file.
    #[error(
        "Invalid 'width' ({width}), 'height' ({height}) or 'maxHeight' ({max_height}) \
         parameter for RAW heightfield image: {path}"
    )]
    InvalidRawParameters {
        path: PathBuf,
        width: usize,
        height: usize,
        max_height: f32,
    },

    /// The RAW file size implies neither 8 nor 16 bits per sample.
    #[error(
        "Invalid RAW file - must be 8-bit or 16-bit, but found neither \
         ({size} bytes, {bits} bits per sample): {path}"
    )]
    InvalidRawBitDepth {
        path: PathBuf,
        size: usize,
        bits: usize,
    },

    /// A height buffer does not match the requested grid dimensions.
    #[error("Height buffer holds {actual} samples, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias using [`HeightFieldError`].
pub type Result<T> = std::result::Result<T, HeightFieldError>;
