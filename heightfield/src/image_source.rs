//! Height fields from heightmap images.
//!
//! Images are decoded with the `image` crate into a [`DecodedImage`], then
//! every pixel's red, green and blue bytes are turned into a height with
//! [`normalized_height_packed`]. Alpha is ignored. 16-bit RGB and RGBA
//! images are reduced to 8 bits per channel first.
//!
//! Image rows run top to bottom while grid rows run bottom to top, so the
//! last image row becomes grid row 0.

use std::fmt;
use std::path::Path;

use image::{ColorType, DynamicImage};

use crate::error::{HeightFieldError, Result};
use crate::grid::HeightField;
use crate::packed::normalized_height_packed;
use crate::range::HeightRange;

/// Pixel layout of a decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit red, green, blue
    Rgb,
    /// 8-bit red, green, blue, alpha
    Rgba,
    /// Anything else, carrying the decoder's name for the layout
    Other(String),
}

impl PixelFormat {
    /// Returns the number of bytes per pixel, or `None` for unsupported layouts.
    pub fn pixel_size(&self) -> Option<usize> {
        match self {
            PixelFormat::Rgb => Some(3),
            PixelFormat::Rgba => Some(4),
            PixelFormat::Other(_) => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgb => f.write_str("Rgb8"),
            PixelFormat::Rgba => f.write_str("Rgba8"),
            PixelFormat::Other(name) => f.write_str(name),
        }
    }
}

/// Pixel data produced by the image decoder.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Pixel layout of `data`
    pub format: PixelFormat,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Row-major pixel bytes, top row first
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Decode an image file.
    ///
    /// The container format is chosen from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`HeightFieldError::Image`] if the file cannot be read or decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from(image::open(path)?))
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let (format, data) = match image.color() {
            ColorType::Rgb8 => (PixelFormat::Rgb, image.into_bytes()),
            ColorType::Rgba8 => (PixelFormat::Rgba, image.into_bytes()),
            ColorType::Rgb16 => (PixelFormat::Rgb, image.to_rgb8().into_raw()),
            ColorType::Rgba16 => (PixelFormat::Rgba, image.to_rgba8().into_raw()),
            other => (PixelFormat::Other(format!("{:?}", other)), image.into_bytes()),
        };

        Self {
            format,
            width,
            height,
            data,
        }
    }
}

/// Load a height field from an image file.
///
/// # Arguments
///
/// * `path` - Path to the image
/// * `range` - Heights that normalized samples of 0 and 1 map onto
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or is not RGB/RGBA.
pub fn load<P: AsRef<Path>>(path: P, range: HeightRange) -> Result<HeightField> {
    let path = path.as_ref();
    let image = DecodedImage::open(path)?;
    from_decoded(&image, range, path)
}

/// Build a height field from already decoded pixels.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`HeightFieldError::UnsupportedPixelFormat`] for layouts other than
/// RGB or RGBA, and [`HeightFieldError::DimensionMismatch`] if `data` is too
/// short for the declared dimensions.
pub fn from_decoded(
    image: &DecodedImage,
    range: HeightRange,
    path: &Path,
) -> Result<HeightField> {
    let pixel_size = image.format.pixel_size().ok_or_else(|| {
        HeightFieldError::UnsupportedPixelFormat {
            path: path.to_path_buf(),
            format: image.format.to_string(),
        }
    })?;

    let (width, height) = (image.width, image.height);
    let mut field = HeightField::new(width, height);
    if field.is_empty() {
        return Ok(field);
    }

    let row_bytes = width * pixel_size;
    let expected = row_bytes * height;
    if image.data.len() < expected {
        return Err(HeightFieldError::DimensionMismatch {
            expected,
            actual: image.data.len(),
        });
    }

    let rows = image.data[..expected].chunks_exact(row_bytes).rev();
    for (dst, src) in field.heights_mut().chunks_exact_mut(width).zip(rows) {
        for (cell, pixel) in dst.iter_mut().zip(src.chunks_exact(pixel_size)) {
            *cell = range.apply(normalized_height_packed(pixel[0], pixel[1], pixel[2]));
        }
    }

    Ok(field)
}
