//! Heightmap format detection and load dispatch.
//!
//! The format is chosen from the file extension alone, compared
//! case-insensitively:
//!
//! | Extension | Format | Loader |
//! |-----------|--------|--------|
//! | `.png` | [`Format::Image`] | [`crate::image_source`] |
//! | `.raw` | [`Format::RawBinary`] | [`crate::raw`] |

use std::path::Path;

use crate::error::{HeightFieldError, Result};
use crate::grid::HeightField;
use crate::range::HeightRange;
use crate::{image_source, raw};

/// Shortest accepted path in bytes: one byte plus a dot and a 3-letter extension.
const MIN_PATH_LEN: usize = 5;

/// Heightmap source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RGB/RGBA image holding packed or grayscale heights
    Image,
    /// Headerless 8-bit or 16-bit RAW samples
    RawBinary,
    /// Anything else
    Unsupported,
}

impl Format {
    /// Detect the format of a heightmap path from its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use heightfield::Format;
    ///
    /// assert_eq!(Format::from_path("terrain.png"), Format::Image);
    /// assert_eq!(Format::from_path("levels/Terrain.RAW"), Format::RawBinary);
    /// assert_eq!(Format::from_path("terrain.jpg"), Format::Unsupported);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy();
        let extension = name
            .len()
            .checked_sub(4)
            .and_then(|start| name.get(start..));

        match extension {
            Some(ext) if ext.eq_ignore_ascii_case(".png") => Format::Image,
            Some(ext) if ext.eq_ignore_ascii_case(".raw") => Format::RawBinary,
            _ => Format::Unsupported,
        }
    }
}

impl HeightField {
    /// Load a height field from a `.png` or `.raw` heightmap.
    ///
    /// For images, `width` and `height` are ignored and the image dimensions
    /// are used. For RAW files they give the grid size and must both be at
    /// least 2.
    ///
    /// Failures are reported through `tracing` at `warn` level as well as
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the heightmap
    /// * `width` - Samples per row of a RAW file
    /// * `height` - Number of rows of a RAW file
    /// * `min_height` - Height of the lowest possible sample
    /// * `max_height` - Height of the highest possible sample
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is too short to carry an extension
    /// - The extension is neither `.png` nor `.raw`
    /// - The selected loader fails
    ///
    /// # Panics
    ///
    /// In debug builds, if `max_height < min_height`. Release builds do not
    /// check this and the resulting heights are unspecified.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        min_height: f32,
        max_height: f32,
    ) -> Result<Self> {
        let path = path.as_ref();
        let range = HeightRange::new(min_height, max_height);

        let result = dispatch(path, width, height, range);
        match &result {
            Ok(field) => tracing::debug!(
                path = %path.display(),
                columns = field.columns(),
                rows = field.rows(),
                "Loaded height field"
            ),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Height field load failed"),
        }
        result
    }

    /// Load a height field from an image heightmap.
    ///
    /// Each pixel's red, green and blue bytes are decoded as a packed height,
    /// which also reads plain grayscale images with a small error. See
    /// [`crate::packed::normalized_height_packed`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// use heightfield::HeightField;
    ///
    /// let field = HeightField::from_image("terrain.png", 0.0, 250.0)?;
    /// println!("{}x{}", field.columns(), field.rows());
    /// ```
    pub fn from_image<P: AsRef<Path>>(path: P, min_height: f32, max_height: f32) -> Result<Self> {
        Self::from_file(path, 0, 0, min_height, max_height)
    }

    /// Load a height field from a headerless RAW heightmap.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use heightfield::HeightField;
    ///
    /// let field = HeightField::from_raw("terrain.raw", 513, 513, -20.0, 180.0)?;
    /// let h = field.height(256.5, 100.25);
    /// ```
    pub fn from_raw<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        min_height: f32,
        max_height: f32,
    ) -> Result<Self> {
        Self::from_file(path, width, height, min_height, max_height)
    }
}

fn dispatch(path: &Path, width: usize, height: usize, range: HeightRange) -> Result<HeightField> {
    if path.as_os_str().to_string_lossy().len() < MIN_PATH_LEN {
        return Err(HeightFieldError::UnrecognizedExtension {
            path: path.to_path_buf(),
        });
    }

    match Format::from_path(path) {
        Format::Image => image_source::load(path, range),
        Format::RawBinary => raw::load(path, width, height, range),
        Format::Unsupported => Err(HeightFieldError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(Format::from_path("a.png"), Format::Image);
        assert_eq!(Format::from_path("a.PNG"), Format::Image);
        assert_eq!(Format::from_path("dir/a.PnG"), Format::Image);
        assert_eq!(Format::from_path("a.raw"), Format::RawBinary);
        assert_eq!(Format::from_path("/data/a.Raw"), Format::RawBinary);
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(Format::from_path("a.jpg"), Format::Unsupported);
        assert_eq!(Format::from_path("a_png"), Format::Unsupported);
        assert_eq!(Format::from_path("a.png.bak"), Format::Unsupported);
        assert_eq!(Format::from_path("apng"), Format::Unsupported);
        assert_eq!(Format::from_path("png"), Format::Unsupported);
        assert_eq!(Format::from_path(""), Format::Unsupported);
        assert_eq!(Format::from_path("a.é.raw"), Format::RawBinary);
        assert_eq!(Format::from_path("aé"), Format::Unsupported);
    }

    #[test]
    fn test_short_path_rejected_without_io() {
        for path in ["a.pn", ".png", ".raw", "x"] {
            let result = HeightField::from_file(path, 4, 4, 0.0, 1.0);
            assert!(
                matches!(result, Err(HeightFieldError::UnrecognizedExtension { .. })),
                "{path}"
            );
        }
    }

    #[test]
    fn test_path_length_counts_bytes() {
        // Four characters but five bytes: passes the length check, then fails
        // extension matching.
        let result = HeightField::from_file("é.pn", 4, 4, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(HeightFieldError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = HeightField::from_file("terrain.tga", 4, 4, 0.0, 1.0);
        match result {
            Err(HeightFieldError::UnsupportedFormat { path }) => {
                assert_eq!(path, Path::new("terrain.tga"));
            }
            _ => panic!("Expected UnsupportedFormat error"),
        }
    }

    #[test]
    fn test_raw_parameters_checked() {
        let result = HeightField::from_raw("missing.raw", 1, 4, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(HeightFieldError::InvalidRawParameters { .. })
        ));
    }

    #[test]
    fn test_image_ignores_dimensions() {
        // Missing image: the failure comes from decoding, not from the
        // zero width and height that `from_image` passes along.
        let result = HeightField::from_image("/nonexistent/terrain.png", 0.0, 1.0);
        assert!(matches!(result, Err(HeightFieldError::Image(_))));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_inverted_range_panics_in_debug() {
        let _ = HeightField::from_file("terrain.raw", 4, 4, 10.0, 0.0);
    }
}
