//! # heightfield - Heightmap Elevation Grids
//!
//! Library for turning heightmap files into dense elevation grids and
//! sampling them at fractional grid coordinates.
//!
//! ## Features
//!
//! - **Images**: 8-bit RGB/RGBA `.png` heightmaps, read as 24-bit packed heights
//! - **RAW**: headerless 8-bit or 16-bit `.raw` heightmaps, depth detected from file size
//! - **Sampling**: bilinear interpolation with clamping at the grid edges
//!
//! ## Quick Start
//!
//! ```ignore
//! use heightfield::HeightField;
//!
//! // Load a 257×257 16-bit RAW file spanning 0–120 m
//! let field = HeightField::from_raw("/data/terrain.raw", 257, 257, 0.0, 120.0)?;
//!
//! // Sample between grid points
//! let h = field.height(10.25, 42.5);
//! println!("Height: {}m", h);
//! ```
//!
//! ## Grid Layout
//!
//! Heights are stored row-major, `columns × rows` samples. Row 0 is the
//! bottom row of the source heightmap: image files and RAW files are both
//! flipped vertically while loading.
//!
//! ## Errors
//!
//! Every load failure is returned as a [`HeightFieldError`] naming the file
//! and the reason, and logged with `tracing` at `warn` level. Passing a
//! `max_height` lower than `min_height` is a programming error that panics in
//! debug builds.

pub mod error;
pub mod format;
pub mod grid;
pub mod image_source;
pub mod packed;
pub mod range;
pub mod raw;

// Re-export main types at crate root for convenience
pub use error::{HeightFieldError, Result};
pub use format::Format;
pub use grid::HeightField;
pub use image_source::{DecodedImage, PixelFormat};
pub use packed::normalized_height_packed;
pub use range::HeightRange;
pub use raw::BitDepth;
