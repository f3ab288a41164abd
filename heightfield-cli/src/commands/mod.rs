use anyhow::{ensure, Context, Result};
use heightfield::HeightField;
use std::path::Path;

use crate::GridArgs;

pub mod batch;
pub mod info;
pub mod list;
pub mod query;

/// Load a heightmap using the global grid options.
pub(crate) fn load_field(grid: &GridArgs, path: &Path) -> Result<HeightField> {
    ensure!(
        grid.max_height >= grid.min_height,
        "--max-height ({}) must not be lower than --min-height ({})",
        grid.max_height,
        grid.min_height
    );

    HeightField::from_file(
        path,
        grid.width,
        grid.height,
        grid.min_height,
        grid.max_height,
    )
    .with_context(|| format!("Failed to load heightmap: {}", path.display()))
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize, min_height: f32, max_height: f32) -> GridArgs {
        GridArgs {
            min_height,
            max_height,
            width,
            height,
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_load_field_raw() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("flat.raw");
        std::fs::write(&path, [255u8; 9]).unwrap();

        let field = load_field(&grid(3, 3, 0.0, 20.0), &path).unwrap();
        assert_eq!(field.columns(), 3);
        assert!(field.heights().iter().all(|&h| h == 20.0));
    }

    #[test]
    fn test_load_field_inverted_range() {
        let err = load_field(&grid(3, 3, 5.0, 1.0), Path::new("flat.raw")).unwrap_err();
        assert!(err.to_string().contains("--max-height"));
    }

    #[test]
    fn test_load_field_error_context() {
        let err = load_field(&grid(3, 3, 0.0, 1.0), Path::new("terrain.bmp")).unwrap_err();
        assert!(err.to_string().contains("terrain.bmp"));
    }
}
