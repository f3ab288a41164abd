use anyhow::{Context, Result};
use heightfield::{BitDepth, Format};
use std::path::PathBuf;

use super::{format_size, load_field};
use crate::GridArgs;

pub fn run(grid: &GridArgs, path: PathBuf) -> Result<()> {
    let field = load_field(grid, &path)?;

    let file_size = std::fs::metadata(&path)
        .context("Failed to read file metadata")?
        .len();

    let format_str = match Format::from_path(&path) {
        Format::Image => "PNG image (packed RGB)".to_string(),
        Format::RawBinary => {
            match BitDepth::infer(file_size as usize, field.columns(), field.rows()) {
                Some(depth) => format!("RAW ({}-bit)", depth.bits()),
                None => "RAW".to_string(),
            }
        }
        Format::Unsupported => "Unknown".to_string(),
    };

    // Display information
    println!("Heightmap: {}", path.display());
    println!("Format: {}", format_str);
    println!("File size: {}", format_size(file_size));
    println!();
    println!(
        "Grid: {}x{} samples ({} total)",
        field.columns(),
        field.rows(),
        field.columns() * field.rows()
    );
    println!("Height range: {} to {}", grid.min_height, grid.max_height);

    if let Some((min, max)) = field.min_max_height() {
        println!("Min height: {:.4}", min);
        println!("Max height: {:.4}", max);
    }

    Ok(())
}
