use anyhow::{Context, Result};
use heightfield::{BitDepth, Format};
use std::fs;
use std::path::PathBuf;

use super::format_size;
use crate::GridArgs;

pub fn run(grid: &GridArgs, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!("Directory does not exist: {}", dir.display());
    }

    // Collect recognized heightmaps
    let mut maps: Vec<_> = fs::read_dir(&dir)
        .context("Failed to read directory")?
        .filter_map(|entry| entry.ok())
        .filter(|entry| Format::from_path(entry.path()) != Format::Unsupported)
        .collect();

    if maps.is_empty() {
        println!("No .png or .raw heightmaps found in: {}", dir.display());
        return Ok(());
    }

    // Sort by filename
    maps.sort_by_key(|e| e.file_name());

    let mut image_count = 0;
    let mut raw_count = 0;
    let mut total_size: u64 = 0;

    println!("{:<32} {:>10} {:>12}", "HEIGHTMAP", "TYPE", "SIZE");
    println!("{}", "-".repeat(56));

    for entry in &maps {
        let path = entry.path();
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        total_size += size;

        let kind = match Format::from_path(&path) {
            Format::Image => {
                image_count += 1;
                "PNG".to_string()
            }
            _ => {
                raw_count += 1;
                raw_kind(grid, size)
            }
        };

        println!(
            "{:<32} {:>10} {:>12}",
            entry.file_name().to_string_lossy(),
            kind,
            format_size(size)
        );
    }

    // Summary
    println!();
    println!("Summary:");
    println!("  Total heightmaps: {}", maps.len());
    if image_count > 0 {
        println!("  PNG: {}", image_count);
    }
    if raw_count > 0 {
        println!("  RAW: {}", raw_count);
    }
    println!("  Total size: {}", format_size(total_size));
    println!("  Directory: {}", dir.display());

    Ok(())
}

/// Describe a RAW file, including its bit depth when dimensions are known.
fn raw_kind(grid: &GridArgs, size: u64) -> String {
    match BitDepth::infer(size as usize, grid.width, grid.height) {
        Some(depth) => format!("RAW{}", depth.bits()),
        None if grid.width > 0 && grid.height > 0 => "RAW???".to_string(),
        None => "RAW".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_kind() {
        let grid = GridArgs {
            min_height: 0.0,
            max_height: 1.0,
            width: 4,
            height: 4,
        };
        assert_eq!(raw_kind(&grid, 16), "RAW8");
        assert_eq!(raw_kind(&grid, 32), "RAW16");
        assert_eq!(raw_kind(&grid, 48), "RAW???");

        let unknown = GridArgs {
            width: 0,
            height: 0,
            ..grid
        };
        assert_eq!(raw_kind(&unknown, 32), "RAW");
    }
}
