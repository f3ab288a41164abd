//! Basic example demonstrating heightfield library usage.
//!
//! Run with: cargo run --example basic -- /path/to/terrain.raw 513 513

use heightfield::{HeightField, HeightFieldError};
use std::env;

fn main() -> Result<(), HeightFieldError> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example basic -- <heightmap.png|heightmap.raw> [width height]");
        std::process::exit(1);
    }

    let path = &args[1];
    let width = args.get(2).and_then(|w| w.parse().ok()).unwrap_or(0);
    let height = args.get(3).and_then(|h| h.parse().ok()).unwrap_or(0);

    // Map the full sample range onto 0-100 m
    let field = HeightField::from_file(path, width, height, 0.0, 100.0)?;

    println!("Loaded {}x{} grid from {}", field.columns(), field.rows(), path);
    println!("{:-<50}", "");

    let max_col = field.columns().saturating_sub(1) as f32;
    let max_row = field.rows().saturating_sub(1) as f32;
    let points = [
        ("Bottom-left corner", 0.0, 0.0),
        ("Center", max_col / 2.0, max_row / 2.0),
        ("Between cells", max_col / 3.0 + 0.5, max_row / 4.0 + 0.25),
        ("Top-right corner", max_col, max_row),
        ("Outside (clamped)", max_col + 10.0, -10.0),
    ];

    for (name, column, row) in &points {
        println!(
            "{:<20} ({:>8.2}, {:>8.2}): {:.3}m",
            name,
            column,
            row,
            field.height(*column, *row)
        );
    }

    if let Some((min, max)) = field.min_max_height() {
        println!("\nStored heights range from {:.3}m to {:.3}m", min, max);
    }

    Ok(())
}
