use anyhow::{ensure, Context, Result};
use heightfield::HeightField;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::load_field;
use crate::GridArgs;

pub fn run(
    grid: &GridArgs,
    path: PathBuf,
    input: PathBuf,
    output: Option<PathBuf>,
    column_col: String,
    row_col: String,
) -> Result<()> {
    let field = load_field(grid, &path)?;
    ensure!(!field.is_empty(), "Heightmap has no samples: {}", path.display());

    let output_path = output.unwrap_or_else(|| default_output_path(&input));
    let count = process_csv(&field, &input, &output_path, &column_col, &row_col)?;

    println!("{} heights written to: {}", count, output_path.display());
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_height.csv", stem))
}

fn process_csv(
    field: &HeightField,
    input: &Path,
    output_path: &Path,
    column_col: &str,
    row_col: &str,
) -> Result<u64> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let column_idx = headers
        .iter()
        .position(|h| h == column_col)
        .with_context(|| format!("Column '{}' not found in CSV", column_col))?;
    let row_idx = headers
        .iter()
        .position(|h| h == row_col)
        .with_context(|| format!("Column '{}' not found in CSV", row_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let output_file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("height");
    writer.write_record(&new_headers)?;

    for record in records {
        let column: f32 = record
            .get(column_idx)
            .context("Missing column coordinate")?
            .trim()
            .parse()
            .context("Invalid column coordinate")?;
        let row: f32 = record
            .get(row_idx)
            .context("Missing row coordinate")?
            .trim()
            .parse()
            .context("Invalid row coordinate")?;

        let height = format!("{:.4}", field.height(column, row));

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&height);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok(total)
}
