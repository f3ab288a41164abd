use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use super::load_field;
use crate::GridArgs;

#[derive(Serialize)]
struct HeightResponse {
    column: f32,
    row: f32,
    height: f32,
}

pub fn run(grid: &GridArgs, path: PathBuf, column: f32, row: f32, json: bool) -> Result<()> {
    let field = load_field(grid, &path)?;
    anyhow::ensure!(!field.is_empty(), "Heightmap has no samples: {}", path.display());

    let height = field.height(column, row);

    if json {
        let response = HeightResponse {
            column,
            row,
            height,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:.4}", height);
    }

    Ok(())
}
