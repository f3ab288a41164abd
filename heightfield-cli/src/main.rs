use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Heightmap inspection and sampling tool
#[derive(Parser)]
#[command(name = "heightfield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    grid: GridArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options describing how a heightmap maps onto heights.
#[derive(Args, Debug, Clone, Copy)]
pub struct GridArgs {
    /// Height of the lowest sample value
    #[arg(
        long,
        env = "HEIGHTFIELD_MIN_HEIGHT",
        default_value = "0",
        allow_negative_numbers = true,
        global = true
    )]
    pub min_height: f32,

    /// Height of the highest sample value
    #[arg(
        long,
        env = "HEIGHTFIELD_MAX_HEIGHT",
        default_value = "1",
        allow_negative_numbers = true,
        global = true
    )]
    pub max_height: f32,

    /// Samples per row (RAW files only)
    #[arg(long, env = "HEIGHTFIELD_WIDTH", default_value = "0", global = true)]
    pub width: usize,

    /// Number of rows (RAW files only)
    #[arg(long, env = "HEIGHTFIELD_HEIGHT", default_value = "0", global = true)]
    pub height: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the height at a single grid coordinate
    Query {
        /// Path to a .png or .raw heightmap
        path: PathBuf,

        /// Fractional column coordinate
        #[arg(long, allow_negative_numbers = true)]
        column: f32,

        /// Fractional row coordinate (0 = bottom row)
        #[arg(long, allow_negative_numbers = true)]
        row: f32,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Sample heights for every row of a CSV file
    Batch {
        /// Path to a .png or .raw heightmap
        path: PathBuf,

        /// Input CSV file
        input: PathBuf,

        /// Output file (defaults to <input>_height.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name holding the grid column coordinate
        #[arg(long, default_value = "column")]
        column_col: String,

        /// Column name holding the grid row coordinate
        #[arg(long, default_value = "row")]
        row_col: String,
    },

    /// Display information about a heightmap
    Info {
        /// Path to a .png or .raw heightmap
        path: PathBuf,
    },

    /// List heightmaps in a directory
    List {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heightfield=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            path,
            column,
            row,
            json,
        } => commands::query::run(&cli.grid, path, column, row, json),
        Commands::Batch {
            path,
            input,
            output,
            column_col,
            row_col,
        } => commands::batch::run(&cli.grid, path, input, output, column_col, row_col),
        Commands::Info { path } => commands::info::run(&cli.grid, path),
        Commands::List { dir } => commands::list::run(&cli.grid, dir),
    }
}
