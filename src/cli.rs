//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// SVG icon module generator
#[derive(Parser, Debug)]
#[command(name = "glyphgen")]
#[command(about = "Generates typed TSX icon modules from a tree of SVG sources")]
#[command(version)]
pub struct Cli {
    /// Directory tree to search for SVG source files
    #[arg(long, env = "GLYPHGEN_SVG_PATH", value_name = "DIR")]
    pub svg_path: Option<PathBuf>,

    /// Icon table: JSON mapping of component name to SVG file name
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Directory that receives the generated modules
    #[arg(short, long, default_value = "icons", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Skip .d.ts declaration stubs
    #[arg(long)]
    pub no_declarations: bool,

    /// Summary output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Summary output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary counts
    #[default]
    Text,
    /// JSON summary
    Json,
}
