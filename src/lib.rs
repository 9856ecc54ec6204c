//! glyphgen: SVG icon module generator
//!
//! A build-time pipeline that discovers SVG source files scattered across a
//! directory tree, matches configured icon names to files by normalized slug,
//! and generates one TSX module per icon (web and native variants, plus an
//! optional declaration stub) and a barrel module re-exporting all of them.
//!
//! Data flows strictly forward: source root → index → matches → per-match
//! artifacts → barrel → disk. The index is rebuilt from scratch every run
//! and the output directory is emptied before generation, so re-running with
//! unchanged inputs is byte-identical.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glyphgen::{config, DefaultTransform, Pipeline, PipelineOptions};
//!
//! let specs = config::parse(r#"{ "ArrowBack": "arrow-thick-circle-left" }"#)?;
//! let mut pipeline = Pipeline::new(
//!     PipelineOptions {
//!         svg_path: Some("/assets/icon-library".into()),
//!         out_dir: "icons".into(),
//!         declarations: true,
//!     },
//!     Arc::new(DefaultTransform),
//! );
//! let summary = pipeline.run(&specs).await?;
//! println!("{}", summary.format_text());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod indexing;
pub mod outdir;
pub mod pipeline;
pub mod resolve;
pub mod slug;
pub mod transform;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::IconSpec;
pub use error::{GlyphGenError, Result};
pub use generate::{export_name, GeneratedArtifact, MatchOutput};
pub use indexing::{build_index, SourceIndex};
pub use pipeline::{Phase, Pipeline, PipelineOptions, RunSummary, BARREL_FILE};
pub use resolve::{resolve, Match, Resolution};
pub use slug::normalize;
pub use transform::{DefaultTransform, SvgTransform, TransformOptions};
