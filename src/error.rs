//! Error types for the icon pipeline
//!
//! Only configuration, access, and discovery errors surface here; per-file
//! read/write failures are contained inside the generator and reported via
//! logging, never as a pipeline-level error.

use std::process::ExitCode;

use thiserror::Error;

/// Result type alias using [`GlyphGenError`]
pub type Result<T> = std::result::Result<T, GlyphGenError>;

/// Pipeline-level errors, all fatal to the run
#[derive(Debug, Error)]
pub enum GlyphGenError {
    /// Source root was never configured; aborts before any I/O
    #[error("SVG source path must be set via --svg-path or GLYPHGEN_SVG_PATH")]
    SvgPathUnset,

    #[error("SVG source path does not exist or is not readable: {path} ({source})")]
    SvgPathUnreadable {
        path: String,
        source: std::io::Error,
    },

    /// Indexing finished without discovering a single SVG file
    #[error("no SVG files were found under {path}")]
    NoSvgFiles { path: String },

    #[error("output directory is not writable: {path} ({source})")]
    OutputDirUnwritable {
        path: String,
        source: std::io::Error,
    },

    #[error("could not read icon configuration {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid icon configuration {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GlyphGenError {
    /// Map the error taxonomy onto process exit codes:
    /// 2 = configuration, 3 = access, 4 = discovery miss, 1 = other I/O.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::SvgPathUnset | Self::ConfigRead { .. } | Self::ConfigParse { .. } => {
                ExitCode::from(2)
            }
            Self::SvgPathUnreadable { .. } | Self::OutputDirUnwritable { .. } => ExitCode::from(3),
            Self::NoSvgFiles { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}
