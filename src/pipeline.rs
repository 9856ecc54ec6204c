//! Pipeline orchestration
//!
//! Sequences validation, indexing, resolution, output preparation, and
//! generation, then writes the barrel module and reports summary counts.
//! Phases advance strictly forward; the index is built fresh each run and
//! threaded through as a value, never shared state.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tokio::fs;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::IconSpec;
use crate::error::{GlyphGenError, Result};
use crate::generate::generate_icon;
use crate::indexing::build_index;
use crate::outdir::prepare;
use crate::resolve::resolve;
use crate::transform::SvgTransform;

/// Barrel module file name.
pub const BARREL_FILE: &str = "index.ts";

/// Pipeline phases, entered strictly in order. `Aborted` is terminal,
/// reachable from `Validating`, `Indexing`, and `PreparingOutput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Indexing,
    Resolving,
    PreparingOutput,
    Generating,
    Reporting,
    Done,
    Aborted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Indexing => "indexing",
            Self::Resolving => "resolving",
            Self::PreparingOutput => "preparing-output",
            Self::Generating => "generating",
            Self::Reporting => "reporting",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Root of the SVG source tree; `None` aborts during validation
    pub svg_path: Option<PathBuf>,
    /// Destination for generated modules, owned entirely by the pipeline
    pub out_dir: PathBuf,
    /// Emit .d.ts declaration stubs alongside the modules
    pub declarations: bool,
}

/// Counts reported after a completed run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub svg_files_found: usize,
    pub icons_matched: usize,
    pub icons_missed: usize,
    /// Matches dropped because their source file could not be read
    pub icons_dropped: usize,
    /// Barrel lines emitted
    pub icons_exported: usize,
    pub files_written: usize,
}

impl RunSummary {
    pub fn format_text(&self) -> String {
        format!(
            "SVG files found:  {}\n\
             icons matched:    {}\n\
             icons missed:     {}\n\
             icons dropped:    {}\n\
             files written:    {}\n",
            self.svg_files_found,
            self.icons_matched,
            self.icons_missed,
            self.icons_dropped,
            self.files_written,
        )
    }
}

pub struct Pipeline {
    options: PipelineOptions,
    transform: Arc<dyn SvgTransform>,
    phase: Phase,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, transform: Arc<dyn SvgTransform>) -> Self {
        Self {
            options,
            transform,
            phase: Phase::Idle,
        }
    }

    /// Phase the pipeline is in, or finished in.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        info!(%phase, "pipeline phase");
    }

    fn abort(&mut self, err: GlyphGenError) -> GlyphGenError {
        self.phase = Phase::Aborted;
        error!(reason = %err, "pipeline aborted");
        err
    }

    /// Run the full pipeline over `specs`.
    pub async fn run(&mut self, specs: &[IconSpec]) -> Result<RunSummary> {
        self.enter(Phase::Validating);
        let root = match self.options.svg_path.clone() {
            Some(root) => root,
            None => return Err(self.abort(GlyphGenError::SvgPathUnset)),
        };
        if let Err(e) = fs::metadata(&root).await {
            return Err(self.abort(GlyphGenError::SvgPathUnreadable {
                path: root.display().to_string(),
                source: e,
            }));
        }
        info!(root = %root.display(), "beginning SVG transformation");

        self.enter(Phase::Indexing);
        let index = match build_index(&root).await {
            Ok(index) => index,
            Err(e) => return Err(self.abort(e)),
        };
        if index.is_empty() {
            return Err(self.abort(GlyphGenError::NoSvgFiles {
                path: root.display().to_string(),
            }));
        }
        info!(files = index.len(), "found SVG files");

        self.enter(Phase::Resolving);
        let resolution = resolve(specs, &index);
        for miss in &resolution.misses {
            warn!(icon = %miss.name, file = %miss.file, "no SVG source matches icon");
        }

        self.enter(Phase::PreparingOutput);
        if let Err(e) = prepare(&self.options.out_dir).await {
            return Err(self.abort(e));
        }

        self.enter(Phase::Generating);
        let mut summary = RunSummary {
            svg_files_found: index.len(),
            icons_matched: resolution.matches.len(),
            icons_missed: resolution.misses.len(),
            ..RunSummary::default()
        };

        // Export lines land in per-match slots so the barrel keeps
        // configuration order regardless of completion order.
        let mut slots: Vec<Option<String>> = vec![None; resolution.matches.len()];
        let mut tasks = JoinSet::new();
        for (slot, icon) in resolution.matches.into_iter().enumerate() {
            let out_dir = self.options.out_dir.clone();
            let transform = Arc::clone(&self.transform);
            let declarations = self.options.declarations;
            tasks.spawn(async move {
                (slot, generate_icon(icon, out_dir, transform, declarations).await)
            });
        }
        while let Some(joined) = tasks.join_next().await {
            let Ok((slot, output)) = joined else {
                continue;
            };
            summary.files_written += output.files_written;
            if output.dropped {
                summary.icons_dropped += 1;
            }
            slots[slot] = output.export_line;
        }

        self.enter(Phase::Reporting);
        let exports: Vec<String> = slots.into_iter().flatten().collect();
        summary.icons_exported = exports.len();
        let barrel = if exports.is_empty() {
            String::new()
        } else {
            exports.join("\n") + "\n"
        };
        match fs::write(self.options.out_dir.join(BARREL_FILE), barrel).await {
            Ok(()) => summary.files_written += 1,
            Err(e) => warn!(error = %e, "failed to write barrel module"),
        }
        info!(
            found = summary.svg_files_found,
            matched = summary.icons_matched,
            missed = summary.icons_missed,
            dropped = summary.icons_dropped,
            written = summary.files_written,
            "run complete"
        );

        self.enter(Phase::Done);
        Ok(summary)
    }
}
