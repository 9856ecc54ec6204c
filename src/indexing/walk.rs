//! Recursive directory walk producing the source index

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::fs;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{GlyphGenError, Result};
use crate::slug::normalize;

/// Recognized vector-source extension (matched case-insensitively).
pub const SVG_EXTENSION: &str = "svg";

/// Index of discovered SVG sources: file-stem slug mapped to the directory
/// containing the file.
///
/// On slug collision the last-merged entry silently wins; the index never
/// holds more than one entry per slug. Which file wins is traversal-order
/// dependent and not guaranteed stable across runs.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    entries: HashMap<String, PathBuf>,
}

impl SourceIndex {
    pub fn insert(&mut self, slug: String, dir: PathBuf) {
        self.entries.insert(slug, dir);
    }

    pub fn get(&self, slug: &str) -> Option<&Path> {
        self.entries.get(slug).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, partial: SourceIndex) {
        self.entries.extend(partial.entries);
    }
}

/// Build the source index for `root`.
///
/// Fails fast when `root` itself cannot be read. Unreadable subtrees below
/// it are logged and contribute nothing; the index is best-effort over every
/// reachable entry.
pub async fn build_index(root: &Path) -> Result<SourceIndex> {
    if let Err(e) = fs::read_dir(root).await {
        return Err(GlyphGenError::SvgPathUnreadable {
            path: root.display().to_string(),
            source: e,
        });
    }

    Ok(scan_dir(root.to_path_buf()).await)
}

/// Scan one directory, fanning out over subdirectories and joining every
/// subtree before returning the merged partial index.
fn scan_dir(dir: PathBuf) -> Pin<Box<dyn Future<Output = SourceIndex> + Send>> {
    Box::pin(async move {
        let mut index = SourceIndex::default();

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return index;
            }
        };

        let mut subtrees = JoinSet::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "directory listing interrupted");
                    break;
                }
            };

            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }

            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not stat entry");
                    continue;
                }
            };

            if file_type.is_dir() {
                subtrees.spawn(scan_dir(path));
            } else if file_type.is_file() && has_svg_extension(&path) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    debug!(file = %path.display(), "indexed SVG source");
                    index.insert(normalize(stem), dir.clone());
                }
            }
        }

        while let Some(subtree) = subtrees.join_next().await {
            match subtree {
                Ok(partial) => index.merge(partial),
                Err(e) => warn!(error = %e, "subtree scan task failed"),
            }
        }

        index
    })
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SVG_EXTENSION))
}

/// Hidden entries (leading dot) are metadata in IconJar-style libraries.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
