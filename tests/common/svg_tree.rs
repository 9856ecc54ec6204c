//! On-disk SVG library fixture builder

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A realistic source document: XML prolog, license comment, class attribute,
/// compound attribute names.
pub const SAMPLE_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- sample icon -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="icon">
  <path fill-rule="evenodd" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z"/>
</svg>
"#;

/// Builder for a temporary SVG library tree used as pipeline input.
pub struct SvgTree {
    root: TempDir,
}

impl SvgTree {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write `SAMPLE_SVG` as `{rel_dir}/{stem}.svg`, creating directories.
    pub fn add_svg(&self, rel_dir: &str, stem: &str) -> PathBuf {
        self.add_svg_with(rel_dir, stem, SAMPLE_SVG)
    }

    pub fn add_svg_with(&self, rel_dir: &str, stem: &str, content: &str) -> PathBuf {
        let dir = self.root.path().join(rel_dir);
        fs::create_dir_all(&dir).expect("create fixture dir");
        let path = dir.join(format!("{stem}.svg"));
        fs::write(&path, content).expect("write fixture svg");
        path
    }

    /// Write an arbitrary file (non-SVG fixtures, hidden entries).
    pub fn add_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }
}

impl Default for SvgTree {
    fn default() -> Self {
        Self::new()
    }
}
