//! Output directory management
//!
//! The output directory is owned entirely by the pipeline: every run starts
//! by emptying it, so after [`prepare`] it contains only artifacts written
//! during the current run.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{GlyphGenError, Result};

/// Ensure `dist` exists and contains no files.
///
/// Creates the directory (with any missing ancestors) when absent; otherwise
/// deletes every direct child file. Subdirectories are left untouched.
/// Any failure here means the destination is unusable and is fatal.
/// Idempotent: a second call on an emptied directory is a no-op.
pub async fn prepare(dist: &Path) -> Result<()> {
    let unwritable = |e: std::io::Error| GlyphGenError::OutputDirUnwritable {
        path: dist.display().to_string(),
        source: e,
    };

    match fs::metadata(dist).await {
        Err(_) => {
            fs::create_dir_all(dist).await.map_err(unwritable)?;
            debug!(dir = %dist.display(), "created output directory");
            Ok(())
        }
        Ok(meta) if !meta.is_dir() => {
            Err(unwritable(std::io::Error::other("exists but is not a directory")))
        }
        Ok(_) => {
            let mut entries = fs::read_dir(dist).await.map_err(unwritable)?;
            while let Some(entry) = entries.next_entry().await.map_err(unwritable)? {
                let is_file = entry
                    .file_type()
                    .await
                    .map(|t| t.is_file())
                    .unwrap_or(false);
                if is_file {
                    let path = entry.path();
                    fs::remove_file(&path).await.map_err(unwritable)?;
                    debug!(file = %path.display(), "removed stale artifact");
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_missing_directory_with_ancestors() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join("deep").join("icons");

        prepare(&dist).await.unwrap();

        assert!(dist.is_dir());
        assert_eq!(std::fs::read_dir(&dist).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_clears_stale_files() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().to_path_buf();
        std::fs::write(dist.join("stale.tsx"), "old").unwrap();
        std::fs::write(dist.join("index.ts"), "old").unwrap();

        prepare(&dist).await.unwrap();

        assert!(dist.is_dir());
        assert_eq!(std::fs::read_dir(&dist).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_leaves_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().to_path_buf();
        std::fs::create_dir(dist.join("keep")).unwrap();
        std::fs::write(dist.join("stale.tsx"), "old").unwrap();

        prepare(&dist).await.unwrap();

        assert!(dist.join("keep").is_dir());
        assert!(!dist.join("stale.tsx").exists());
    }

    #[tokio::test]
    async fn test_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join("icons");

        prepare(&dist).await.unwrap();
        prepare(&dist).await.unwrap();

        assert!(dist.is_dir());
        assert_eq!(std::fs::read_dir(&dist).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_file_at_destination() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join("icons");
        std::fs::write(&dist, "not a directory").unwrap();

        let err = prepare(&dist).await.unwrap_err();
        assert!(matches!(err, GlyphGenError::OutputDirUnwritable { .. }));
    }
}
