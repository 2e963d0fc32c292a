use super::{DirEntry, FileSystem};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::info;

/// Delegates reads to an inner file system and records writes without performing them
pub struct DryRunFileSystem<F: FileSystem> {
    inner: F,
    skipped: RwLock<Vec<PathBuf>>,
}

impl<F: FileSystem> DryRunFileSystem<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            skipped: RwLock::new(Vec::new()),
        }
    }

    /// Paths that would have been written or created
    pub fn skipped(&self) -> Vec<PathBuf> {
        self.skipped.read().unwrap().clone()
    }
}

impl<F: FileSystem> FileSystem for DryRunFileSystem<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        self.inner.read_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if !self.inner.is_dir(path) {
            info!(path = %path.display(), "dry run: would create directory");
            self.skipped.write().unwrap().push(path.to_path_buf());
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        info!(path = %path.display(), bytes = contents.len(), "dry run: would write file");
        self.skipped.write().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
