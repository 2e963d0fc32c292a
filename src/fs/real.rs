use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = if path.is_file() {
                FileType::File
            } else if path.is_dir() {
                FileType::Directory
            } else {
                FileType::Symlink
            };

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context(format!("Failed to create directory {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).context(format!("Failed to write file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir(base.join("send-metrics")).unwrap();
        fs::File::create(base.join("main.tf"))
            .unwrap()
            .write_all(b"bucket = \"x\"")
            .unwrap();
        fs::File::create(base.join("send-metrics/index.js"))
            .unwrap()
            .write_all(b"exports.handler = async () => {};")
            .unwrap();

        dir
    }

    #[test]
    fn test_exists() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(temp.path()));
        assert!(fs.exists(&temp.path().join("main.tf")));
        assert!(!fs.exists(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.is_dir(&temp.path().join("send-metrics")));
        assert!(!fs.is_dir(&temp.path().join("main.tf")));
        assert!(fs.is_file(&temp.path().join("main.tf")));
        assert!(!fs.is_file(temp.path()));
    }

    #[test]
    fn test_read_dir_is_sorted() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let entries = fs.read_dir(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name()).collect();

        assert_eq!(names, vec!["main.tf", "send-metrics"]);
        assert!(entries[1].is_dir());
    }

    #[test]
    fn test_write_and_read_back() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();
        let path = temp.path().join("out/nested");

        fs.create_dir_all(&path).unwrap();
        fs.write(&path.join("a.json"), "{}").unwrap();

        assert_eq!(fs.read_to_string(&path.join("a.json")).unwrap(), "{}");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.read_to_string(&temp.path().join("missing.tf")).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.tf"));
    }
}
