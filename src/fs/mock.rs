use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
}

/// In-memory file system for exercising pipeline stages without touching disk
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    writes: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            writes: RwLock::new(Vec::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Current content of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
    }

    /// Every path passed to `write`, in call order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();

        match files.get(&path) {
            None => return Err(anyhow!("Directory not found: {:?}", path)),
            Some(e) if e.file_type != FileType::Directory => {
                return Err(anyhow!("Not a directory: {:?}", path))
            }
            Some(_) => {}
        }

        let mut entries: Vec<DirEntry> = files
            .iter()
            .filter(|(file_path, _)| file_path.parent() == Some(path.as_path()))
            .map(|(file_path, entry)| DirEntry {
                path: file_path.clone(),
                name: file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                file_type: entry.file_type,
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if files.get(&path).is_some_and(|e| e.file_type == FileType::File) {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        Self::ensure_parents(&mut files, &path);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        let parent_is_dir = path
            .parent()
            .and_then(|p| files.get(p))
            .is_some_and(|e| e.file_type == FileType::Directory);
        if !parent_is_dir {
            return Err(anyhow!("Parent directory missing for {:?}", path));
        }

        files.insert(
            path.clone(),
            MockEntry {
                content: Some(contents.to_string()),
                file_type: FileType::File,
            },
        );
        self.writes.write().unwrap().push(path);
        Ok(())
    }
}
