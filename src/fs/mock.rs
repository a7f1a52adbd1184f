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

/// In-memory file system; relative paths resolve against its root
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    read_only: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            read_only: RwLock::new(Vec::new()),
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

    /// Makes every write at or below `path` fail
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.read_only.write().unwrap().push(path);
    }

    /// Content of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
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

    fn check_writable(&self, path: &Path) -> Result<()> {
        if self
            .read_only
            .read()
            .unwrap()
            .iter()
            .any(|denied| path.starts_with(denied))
        {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
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

        if !files.contains_key(&path) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        let mut entries = Vec::new();
        for (file_path, entry) in files.iter() {
            if file_path.parent() == Some(path.as_path()) {
                let name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string();

                entries.push(DirEntry {
                    path: file_path.clone(),
                    name,
                    file_type: entry.file_type,
                });
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        self.check_writable(&path)?;
        let mut files = self.files.write().unwrap();
        if files
            .get(&path)
            .is_some_and(|e| e.file_type == FileType::File)
        {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        Self::ensure_parents(&mut files, &path);
        Ok(())
    }

    fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        let path = self.normalize_path(path);
        self.check_writable(&path)?;
        let mut files = self.files.write().unwrap();

        match path.parent() {
            Some(parent) if files.get(parent).map(|e| e.file_type) == Some(FileType::Directory) => {}
            _ => return Err(anyhow!("Parent directory missing: {:?}", path)),
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("test.txt", "hello");

        assert!(fs.is_file(Path::new("/mock/test.txt")));
        assert!(fs.is_dir(Path::new("/mock")));
    }

    #[test]
    fn test_read_dir_sorted() {
        let fs = MockFileSystem::new();
        fs.add_file("base/study_timeline.rs", "");
        fs.add_file("base/bookshelf.rs", "");
        fs.add_file("base/nested/deep.rs", "");

        let entries = fs.read_dir(Path::new("/mock/base")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name()).collect();
        assert_eq!(names, vec!["bookshelf.rs", "nested", "study_timeline.rs"]);
    }

    #[test]
    fn test_write_requires_parent() {
        let fs = MockFileSystem::new();
        assert!(fs
            .write_string(Path::new("/mock/generated/mod.rs"), "")
            .is_err());

        fs.create_dir_all(Path::new("/mock/generated")).unwrap();
        fs.write_string(Path::new("/mock/generated/mod.rs"), "x")
            .unwrap();
        assert_eq!(fs.contents("generated/mod.rs").as_deref(), Some("x"));
    }

    #[test]
    fn test_deny_writes() {
        let fs = MockFileSystem::new();
        fs.add_dir("generated");
        fs.deny_writes("generated/variant_7");

        assert!(fs
            .create_dir_all(Path::new("/mock/generated/variant_7"))
            .is_err());
        assert!(fs.create_dir_all(Path::new("/mock/generated/variant_8")).is_ok());
    }
}
