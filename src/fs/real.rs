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

        Ok(result)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context(format!("Failed to create directory {:?}", path))
    }

    fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).context(format!("Failed to write file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("base")).unwrap();
        fs::write(dir.path().join("base/bookshelf.rs"), "pub struct BookshelfView;\n").unwrap();
        dir
    }

    #[test]
    fn test_path_kinds() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.is_dir(temp.path()));
        assert!(fs.is_dir(&temp.path().join("base")));
        assert!(fs.is_file(&temp.path().join("base/bookshelf.rs")));
        assert!(!fs.is_file(&temp.path().join("nonexistent")));
        assert!(!fs.is_dir(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_read_dir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let entries = fs.read_dir(&temp.path().join("base")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name()).collect();
        assert_eq!(names, vec!["bookshelf.rs"]);
    }

    #[test]
    fn test_write_then_read() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();
        let dir = temp.path().join("generated/variant_101");

        fs.create_dir_all(&dir).unwrap();
        fs.write_string(&dir.join("mod.rs"), "mod component;\n").unwrap();

        assert_eq!(
            fs.read_to_string(&dir.join("mod.rs")).unwrap(),
            "mod component;\n"
        );
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let fs = RealFileSystem::new();
        let err = fs
            .read_to_string(Path::new("/definitely/not/here.rs"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
