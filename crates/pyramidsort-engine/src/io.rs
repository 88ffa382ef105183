use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a text file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.ts");
        fs::write(&path, "const a = 1\nconst bb = 2").unwrap();

        let content = read_file(&path).unwrap();
        assert_eq!(content, "const a = 1\nconst bb = 2");
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(&dir.path().join("missing.ts"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ts");

        write_file(&path, "sorted content\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "sorted content\n");
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.ts");

        write_file(&path, "content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ts");

        write_file(&path, "original").unwrap();
        write_file(&path, "updated").unwrap();
        assert_eq!(read_file(&path).unwrap(), "updated");
    }
}
