//! In-memory mock filesystem for testing collectors without real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores file contents keyed by path, so tests can simulate `/proc` states
/// (live processes, zombies, vanished pids) on any platform.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Adds `/proc/[pid]/stat` for a process.
    pub fn add_stat(&mut self, pid: i32, stat: &str) {
        self.add_file(format!("/proc/{}/stat", pid), stat);
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("file not found: {:?}", path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/42/stat", "42 (x) R ...");

        let content = fs.read_to_string(Path::new("/proc/42/stat")).unwrap();
        assert_eq!(content, "42 (x) R ...");
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/proc/1/stat"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
