//! Workspace collaborator interface
//!
//! The core never touches storage directly; hosts hand it an implementation
//! of this trait. `FsWorkspace` is the plain-filesystem implementation used
//! by the CLI host.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// File and path access supplied by the host environment
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Read the full text of a file
    async fn read_file_content(&self, path: &Path) -> io::Result<String>;

    /// Root of the workspace, if one is open
    fn workspace_path(&self) -> Option<PathBuf>;

    /// Path relative to the workspace root; unchanged when outside it
    fn relative_path(&self, path: &Path) -> PathBuf;
}

/// Filesystem-backed workspace rooted at a directory
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    /// Create a workspace rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Workspace for FsWorkspace {
    async fn read_file_content(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    fn workspace_path(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_inside_root() {
        let workspace = FsWorkspace::new("/work/project");

        let relative = workspace.relative_path(Path::new("/work/project/src/main.rs"));
        assert_eq!(relative, PathBuf::from("src/main.rs"));
    }

    #[test]
    fn test_relative_path_outside_root_is_unchanged() {
        let workspace = FsWorkspace::new("/work/project");

        let outside = workspace.relative_path(Path::new("/tmp/scratch.rs"));
        assert_eq!(outside, PathBuf::from("/tmp/scratch.rs"));
    }

    #[tokio::test]
    async fn test_read_file_content() {
        let dir = std::env::temp_dir().join("conclave-workspace-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file = dir.join("snippet.rs");
        tokio::fs::write(&file, "fn main() {}\n").await.unwrap();

        let workspace = FsWorkspace::new(&dir);
        let content = workspace.read_file_content(&file).await.unwrap();
        assert_eq!(content, "fn main() {}\n");

        assert!(workspace
            .read_file_content(&dir.join("missing.rs"))
            .await
            .is_err());
    }
}
