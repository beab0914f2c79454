//! Filesystem driver trait and the tokio-backed implementation.
//!
//! Three primitives are exposed: enumerate a directory, read a whole file
//! as text, and write a whole file (create or overwrite).

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::FsError;

/// One directory entry as reported by [`FileSystem::read_dir`].
///
/// The type flags come from the entry itself without following symlinks,
/// so exactly one of them is set for regular files, directories and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntryInfo {
    pub name: String,
    pub is_directory: bool,
    pub is_file: bool,
    pub is_symbolic_link: bool,
}

/// Filesystem primitives used by the filesystem tools.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the entries of a directory.
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, FsError>;

    /// Read an entire file as UTF-8 text.
    async fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Write `content` to `path`, creating the file or truncating it first.
    async fn write(&self, path: &Path, content: &str) -> Result<(), FsError>;
}

/// [`FileSystem`] over `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, FsError> {
        let mut dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| FsError::read_dir(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| FsError::read_dir(path, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| FsError::read_dir(entry.path(), e))?;

            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: file_type.is_dir(),
                is_file: file_type.is_file(),
                is_symbolic_link: file_type.is_symlink(),
            });
        }

        debug!("Read {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FsError::read(path, e))
    }

    async fn write(&self, path: &Path, content: &str) -> Result<(), FsError> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| FsError::write(path, e))
    }
}
