//! In-memory [`FileSystem`] that records every call, for tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DirEntryInfo, FileSystem, FsError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ReadDir(PathBuf),
    Read(PathBuf),
    Write(PathBuf, String),
}

#[derive(Default)]
pub(crate) struct RecordingFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashMap<PathBuf, Vec<DirEntryInfo>>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(self, path: impl Into<PathBuf>, entries: Vec<DirEntryInfo>) -> Self {
        self.dirs.lock().unwrap().insert(path.into(), entries);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
}

#[async_trait]
impl FileSystem for RecordingFileSystem {
    async fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, FsError> {
        self.record(Call::ReadDir(path.to_path_buf()));
        self.dirs
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::read_dir(path, not_found()))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        self.record(Call::Read(path.to_path_buf()));
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::read(path, not_found()))
    }

    async fn write(&self, path: &Path, content: &str) -> Result<(), FsError> {
        self.record(Call::Write(path.to_path_buf(), content.to_string()));
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
