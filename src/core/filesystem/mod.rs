// Filesystem driver used by the filesystem tools.
//
// The tools never touch `std::fs` or `tokio::fs` directly; they go through
// the `FileSystem` trait so the I/O layer can be swapped out in tests.

pub mod driver;
mod error;

pub use driver::{DirEntryInfo, FileSystem, TokioFileSystem};
pub use error::FsError;

#[cfg(test)]
pub(crate) mod mock;
