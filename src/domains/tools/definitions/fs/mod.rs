pub mod list_files;
pub mod read_file;
pub mod write_file;

pub use list_files::ListFilesTool;
pub use read_file::ReadFileTool;
pub use write_file::WriteFileTool;
