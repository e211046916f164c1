/// Filesystem adapters for writing rendered screens
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
