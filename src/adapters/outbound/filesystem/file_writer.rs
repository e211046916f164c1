use crate::ports::outbound::OutputPresenter;
use crate::shared::security::validate_not_symlink;
use crate::shared::{CatalogError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing a rendered screen to a file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        CatalogError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }

    /// Refuses to write through an existing symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("catalog.md");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("# App Catalog").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# App Catalog");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("catalog.json");
        fs::write(&output_path, "old").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/catalog.md");

        let result = FileSystemWriter::new(output_path).present("content");

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::FileWriteError { .. })
        ));
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.md");
        let link = temp_dir.path().join("link.md");
        fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("overwrite").unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        assert!(presenter.present("test output\n").is_ok());
    }
}
