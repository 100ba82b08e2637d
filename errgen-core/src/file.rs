use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that represent a generated file.
///
/// Generated files are always overwritten: running a generator twice with the
/// same input leaves byte-identical files behind.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Render the file and write it to disk, returning the written path.
    ///
    /// Nothing is written when rendering fails.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        let content = self.render()?;
        write_file(&path, &content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
