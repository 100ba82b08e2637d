use std::path::PathBuf;

use thiserror::Error;

use crate::TemplateError;

/// Result type for generated file operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("more than one generated file would be written to '{}'", path.display())]
    PathConflict { path: PathBuf },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
