//! Core utilities for errgen.
//!
//! This crate provides the substitution templates and the write path shared
//! by the errgen code generators.

mod error;
mod file;
mod template;

pub use error::{Error, Result};
// File operations
pub use file::GeneratedFile;
// Templates
pub use template::{Template, TemplateContext, TemplateError};
