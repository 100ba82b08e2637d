//! Go code generator for errgen.
//!
//! Renders a per-code definition file and the shared `error.go` support file
//! into a Go package directory.

mod generator;
mod literal;
mod package;

pub mod files;

pub use generator::{GenerateResult, Generator};
pub use literal::go_string_content;
pub use package::{PackageError, resolve_package};
