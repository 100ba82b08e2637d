//! Generated Go files.

mod definition_go;
mod support_go;

pub use definition_go::DefinitionGo;
pub use support_go::{SUPPORT_FILE_NAME, SupportGo};
