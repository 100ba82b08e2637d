use std::path::{Path, PathBuf};

use errgen_core::{Error, GeneratedFile, Result};
use errgen_definition::ErrorDefinition;

use crate::files::{DefinitionGo, SupportGo};

/// Go code generator for a single error definition
pub struct Generator<'a> {
    definition: &'a ErrorDefinition,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Written files, in write order
    pub files: Vec<PathBuf>,
}

impl<'a> Generator<'a> {
    pub fn new(definition: &'a ErrorDefinition) -> Self {
        Self { definition }
    }

    /// The `<code>.go` definition file.
    pub fn definition_file(&self) -> DefinitionGo<'a> {
        DefinitionGo::new(self.definition)
    }

    /// The shared `error.go` support file.
    pub fn support_file(&self) -> SupportGo<'a> {
        SupportGo::new(self.definition.package())
    }

    /// Write the definition file, then the support file, into `output_dir`.
    ///
    /// Nothing is written when the definition file would replace the support
    /// file. Otherwise stops at the first failure; files already written are
    /// left in place.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let definition = self.definition_file();
        let support = self.support_file();

        let path = definition.path(output_dir);
        if path == support.path(output_dir) {
            return Err(Error::PathConflict { path });
        }

        let files = vec![definition.write(output_dir)?, support.write(output_dir)?];
        Ok(GenerateResult { files })
    }
}
