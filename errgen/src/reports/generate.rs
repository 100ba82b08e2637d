//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package the generated files belong to.
    pub package: String,
    /// Written files relative to the output directory, in write order.
    pub files: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.package);
        out.section("Generated");
        for file in &self.files {
            out.added_item(file);
        }
    }
}
