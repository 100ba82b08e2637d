//! Generate operation - Go error definition and support files.

use std::path::Path;

use errgen_codegen_go::{Generator, resolve_package};
use errgen_definition::ErrorArgs;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Resolves the Go package in `dir`, then writes the definition file and the
/// support file into it.
pub fn generate(args: ErrorArgs, dir: &Path) -> Result<GenerateReport> {
    let package = resolve_package(dir)
        .wrap_err_with(|| format!("Failed to resolve the Go package in '{}'", dir.display()))?;
    let definition = args.in_package(package);

    let result = Generator::new(&definition)
        .generate(dir)
        .wrap_err("Failed to generate code")?;

    let files = result
        .files
        .iter()
        .map(|path| path.strip_prefix(dir).unwrap_or(path).display().to_string())
        .collect();

    Ok(GenerateReport {
        package: definition.package().to_string(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn args() -> ErrorArgs {
        ErrorArgs::bind(["ErrTooManyRequests", "E1001", "请求过多", "too many requests"]).unwrap()
    }

    #[test]
    fn test_generate_reports_relative_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("codes.go"), "package errs\n").unwrap();

        let report = generate(args(), temp.path()).unwrap();

        assert_eq!(report.package, "errs");
        assert_eq!(report.files, ["E1001.go", "error.go"]);
    }

    #[test]
    fn test_generate_without_package_writes_nothing() {
        let temp = TempDir::new().unwrap();

        let err = generate(args(), temp.path()).unwrap_err();

        assert!(err.to_string().starts_with("Failed to resolve the Go package"));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
