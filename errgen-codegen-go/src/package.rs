//! Go package name resolution for an output directory.
//!
//! The generated files must join the package that already lives in the
//! directory, so the name is read from the package clauses of its `.go` files,
//! applying the same file selection the Go build tool uses for a plain build.

use std::{
    fs,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

/// Package clauses naming this package are ignored (`doc.go` convention).
const DOCUMENTATION_PACKAGE: &str = "documentation";

const TEST_FILE_SUFFIX: &str = "_test.go";
const TEST_PACKAGE_SUFFIX: &str = "_test";

#[derive(Debug, Error, Diagnostic)]
pub enum PackageError {
    #[error("failed to read directory '{}'", dir.display())]
    #[diagnostic(code(errgen::package::read_dir))]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(errgen::package::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' has no package clause", path.display())]
    #[diagnostic(
        code(errgen::package::missing_clause),
        help("every Go source file must start with `package <name>`")
    )]
    MissingClause { path: PathBuf },

    #[error("no Go source files in '{}'", dir.display())]
    #[diagnostic(
        code(errgen::package::no_go_files),
        help("run errgen inside a Go package directory, next to a file declaring `package <name>`")
    )]
    NoGoFiles { dir: PathBuf },

    #[error(
        "found packages {first} ({}) and {second} ({}) in '{}'",
        first_file.display(),
        second_file.display(),
        dir.display()
    )]
    #[diagnostic(code(errgen::package::multiple_packages))]
    MultiplePackages {
        dir: PathBuf,
        first: String,
        first_file: PathBuf,
        second: String,
        second_file: PathBuf,
    },
}

/// Resolve the name of the Go package in `dir`.
pub fn resolve_package(dir: &Path) -> Result<String, PackageError> {
    let read_dir_error = |source| PackageError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if is_source_file_name(name) && path.is_file() {
            let is_test = name.ends_with(TEST_FILE_SUFFIX);
            sources.push((path, is_test));
        }
    }
    // Directory order is unspecified
    sources.sort();

    let mut found: Option<(String, PathBuf)> = None;
    for (path, is_test) in sources {
        let bytes = fs::read(&path).map_err(|source| PackageError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let Some(header) = parse_header(&String::from_utf8_lossy(&bytes)) else {
            return Err(PackageError::MissingClause { path });
        };
        if header.ignored || header.package == DOCUMENTATION_PACKAGE {
            continue;
        }

        let mut package = header.package;
        // External test packages (`package foo_test`) belong to `foo`
        let is_external_test = is_test
            && package.ends_with(TEST_PACKAGE_SUFFIX)
            && found.as_ref().is_none_or(|(first, _)| *first != package);
        if is_external_test {
            package.truncate(package.len() - TEST_PACKAGE_SUFFIX.len());
        }

        match &found {
            None => found = Some((package, path)),
            Some((first, first_file)) if *first != package => {
                return Err(PackageError::MultiplePackages {
                    dir: dir.to_path_buf(),
                    first: first.clone(),
                    first_file: first_file.clone(),
                    second: package,
                    second_file: path,
                });
            }
            Some(_) => {}
        }
    }

    found
        .map(|(package, _)| package)
        .ok_or_else(|| PackageError::NoGoFiles {
            dir: dir.to_path_buf(),
        })
}

fn is_source_file_name(name: &str) -> bool {
    name.ends_with(".go") && !name.starts_with('_') && !name.starts_with('.')
}

#[derive(Debug, PartialEq, Eq)]
struct Header {
    package: String,
    ignored: bool,
}

/// Read the comments and package clause at the top of a Go source file.
fn parse_header(src: &str) -> Option<Header> {
    let mut rest = src.strip_prefix('\u{feff}').unwrap_or(src);
    let mut ignored = false;

    loop {
        rest = rest.trim_start();
        if let Some(comment) = rest.strip_prefix("//") {
            let (line, tail) = comment.split_once('\n').unwrap_or((comment, ""));
            ignored |= is_ignore_constraint(line);
            rest = tail;
        } else if let Some(comment) = rest.strip_prefix("/*") {
            let end = comment.find("*/")?;
            rest = &comment[end + 2..];
        } else {
            break;
        }
    }

    let clause = rest.strip_prefix("package")?;
    if !clause.starts_with(char::is_whitespace) {
        return None;
    }
    let package: String = clause
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if package.is_empty() {
        return None;
    }

    Some(Header { package, ignored })
}

/// `//go:build ignore` or `// +build ignore`, given the text after `//`.
fn is_ignore_constraint(line: &str) -> bool {
    let line = line.trim_end();
    if let Some(expr) = line.strip_prefix("go:build") {
        return expr.trim() == "ignore";
    }
    line.trim_start()
        .strip_prefix("+build")
        .is_some_and(|expr| expr.trim() == "ignore")
}
