//! End-to-end tests running the errgen binary in a temporary Go package.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn errgen(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_errgen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run errgen")
}

fn package_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("codes.go"), "package errs\n").unwrap();
    temp
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_definition_and_support_files() {
    let temp = package_dir();

    let output = errgen(
        temp.path(),
        &["ErrTooManyRequests", "E1001", "请求过多", "too many requests"],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(file_names(temp.path()), ["E1001.go", "codes.go", "error.go"]);

    let definition = fs::read_to_string(temp.path().join("E1001.go")).unwrap();
    assert!(definition.contains("package errs\n"));
    assert!(definition.contains("const ErrTooManyRequests ErrorCode = \"E1001\"\n"));
    assert!(definition.contains(
        "\tregisterError(\"en_us\", ErrTooManyRequests, ErrorMsg(\"too many requests\"))\n"
    ));

    let support = fs::read_to_string(temp.path().join("error.go")).unwrap();
    assert!(support.contains("package errs\n"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Package: errs\nGenerated:\n  + E1001.go\n  + error.go\n"
    );
}

#[test]
fn test_wrong_argument_count_creates_no_files() {
    let temp = package_dir();

    for args in [
        &[][..],
        &["ErrTooManyRequests", "E1001", "请求过多"][..],
        &["ErrTooManyRequests", "E1001", "请求过多", "too many requests", "extra"][..],
    ] {
        let output = errgen(temp.path(), args);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("expected 4 arguments"), "{}", stderr);
        assert_eq!(file_names(temp.path()), ["codes.go"]);
    }
}

#[test]
fn test_outside_go_package_fails() {
    let temp = TempDir::new().unwrap();

    let output = errgen(
        temp.path(),
        &["ErrTooManyRequests", "E1001", "请求过多", "too many requests"],
    );

    assert!(!output.status.success());
    assert!(file_names(temp.path()).is_empty());
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = package_dir();
    let args = ["ErrTooManyRequests", "E1001", "请求过多", "too many requests"];

    assert!(errgen(temp.path(), &args).status.success());
    let definition = fs::read(temp.path().join("E1001.go")).unwrap();
    let support = fs::read(temp.path().join("error.go")).unwrap();

    assert!(errgen(temp.path(), &args).status.success());
    assert_eq!(fs::read(temp.path().join("E1001.go")).unwrap(), definition);
    assert_eq!(fs::read(temp.path().join("error.go")).unwrap(), support);
}

#[test]
fn test_hyphenated_values_are_positional() {
    let temp = package_dir();

    let output = errgen(temp.path(), &["ErrNegative", "-1", "-负数", "-negative"]);

    assert!(output.status.success(), "{:?}", output);
    let definition = fs::read_to_string(temp.path().join("-1.go")).unwrap();
    assert!(definition.contains("ErrorMsg(\"-negative\")"));
}

#[test]
fn test_leading_help_and_version_flags_write_nothing() {
    let temp = package_dir();

    let help = errgen(temp.path(), &["--help", "E1001", "请求过多", "too many requests"]);
    assert!(help.status.success(), "{:?}", help);
    assert!(String::from_utf8_lossy(&help.stdout).contains("<VARIABLE_NAME> <CODE>"));

    let version = errgen(temp.path(), &["-V"]);
    assert!(version.status.success(), "{:?}", version);
    assert!(String::from_utf8_lossy(&version.stdout).starts_with("errgen "));

    assert_eq!(file_names(temp.path()), ["codes.go"]);
}

#[test]
fn test_code_named_like_support_file_fails() {
    let temp = package_dir();

    let output = errgen(temp.path(), &["ErrX", "error", "错误", "error"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error.go"), "{}", stderr);
    assert_eq!(file_names(temp.path()), ["codes.go"]);
}

#[test]
fn test_code_with_path_separator_fails() {
    let temp = package_dir();

    let output = errgen(temp.path(), &["ErrX", "../E1001", "错误", "error"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid error code"), "{}", stderr);
    assert_eq!(file_names(temp.path()), ["codes.go"]);
}
