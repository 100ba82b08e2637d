use miette::Diagnostic;
use thiserror::Error;

/// Result type for binding operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("expected {expected} arguments, got {actual}")]
    #[diagnostic(code(errgen::usage), help("usage: {usage}"))]
    Usage {
        expected: usize,
        actual: usize,
        usage: &'static str,
    },

    #[error("invalid error code '{code}': {reason}")]
    #[diagnostic(
        code(errgen::invalid_code),
        help("the code names the generated `<CODE>.go` file, so it must be a plain file name")
    )]
    InvalidCode { code: String, reason: &'static str },
}
