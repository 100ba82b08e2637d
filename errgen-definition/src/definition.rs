use crate::{ErrorArgs, Locale};

/// A bound error definition together with the package it is generated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDefinition {
    args: ErrorArgs,
    package: String,
}

impl ErrorDefinition {
    pub(crate) fn new(args: ErrorArgs, package: String) -> Self {
        Self { args, package }
    }

    /// Name of the generated constant.
    pub fn variable_name(&self) -> &str {
        self.args.variable_name()
    }

    /// Error code, also the stem of the definition file name.
    pub fn code(&self) -> &str {
        self.args.code()
    }

    /// Message registered for `locale`.
    pub fn message(&self, locale: Locale) -> &str {
        self.args.message(locale)
    }

    /// Package the generated files declare.
    pub fn package(&self) -> &str {
        &self.package
    }
}
