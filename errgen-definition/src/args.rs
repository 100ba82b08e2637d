use crate::{Error, ErrorDefinition, Locale, Result};

/// Command line usage, in binding order.
pub const USAGE: &str = "errgen <VARIABLE_NAME> <CODE> <ZH_CN_MSG> <EN_US_MSG>";

type Setter = fn(&mut ErrorArgs, String);

/// Positional bindings, in argument order.
///
/// The target package is not listed: it is resolved from the output directory
/// after binding, see [`ErrorArgs::in_package`].
static BINDINGS: [(&str, Setter); 4] = [
    ("variable_name", |args: &mut ErrorArgs, value: String| args.variable_name = value),
    ("code", |args: &mut ErrorArgs, value: String| args.code = value),
    ("zh_cn_msg", |args: &mut ErrorArgs, value: String| args.zh_cn_msg = value),
    ("en_us_msg", |args: &mut ErrorArgs, value: String| args.en_us_msg = value),
];

/// The user-supplied half of an error definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorArgs {
    variable_name: String,
    code: String,
    zh_cn_msg: String,
    en_us_msg: String,
}

impl ErrorArgs {
    /// Bind arguments (without the program name) to fields, in order.
    ///
    /// Fails without binding anything unless exactly one argument per field
    /// is given. The code must be usable as a file name in the output
    /// directory.
    pub fn bind<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = args.into_iter().map(Into::into).collect();
        if values.len() != BINDINGS.len() {
            return Err(Box::new(Error::Usage {
                expected: BINDINGS.len(),
                actual: values.len(),
                usage: USAGE,
            }));
        }

        let mut bound = Self::default();
        for ((_, set), value) in BINDINGS.iter().zip(values) {
            set(&mut bound, value);
        }
        check_code(&bound.code)?;
        Ok(bound)
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Message bound for `locale`.
    pub fn message(&self, locale: Locale) -> &str {
        match locale {
            Locale::ZhCn => &self.zh_cn_msg,
            Locale::EnUs => &self.en_us_msg,
        }
    }

    /// Complete the definition with the package resolved for the output directory.
    pub fn in_package(self, package: impl Into<String>) -> ErrorDefinition {
        ErrorDefinition::new(self, package.into())
    }
}

/// The code must be a single path component so `<code>.go` stays in the
/// output directory.
fn check_code(code: &str) -> Result<()> {
    let reason = if code.is_empty() {
        "must not be empty"
    } else if code.contains(['/', '\\']) {
        "must not contain path separators"
    } else if code == "." || code == ".." {
        "must not be a relative directory"
    } else if code.contains('\0') {
        "must not contain NUL"
    } else {
        return Ok(());
    };

    Err(Box::new(Error::InvalidCode {
        code: code.to_string(),
        reason,
    }))
}
