use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use errgen_core::{GeneratedFile, Result, Template, TemplateContext};

/// Name of the shared support file.
pub const SUPPORT_FILE_NAME: &str = "error.go";

const TEMPLATE: &str = r#"// Code auto generated, DO NOT EDIT.
package {{package}}

// ErrorMsg is a localized error message.
type ErrorMsg string

func (e ErrorMsg) Error() string {
	return string(e)
}

// ErrorCode identifies an error condition independently of its message.
type ErrorCode string

func (e ErrorCode) Error() string {
	return "error code: " + string(e)
}

// Registry maps a locale to the message registered for each error code.
type Registry map[string]map[ErrorCode]ErrorMsg

// I18nError holds every registered message. It is created by the first
// registerError call during package initialization and only read afterwards.
var I18nError Registry

func registerError(lang string, code ErrorCode, msg ErrorMsg) {
	if I18nError == nil {
		I18nError = make(Registry)
	}
	I18nError.Register(lang, code, msg)
}

// Register associates msg with code for lang.
func (r Registry) Register(lang string, code ErrorCode, msg ErrorMsg) {
	msgs, ok := r[lang]
	if !ok {
		msgs = make(map[ErrorCode]ErrorMsg)
		r[lang] = msgs
	}
	msgs[code] = msg
}

// Lookup returns the message registered for err in lang. Errors that are not
// an ErrorCode keep their own text.
func (r Registry) Lookup(lang string, err error) string {
	code, ok := err.(ErrorCode)
	if !ok {
		return err.Error()
	}

	msgs, ok := r[lang]
	if !ok {
		return "Not register lang: " + lang
	}

	msg, ok := msgs[code]
	if !ok {
		return "Not register " + code.Error()
	}

	return string(msg)
}

// GetErrorMsg returns the message registered for err in lang.
func GetErrorMsg(lang string, err error) string {
	return I18nError.Lookup(lang, err)
}
"#;

/// The shared `error.go` file: error types, the registry and its lookup.
///
/// The content depends on the package name only, so regenerating it for
/// every definition keeps it current without changing it.
pub struct SupportGo<'a> {
    package: &'a str,
}

impl<'a> SupportGo<'a> {
    pub fn new(package: &'a str) -> Self {
        Self { package }
    }
}

impl TemplateContext for SupportGo<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (name == "package").then(|| self.package.into())
    }
}

impl GeneratedFile for SupportGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SUPPORT_FILE_NAME)
    }

    fn render(&self) -> Result<String> {
        Ok(Template::parse("support", TEMPLATE)?.render(self)?)
    }
}
