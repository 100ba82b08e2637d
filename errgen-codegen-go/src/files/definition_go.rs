use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use errgen_core::{GeneratedFile, Result, Template, TemplateContext};
use errgen_definition::{ErrorDefinition, Locale};

use crate::go_string_content;

const TEMPLATE: &str = r#"// Code auto generated, DO NOT EDIT.
package {{package}}

const {{variable_name}} ErrorCode = "{{code}}"

func init() {
	registerError("zh_cn", {{variable_name}}, ErrorMsg("{{zh_cn_msg}}"))
	registerError("en_us", {{variable_name}}, ErrorMsg("{{en_us_msg}}"))
}
"#;

/// The `<code>.go` file declaring one error constant and registering its messages.
pub struct DefinitionGo<'a> {
    definition: &'a ErrorDefinition,
}

impl<'a> DefinitionGo<'a> {
    pub fn new(definition: &'a ErrorDefinition) -> Self {
        Self { definition }
    }

    fn message_field(&self, name: &str) -> Option<&'a str> {
        let key = name.strip_suffix("_msg")?;
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str() == key)
            .map(|locale| self.definition.message(locale))
    }
}

impl TemplateContext for DefinitionGo<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "package" => Some(self.definition.package().into()),
            "variable_name" => Some(self.definition.variable_name().into()),
            "code" => Some(go_string_content(self.definition.code())),
            _ => self.message_field(name).map(go_string_content),
        }
    }
}

impl GeneratedFile for DefinitionGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.go", self.definition.code()))
    }

    fn render(&self) -> Result<String> {
        Ok(Template::parse("definition", TEMPLATE)?.render(self)?)
    }
}
