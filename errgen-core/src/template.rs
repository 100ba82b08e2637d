//! Straight substitution templates.
//!
//! A template is literal text with `{{name}}` placeholders. Rendering replaces
//! each placeholder with the value a [`TemplateContext`] provides for it; there
//! are no conditionals, loops or pipelines.

use std::borrow::Cow;

use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Values available to a template while rendering.
pub trait TemplateContext {
    /// Look up the value for a placeholder name.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{template}': unclosed placeholder at byte {offset}")]
    Unclosed { template: String, offset: usize },

    #[error("template '{template}': invalid placeholder '{{{{{placeholder}}}}}' at byte {offset}")]
    InvalidPlaceholder {
        template: String,
        offset: usize,
        placeholder: String,
    },

    #[error("template '{template}': no value for field '{field}'")]
    UnknownField { template: String, field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(String),
}

/// A parsed substitution template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. `name` only appears in error messages.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }

            let inner = &rest[start + OPEN.len()..];
            let Some(end) = inner.find(CLOSE) else {
                return Err(TemplateError::Unclosed {
                    template: name,
                    offset: offset + start,
                });
            };

            let field = inner[..end].trim();
            if !is_field_name(field) {
                return Err(TemplateError::InvalidPlaceholder {
                    template: name,
                    offset: offset + start,
                    placeholder: inner[..end].to_string(),
                });
            }
            segments.push(Segment::Field(field.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Substitute every placeholder with its value from `ctx`.
    pub fn render(&self, ctx: &impl TemplateContext) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(field) => {
                    let value = ctx.field(field).ok_or_else(|| TemplateError::UnknownField {
                        template: self.name.clone(),
                        field: field.clone(),
                    })?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

fn is_field_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
