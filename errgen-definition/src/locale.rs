use std::fmt;

/// A supported message language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    ZhCn,
    EnUs,
}

impl Locale {
    /// Every locale, in registration order.
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    /// Registry key used by the generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh_cn",
            Self::EnUs => "en_us",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
