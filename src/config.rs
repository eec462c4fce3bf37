use std::borrow::Cow;

/// Formatting options.
///
/// All fields have working defaults; construct one with struct update syntax
/// or through a [`FormatterBuilder`](crate::FormatterBuilder).
#[derive(Clone, Debug)]
pub struct Config {
    /// Indent unit prepended once per nesting level. Two spaces by default.
    pub indent: Cow<'static, str>,
    /// Element names treated as void in addition to the built-in set
    /// (`br`, `hr`, `img`, `input`). Compared ASCII-case-insensitively.
    pub extra_void_elements: Vec<Cow<'static, str>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            extra_void_elements: Vec::new(),
        }
    }
}

impl Config {
    /// Options suited to whole documents rather than editor fragments: the
    /// metadata elements that appear unclosed in `<head>` are treated as
    /// void, so they don't push the rest of the document one level deeper.
    pub fn full_document() -> Self {
        Self {
            extra_void_elements: vec!["meta".into(), "link".into(), "base".into()],
            ..Default::default()
        }
    }

    /// Current indent unit.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Replace the indent unit.
    pub fn set_indent(&mut self, value: impl Into<Cow<'static, str>>) {
        self.indent = value.into();
    }
}
