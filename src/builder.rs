use std::borrow::Cow;

use crate::{config::Config, formatter::HtmlFormatter};

/// Configures [`HtmlFormatter`]s.
///
/// ```rust
/// use html_fmt::FormatterBuilder;
///
/// let mut builder = FormatterBuilder::default();
/// builder.indent("    ").extra_void_element("meta");
/// let formatter = builder.build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatterBuilder {
    config: Config,
}

impl FormatterBuilder {
    /// Create a builder seeded with an existing [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the indent unit used for each nesting level.
    pub fn indent(&mut self, indent: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.indent = indent.into();
        self
    }

    /// Treat `name` as a void element in addition to the built-in set.
    pub fn extra_void_element(&mut self, name: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.extra_void_elements.push(name.into());
        self
    }

    /// Finalize the configuration into an [`HtmlFormatter`].
    pub fn build(self) -> HtmlFormatter {
        HtmlFormatter::with_config(self.config)
    }
}
