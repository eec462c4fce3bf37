use std::fmt::Write;

use crate::{
    config::Config,
    scanner::{classify, TagKind, Token, Tokens},
};

/// Re-indents flat HTML markup, one token per line.
///
/// The formatter is purely lexical: it never builds a tree and never
/// validates the markup, so it accepts arbitrary strings. Unmatched closing
/// tags clamp the depth at zero instead of failing.
#[derive(Clone, Debug, Default)]
pub struct HtmlFormatter {
    pub(crate) config: Config,
}

impl HtmlFormatter {
    /// Create an [`HtmlFormatter`] with a custom [`Config`].
    ///
    /// ```rust
    /// # use html_fmt::{Config, HtmlFormatter};
    /// let formatter = HtmlFormatter::with_config(Config {
    ///     indent: "\t".into(),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Format an HTML snippet.
    ///
    /// ```rust
    /// # use html_fmt::HtmlFormatter;
    /// let formatter = HtmlFormatter::default();
    /// let rewrite = formatter.format("<p>Hi there</p>").unwrap();
    /// assert_eq!(rewrite, "<p>\n  Hi there\n</p>");
    /// ```
    pub fn format(self, input: &str) -> Result<String, std::fmt::Error> {
        let mut output = String::with_capacity(input.len() + input.len() / 4);
        let mut depth = 0usize;

        for token in Tokens::new(input) {
            match token {
                Token::Text(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.write_line(&mut output, depth, trimmed)?;
                }
                Token::Tag(tag) => match classify(tag, &self.config.extra_void_elements) {
                    TagKind::Close => {
                        depth = depth.saturating_sub(1);
                        self.write_line(&mut output, depth, tag)?;
                    }
                    TagKind::Void => self.write_line(&mut output, depth, tag)?,
                    TagKind::Open => {
                        self.write_line(&mut output, depth, tag)?;
                        depth += 1;
                    }
                },
            }
        }

        if depth != 0 {
            tracing::trace!(depth, "input had unclosed open tags");
        }
        while output.ends_with('\n') {
            output.pop();
        }
        Ok(output)
    }

    fn write_line(&self, output: &mut String, depth: usize, content: &str) -> std::fmt::Result {
        for _ in 0..depth {
            output.push_str(&self.config.indent);
        }
        writeln!(output, "{content}")
    }
}
