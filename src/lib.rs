//! Easily re-indent HTML. [html_fmt] pretty-prints flat markup, the kind a
//! rich-text editor exports after every change, one tag or text run per line.
//!
//! [html_fmt]: index.html
//!
//! The splitting is purely lexical. No DOM is built and nothing is validated,
//! so formatting succeeds for any input string; markup with more closing than
//! opening tags simply clamps at the left margin.
//!
//! # Getting Started
//!
//! ```rust
//! use html_fmt::rewrite_html;
//!
//! let html = "<ul><li>one</li><li>two</li></ul>";
//!
//! let formatted = "\
//! <ul>
//!   <li>
//!     one
//!   </li>
//!   <li>
//!     two
//!   </li>
//! </ul>";
//!
//! let output = rewrite_html(html)?;
//! # assert_eq!(output, formatted);
//! # Ok::<(), std::fmt::Error>(())
//! ```
//!
//! # Using the [FormatterBuilder]
//!
//! The builder gives you more control over the output.
//!
//! ```rust
//! use html_fmt::{rewrite_html_with_builder, FormatterBuilder};
//!
//! let mut builder = FormatterBuilder::default();
//! builder.indent("    ").extra_void_element("meta");
//!
//! let html = r#"<head><meta charset="utf-8"><title>Demo</title></head>"#;
//!
//! let formatted = "\
//! <head>
//!     <meta charset=\"utf-8\">
//!     <title>
//!         Demo
//!     </title>
//! </head>";
//!
//! let output = rewrite_html_with_builder(html, builder)?;
//! # assert_eq!(output, formatted);
//! # Ok::<(), std::fmt::Error>(())
//! ```

mod builder;
mod config;
mod formatter;
mod scanner;

pub use builder::FormatterBuilder;
pub use config::Config;
pub use formatter::HtmlFormatter;

/// Reformat an HTML snippet with all the default settings.
///
/// ```rust
/// # use html_fmt::rewrite_html;
/// let html = r#"<div><img src="cat.png"/>A cat</div>"#;
///
/// let formatted = "\
/// <div>
///   <img src=\"cat.png\"/>
///   A cat
/// </div>";
///
/// let output = rewrite_html(html).unwrap();
/// assert_eq!(output, formatted);
/// ```
pub fn rewrite_html(input: &str) -> Result<String, std::fmt::Error> {
    rewrite_html_with_builder(input, FormatterBuilder::default())
}

/// Reformat an HTML snippet with user specified settings.
///
/// ```rust
/// # use html_fmt::{rewrite_html_with_builder, FormatterBuilder};
/// let mut builder = FormatterBuilder::default();
/// builder.indent("\t");
///
/// let output = rewrite_html_with_builder("<p>tabbed</p>", builder).unwrap();
/// assert_eq!(output, "<p>\n\ttabbed\n</p>");
/// ```
pub fn rewrite_html_with_builder(
    input: &str,
    builder: FormatterBuilder,
) -> Result<String, std::fmt::Error> {
    tracing::trace!(?builder);
    let formatter = builder.build();
    formatter.format(input)
}
