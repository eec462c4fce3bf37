use std::borrow::Cow;

use memchr::{memchr, memmem};

// Elements that never take a closing tag, per the upstream editor's export
// vocabulary. Matched case-insensitively, with or without a trailing slash.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// An atomic unit of markup: a `<...>` run (tags, comments, and markup
/// declarations alike) or the text between two of them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Token<'a> {
    Tag(&'a str),
    Text(&'a str),
}

/// How a tag token affects indentation depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TagKind {
    Open,
    Close,
    Void,
}

/// Zero-copy splitter over tag boundaries.
///
/// No tree is built and nothing is validated: any input, however malformed,
/// yields a token sequence covering every byte of it, so downstream
/// formatting is total.
pub(crate) struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest_as_text(&mut self) -> Token<'a> {
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        Token::Text(rest)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        if bytes[self.pos] == b'<' {
            if bytes[self.pos..].starts_with(b"<!--") {
                // Comments may contain stray `<` and `>`, so scan straight
                // to the terminator.
                return Some(match memmem::find(&bytes[self.pos..], b"-->") {
                    Some(off) => {
                        let end = self.pos + off + 3;
                        let comment = &self.input[self.pos..end];
                        self.pos = end;
                        Token::Tag(comment)
                    }
                    None => self.rest_as_text(),
                });
            }
            return Some(match find_tag_end(bytes, self.pos) {
                Some(gt) => {
                    let tag = &self.input[self.pos..=gt];
                    self.pos = gt + 1;
                    Token::Tag(tag)
                }
                // No terminating '>'; the remainder degrades to text.
                None => self.rest_as_text(),
            });
        }

        let start = self.pos;
        let end = memchr(b'<', &bytes[start..])
            .map(|off| start + off)
            .unwrap_or(bytes.len());
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }
}

/// Find the `>` closing the tag that starts at `lt`, being quote-aware:
/// a `>` inside a quoted attribute value does not terminate the tag.
fn find_tag_end(bytes: &[u8], lt: usize) -> Option<usize> {
    let mut quote: u8 = 0;
    for (off, &b) in bytes[lt + 1..].iter().enumerate() {
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(lt + 1 + off);
        }
    }
    None
}

/// Classify a raw tag token. `extra_void` supplements the built-in void set.
pub(crate) fn classify(tag: &str, extra_void: &[Cow<'static, str>]) -> TagKind {
    if tag.starts_with("</") {
        return TagKind::Close;
    }
    // Comments, doctypes, and processing instructions have no closing pair.
    if tag.starts_with("<!") || tag.starts_with("<?") {
        return TagKind::Void;
    }
    if tag.ends_with("/>") {
        return TagKind::Void;
    }
    let name = tag_name(tag);
    if VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
        || extra_void.iter().any(|v| name.eq_ignore_ascii_case(v))
    {
        return TagKind::Void;
    }
    TagKind::Open
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

/// Element name of a tag token, without the `</` prefix or any attributes.
fn tag_name(tag: &str) -> &str {
    let inner = tag.strip_prefix('<').unwrap_or(tag);
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let inner = inner.trim_start();
    let end = inner
        .bytes()
        .position(|b| !is_name_byte(b))
        .unwrap_or(inner.len());
    &inner[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(input: &str) -> Vec<Token<'_>> {
        Tokens::new(input).collect()
    }

    #[test]
    fn splits_tags_and_text() {
        assert_eq!(
            tags("<p>hi</p>"),
            vec![Token::Tag("<p>"), Token::Text("hi"), Token::Tag("</p>")],
        );
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        assert_eq!(
            tags(r#"<a title="a > b">x</a>"#),
            vec![
                Token::Tag(r#"<a title="a > b">"#),
                Token::Text("x"),
                Token::Tag("</a>"),
            ],
        );
    }

    #[test]
    fn comment_is_one_token() {
        assert_eq!(
            tags("<div><!-- a > b --></div>"),
            vec![
                Token::Tag("<div>"),
                Token::Tag("<!-- a > b -->"),
                Token::Tag("</div>"),
            ],
        );
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(
            tags("hi<unfinished"),
            vec![Token::Text("hi"), Token::Text("<unfinished")],
        );
    }

    #[test]
    fn classifies_void_elements_case_insensitively() {
        for tag in ["<BR>", "<br/>", "<Br>", "<hr />", r#"<IMG src="x">"#] {
            assert_eq!(classify(tag, &[]), TagKind::Void, "{tag}");
        }
        assert_eq!(classify("<brick>", &[]), TagKind::Open);
        assert_eq!(classify("</div>", &[]), TagKind::Close);
        assert_eq!(classify("<!DOCTYPE html>", &[]), TagKind::Void);
    }

    #[test]
    fn extra_void_elements_extend_the_builtin_set() {
        assert_eq!(classify("<meta charset=\"utf-8\">", &[]), TagKind::Open);
        let extra = ["meta".into()];
        assert_eq!(classify("<meta charset=\"utf-8\">", &extra), TagKind::Void);
    }
}
