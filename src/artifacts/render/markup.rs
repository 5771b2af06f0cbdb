//! HTML serialization
//!
//! Every leaf fragment is a `<span>` carrying its category as a class and its
//! byte range, category, raw kind and grammar name as `data-*` attributes, so
//! client-side tooling can map a token on screen back to a byte offset.

use crate::artifacts::diff::hunk::HunkKind;
use crate::artifacts::highlight::category::TokenCategory;
use std::ops::Range;

/// Escape `&`, `<`, `>`, `"` and `'`; the result is safe both as element text
/// and inside a quoted attribute value.
pub fn escape_into(out: &mut String, text: &str) {
    html_escape::encode_quoted_attribute_to_string(text, out);
}

pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Serialize one leaf fragment on its own.
pub fn serialize(
    text: &[u8],
    category: TokenCategory,
    range: Range<usize>,
    kind: &str,
    grammar_name: &str,
) -> String {
    let mut writer = MarkupWriter::default();
    writer.token(text, category, range, kind, grammar_name);
    writer.into_string()
}

#[derive(Debug, Clone, Default)]
pub struct MarkupWriter {
    out: String,
}

impl MarkupWriter {
    pub fn open_block(&mut self, kind: HunkKind, range: Range<usize>) {
        self.out.push_str(&format!(
            r#"<div class="chunk chunk--{kind}" data-start="{}" data-end="{}">"#,
            range.start, range.end
        ));
    }

    pub fn close_block(&mut self) {
        self.out.push_str("</div>");
    }

    /// Blank rows keeping the panes vertically aligned.
    pub fn spacer(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }

        self.out.push_str(r#"<div class="chunk chunk--space">"#);
        for _ in 0..lines {
            self.out.push_str("<br>");
        }
        self.out.push_str("</div>");
    }

    pub fn token(
        &mut self,
        text: &[u8],
        category: TokenCategory,
        range: Range<usize>,
        kind: &str,
        grammar_name: &str,
    ) {
        self.out.push_str(&format!(
            r#"<span class="tok tok-{category}" data-start="{}" data-end="{}" data-category="{category}" data-kind=""#,
            range.start, range.end
        ));
        escape_into(&mut self.out, kind);
        self.out.push_str(r#"" data-grammarname=""#);
        escape_into(&mut self.out, grammar_name);
        self.out.push_str(r#"">"#);
        // a piece cut inside a multi-byte character renders as U+FFFD; the
        // data-start/data-end offsets still address the original bytes
        escape_into(&mut self.out, &String::from_utf8_lossy(text));
        self.out.push_str("</span>");
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
