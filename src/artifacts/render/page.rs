//! Page assembly
//!
//! Wraps rendered panes into the `diff` container and, on request, into a
//! self-contained HTML document carrying its own stylesheet.

use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::highlight::category::TokenCategory;
use crate::artifacts::highlight::rainbow::PALETTE;
use crate::artifacts::render::aligner::RenderedDiff;
use crate::artifacts::render::markup::escape;

static CATEGORY_STYLES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "comment" => "color: #a3a3a3; font-style: italic",
    "string" => "color: #4ade80",
    "link" => "color: #60a5fa; text-decoration: underline",
    "escape" => "color: #a3e635",
    "quote" => "color: #34d399; font-style: italic",
    "markup" => "color: #f472b6",
    "number" => "color: #fbbf24",
    "field" => "color: #60a5fa",
    "identifier" => "color: #ffffff",
    "type" => "color: #facc15",
    "builtin-type" => "color: #fbbf24",
    "export" => "color: #22d3ee",
    "keyword" => "color: #818cf8",
    "accessor" => "color: #c084fc",
    "operator" => "color: #22d3ee",
    "directive" => "color: #fb7185",
    "list-marker" => "color: #fca5a5",
    "punctuation" => "color: #9ca3af",
    "plain" => "color: #ffffff",
};

const BASE_STYLES: &str = "\
body { margin: 0; background: #171717; color: #ffffff; }
.patch-header { padding: 0.5rem 1rem; font-family: monospace; font-weight: bold; color: #d4d4d4; }
.patch-header p { margin: 0; }
.diff { display: grid; grid-template-columns: 1fr 1fr; font-family: monospace; white-space: pre; }
.diff--unified { grid-template-columns: 1fr; }
.diff__left, .diff__right { overflow-x: auto; }
.chunk--add { background: rgba(34, 197, 94, 0.15); }
.chunk--delete { background: rgba(239, 68, 68, 0.15); }
.chunk--space { background: repeating-linear-gradient(-45deg, transparent 0 4px, #262626 4px 8px); }
";

/// Stylesheet covering every category and bracket palette slot.
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_STYLES);

    for category in TokenCategory::ALL {
        if let Some(style) = CATEGORY_STYLES.get(category.name()) {
            css.push_str(&format!(".tok-{category} {{ {style}; }}\n"));
        }
    }
    for (slot, color) in PALETTE.iter().enumerate() {
        css.push_str(&format!(".tok-bracket-{slot} {{ color: {color}; }}\n"));
    }

    css
}

/// The `diff` container for one file: header followed by the pane(s).
pub fn diff_fragment(
    header: &str,
    rendered: &RenderedDiff,
    old: &DiffTarget,
    new: &DiffTarget,
) -> String {
    let old_file = escape(&old.file().display().to_string());
    let new_file = escape(&new.file().display().to_string());

    let body = match rendered {
        RenderedDiff::Split { left, right } => format!(
            r#"<div class="diff"><div class="diff__left" data-file="{old_file}" data-language="{}">{left}</div><div class="diff__right" data-file="{new_file}" data-language="{}">{right}</div></div>"#,
            escape(old.language()),
            escape(new.language()),
        ),
        RenderedDiff::Unified { body } => format!(
            r#"<div class="diff diff--unified" data-file="{new_file}" data-language="{}">{body}</div>"#,
            escape(new.language()),
        ),
    };

    format!(r#"<div class="patch">{header}{body}</div>"#)
}

/// A complete HTML document around `fragment`.
pub fn standalone(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n",
        escape(title),
        stylesheet()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_stylesheet_covers_every_class() {
        let css = stylesheet();

        for category in TokenCategory::ALL {
            assert!(css.contains(&format!(".tok-{category} ")), "missing {category}");
        }
        for slot in 0..PALETTE.len() {
            assert!(css.contains(&format!(".tok-bracket-{slot} ")));
        }
    }

    #[test]
    fn test_split_fragment_labels_both_panes() {
        let old = DiffTarget::from_nothing(Path::new("a.go"));
        let new = DiffTarget::from_bytes(Path::new("a.go"), "");
        let rendered = RenderedDiff::Split {
            left: "L".to_string(),
            right: "R".to_string(),
        };

        assert_eq!(
            diff_fragment("H", &rendered, &old, &new),
            r#"<div class="patch">H<div class="diff"><div class="diff__left" data-file="a.go" data-language="go">L</div><div class="diff__right" data-file="a.go" data-language="go">R</div></div></div>"#
        );
    }

    #[test]
    fn test_standalone_document_embeds_styles() {
        let page = standalone("a & b", "<div></div>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a &amp; b</title>"));
        assert!(page.contains(".chunk--space"));
        assert!(page.contains("<body>\n<div></div>\n</body>"));
    }
}
