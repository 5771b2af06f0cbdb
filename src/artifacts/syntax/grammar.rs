//! Tree-sitter backed syntax provider
//!
//! A fresh [`Parser`] is created for every parse, so one provider can be shared
//! by any number of concurrent renders without coordination.

use crate::artifacts::core::RenderError;
use crate::artifacts::syntax::{LeafNode, SyntaxProvider};
use tree_sitter::{Language, Parser, Tree};

pub const SUPPORTED_LANGUAGES: [&str; 16] = [
    "c",
    "cpp",
    "css",
    "ejs",
    "erb",
    "go",
    "html",
    "java",
    "javascript",
    "json",
    "markdown",
    "python",
    "ruby",
    "rust",
    "typescript",
    "typescriptreact",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterProvider;

impl TreeSitterProvider {
    pub fn grammar(language: &str) -> Option<Language> {
        let language_fn = match language {
            "c" => tree_sitter_c::LANGUAGE,
            "cpp" => tree_sitter_cpp::LANGUAGE,
            "css" => tree_sitter_css::LANGUAGE,
            "erb" | "ejs" => tree_sitter_embedded_template::LANGUAGE,
            "go" => tree_sitter_go::LANGUAGE,
            "html" => tree_sitter_html::LANGUAGE,
            "java" => tree_sitter_java::LANGUAGE,
            "javascript" => tree_sitter_javascript::LANGUAGE,
            "json" => tree_sitter_json::LANGUAGE,
            // block structure only; inline spans stay unclassified
            "markdown" => tree_sitter_md::LANGUAGE,
            "python" => tree_sitter_python::LANGUAGE,
            "ruby" => tree_sitter_ruby::LANGUAGE,
            "rust" => tree_sitter_rust::LANGUAGE,
            "typescript" => tree_sitter_typescript::LANGUAGE_TYPESCRIPT,
            "typescriptreact" => tree_sitter_typescript::LANGUAGE_TSX,
            _ => return None,
        };

        Some(language_fn.into())
    }

    pub fn supports(language: &str) -> bool {
        SUPPORTED_LANGUAGES.contains(&language)
    }
}

impl SyntaxProvider for TreeSitterProvider {
    type Tree = Tree;

    fn parse(&self, code: &[u8], language: &str) -> Result<Tree, RenderError> {
        let grammar = Self::grammar(language).ok_or_else(|| RenderError::UnsupportedLanguage {
            language: language.to_string(),
        })?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| RenderError::ParseFailure {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        let tree = parser
            .parse(code, None)
            .ok_or_else(|| RenderError::ParseFailure {
                language: language.to_string(),
                reason: "parser produced no tree".to_string(),
            })?;

        // Error nodes are still leaves with byte ranges; highlighting stays partial.
        if tree.root_node().has_error() {
            tracing::debug!(language, "source contains syntax errors");
        }

        Ok(tree)
    }

    fn leaf_nodes(&self, tree: &Tree) -> Vec<LeafNode> {
        let mut leaves = Vec::new();
        let mut cursor = tree.walk();

        loop {
            let node = cursor.node();
            if node.child_count() == 0 {
                leaves.push(LeafNode::new(
                    node.kind().to_string(),
                    node.grammar_name().to_string(),
                    node.start_byte(),
                    node.end_byte(),
                ));
            } else if cursor.goto_first_child() {
                continue;
            }

            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return leaves;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn leaf_kinds(code: &str, language: &str) -> Vec<String> {
        let provider = TreeSitterProvider;
        let tree = provider.parse(code.as_bytes(), language).unwrap();

        provider
            .leaf_nodes(&tree)
            .into_iter()
            .map(|leaf| leaf.kind)
            .collect()
    }

    #[test]
    fn test_rust_leaves_in_source_order() {
        assert_eq!(
            leaf_kinds("fn main() {}", "rust"),
            vec!["fn", "identifier", "(", ")", "{", "}"]
        );
    }

    #[test]
    fn test_leaf_offsets_cover_tokens() {
        let code = "fn main() {}";
        let provider = TreeSitterProvider;
        let tree = provider.parse(code.as_bytes(), "rust").unwrap();

        let texts = provider
            .leaf_nodes(&tree)
            .iter()
            .map(|leaf| &code[leaf.start_byte..leaf.end_byte])
            .collect::<Vec<_>>();

        assert_eq!(texts, vec!["fn", "main", "(", ")", "{", "}"]);
    }

    #[rstest]
    #[case("{\"a\": [1, 2]}", "json")]
    #[case("def f(x):\n    return x\n", "python")]
    #[case("package main\n", "go")]
    #[case("int main(void) { return 0; }", "c")]
    #[case("int main() { std::vector<int> v; }", "cpp")]
    #[case("a { color: red; }", "css")]
    #[case("<% if x %><p><%= y %></p><% end %>", "erb")]
    #[case("<p>hi</p>", "html")]
    #[case("class A { void f() {} }", "java")]
    #[case("const x = () => 1;", "javascript")]
    #[case("# Title\n\n- item\n", "markdown")]
    #[case("def f\n  1\nend\n", "ruby")]
    #[case("let x: number = 1;", "typescript")]
    #[case("const a = <div>{x}</div>;", "typescriptreact")]
    fn test_supported_grammars_parse(#[case] code: &str, #[case] language: &str) {
        assert!(TreeSitterProvider::supports(language));
        assert!(!leaf_kinds(code, language).is_empty());
    }

    #[test]
    fn test_unknown_language_is_unsupported() {
        let result = TreeSitterProvider.parse(b"whatever", "cobol");

        assert_eq!(
            result.err(),
            Some(RenderError::UnsupportedLanguage {
                language: "cobol".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_source_still_yields_leaves() {
        assert!(!leaf_kinds("fn main( {", "rust").is_empty());
    }
}
