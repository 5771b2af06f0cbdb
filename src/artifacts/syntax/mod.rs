//! Parser capability
//!
//! The renderer never parses source text itself. It is handed a
//! [`SyntaxProvider`] that turns bytes into a tree and enumerates the tree's
//! leaves; everything after that point works on plain [`LeafNode`]s.
//!
//! - `language`: file name to language id mapping
//! - `grammar`: tree-sitter backed provider

pub mod grammar;
pub mod language;

use crate::artifacts::core::RenderError;
use derive_new::new;

/// A parse-tree node without children: one indivisible lexical token.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LeafNode {
    pub kind: String,
    pub grammar_name: String,
    pub start_byte: usize,
    pub end_byte: usize,
}

pub trait SyntaxProvider {
    type Tree;

    /// Fails with `UnsupportedLanguage` or `ParseFailure`; callers fall back to plain text.
    fn parse(&self, code: &[u8], language: &str) -> Result<Self::Tree, RenderError>;

    /// Leaf nodes only, in any order.
    fn leaf_nodes(&self, tree: &Self::Tree) -> Vec<LeafNode>;
}

impl<P: SyntaxProvider + ?Sized> SyntaxProvider for &P {
    type Tree = P::Tree;

    fn parse(&self, code: &[u8], language: &str) -> Result<Self::Tree, RenderError> {
        (**self).parse(code, language)
    }

    fn leaf_nodes(&self, tree: &Self::Tree) -> Vec<LeafNode> {
        (**self).leaf_nodes(tree)
    }
}

/// Knows no grammar at all; every buffer renders as unclassified text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextProvider;

impl SyntaxProvider for PlainTextProvider {
    type Tree = ();

    fn parse(&self, _code: &[u8], language: &str) -> Result<Self::Tree, RenderError> {
        Err(RenderError::UnsupportedLanguage {
            language: language.to_string(),
        })
    }

    fn leaf_nodes(&self, _tree: &Self::Tree) -> Vec<LeafNode> {
        Vec::new()
    }
}
