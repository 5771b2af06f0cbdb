use crate::artifacts::core::RenderError;
use crate::artifacts::highlight::category::{Classifier, TokenCategory};
use crate::artifacts::highlight::rainbow::paint_brackets;
use crate::artifacts::syntax::LeafNode;
use derive_new::new;

/// A classified leaf token over one buffer. `start < end` always holds.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub category: TokenCategory,
    pub kind: String,
    pub grammar_name: String,
}

/// Classify leaves, sort them by `start` and paint rainbow brackets.
///
/// Zero-width leaves (missing nodes inserted by error recovery) carry no text
/// and are dropped, as are inverted ranges.
pub fn collect_spans(leaves: Vec<LeafNode>, classifier: &Classifier) -> Vec<TokenSpan> {
    let mut spans = leaves
        .into_iter()
        .filter_map(|leaf| {
            if leaf.end_byte < leaf.start_byte {
                let error = RenderError::InvalidSpan {
                    start: leaf.start_byte,
                    end: leaf.end_byte,
                };
                tracing::warn!(%error, kind = leaf.kind.as_str(), "dropping leaf node");
                return None;
            }
            if leaf.end_byte == leaf.start_byte {
                return None;
            }

            let category = classifier.classify_leaf(&leaf.kind, &leaf.grammar_name);
            Some(TokenSpan::new(
                leaf.start_byte,
                leaf.end_byte,
                category,
                leaf.kind,
                leaf.grammar_name,
            ))
        })
        .collect::<Vec<_>>();

    spans.sort_by_key(|span| span.start);
    paint_brackets(&mut spans);

    spans
}
