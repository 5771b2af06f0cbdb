//! Syntax highlighting of one buffer
//!
//! The pass runs leaf-first:
//!
//! - `category`: lexical kind to [`TokenCategory`] lookup
//! - `span`: classified, sorted [`TokenSpan`]s from a provider's leaves
//! - `rainbow`: bracket recolouring by nesting depth
//! - `segment`: gap-filled [`Segment`]s covering the whole buffer
//!
//! [`highlight`] ties them together behind a [`SyntaxProvider`].

pub mod category;
pub mod rainbow;
pub mod segment;
pub mod span;

use crate::artifacts::core::RenderError;
use crate::artifacts::highlight::category::Classifier;
use crate::artifacts::highlight::segment::{Segment, build_segments};
use crate::artifacts::highlight::span::collect_spans;
use crate::artifacts::syntax::SyntaxProvider;
use bytes::Bytes;

pub use category::TokenCategory;
pub use span::TokenSpan;

/// Segment `code` for display. Recoverable provider errors degrade to one
/// unclassified plain segment; anything else is passed on.
pub fn highlight<P: SyntaxProvider>(
    provider: &P,
    code: &Bytes,
    language: &str,
) -> Result<Vec<Segment>, RenderError> {
    let spans = match provider.parse(code, language) {
        Ok(tree) => collect_spans(provider.leaf_nodes(&tree), &Classifier::for_language(language)),
        Err(error) if !error.is_recoverable() => return Err(error),
        Err(error @ RenderError::UnsupportedLanguage { .. }) => {
            tracing::debug!(%error, "rendering as plain text");
            Vec::new()
        }
        Err(error) => {
            tracing::warn!(%error, "rendering as plain text");
            Vec::new()
        }
    };

    let segments = build_segments(code, &spans);
    tracing::debug!(
        language,
        spans = spans.len(),
        segments = segments.len(),
        "highlighted buffer"
    );

    Ok(segments)
}
