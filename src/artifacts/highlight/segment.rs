use crate::artifacts::core::RenderError;
use crate::artifacts::highlight::category::TokenCategory;
use crate::artifacts::highlight::span::TokenSpan;
use bytes::Bytes;

/// A contiguous, classified slice of a buffer.
///
/// Gap fillers between tokens are `Plain` with empty `kind`/`grammar_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub category: TokenCategory,
    pub text: Bytes,
    pub kind: String,
    pub grammar_name: String,
}

impl Segment {
    fn plain(buffer: &Bytes, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            category: TokenCategory::Plain,
            text: buffer.slice(start..end),
            kind: String::new(),
            grammar_name: String::new(),
        }
    }

    fn token(buffer: &Bytes, start: usize, end: usize, span: &TokenSpan) -> Self {
        Self {
            start,
            end,
            category: span.category,
            text: buffer.slice(start..end),
            kind: span.kind.clone(),
            grammar_name: span.grammar_name.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Gap-fill `spans` (sorted by `start`) into segments covering `[0, buffer.len())`
/// exactly once.
///
/// With no spans at all the whole buffer becomes a single plain segment, which
/// is also what a buffer the parser could not handle renders as. Spans that end
/// before they start are skipped; spans overlapping an earlier one, or running
/// past the buffer, are clipped so coverage stays gapless and disjoint.
pub fn build_segments(buffer: &Bytes, spans: &[TokenSpan]) -> Vec<Segment> {
    let len = buffer.len();
    if spans.is_empty() {
        return vec![Segment::plain(buffer, 0, len)];
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;

    for span in spans {
        if span.end < span.start {
            let error = RenderError::InvalidSpan {
                start: span.start,
                end: span.end,
            };
            tracing::warn!(%error, "skipping token span");
            continue;
        }

        let start = span.start.max(pos);
        let end = span.end.min(len);
        if start >= end {
            continue;
        }

        if pos < start {
            segments.push(Segment::plain(buffer, pos, start));
        }
        segments.push(Segment::token(buffer, start, end, span));
        pos = end;
    }

    if pos < len {
        segments.push(Segment::plain(buffer, pos, len));
    }

    segments
}
