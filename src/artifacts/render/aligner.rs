//! Hunk alignment
//!
//! The aligner walks the hunk list once, keeping a cursor into each revision.
//! Each hunk selects a byte window of the old or new buffer; the segments
//! overlapping that window are re-sliced to the window and written as one
//! block. In split mode the rows each pane gains from a run of deletions or
//! additions are tallied, and before the next unchanged block (and once at the
//! very end) the shorter pane is padded with blank rows so both panes line up.

use crate::EmitMode;
use crate::artifacts::core::RenderError;
use crate::artifacts::diff::hunk::{Hunk, HunkKind};
use crate::artifacts::highlight::segment::Segment;
use crate::artifacts::render::markup::MarkupWriter;
use std::ops::Range;

macro_rules! debug_align {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_align")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDiff {
    Split { left: String, right: String },
    Unified { body: String },
}

/// Byte positions reached in each revision so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    old_offset: usize,
    to_offset: usize,
}

/// The segments of one revision restricted to a byte range.
#[derive(Debug, Clone)]
struct Window<'s> {
    segments: &'s [Segment],
    range: Range<usize>,
}

impl<'s> Window<'s> {
    fn select(
        segments: &'s [Segment],
        kind: HunkKind,
        start: usize,
        len: usize,
    ) -> Result<Self, RenderError> {
        let end = start + len;
        let buffer_len = segments.last().map_or(0, |segment| segment.end);

        if end > buffer_len {
            return Err(RenderError::MalformedHunkSequence {
                kind,
                window_start: start,
                window_end: end,
                buffer_len,
            });
        }

        Ok(Self {
            segments,
            range: start..end,
        })
    }

    /// Write the overlapping segments clipped to the window, with offsets
    /// shifted so the window starts at `pane_start`.
    fn write(&self, out: &mut MarkupWriter, pane_start: usize) {
        let first = self
            .segments
            .partition_point(|segment| segment.end <= self.range.start);

        for segment in &self.segments[first..] {
            if segment.start >= self.range.end {
                break;
            }

            let start = segment.start.max(self.range.start);
            let end = segment.end.min(self.range.end);
            if start >= end {
                continue;
            }

            let text = &segment.text[start - segment.start..end - segment.start];
            let shift = |offset: usize| pane_start + offset - self.range.start;
            out.token(
                text,
                segment.category,
                shift(start)..shift(end),
                &segment.kind,
                &segment.grammar_name,
            );
        }
    }

    fn write_block(&self, out: &mut MarkupWriter, kind: HunkKind, pane_start: usize) {
        out.open_block(kind, pane_start..pane_start + self.range.len());
        self.write(out, pane_start);
        out.close_block();
    }
}

trait Emitter {
    type Output;

    /// `window` is taken from the new revision; `old_start` is where the same
    /// bytes begin in the old one.
    fn equal(&mut self, window: &Window<'_>, old_start: usize);
    fn add(&mut self, window: &Window<'_>, line_breaks: usize);
    fn delete(&mut self, window: &Window<'_>, line_breaks: usize);
    fn finish(self) -> Self::Output;
}

#[derive(Debug, Default)]
struct SplitEmitter {
    left: MarkupWriter,
    right: MarkupWriter,
    left_pending: usize,
    right_pending: usize,
}

impl SplitEmitter {
    fn reconcile(&mut self) {
        if self.right_pending > self.left_pending {
            self.left.spacer(self.right_pending - self.left_pending);
        } else if self.left_pending > self.right_pending {
            self.right.spacer(self.left_pending - self.right_pending);
        }

        self.left_pending = 0;
        self.right_pending = 0;
    }
}

impl Emitter for SplitEmitter {
    type Output = (String, String);

    fn equal(&mut self, window: &Window<'_>, old_start: usize) {
        self.reconcile();
        window.write_block(&mut self.left, HunkKind::Equal, old_start);
        window.write_block(&mut self.right, HunkKind::Equal, window.range.start);
    }

    fn add(&mut self, window: &Window<'_>, line_breaks: usize) {
        window.write_block(&mut self.right, HunkKind::Add, window.range.start);
        self.right_pending += line_breaks;
    }

    fn delete(&mut self, window: &Window<'_>, line_breaks: usize) {
        window.write_block(&mut self.left, HunkKind::Delete, window.range.start);
        self.left_pending += line_breaks;
    }

    fn finish(mut self) -> Self::Output {
        self.reconcile();
        (self.left.into_string(), self.right.into_string())
    }
}

/// Interleaves all blocks into one column; no padding is needed.
#[derive(Debug, Default)]
struct UnifiedEmitter {
    body: MarkupWriter,
}

impl Emitter for UnifiedEmitter {
    type Output = String;

    fn equal(&mut self, window: &Window<'_>, _old_start: usize) {
        window.write_block(&mut self.body, HunkKind::Equal, window.range.start);
    }

    fn add(&mut self, window: &Window<'_>, _line_breaks: usize) {
        window.write_block(&mut self.body, HunkKind::Add, window.range.start);
    }

    fn delete(&mut self, window: &Window<'_>, _line_breaks: usize) {
        window.write_block(&mut self.body, HunkKind::Delete, window.range.start);
    }

    fn finish(self) -> Self::Output {
        self.body.into_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Aligner<'s> {
    old: &'s [Segment],
    new: &'s [Segment],
}

impl<'s> Aligner<'s> {
    /// Both segment lists must cover their buffers gaplessly, as produced by
    /// [`build_segments`](crate::artifacts::highlight::segment::build_segments).
    pub fn new(old: &'s [Segment], new: &'s [Segment]) -> Self {
        Self { old, new }
    }

    pub fn render(&self, hunks: &[Hunk], mode: EmitMode) -> Result<RenderedDiff, RenderError> {
        match mode {
            EmitMode::Split => {
                let (left, right) = self.render_split(hunks)?;
                Ok(RenderedDiff::Split { left, right })
            }
            EmitMode::Unified => Ok(RenderedDiff::Unified {
                body: self.walk(hunks, UnifiedEmitter::default())?,
            }),
        }
    }

    pub fn render_split(&self, hunks: &[Hunk]) -> Result<(String, String), RenderError> {
        self.walk(hunks, SplitEmitter::default())
    }

    fn walk<E: Emitter>(&self, hunks: &[Hunk], mut emitter: E) -> Result<E::Output, RenderError> {
        let mut cursor = Cursor::default();

        for hunk in hunks {
            let len = hunk.len();

            match hunk.kind() {
                HunkKind::Equal => {
                    // the bytes must exist on both sides, but only the new side is drawn
                    Window::select(self.old, HunkKind::Equal, cursor.old_offset, len)?;
                    let window = Window::select(self.new, HunkKind::Equal, cursor.to_offset, len)?;
                    emitter.equal(&window, cursor.old_offset);
                    cursor.old_offset += len;
                    cursor.to_offset += len;
                }
                HunkKind::Add => {
                    let window = Window::select(self.new, HunkKind::Add, cursor.to_offset, len)?;
                    emitter.add(&window, hunk.line_breaks());
                    cursor.to_offset += len;
                }
                HunkKind::Delete => {
                    let window =
                        Window::select(self.old, HunkKind::Delete, cursor.old_offset, len)?;
                    emitter.delete(&window, hunk.line_breaks());
                    cursor.old_offset += len;
                }
            }

            debug_align!(
                kind = %hunk.kind(),
                len,
                old_offset = cursor.old_offset,
                to_offset = cursor.to_offset,
                "advanced past hunk"
            );
        }

        Ok(emitter.finish())
    }
}

/// Render the left and right panes of a split view.
pub fn render(
    old_segments: &[Segment],
    new_segments: &[Segment],
    hunks: &[Hunk],
) -> Result<(String, String), RenderError> {
    Aligner::new(old_segments, new_segments).render_split(hunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::diff_algorithm::LineDiff;
    use crate::artifacts::diff::hunk::Buffers;
    use crate::artifacts::highlight::TokenSpan;
    use crate::artifacts::highlight::category::TokenCategory;
    use crate::artifacts::highlight::segment::build_segments;
    use crate::artifacts::render::markup::serialize;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn plain(start: usize, end: usize, text: &str) -> String {
        serialize(text.as_bytes(), TokenCategory::Plain, start..end, "", "")
    }

    fn block(kind: &str, start: usize, end: usize, inner: &str) -> String {
        format!(
            r#"<div class="chunk chunk--{kind}" data-start="{start}" data-end="{end}">{inner}</div>"#
        )
    }

    fn spacer(lines: usize) -> String {
        format!(r#"<div class="chunk chunk--space">{}</div>"#, "<br>".repeat(lines))
    }

    fn plain_segments(hunks: &[Hunk]) -> (Vec<Segment>, Vec<Segment>) {
        let buffers = Buffers::from_hunks(hunks);
        (build_segments(&buffers.old, &[]), build_segments(&buffers.new, &[]))
    }

    #[fixture]
    fn replaced_line() -> Vec<Hunk> {
        vec![
            Hunk::equal("a\n"),
            Hunk::delete("b\nc\n"),
            Hunk::add("d\n"),
            Hunk::equal("e\n"),
        ]
    }

    #[rstest]
    fn test_split_pads_the_shorter_pane(replaced_line: Vec<Hunk>) {
        let (old, new) = plain_segments(&replaced_line);

        let (left, right) = render(&old, &new, &replaced_line).unwrap();

        assert_eq!(
            left,
            [
                block("equal", 0, 2, &plain(0, 2, "a\n")),
                block("delete", 2, 6, &plain(2, 6, "b\nc\n")),
                block("equal", 6, 8, &plain(6, 8, "e\n")),
            ]
            .concat()
        );
        assert_eq!(
            right,
            [
                block("equal", 0, 2, &plain(0, 2, "a\n")),
                block("add", 2, 4, &plain(2, 4, "d\n")),
                spacer(1),
                block("equal", 4, 6, &plain(4, 6, "e\n")),
            ]
            .concat()
        );
    }

    #[rstest]
    fn test_unified_interleaves_blocks(replaced_line: Vec<Hunk>) {
        let (old, new) = plain_segments(&replaced_line);

        let rendered = Aligner::new(&old, &new)
            .render(&replaced_line, EmitMode::Unified)
            .unwrap();

        assert_eq!(
            rendered,
            RenderedDiff::Unified {
                body: [
                    block("equal", 0, 2, &plain(0, 2, "a\n")),
                    block("delete", 2, 6, &plain(2, 6, "b\nc\n")),
                    block("add", 2, 4, &plain(2, 4, "d\n")),
                    block("equal", 4, 6, &plain(4, 6, "e\n")),
                ]
                .concat()
            }
        );
    }

    #[test]
    fn test_empty_input_renders_empty_panes() {
        let empty = build_segments(&Bytes::new(), &[]);

        assert_eq!(
            render(&empty, &empty, &[]).unwrap(),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_pending_rows_accumulate_across_consecutive_hunks() {
        let hunks = vec![
            Hunk::delete("a\n"),
            Hunk::delete("b\n"),
            Hunk::add("c\n"),
            Hunk::equal("d\n"),
        ];
        let (old, new) = plain_segments(&hunks);

        let (left, right) = render(&old, &new, &hunks).unwrap();

        assert_eq!(left.matches("<br>").count(), 0);
        assert_eq!(right.matches("<br>").count(), 1);
        let equal = block("equal", 2, 4, &plain(2, 4, "d\n"));
        assert!(right.contains(&format!("{}{}", spacer(1), equal)));
    }

    #[test]
    fn test_trailing_imbalance_is_reconciled() {
        let hunks = vec![Hunk::equal("a\n"), Hunk::delete("b\nc\n")];
        let (old, new) = plain_segments(&hunks);

        let (left, right) = render(&old, &new, &hunks).unwrap();

        assert!(!left.contains("chunk--space"));
        assert!(right.ends_with(&spacer(2)));
    }

    #[test]
    fn test_left_equal_blocks_use_old_offsets() {
        let hunks = vec![Hunk::delete("x\n"), Hunk::add("yy\n"), Hunk::equal("z\n")];
        let (old, new) = plain_segments(&hunks);

        let (left, right) = render(&old, &new, &hunks).unwrap();

        assert!(left.ends_with(&block("equal", 2, 4, &plain(2, 4, "z\n"))));
        assert!(right.ends_with(&block("equal", 3, 5, &plain(3, 5, "z\n"))));
    }

    #[test]
    fn test_tokens_crossing_hunks_are_clipped() {
        let hunks = vec![Hunk::equal("ab\n"), Hunk::add("cd\n")];
        let buffers = Buffers::from_hunks(&hunks);
        let spans = vec![TokenSpan::new(
            0,
            6,
            TokenCategory::String,
            "string_content".to_string(),
            "string_content".to_string(),
        )];
        let old = build_segments(&buffers.old, &[]);
        let new = build_segments(&buffers.new, &spans);

        let (_, right) = render(&old, &new, &hunks).unwrap();

        let token = |start, end, text: &str| {
            serialize(
                text.as_bytes(),
                TokenCategory::String,
                start..end,
                "string_content",
                "string_content",
            )
        };
        assert_eq!(
            right,
            [
                block("equal", 0, 3, &token(0, 3, "ab\n")),
                block("add", 3, 6, &token(3, 6, "cd\n")),
            ]
            .concat()
        );
    }

    #[rstest]
    #[case(b"", vec![Hunk::equal("abc")], HunkKind::Equal, 0, 3, 0)]
    #[case(b"x", vec![Hunk::add("abcd")], HunkKind::Add, 0, 4, 2)]
    #[case(b"x", vec![Hunk::delete("x"), Hunk::delete("yz")], HunkKind::Delete, 1, 3, 1)]
    fn test_windows_past_the_buffer_are_rejected(
        #[case] old: &'static [u8],
        #[case] hunks: Vec<Hunk>,
        #[case] kind: HunkKind,
        #[case] window_start: usize,
        #[case] window_end: usize,
        #[case] buffer_len: usize,
    ) {
        let old = build_segments(&Bytes::from_static(old), &[]);
        let new = build_segments(&Bytes::from_static(b"ab"), &[]);

        let error = render(&old, &new, &hunks).unwrap_err();

        assert_eq!(
            error,
            RenderError::MalformedHunkSequence {
                kind,
                window_start,
                window_end,
                buffer_len,
            }
        );
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!["a\n", "b\n", "c\n", "\n", "dd\n"]), 0..16)
            .prop_map(|lines| lines.concat())
    }

    fn rows(pane: &str) -> usize {
        pane.matches('\n').count() + pane.matches("<br>").count()
    }

    proptest! {
        #[test]
        fn prop_split_panes_have_equal_row_counts(old in text_strategy(), new in text_strategy()) {
            let old = Bytes::from(old);
            let new = Bytes::from(new);
            let hunks = LineDiff::new(&old, &new).hunks();

            let (left, right) = render(
                &build_segments(&old, &[]),
                &build_segments(&new, &[]),
                &hunks,
            ).unwrap();

            prop_assert_eq!(rows(&left), rows(&right));
        }
    }
}
