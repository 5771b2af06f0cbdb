//! Diff rendering
//!
//! - `aligner`: walks the hunks and fills the pane(s), padding for alignment
//! - `markup`: HTML serialization of tokens, blocks and spacers
//! - `header`: git-style patch header
//! - `page`: container and standalone document assembly
//!
//! [`DiffRenderer`] runs the whole pipeline for one file: highlight both
//! revisions independently, then align them along the hunk list.

pub mod aligner;
pub mod header;
pub mod markup;
pub mod page;

use crate::EmitMode;
use crate::artifacts::core::RenderError;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::hunk::{Buffers, Hunk};
use crate::artifacts::highlight::highlight;
use crate::artifacts::render::aligner::{Aligner, RenderedDiff};
use crate::artifacts::syntax::SyntaxProvider;
use bytes::Bytes;
use derive_new::new;

pub use aligner::render;

#[derive(Debug, Clone, new)]
pub struct DiffRenderer<P> {
    provider: P,
    mode: EmitMode,
}

impl<P: SyntaxProvider> DiffRenderer<P> {
    pub fn mode(&self) -> EmitMode {
        self.mode
    }

    /// Render `hunks` between two targets. The hunks must rebuild exactly
    /// `old.data()` and `new.data()`.
    pub fn render(
        &self,
        old: &DiffTarget,
        new: &DiffTarget,
        hunks: &[Hunk],
    ) -> Result<RenderedDiff, RenderError> {
        self.render_buffers((old.data(), old.language()), (new.data(), new.language()), hunks)
    }

    /// Render a hunk list on its own, rebuilding both revisions from it.
    pub fn render_hunks(
        &self,
        hunks: &[Hunk],
        language: &str,
    ) -> Result<RenderedDiff, RenderError> {
        let buffers = Buffers::from_hunks(hunks);
        self.render_buffers((&buffers.old, language), (&buffers.new, language), hunks)
    }

    fn render_buffers(
        &self,
        (old, old_language): (&Bytes, &str),
        (new, new_language): (&Bytes, &str),
        hunks: &[Hunk],
    ) -> Result<RenderedDiff, RenderError> {
        let old_segments = highlight(&self.provider, old, old_language)?;
        let new_segments = highlight(&self.provider, new, new_language)?;

        tracing::debug!(hunks = hunks.len(), mode = ?self.mode, "aligning hunks");
        Aligner::new(&old_segments, &new_segments).render(hunks, self.mode)
    }
}
