use crate::EmitMode;
use crate::areas::viewer::Viewer;
use crate::artifacts::diff::diff_algorithm::{LineDiff, split_lines};
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::hunk::{Hunk, HunkKind};
use crate::artifacts::render::DiffRenderer;
use crate::artifacts::render::header::PatchHeader;
use crate::artifacts::render::page;
use crate::artifacts::syntax::SyntaxProvider;
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, new)]
pub struct RenderOptions {
    pub mode: EmitMode,
    pub language: Option<String>,
    pub standalone: bool,
    pub stat: bool,
}

impl<P: SyntaxProvider> Viewer<P> {
    pub fn render(&self, old: &Path, new: &Path, options: &RenderOptions) -> anyhow::Result<()> {
        let (old, new) = self.read_targets(old, new, options.language.as_deref())?;
        let hunks = LineDiff::new(old.data(), new.data()).hunks();

        if options.stat {
            Self::print_stat(&new, &hunks);
        }

        let rendered = DiffRenderer::new(self.provider(), options.mode)
            .render(&old, &new, &hunks)
            .with_context(|| format!("Failed to render diff of {}", new.file().display()))?;
        let header = PatchHeader::new(&old, &new).to_markup();
        let fragment = page::diff_fragment(&header, &rendered, &old, &new);

        if options.standalone {
            let title = format!("{} .. {}", old.file().display(), new.file().display());
            write!(self.writer(), "{}", page::standalone(&title, &fragment))?;
        } else {
            writeln!(self.writer(), "{fragment}")?;
        }
        self.writer().flush()?;

        Ok(())
    }

    fn print_stat(target: &DiffTarget, hunks: &[Hunk]) {
        let count = |kind: HunkKind| {
            hunks
                .iter()
                .filter(|hunk| hunk.kind() == kind)
                .map(|hunk| split_lines(hunk.content()).len())
                .sum::<usize>()
        };

        eprintln!(
            "{} {} {}",
            target.file().display().to_string().bold(),
            format!("+{}", count(HunkKind::Add)).green(),
            format!("-{}", count(HunkKind::Delete)).red()
        );
    }
}
