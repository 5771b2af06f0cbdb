use crate::areas::viewer::Viewer;
use crate::artifacts::diff::diff_algorithm::LineDiff;
use crate::artifacts::syntax::SyntaxProvider;
use std::io::Write;
use std::path::Path;

impl<P: SyntaxProvider> Viewer<P> {
    pub fn hunks(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let (old, new) = self.read_targets(old, new, None)?;

        for hunk in LineDiff::new(old.data(), new.data()).hunks() {
            writeln!(
                self.writer(),
                "{}\t{}\t{}",
                hunk.kind(),
                hunk.len(),
                hunk.line_breaks()
            )?;
        }

        Ok(())
    }
}
