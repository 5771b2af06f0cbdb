use crate::areas::viewer::Viewer;
use crate::artifacts::highlight::highlight;
use crate::artifacts::syntax::SyntaxProvider;
use std::io::Write;
use std::path::Path;

impl<P: SyntaxProvider> Viewer<P> {
    pub fn tokens(&self, file: &Path, language: Option<&str>) -> anyhow::Result<()> {
        let mut target = self.workspace().read_target(file)?;
        if !target.exists() {
            anyhow::bail!("File {} does not exist", file.display());
        }
        if let Some(language) = language {
            target = target.with_language(language);
        }

        for segment in highlight(self.provider(), target.data(), target.language())? {
            writeln!(
                self.writer(),
                "{}..{}\t{}\t{}\t{}",
                segment.start,
                segment.end,
                segment.category,
                segment.kind,
                segment.grammar_name
            )?;
        }

        Ok(())
    }
}
