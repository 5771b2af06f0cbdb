use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::syntax::SyntaxProvider;
use crate::artifacts::syntax::grammar::TreeSitterProvider;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Viewer<P = TreeSitterProvider> {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    provider: P,
}

impl Viewer {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        Self::with_provider(path, writer, TreeSitterProvider)
    }
}

impl<P: SyntaxProvider> Viewer<P> {
    pub fn with_provider(
        path: &str,
        writer: Box<dyn std::io::Write>,
        provider: P,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Viewer {
            writer: RefCell::new(writer),
            workspace,
            provider,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Read both sides of a diff, applying a language override to each.
    pub(crate) fn read_targets(
        &self,
        old: &Path,
        new: &Path,
        language: Option<&str>,
    ) -> anyhow::Result<(DiffTarget, DiffTarget)> {
        let mut old = self.workspace.read_target(old)?;
        let mut new = self.workspace.read_target(new)?;

        if !old.exists() && !new.exists() {
            anyhow::bail!(
                "Neither {} nor {} exists",
                old.file().display(),
                new.file().display()
            );
        }

        if let Some(language) = language {
            old = old.with_language(language);
            new = new.with_language(language);
        }

        Ok((old, new))
    }
}
