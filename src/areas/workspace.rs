use crate::artifacts::diff::diff_target::DiffTarget;
use anyhow::Context;
use bytes::Bytes;
use is_executable::IsExecutable;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    pub fn is_executable(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_executable()
    }

    /// A file that does not exist reads as the empty `/dev/null` side.
    pub fn read_target(&self, file_path: &Path) -> anyhow::Result<DiffTarget> {
        let full_path = self.path.join(file_path);

        if !full_path.exists() {
            tracing::info!(
                path = %file_path.display(),
                "file does not exist, diffing against /dev/null"
            );
            return Ok(DiffTarget::from_nothing(file_path));
        }
        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        let data = self.read_file(file_path)?;
        Ok(DiffTarget::from_bytes(file_path, data).with_executable(self.is_executable(file_path)))
    }
}
