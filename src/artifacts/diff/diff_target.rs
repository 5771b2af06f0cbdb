use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::syntax::language::language_id;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";
const REGULAR_MODE: &str = "100644";
const EXECUTABLE_MODE: &str = "100755";

/// One side of a file diff: the bytes of a revision plus what the patch
/// header needs to describe it. A missing side has no mode and no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) oid: ObjectId,
    pub(crate) mode: Option<&'static str>,
    pub(crate) data: Bytes,
    pub(crate) language: String,
}

impl DiffTarget {
    /// The language is guessed from the file name; see [`DiffTarget::with_language`].
    pub fn from_bytes(file: &Path, data: impl Into<Bytes>) -> Self {
        let data = data.into();

        Self {
            file: file.to_path_buf(),
            oid: ObjectId::for_blob(&data),
            mode: Some(REGULAR_MODE),
            data,
            language: language_id(file).to_string(),
        }
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            oid: ObjectId::null(),
            mode: None,
            data: Bytes::new(),
            language: language_id(file).to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Only meaningful for a side that exists.
    pub fn with_executable(mut self, executable: bool) -> Self {
        if self.exists() {
            self.mode = Some(if executable { EXECUTABLE_MODE } else { REGULAR_MODE });
        }
        self
    }

    pub fn exists(&self) -> bool {
        self.mode.is_some()
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// `prefix/file`, keeping the prefix for absolute paths too.
    pub fn prefixed_path(&self, prefix: &str) -> String {
        let file = self.file.display().to_string();
        format!("{prefix}/{}", file.trim_start_matches('/'))
    }

    /// [`DiffTarget::prefixed_path`], or `/dev/null` when this side does not exist.
    pub fn diff_path(&self, prefix: &str) -> String {
        if self.exists() {
            self.prefixed_path(prefix)
        } else {
            NULL_PATH.to_string()
        }
    }

    pub fn pretty_mode(&self) -> &'static str {
        self.mode.unwrap_or(REGULAR_MODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_bytes_hashes_content_and_guesses_language() {
        let target = DiffTarget::from_bytes(Path::new("src/main.rs"), "hello\n");

        assert!(target.exists());
        assert_eq!(target.oid().to_short_oid(), "ce01362");
        assert_eq!(target.language(), "rust");
        assert_eq!(target.diff_path("i"), "i/src/main.rs");
        assert_eq!(target.pretty_mode(), "100644");
    }

    #[test]
    fn test_missing_side_diffs_against_dev_null() {
        let target = DiffTarget::from_nothing(Path::new("gone.py"));

        assert!(!target.exists());
        assert!(target.oid().is_null());
        assert!(target.data().is_empty());
        assert_eq!(target.diff_path("w"), "/dev/null");
    }

    #[test]
    fn test_absolute_path_keeps_prefix() {
        let target = DiffTarget::from_bytes(Path::new("/tmp/a.rs"), "");

        assert_eq!(target.prefixed_path("w"), "w/tmp/a.rs");
        assert_eq!(target.diff_path("i"), "i/tmp/a.rs");
    }

    #[test]
    fn test_executable_mode() {
        let script = DiffTarget::from_bytes(Path::new("run.py"), "").with_executable(true);
        let missing = DiffTarget::from_nothing(Path::new("run.py")).with_executable(true);

        assert_eq!(script.pretty_mode(), "100755");
        assert!(!missing.exists());
    }

    #[test]
    fn test_language_override() {
        let target = DiffTarget::from_bytes(Path::new("Makefile"), "").with_language("c");

        assert_eq!(target.language(), "c");
    }
}
