//! Diff hunks
//!
//! A hunk is one contiguous run of a diff carrying the literal bytes of that run.
//! The ordered hunk list is the only description of a change the renderer needs:
//! both revisions can be rebuilt from it (see [`Buffers::from_hunks`]).

use crate::artifacts::core::count_line_breaks;
use bytes::{Bytes, BytesMut};
use derive_new::new;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HunkKind {
    Equal,
    Add,
    Delete,
}

impl HunkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HunkKind::Equal => "equal",
            HunkKind::Add => "add",
            HunkKind::Delete => "delete",
        }
    }
}

impl fmt::Display for HunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Hunk {
    kind: HunkKind,
    content: Bytes,
}

impl Hunk {
    pub fn equal(content: impl Into<Bytes>) -> Self {
        Self::new(HunkKind::Equal, content.into())
    }

    pub fn add(content: impl Into<Bytes>) -> Self {
        Self::new(HunkKind::Add, content.into())
    }

    pub fn delete(content: impl Into<Bytes>) -> Self {
        Self::new(HunkKind::Delete, content.into())
    }

    pub fn kind(&self) -> HunkKind {
        self.kind
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn line_breaks(&self) -> usize {
        count_line_breaks(&self.content)
    }
}

/// Both revisions of a file, rebuilt from a hunk list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffers {
    pub old: Bytes,
    pub new: Bytes,
}

impl Buffers {
    /// Equal bytes go to both sides, deleted bytes only to `old`, added bytes only to `new`.
    pub fn from_hunks(hunks: &[Hunk]) -> Self {
        let mut old = BytesMut::new();
        let mut new = BytesMut::new();

        for hunk in hunks {
            match hunk.kind() {
                HunkKind::Equal => {
                    old.extend_from_slice(hunk.content());
                    new.extend_from_slice(hunk.content());
                }
                HunkKind::Add => new.extend_from_slice(hunk.content()),
                HunkKind::Delete => old.extend_from_slice(hunk.content()),
            }
        }

        Self {
            old: old.freeze(),
            new: new.freeze(),
        }
    }
}
