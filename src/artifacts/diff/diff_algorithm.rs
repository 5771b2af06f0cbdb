//! Myers' diff over lines
//!
//! [`MyersDiff`] computes the shortest edit script between two sequences.
//! [`LineDiff`] applies it to two byte buffers split into lines (terminators
//! included) and coalesces runs of equal-kind edits into [`Hunk`]s, so that
//! concatenating the hunks rebuilds both buffers byte for byte.

use crate::artifacts::diff::hunk::{Hunk, HunkKind};
use bytes::{Bytes, BytesMut};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn hunk_kind(&self) -> HunkKind {
        match self {
            Edit::Delete { .. } => HunkKind::Delete,
            Edit::Insert { .. } => HunkKind::Add,
            Edit::Equal { .. } => HunkKind::Equal,
        }
    }
}

/// One move in the edit graph: `(prev_x, prev_y, x, y)`.
pub type Step = (isize, isize, isize, isize);

pub trait DiffAlgorithm<T> {
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>>;
    fn backtrack(&self) -> Vec<Step>;
    fn diff(&self) -> Vec<Edit<T>>;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T> MyersDiff<'_, T> {
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize
    }

    // Round `d` may step to diagonal `k` from `k + 1` (insertion) or `k - 1` (deletion).
    fn moves_down(v: &[isize], offset: isize, d: isize, k: isize) -> bool {
        k == -d || (k != d && v[(offset + k - 1) as usize] < v[(offset + k + 1) as usize])
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();

        let mut v = vec![0; 2 * offset as usize + 2];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let mut x = if Self::moves_down(&v, offset, d, k) {
                    v[(offset + k + 1) as usize]
                } else {
                    v[(offset + k - 1) as usize] + 1
                };
                let mut y = x - k;

                // snake
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[(offset + k) as usize] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<Step> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();
        let mut path = Vec::new();

        for (d, v) in self.compute_shortest_edit().iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if Self::moves_down(v, offset, d, k) {
                k + 1
            } else {
                k - 1
            };
            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        path.reverse();
        path
    }

    fn diff(&self) -> Vec<Edit<T>> {
        self.backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    }
                } else {
                    Edit::Equal {
                        value: self.a[prev_x as usize].clone(),
                    }
                }
            })
            .collect()
    }
}

/// Line-level diff of two buffers, producing coalesced hunks.
#[derive(Debug, Clone)]
pub struct LineDiff {
    old: Vec<Bytes>,
    new: Vec<Bytes>,
}

impl LineDiff {
    pub fn new(old: &Bytes, new: &Bytes) -> Self {
        Self {
            old: split_lines(old),
            new: split_lines(new),
        }
    }

    pub fn edits(&self) -> Vec<Edit<Bytes>> {
        MyersDiff::new(&self.old, &self.new).diff()
    }

    pub fn hunks(&self) -> Vec<Hunk> {
        let mut hunks = Vec::new();
        let mut pending: Option<(HunkKind, BytesMut)> = None;

        for edit in self.edits() {
            let kind = edit.hunk_kind();
            match pending.as_mut() {
                Some((pending_kind, content)) if *pending_kind == kind => {
                    content.extend_from_slice(edit.value());
                }
                _ => {
                    if let Some((pending_kind, content)) = pending.take() {
                        hunks.push(Hunk::new(pending_kind, content.freeze()));
                    }
                    pending = Some((kind, BytesMut::from(&edit.value()[..])));
                }
            }
        }

        if let Some((kind, content)) = pending {
            hunks.push(Hunk::new(kind, content.freeze()));
        }

        hunks
    }
}

/// Split into lines, keeping each `\n`; a trailing line without one is kept as is.
pub fn split_lines(buffer: &Bytes) -> Vec<Bytes> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, byte) in buffer.iter().enumerate() {
        if *byte == b'\n' {
            lines.push(buffer.slice(start..=i));
            start = i + 1;
        }
    }

    if start < buffer.len() {
        lines.push(buffer.slice(start..));
    }

    lines
}
