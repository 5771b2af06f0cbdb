//! Diff input
//!
//! - `hunk`: the hunk list the renderer consumes, and buffer reconstruction
//! - `diff_algorithm`: Myers' diff producing hunks from two buffers
//! - `diff_target`: one side of a file diff (path, blob id, bytes, language)

pub mod diff_algorithm;
pub mod diff_target;
pub mod hunk;
