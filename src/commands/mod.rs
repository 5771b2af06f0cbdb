//! Command implementations
//!
//! - `plumbing`: inspection commands exposing one pipeline stage (tokens, hunks)
//! - `porcelain`: the user-facing `render` command running the whole pipeline
//!
//! Every command is an `impl Viewer` block writing to the viewer's writer.

pub mod plumbing;
pub mod porcelain;
