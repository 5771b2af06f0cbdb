//! Side-by-side, syntax-highlighted diff rendering
//!
//! - `artifacts`: the rendering pipeline (hunks, highlighting, alignment, HTML)
//! - `areas`: file access and the [`Viewer`](areas::viewer::Viewer) facade
//! - `commands`: command implementations behind the `sidediff` binary

pub mod areas;
pub mod artifacts;
pub mod commands;

/// How a diff is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmitMode {
    /// Two panes padded to stay vertically aligned
    #[default]
    Split,
    /// One column of interleaved blocks
    Unified,
}
