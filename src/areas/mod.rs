//! File access and the command facade
//!
//! - `workspace`: reads the files being compared from disk
//! - `viewer`: owns the workspace, syntax provider and output writer that
//!   every command runs against

pub mod viewer;
pub(crate) mod workspace;
