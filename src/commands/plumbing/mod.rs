//! Plumbing commands
//!
//! - `tokens`: print the classified segments of one file
//! - `hunks`: print the line diff of two files as a hunk list

pub mod hunks;
pub mod tokens;
