//! Git object identity
//!
//! Rendered patch headers name each side by its git blob id, the SHA-1 of
//! `blob <size>\0<content>`, so the ids match what `git diff` prints.

pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form shown in patch headers
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
