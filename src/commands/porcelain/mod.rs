//! Porcelain commands
//!
//! - `render`: diff two files and write the highlighted HTML view

pub mod render;
