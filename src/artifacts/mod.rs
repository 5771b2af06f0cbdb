//! Rendering data structures and algorithms
//!
//! - `core`: error taxonomy and byte helpers
//! - `diff`: hunks, the line diff producing them, and diff targets
//! - `objects`: git blob identifiers
//! - `syntax`: syntax providers and language detection
//! - `highlight`: token classification, rainbow brackets, segmentation
//! - `render`: hunk alignment and HTML output

pub mod core;
pub mod diff;
pub mod highlight;
pub mod objects;
pub mod render;
pub mod syntax;
