//! Rainbow brackets
//!
//! Brackets are recoloured by nesting depth so that matching pairs share a
//! palette slot. Openers take the slot of the current depth and then push;
//! closers pop and then take the slot, so a well-nested pair always agrees.

use crate::artifacts::highlight::category::TokenCategory;
use crate::artifacts::highlight::span::TokenSpan;

/// Bracket colours, indexed by `depth % PALETTE.len()`.
pub const PALETTE: [&str; 11] = [
    "#fde047", // yellow
    "#86efac", // green
    "#67e8f9", // cyan
    "#c4b5fd", // violet
    "#fdba74", // orange
    "#bef264", // lime
    "#93c5fd", // blue
    "#fca5a5", // red
    "#5eead4", // teal
    "#f0abfc", // fuchsia
    "#f9a8d4", // pink
];

static OPENING_BRACKETS: phf::Set<&'static str> = phf::phf_set! { "(", "[", "{" };
static CLOSING_BRACKETS: phf::Set<&'static str> = phf::phf_set! { ")", "]", "}" };

/// Signed nesting counter, scoped to one pass over a buffer's spans.
#[derive(Debug, Default)]
pub struct BracketDepth(isize);

impl BracketDepth {
    pub fn depth(&self) -> isize {
        self.0
    }

    pub fn open(&mut self) -> TokenCategory {
        let category = Self::slot(self.0);
        self.0 += 1;
        category
    }

    pub fn close(&mut self) -> TokenCategory {
        self.0 -= 1;
        Self::slot(self.0)
    }

    // Unbalanced closers drive the counter negative; they share slot 0.
    fn slot(depth: isize) -> TokenCategory {
        let depth = depth.max(0) as usize;
        TokenCategory::Bracket((depth % PALETTE.len()) as u8)
    }
}

pub fn is_opening_bracket(kind: &str) -> bool {
    OPENING_BRACKETS.contains(kind)
}

pub fn is_closing_bracket(kind: &str) -> bool {
    CLOSING_BRACKETS.contains(kind)
}

/// Recolour bracket spans in place. Expects spans sorted by `start`; only the
/// display category changes, `kind` is left alone.
pub fn paint_brackets(spans: &mut [TokenSpan]) {
    let mut depth = BracketDepth::default();

    for span in spans.iter_mut() {
        if is_opening_bracket(&span.kind) {
            span.category = depth.open();
        } else if is_closing_bracket(&span.kind) {
            span.category = depth.close();
            if depth.depth() < 0 {
                tracing::trace!(start = span.start, "unmatched closing bracket");
            }
        }
    }
}
