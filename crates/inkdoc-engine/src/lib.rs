pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Block, InlineRun, InlineStyle, StyleSet, parse_document, parse_inline, parse_inline_with,
};
