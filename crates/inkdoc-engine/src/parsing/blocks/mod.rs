//! # Block Segmentation
//!
//! Two-phase segmentation of a document into heading and paragraph blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts (blank status, heading signature,
//!    hard-break flag)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` accumulates
//!    paragraph lines and emits `RawBlock`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: `Block` (public token) and `RawBlock` (pre-resolution)
//! - **`kinds`**: block-specific types with owned syntax (Heading, Paragraph)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - There is no parse failure: malformed heading markers degrade to
//!   paragraph text
//! - Headings are single-line and flush any pending paragraph
//! - Block order is document order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{Block, RawBlock};
