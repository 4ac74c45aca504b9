//! # Block Kinds
//!
//! Block-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Heading`**: `MARKER = b'#'`, `MAX_LEVEL = 6` - single-line, with
//!   closing-run stripping
//! - **`Paragraph`**: hard/soft line joining rules and their constants
//!
//! All syntax constants live here, not scattered in builder code. The
//! classifier and builder call these types; they never hardcode `#` or
//! the trailing-space count.

pub mod heading;
pub mod paragraph;

pub use heading::{Heading, HeadingSig};
pub use paragraph::Paragraph;
