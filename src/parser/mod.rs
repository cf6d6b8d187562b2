//! Split-based recursive parser for single-line infix expressions

mod core;
mod errors;
pub mod splitter;

pub use self::core::{MAX_DEPTH, ParseResult, parse};
pub use errors::ParseError;
