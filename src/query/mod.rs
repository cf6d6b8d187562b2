//! Turns raw input into an evaluate-or-solve request and formats the answer

mod core;
mod errors;

pub use self::core::{Answer, Query, SOLVE_PREFIX};
pub use errors::QueryError;
