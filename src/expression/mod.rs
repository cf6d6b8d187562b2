//! Expression tree, operator table and evaluation

mod ast;
mod display;
mod errors;
mod eval;
pub mod ops;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use ops::{BinaryOp, Precedence, UnaryOp};

#[cfg(test)]
mod tests;
