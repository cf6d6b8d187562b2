//! newton-calc - A library for evaluating arithmetic expressions in `x`
//!
//! Expressions are parsed into a tree of constants, the variable `x`, negation
//! and the binary operators `+ - * / ^`. A tree can be evaluated directly or,
//! for an equation written with a leading `=`, solved for a root with Newton's
//! method.

pub mod expression;
pub mod parser;
pub mod query;
pub mod solver;

// Re-export the main public API
pub use expression::{BinaryOp, Expression, ExpressionError, UnaryOp};
pub use parser::{ParseError, parse};
pub use query::{Answer, Query, QueryError};
pub use solver::{NewtonSolver, Solution, SolverConfig};

/// Evaluate an expression, or solve it when it starts with `=`
///
/// This is a convenience function that parses the input into a [`Query`] and
/// runs it with a default [`NewtonSolver`].
///
/// # Arguments
///
/// * `input` - The expression text, optionally prefixed with `=`
/// * `initial_guess` - Starting point for the root search; required for equations
///
/// # Errors
///
/// This function will return an error if:
/// * The input is blank or cannot be parsed
/// * The input is an equation and no initial guess was given
/// * A plain expression refers to `x`
///
/// # Examples
///
/// ```
/// use newton_calc::calculate;
///
/// match calculate("(1+2)*3", None) {
///     Ok(answer) => println!("{}", answer),
///     Err(e) => println!("Error: {}", e),
/// }
///
/// if let Ok(answer) = calculate("=x^2-4", Some(1.0)) {
///     assert!((answer.value() - 2.0).abs() < 1e-9);
/// }
/// ```
pub fn calculate(input: &str, initial_guess: Option<f64>) -> Result<Answer, QueryError> {
    Query::parse(input, initial_guess)?.run(&NewtonSolver::default())
}
