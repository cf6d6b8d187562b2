use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("No expression given")]
    EmptyInput,
    #[error("Equation needs an initial guess for x")]
    MissingInitialGuess,
    #[error("Initial guess is not a number: '{0}'")]
    InvalidInitialGuess(String),
    #[error("Initial guess given but the expression is not an equation")]
    UnusedInitialGuess,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}
