use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Variable x has no binding in closed-form evaluation")]
    UnboundVariable,
}
