use crate::expression::ops::{BinaryOp, UnaryOp};

/// Represents a parsed arithmetic expression in the single free variable `x`
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    Variable,
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn constant(value: f64) -> Self {
        Expression::Constant(value)
    }

    pub fn variable() -> Self {
        Expression::Variable
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::Unary(UnaryOp::Neg, Box::new(operand))
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Whether any leaf of the tree is the variable `x`
    pub fn contains_variable(&self) -> bool {
        match self {
            Expression::Constant(_) => false,
            Expression::Variable => true,
            Expression::Unary(_, operand) => operand.contains_variable(),
            Expression::Binary(_, l, r) => l.contains_variable() || r.contains_variable(),
        }
    }
}
