use log::{debug, trace};

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluates the expression with no binding for `x`
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnboundVariable`] when the evaluation reaches
    /// a [`Expression::Variable`] leaf.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Constant(value) => Ok(*value),
            Expression::Variable => Err(ExpressionError::UnboundVariable),
            Expression::Unary(op, operand) => {
                let value = operand.evaluate()?;
                Ok(op.apply(value))
            }
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(op.apply(left, right))
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    /// Evaluates the expression as a function of `x`
    ///
    /// NaN and infinities are returned as computed.
    pub fn evaluate_at(&self, x: f64) -> f64 {
        let value = match self {
            Expression::Constant(value) => *value,
            Expression::Variable => x,
            Expression::Unary(op, operand) => op.apply(operand.evaluate_at(x)),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate_at(x);
                let right = r.evaluate_at(x);
                op.apply(left, right)
            }
        };
        trace!("{} at x={} -> {}", self, x, value);
        value
    }
}
