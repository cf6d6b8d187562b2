use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::ops::{BinaryOp, Precedence};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Leading minus signs only survive re-parsing at the start of a sum.
        fn is_signed(expr: &Expression) -> bool {
            match expr {
                Expression::Unary(_, _) => true,
                Expression::Constant(n) => n.is_sign_negative(),
                _ => false,
            }
        }

        fn binary_precedence(expr: &Expression) -> Option<Precedence> {
            match expr {
                Expression::Binary(op, _, _) => Some(op.precedence()),
                _ => None,
            }
        }

        fn left_needs_parens(parent: BinaryOp, left: &Expression) -> bool {
            let p = parent.precedence();
            if is_signed(left) {
                return p != Precedence::Additive;
            }
            match binary_precedence(left) {
                Some(lp) => lp < p || (lp == p && p == Precedence::Exponent),
                None => false,
            }
        }

        fn right_needs_parens(parent: BinaryOp, right: &Expression) -> bool {
            let p = parent.precedence();
            if is_signed(right) {
                return true;
            }
            match binary_precedence(right) {
                Some(rp) => rp < p || (rp == p && p != Precedence::Exponent),
                None => false,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Constant(n) => write!(f, "{}", n),
                Expression::Variable => write!(f, "x"),
                Expression::Unary(op, operand) => {
                    let need = is_signed(operand)
                        || binary_precedence(operand) == Some(Precedence::Additive);
                    write!(f, "{}", op.symbol())?;
                    write_with_parens(f, operand, need)
                }
                Expression::Binary(op, l, r) => {
                    write_with_parens(f, l, left_needs_parens(*op, l))?;
                    write!(f, " {} ", op.symbol())?;
                    write_with_parens(f, r, right_needs_parens(*op, r))
                }
            }
        }

        fmt_expression(f, self)
    }
}
