use log::{debug, trace};

use crate::expression::{Expression, Precedence, UnaryOp};
use crate::parser::errors::ParseError;
use crate::parser::splitter::{SplitPoint, find_group_end, find_split};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest operator nesting `parse` accepts
pub const MAX_DEPTH: usize = 512;

/// Parses an infix expression in `x` into an expression tree.
///
/// # Errors
///
/// Returns an error if:
/// - the text, or any operand within it, is empty
/// - parentheses are unbalanced
/// - a leaf is neither `x` nor a floating-point literal
/// - `*`, `/` or `^` appears with nothing on its left
/// - operators nest deeper than [`MAX_DEPTH`]
pub fn parse(text: &str) -> ParseResult<Expression> {
    debug!("Parsing expression: '{}'", text);
    let expr = parse_at(text, 0, 0)?;
    debug!("Parsed expression: {}", expr);
    Ok(expr)
}

fn trimmed(text: &str, offset: usize) -> (&str, usize) {
    let leading = text.len() - text.trim_start().len();
    (text.trim(), offset + leading)
}

/// Strips whitespace and any number of parenthesis pairs wrapping the whole text
fn unwrap_groups(text: &str, offset: usize) -> ParseResult<(&str, usize)> {
    let (mut expr, mut offset) = trimmed(text, offset);
    while let Some(end) = find_group_end(expr, 0).map_err(|e| e.shifted(offset))? {
        if end + 1 != expr.len() {
            break;
        }
        (expr, offset) = trimmed(&expr[1..end], offset + 1);
    }
    Ok((expr, offset))
}

/// `offset` is where `text` starts in the caller's input; `depth` counts enclosing operators.
fn parse_at(text: &str, offset: usize, depth: usize) -> ParseResult<Expression> {
    let (expr, offset) = unwrap_groups(text, offset)?;
    if expr.is_empty() {
        return Err(ParseError::EmptyExpression { position: offset });
    }
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            position: offset,
        });
    }

    match find_split(expr).map_err(|e| e.shifted(offset))? {
        None => parse_leaf(expr, offset),
        Some(SplitPoint { index: 0, op }) => {
            trace!("Leading '{}' in '{}'", op.symbol(), expr);
            if op.precedence() != Precedence::Additive {
                return Err(ParseError::MissingOperand {
                    operator: op.symbol(),
                    position: offset,
                });
            }
            let operand = parse_at(&expr[1..], offset + 1, depth + 1)?;
            Ok(match UnaryOp::from_symbol(op.symbol()) {
                Some(unary) => Expression::Unary(unary, Box::new(operand)),
                None => operand,
            })
        }
        Some(SplitPoint { index, op }) => {
            trace!("Splitting '{}' at '{}' ({})", expr, op.symbol(), offset + index);
            let left = parse_at(&expr[..index], offset, depth + 1)?;
            let right = parse_at(&expr[index + 1..], offset + index + 1, depth + 1)?;
            Ok(Expression::binary(op, left, right))
        }
    }
}

fn parse_leaf(text: &str, offset: usize) -> ParseResult<Expression> {
    if text == "x" {
        return Ok(Expression::variable());
    }

    text.parse::<f64>()
        .map(Expression::constant)
        .map_err(|_| ParseError::MalformedLiteral {
            literal: text.to_string(),
            position: offset,
        })
}
