//! Single-pass scan that picks the operator an expression splits at
//!
//! The rightmost top-level `+`/`-` wins; failing that the rightmost `*`/`/`;
//! failing that the leftmost `^`. Splitting at the root operator this way
//! makes `+ - * /` left-associative and `^` right-associative.

use crate::expression::{BinaryOp, Precedence};
use crate::parser::errors::ParseError;

/// Characters a digit/variable run stops at
const SCAN_STOPS: &[u8] = b"+-*/^()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoint {
    pub index: usize,
    pub op: BinaryOp,
}

/// Index of the `)` closing the group opened at `start`
///
/// Returns `Ok(None)` when `start` is not a `(`.
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedParenthesis`] if the group never closes.
pub fn find_group_end(expr: &str, start: usize) -> Result<Option<usize>, ParseError> {
    let bytes = expr.as_bytes();
    if bytes.get(start) != Some(&b'(') {
        return Ok(None);
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return Ok(Some(i));
        }
    }
    Err(ParseError::UnmatchedParenthesis { position: start })
}

/// Index of the operator or parenthesis ending the run that starts at `start`
///
/// The sign of a decimal exponent (`1e-9`, `2.5E+3`) belongs to the run.
fn run_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut from = start;
    loop {
        let stop = from + bytes.iter().skip(from).position(|c| SCAN_STOPS.contains(c))?;
        let exponent_sign = stop >= start + 2
            && matches!(
                bytes.get(stop - 2..=stop),
                Some([b'0'..=b'9' | b'.', b'e' | b'E', b'+' | b'-'])
            );
        if !exponent_sign {
            return Some(stop);
        }
        from = stop + 1;
    }
}

/// Find the top-level operator `expr` splits at, if any
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedParenthesis`] for a group that never closes
/// or a `)` that closes nothing.
pub fn find_split(expr: &str) -> Result<Option<SplitPoint>, ParseError> {
    let bytes = expr.as_bytes();
    let mut split: Option<SplitPoint> = None;
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' | b'.' | b'x' => match run_end(bytes, i) {
                Some(stop) => {
                    i = stop;
                    continue;
                }
                None => break,
            },
            b'(' => {
                if let Some(end) = find_group_end(expr, i)? {
                    i = end;
                }
            }
            b')' => return Err(ParseError::UnmatchedParenthesis { position: i }),
            _ => {
                if let Some(op) = BinaryOp::from_symbol(char::from(b)) {
                    let candidate = SplitPoint { index: i, op };
                    match op.precedence() {
                        Precedence::Additive => split = Some(candidate),
                        Precedence::Multiplicative => {
                            let additive = matches!(
                                split,
                                Some(SplitPoint { op, .. }) if op.precedence() == Precedence::Additive
                            );
                            if !additive {
                                split = Some(candidate);
                            }
                        }
                        Precedence::Exponent => {
                            if split.is_none() {
                                split = Some(candidate);
                            }
                        }
                    }
                }
            }
        }
        i += 1;
    }

    Ok(split)
}
