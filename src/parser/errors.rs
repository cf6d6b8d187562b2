use thiserror::Error;

/// Errors that can occur while parsing an expression
///
/// Positions are byte offsets into the text handed to [`crate::parser::parse`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty expression at position {position}")]
    EmptyExpression { position: usize },
    #[error("Unmatched parenthesis at position {position}")]
    UnmatchedParenthesis { position: usize },
    #[error("Malformed number literal '{literal}' at position {position}")]
    MalformedLiteral { literal: String, position: usize },
    #[error("Operator '{operator}' at position {position} has no left operand")]
    MissingOperand { operator: char, position: usize },
    #[error("Expression nests deeper than {limit} operators at position {position}")]
    TooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Re-anchor a position found in a substring starting at `offset`
    pub(crate) fn shifted(self, offset: usize) -> Self {
        match self {
            ParseError::EmptyExpression { position } => ParseError::EmptyExpression {
                position: position + offset,
            },
            ParseError::UnmatchedParenthesis { position } => ParseError::UnmatchedParenthesis {
                position: position + offset,
            },
            ParseError::MalformedLiteral { literal, position } => ParseError::MalformedLiteral {
                literal,
                position: position + offset,
            },
            ParseError::MissingOperand { operator, position } => ParseError::MissingOperand {
                operator,
                position: position + offset,
            },
            ParseError::TooDeep { limit, position } => ParseError::TooDeep {
                limit,
                position: position + offset,
            },
        }
    }
}
