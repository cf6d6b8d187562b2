//! Operator table shared by the parser and the evaluator

/// Binding strength of a binary operator, loosest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Exponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

impl BinaryOp {
    /// Look up the operator written as `symbol`
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Multiplicative,
            BinaryOp::Pow => Precedence::Exponent,
        }
    }

    /// Apply the operator with plain IEEE-754 semantics; nothing is trapped.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
            BinaryOp::Pow => left.powf(right),
        }
    }
}

impl UnaryOp {
    /// Only `-` builds a node; a leading `+` is dropped by the parser.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(UnaryOp::Neg),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Neg => '-',
        }
    }

    #[inline]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOp::Neg => -operand,
        }
    }
}
