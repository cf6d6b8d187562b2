use std::fmt;

use log::{info, warn};

use crate::expression::Expression;
use crate::parser::parse;
use crate::query::errors::QueryError;
use crate::solver::{NewtonSolver, Solution};

/// Marks the input as an equation to solve rather than an expression to evaluate
pub const SOLVE_PREFIX: char = '=';

/// A parsed request: evaluate a closed-form expression or find a root
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Evaluate(Expression),
    Solve {
        expression: Expression,
        initial_guess: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Value(f64),
    Root(Solution),
}

impl Answer {
    /// The number printed on the answer line
    pub fn value(&self) -> f64 {
        match self {
            Answer::Value(value) => *value,
            Answer::Root(solution) => solution.root,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Answer::Value(value) => write!(f, "={}", value),
            Answer::Root(solution) => write!(f, "x={}", solution.root),
        }
    }
}

impl Query {
    /// Build a query from the expression text and an optional initial guess
    ///
    /// Error positions count from the start of `input`, prefix and leading
    /// whitespace included.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank or does not parse, if it is an
    /// equation and `initial_guess` is `None`, or if it is not an equation and
    /// `initial_guess` is `Some`.
    pub fn parse(input: &str, initial_guess: Option<f64>) -> Result<Self, QueryError> {
        let body = input.trim_start();
        if body.trim_end().is_empty() {
            return Err(QueryError::EmptyInput);
        }
        let leading = input.len() - body.len();

        match body.strip_prefix(SOLVE_PREFIX) {
            Some(equation) => {
                let prefix_end = leading + SOLVE_PREFIX.len_utf8();
                let expression = parse(equation).map_err(|e| e.shifted(prefix_end))?;
                let initial_guess = initial_guess.ok_or(QueryError::MissingInitialGuess)?;
                Ok(Query::Solve {
                    expression,
                    initial_guess,
                })
            }
            None if initial_guess.is_some() => Err(QueryError::UnusedInitialGuess),
            None => Ok(Query::Evaluate(parse(input)?)),
        }
    }

    /// Build a query from whitespace-separated input tokens
    ///
    /// The first token is the expression. For an equation the second token is
    /// the initial guess; otherwise further tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no tokens, the initial guess is not a
    /// number, or [`Query::parse`] fails.
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens = tokens.into_iter();
        let input = tokens.next().ok_or(QueryError::EmptyInput)?;
        if !input.starts_with(SOLVE_PREFIX) {
            return Self::parse(input, None);
        }

        let initial_guess = tokens
            .next()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| QueryError::InvalidInitialGuess(token.to_string()))
            })
            .transpose()?;
        Self::parse(input, initial_guess)
    }

    /// # Errors
    ///
    /// Returns [`QueryError::Expression`] when a closed-form evaluation reaches `x`.
    pub fn run(&self, solver: &NewtonSolver) -> Result<Answer, QueryError> {
        match self {
            Query::Evaluate(expression) => {
                if expression.contains_variable() {
                    warn!(
                        "'{}' depends on x; prefix it with '{}' to solve for a root",
                        expression, SOLVE_PREFIX
                    );
                }
                Ok(Answer::Value(expression.evaluate()?))
            }
            Query::Solve {
                expression,
                initial_guess,
            } => {
                let solution = solver.solve(expression, *initial_guess);
                info!(
                    "Finished after {} iterations, residual {}, converged: {}",
                    solution.iterations, solution.residual, solution.converged
                );
                Ok(Answer::Root(solution))
            }
        }
    }
}
