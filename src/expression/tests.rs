use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::ops::BinaryOp;

fn c(value: f64) -> Expression {
    Expression::constant(value)
}

fn x() -> Expression {
    Expression::variable()
}

#[test]
fn test_constant_ignores_binding() {
    let expr = c(4.25);
    assert_eq!(expr.evaluate(), Ok(4.25));
    assert_eq!(expr.evaluate_at(-100.0), 4.25);
}

#[test]
fn test_variable_takes_binding() {
    let expr = x();
    for v in [0.0, 1.5, -7.0, 1e300] {
        assert_eq!(expr.evaluate_at(v), v);
    }
}

#[test]
fn test_unbound_variable_is_an_error() {
    let expr = Expression::binary(BinaryOp::Add, c(1.0), x());
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::UnboundVariable);
    }
}

#[test]
fn test_negation() {
    let expr = Expression::negate(x());
    assert_eq!(expr.evaluate_at(3.0), -3.0);
    assert_eq!(Expression::negate(c(2.0)).evaluate(), Ok(-2.0));
}

#[test]
fn test_binary_operators() {
    let cases = [
        (BinaryOp::Add, 6.0, 3.0, 9.0),
        (BinaryOp::Sub, 6.0, 3.0, 3.0),
        (BinaryOp::Mul, 6.0, 3.0, 18.0),
        (BinaryOp::Div, 6.0, 3.0, 2.0),
        (BinaryOp::Pow, 6.0, 3.0, 216.0),
    ];
    for (op, l, r, expected) in cases {
        let expr = Expression::binary(op, c(l), c(r));
        let result = expr.evaluate();
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert!((value - expected).abs() < 1e-9, "{:?}: {}", op, value);
        }
    }
}

#[test]
fn test_non_finite_results_flow_through() {
    let div = Expression::binary(BinaryOp::Div, c(1.0), c(0.0));
    assert_eq!(div.evaluate(), Ok(f64::INFINITY));

    let pow = Expression::binary(BinaryOp::Pow, c(-2.0), c(0.5));
    let result = pow.evaluate();
    assert!(matches!(result, Ok(v) if v.is_nan()));
}

#[test]
fn test_evaluation_is_repeatable() {
    let expr = Expression::binary(
        BinaryOp::Sub,
        Expression::binary(BinaryOp::Pow, x(), c(2.0)),
        c(4.0),
    );
    let first = expr.evaluate_at(1.25);
    let second = expr.evaluate_at(1.25);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_contains_variable() {
    assert!(!c(1.0).contains_variable());
    assert!(Expression::negate(x()).contains_variable());
    assert!(Expression::binary(BinaryOp::Mul, c(2.0), x()).contains_variable());
    assert!(!Expression::binary(BinaryOp::Mul, c(2.0), c(3.0)).contains_variable());
}

#[test]
fn test_display_precedence() {
    let expr = Expression::binary(
        BinaryOp::Add,
        c(1.0),
        Expression::binary(BinaryOp::Mul, c(2.0), x()),
    );
    assert_eq!(format!("{}", expr), "1 + 2 * x");

    let expr = Expression::binary(
        BinaryOp::Mul,
        Expression::binary(BinaryOp::Add, c(1.0), c(2.0)),
        c(3.0),
    );
    assert_eq!(format!("{}", expr), "(1 + 2) * 3");
}

#[test]
fn test_display_associativity() {
    let left = Expression::binary(
        BinaryOp::Pow,
        Expression::binary(BinaryOp::Pow, c(2.0), c(3.0)),
        c(2.0),
    );
    assert_eq!(format!("{}", left), "(2 ^ 3) ^ 2");

    let right = Expression::binary(
        BinaryOp::Pow,
        c(2.0),
        Expression::binary(BinaryOp::Pow, c(3.0), c(2.0)),
    );
    assert_eq!(format!("{}", right), "2 ^ 3 ^ 2");

    let sub = Expression::binary(
        BinaryOp::Sub,
        c(1.0),
        Expression::binary(BinaryOp::Sub, c(2.0), c(3.0)),
    );
    assert_eq!(format!("{}", sub), "1 - (2 - 3)");
}

#[test]
fn test_display_negation() {
    let expr = Expression::negate(Expression::binary(BinaryOp::Add, x(), c(1.0)));
    assert_eq!(format!("{}", expr), "-(x + 1)");

    let expr = Expression::binary(BinaryOp::Mul, c(2.0), Expression::negate(x()));
    assert_eq!(format!("{}", expr), "2 * (-x)");

    let expr = Expression::binary(BinaryOp::Add, Expression::negate(x()), c(2.5));
    assert_eq!(format!("{}", expr), "-x + 2.5");
}
