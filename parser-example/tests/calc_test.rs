use parser_example::{evaluate, parse, CalcError, Expr};

fn eval(source: &str) -> Result<f64, CalcError> {
    evaluate(&parse(source)?)
}

#[test]
fn test_precedence() {
    assert_eq!(eval("3 + 4 * 5"), Ok(23.0));
    assert_eq!(eval("(3 + 4) * 5"), Ok(35.0));
    assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(eval("2 ^ 3 ^ 2"), Ok(512.0));
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-5"), Ok(-5.0));
    assert_eq!(eval("--2"), Ok(2.0));
    assert_eq!(eval("3 * -2"), Ok(-6.0));
}

#[test]
fn test_ast_shape() {
    assert_eq!(
        parse("1+2"),
        Ok(Expr::Binary {
            op: '+',
            left: Box::new(Expr::Number(1.0)),
            right: Box::new(Expr::Number(2.0)),
        })
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval("1 / 0"), Err(CalcError::DivisionByZero));
}

#[test]
fn test_unclosed_group_reports_end_of_input() {
    assert_eq!(
        parse("2 * (3"),
        Err(CalcError::Unexpected {
            found: "end of input".to_string(),
            position: 6,
        })
    );
}

#[test]
fn test_trailing_garbage() {
    assert_eq!(
        parse("1 2"),
        Err(CalcError::Unexpected {
            found: "'2'".to_string(),
            position: 2,
        })
    );
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse(""), Err(CalcError::Unexpected { position: 0, .. })));
    assert!(matches!(parse("   "), Err(CalcError::Unexpected { .. })));
}
