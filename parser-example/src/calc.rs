//! A recursive-descent calculator written directly against the `Parser`
//! cursor.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := power (('*' | '/') power)*
//! power   := unary ('^' power)?
//! unary   := '-' unary | primary
//! primary := number | '(' expr ')'
//! ```

use parser_framework::{ElementParser, ParsableBuffer, Parser, ParserState};
use thiserror::Error;

type CharParser = Parser<ParsableBuffer<char>, ParserState>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        op: char,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unexpected {found} at position {position}")]
    Unexpected { found: String, position: isize },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Parses a complete expression.
pub fn parse(input: &str) -> Result<Expr, CalcError> {
    let mut parser = CharParser::new(ParsableBuffer::from(input));
    let expr = parse_expr(&mut parser)?;
    skip_whitespace(&mut parser);
    if !parser.is_eof() {
        return Err(unexpected(&parser));
    }
    Ok(expr)
}

/// Evaluates a parsed expression.
pub fn evaluate(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Negate(inner) => Ok(-evaluate(inner)?),
        Expr::Binary { op, left, right } => {
            let (l, r) = (evaluate(left)?, evaluate(right)?);
            match op {
                '+' => Ok(l + r),
                '-' => Ok(l - r),
                '*' => Ok(l * r),
                '/' if r == 0.0 => Err(CalcError::DivisionByZero),
                '/' => Ok(l / r),
                _ => Ok(l.powf(r)),
            }
        }
    }
}

fn unexpected(parser: &CharParser) -> CalcError {
    let found = match parser.next() {
        Ok(ch) => format!("'{}'", ch),
        Err(_) => "end of input".to_string(),
    };
    CalcError::Unexpected {
        found,
        position: parser.position(),
    }
}

fn skip_whitespace(parser: &mut CharParser) {
    while parser.is_next_with(char::is_whitespace).unwrap_or(false) {
        parser.advance_by(1);
    }
}

/// Consumes one of `ops` if it is the next non-blank character.
fn eat_op(parser: &mut CharParser, ops: &[char]) -> Option<char> {
    skip_whitespace(parser);
    let ch = parser.next().ok()?;
    if ops.contains(&ch) {
        parser.advance_by(1);
        Some(ch)
    } else {
        None
    }
}

fn parse_expr(parser: &mut CharParser) -> Result<Expr, CalcError> {
    let mut left = parse_term(parser)?;
    while let Some(op) = eat_op(parser, &['+', '-']) {
        let right = parse_term(parser)?;
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn parse_term(parser: &mut CharParser) -> Result<Expr, CalcError> {
    let mut left = parse_power(parser)?;
    while let Some(op) = eat_op(parser, &['*', '/']) {
        let right = parse_power(parser)?;
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn parse_power(parser: &mut CharParser) -> Result<Expr, CalcError> {
    let base = parse_unary(parser)?;
    if eat_op(parser, &['^']).is_some() {
        // 右结合
        let exponent = parse_power(parser)?;
        return Ok(Expr::Binary {
            op: '^',
            left: Box::new(base),
            right: Box::new(exponent),
        });
    }
    Ok(base)
}

fn parse_unary(parser: &mut CharParser) -> Result<Expr, CalcError> {
    if eat_op(parser, &['-']).is_some() {
        return Ok(Expr::Negate(Box::new(parse_unary(parser)?)));
    }
    parse_primary(parser)
}

fn parse_primary(parser: &mut CharParser) -> Result<Expr, CalcError> {
    skip_whitespace(parser);

    if parser.is_next('(').unwrap_or(false) {
        parser.advance_by(1);
        let inner = parse_expr(parser)?;
        if eat_op(parser, &[')']).is_none() {
            return Err(unexpected(parser));
        }
        return Ok(inner);
    }

    let start = parser.position();
    while parser
        .is_next_with(|c| c.is_ascii_digit() || c == '.')
        .unwrap_or(false)
    {
        parser.advance_by(1);
    }
    let len = (parser.position() - start) as usize;
    if len == 0 {
        return Err(unexpected(parser));
    }

    let literal: String = parser
        .substring(start, len)
        .map_err(|_| unexpected(parser))?
        .collect();
    log::trace!("number literal {:?} at {}", literal, start);
    literal
        .parse::<f64>()
        .map(Expr::Number)
        .map_err(|_| CalcError::InvalidNumber(literal))
}
