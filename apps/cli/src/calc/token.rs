//! Splitting an expression into operators and classified operands.

use bytesize::num_bigint::BigInt;
use bytesize::{Locale, Size, parse_decimal};

use super::CalcError;
use super::value::Value;

/// An operator or parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    LParen,
    RParen,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '%' => Self::Percent,
            '(' => Self::LParen,
            ')' => Self::RParen,
            _ => return None,
        })
    }

    /// Source text of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

/// One lexical element of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Op(Op),
    Operand(Value),
}

/// Split `expression` into tokens.
///
/// Whitespace never ends an operand, so `1 KiB` is a single operand. A
/// `+` or `-` directly after `e`/`E` belongs to the operand (`1e-3`), and
/// doubled `*` or `/` form `**` and `//`.
pub fn tokenize(expression: &str, locale: &dyn Locale) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut operand_start: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (at, c) in expression.char_indices() {
        let previous = prev.replace(c);
        if c.is_whitespace() {
            continue;
        }
        let Some(op) = Op::from_char(c) else {
            operand_start.get_or_insert(at);
            continue;
        };

        if matches!(op, Op::Plus | Op::Minus) && matches!(previous, Some('e' | 'E')) {
            operand_start.get_or_insert(at);
            continue;
        }
        if previous == Some(c) {
            let doubled = match tokens.last() {
                Some(Token::Op(Op::Star)) if operand_start.is_none() => Some(Op::DoubleStar),
                Some(Token::Op(Op::Slash)) if operand_start.is_none() => Some(Op::DoubleSlash),
                _ => None,
            };
            if let Some(doubled) = doubled {
                tokens.pop();
                tokens.push(Token::Op(doubled));
                continue;
            }
        }
        if let Some(start) = operand_start.take() {
            tokens.push(Token::Operand(classify(&expression[start..at], locale)?));
        }
        tokens.push(Token::Op(op));
    }

    if let Some(start) = operand_start {
        tokens.push(Token::Operand(classify(&expression[start..], locale)?));
    }
    Ok(tokens)
}

/// Read operand text as an integer, else a decimal number, else a size.
fn classify(text: &str, locale: &dyn Locale) -> Result<Value, CalcError> {
    let text = text.trim();
    if text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(int) = text.parse::<BigInt>() {
            return Ok(Value::Int(int));
        }
    }
    if let Ok(decimal) = parse_decimal(text, locale) {
        return Ok(Value::Decimal(decimal));
    }
    Size::parse_in(text, locale)
        .map(Value::Size)
        .map_err(CalcError::Operand)
}
