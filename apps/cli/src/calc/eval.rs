//! Recursive-descent evaluation of a token stream.
//!
//! ```text
//! expr  := term (("+" | "-") term)*
//! term  := unary (("*" | "/" | "//" | "%") unary)*
//! unary := ("+" | "-") unary | power
//! power := primary ("**" unary)?
//! primary := operand | "(" expr ")"
//! ```

use super::CalcError;
use super::token::{Op, Token};
use super::value::Value;

/// Nesting limit for parentheses, unary signs and exponents.
const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the whole token stream.
    pub fn evaluate(mut self) -> Result<Value, CalcError> {
        if self.tokens.is_empty() {
            return Err(CalcError::Syntax("empty expression".to_string()));
        }
        let value = self.expr()?;
        match self.peek() {
            None => Ok(value),
            Some(Token::Op(op)) => Err(CalcError::Syntax(format!("unexpected '{}'", op.symbol()))),
            Some(Token::Operand(operand)) => {
                Err(CalcError::Syntax(format!("unexpected operand {operand}")))
            }
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next_op(&mut self, accepted: &[Op]) -> Option<Op> {
        match self.peek() {
            Some(Token::Op(op)) if accepted.contains(op) => {
                self.pos += 1;
                Some(*op)
            }
            _ => None,
        }
    }

    fn descend(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::Syntax("expression nested too deeply".to_string()));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Value, CalcError> {
        let mut value = self.term()?;
        while let Some(op) = self.next_op(&[Op::Plus, Op::Minus]) {
            let rhs = self.term()?;
            value = match op {
                Op::Plus => value.add(&rhs)?,
                _ => value.sub(&rhs)?,
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<Value, CalcError> {
        let mut value = self.unary()?;
        while let Some(op) = self.next_op(&[Op::Star, Op::Slash, Op::DoubleSlash, Op::Percent]) {
            let rhs = self.unary()?;
            value = match op {
                Op::Star => value.mul(&rhs)?,
                Op::Slash => value.div(&rhs)?,
                Op::DoubleSlash => value.floor_div(&rhs)?,
                _ => value.rem(&rhs)?,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<Value, CalcError> {
        let Some(op) = self.next_op(&[Op::Plus, Op::Minus]) else {
            return self.power();
        };
        self.descend()?;
        let operand = self.unary()?;
        self.depth -= 1;
        Ok(match op {
            Op::Minus => operand.neg(),
            _ => operand,
        })
    }

    fn power(&mut self) -> Result<Value, CalcError> {
        let base = self.primary()?;
        if self.next_op(&[Op::DoubleStar]).is_none() {
            return Ok(base);
        }
        self.descend()?;
        let exponent = self.unary()?;
        self.depth -= 1;
        base.pow(&exponent)
    }

    fn primary(&mut self) -> Result<Value, CalcError> {
        match self.peek() {
            Some(Token::Operand(value)) => {
                self.pos += 1;
                Ok(value.clone())
            }
            Some(Token::Op(Op::LParen)) => {
                self.pos += 1;
                self.descend()?;
                let value = self.expr()?;
                if self.next_op(&[Op::RParen]).is_none() {
                    return Err(CalcError::Syntax("missing ')'".to_string()));
                }
                self.depth -= 1;
                Ok(value)
            }
            Some(Token::Op(op)) => Err(CalcError::Syntax(format!("unexpected '{}'", op.symbol()))),
            None => Err(CalcError::Syntax("unexpected end of expression".to_string())),
        }
    }
}
