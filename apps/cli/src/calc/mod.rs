//! Expression evaluation over sizes and numbers.

mod eval;
mod token;
mod value;

use bytesize::{Locale, SizeError};
use thiserror::Error;

pub use value::Value;

/// Why an expression could not be evaluated.
///
/// The messages are printed verbatim, so each carries the stage that failed.
#[derive(Debug, Error)]
pub enum CalcError {
    /// An operand is neither a number nor a size specification.
    #[error("Error while parsing expression: {0}")]
    Operand(#[source] SizeError),

    /// Operators and operands do not form an expression.
    #[error("Error during evaluation: invalid syntax: {0}")]
    Syntax(String),

    /// The operator is not defined for the operand types.
    #[error("Error during evaluation: {0}")]
    Type(String),

    #[error("Error during evaluation: division by zero")]
    ZeroDivision,

    /// The size library rejected an operation.
    #[error("Error during evaluation: {0}")]
    Size(#[source] SizeError),
}

/// Evaluate `expression`, reading operands with `locale`.
pub fn evaluate(expression: &str, locale: &dyn Locale) -> Result<Value, CalcError> {
    let tokens = token::tokenize(expression, locale)?;
    tracing::trace!(?tokens, "tokenized expression");
    eval::Parser::new(&tokens).evaluate()
}
