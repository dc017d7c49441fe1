use climb_lexer::{LexError, TokenKind};
use thiserror::Error;

/// Broad classification of an [`EvalError`], for callers that only branch on
/// the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the recognised symbol set
    Lexical,
    /// Tokens that do not form a complete expression
    Structural,
    /// A well-formed expression whose value cannot be computed
    Arithmetic,
}

/// Ways a token sequence can fail to form an expression
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Nothing but whitespace was given
    #[error("empty expression")]
    Empty,

    /// An operand was required but another token was found
    #[error("expected a number or '(' but found {found}")]
    MissingOperand { found: TokenKind },

    /// A '(' whose ')' never came
    #[error("unclosed '(' opened at index {open}")]
    UnclosedParen { open: usize },

    /// A ')' without a matching '('
    #[error("unmatched ')'")]
    UnmatchedCloseParen,

    /// Tokens left over after a complete expression
    #[error("unexpected {found} after a complete expression")]
    TrailingToken { found: TokenKind },

    /// Parentheses or operator chains nested past the configured limit
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Errors raised by an operator application
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// `/` with a zero right operand
    #[error("division by zero")]
    DivisionByZero,

    /// `%` with a zero right operand
    #[error("modulo by zero")]
    ModuloByZero,
}

/// Errors that can occur while evaluating an expression
///
/// Evaluation is atomic: any of these means there is no result at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The tokenizer rejected a character
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The tokens do not form a complete expression
    #[error("malformed expression: {kind} (index {index})")]
    Malformed { kind: MalformedKind, index: usize },

    /// An operator could not be applied
    #[error("arithmetic error: {kind} (index {index})")]
    Arithmetic { kind: ArithmeticError, index: usize },
}

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Lex(_) => ErrorKind::Lexical,
            EvalError::Malformed { .. } => ErrorKind::Structural,
            EvalError::Arithmetic { .. } => ErrorKind::Arithmetic,
        }
    }

    /// Index in the stripped text the error points at.
    pub fn index(&self) -> usize {
        match self {
            EvalError::Lex(err) => err.index(),
            EvalError::Malformed { index, .. } | EvalError::Arithmetic { index, .. } => *index,
        }
    }
}

/// Helper function to create a structural error
pub(crate) fn malformed<T>(kind: MalformedKind, index: usize) -> EvalResult<T> {
    Err(EvalError::Malformed { kind, index })
}
