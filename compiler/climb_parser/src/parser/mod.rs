//! Expression evaluation
//!
//! - [`token_stream`]: forward-only cursor with an end-of-input sentinel
//! - [`operators`]: precedence, associativity and integer semantics
//! - [`expressions`]: the precedence-climbing evaluator
//! - [`semantics`]: what the evaluator produces (a value, or the grouping)
//! - [`error`] and [`diagnostics`]: typed failures and their rendering
//!
//! The entry points below run the whole pipeline: strip, tokenize, evaluate.

pub mod diagnostics;
pub mod error;
pub mod expressions;
pub mod operators;
pub mod semantics;
pub mod token_stream;

use climb_lexer::{strip_whitespace, Lexer, LexerConfig, Token};
use log::debug;

pub use diagnostics::{render_snippet, Diagnostic, Severity};
pub use error::{ArithmeticError, ErrorKind, EvalError, EvalResult, MalformedKind};
pub use expressions::{Evaluator, DEFAULT_MAX_DEPTH};
pub use operators::{Associativity, BinaryOperator, ACCEPT_ANY};
pub use semantics::{Arithmetic, Grouping, Semantics};
pub use token_stream::TokenStream;

/// Settings for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Tokenizer settings
    pub lexer: LexerConfig,
    /// Maximum nesting of subexpressions
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            lexer: LexerConfig::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate an expression line with the default configuration.
///
/// ```
/// assert_eq!(climb_parser::evaluate("2 + 3 * 4"), Ok(14));
/// ```
pub fn evaluate(input: &str) -> EvalResult<i32> {
    evaluate_with(input, &EvalConfig::default())
}

/// Evaluate an expression line.
pub fn evaluate_with(input: &str, config: &EvalConfig) -> EvalResult<i32> {
    let value = run(input, config, Arithmetic)?;
    debug!("{input:?} evaluated to {value}");
    Ok(value)
}

/// Render the grouping chosen for an expression line, e.g. `2^3^4` as
/// `(2 ^ (3 ^ 4))`.
pub fn explain(input: &str) -> EvalResult<String> {
    explain_with(input, &EvalConfig::default())
}

/// Render the grouping chosen for an expression line.
pub fn explain_with(input: &str, config: &EvalConfig) -> EvalResult<String> {
    run(input, config, Grouping)
}

/// Evaluate tokens that were produced elsewhere.
pub fn evaluate_tokens(tokens: &[Token]) -> EvalResult<i32> {
    Evaluator::new(TokenStream::new(tokens), Arithmetic).evaluate()
}

fn run<S: Semantics>(input: &str, config: &EvalConfig, semantics: S) -> EvalResult<S::Value> {
    let stripped = strip_whitespace(input);
    let tokens = Lexer::with_config(&stripped, config.lexer).tokenize()?;
    let stream = TokenStream::with_end_offset(&tokens, stripped.len());
    Evaluator::new(stream, semantics)
        .with_max_depth(config.max_depth)
        .evaluate()
}
