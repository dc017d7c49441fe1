use climb_lexer::{LexError, TokenKind};

use super::error::{ArithmeticError, EvalError, MalformedKind};

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// A user-facing diagnostic pointing at one character of the stripped text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub index: usize,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic at `index` with a custom message
    pub fn at_index<S: Into<String>>(index: usize, message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            index,
            help: None,
        }
    }

    /// Attach a help line
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&EvalError> for Diagnostic {
    fn from(err: &EvalError) -> Self {
        let diagnostic = Diagnostic::at_index(err.index(), err.to_string());
        match help_for_error(err) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

/// Provide a help message for an evaluation error
fn help_for_error(err: &EvalError) -> Option<String> {
    match err {
        EvalError::Lex(LexError::UnexpectedChar { .. }) => Some(
            "Only digits, '+', '-', '*', '/', '%', '^' and parentheses are allowed".to_string(),
        ),
        EvalError::Malformed { kind, .. } => match kind {
            MalformedKind::Empty => Some("Type an expression such as '1 + 2'".to_string()),
            MalformedKind::MissingOperand {
                found: TokenKind::EndOfInput,
            } => Some("The expression ends where a number was expected".to_string()),
            MalformedKind::MissingOperand {
                found: TokenKind::Minus,
            } => Some("Only one unary '-' may precede an operand; use '-(-x)'".to_string()),
            MalformedKind::MissingOperand { .. } => None,
            MalformedKind::UnclosedParen { .. } => {
                Some("Did you forget a matching ')' later?".to_string())
            }
            MalformedKind::UnmatchedCloseParen => {
                Some("Did you forget a matching '(' earlier?".to_string())
            }
            MalformedKind::TrailingToken { .. } => {
                Some("Join the parts with an operator".to_string())
            }
            MalformedKind::TooDeep { .. } => {
                Some("Remove redundant parentheses".to_string())
            }
        },
        EvalError::Arithmetic { kind, .. } => match kind {
            ArithmeticError::DivisionByZero | ArithmeticError::ModuloByZero => {
                Some("The right operand evaluates to zero".to_string())
            }
        },
    }
}

/// Render a diagnostic with the stripped source and a caret under the index.
///
/// ```text
/// error: unexpected symbol '@' at index 2
///   | 3+@
///   |   ^
///   = help: Only digits, '+', '-', '*', '/', '%', '^' and parentheses are allowed
/// ```
pub fn render_snippet(diag: &Diagnostic, stripped: &str) -> String {
    let mut out = format!("{}: {}\n", diag.severity.label(), diag.message);
    out.push_str(&format!("  | {stripped}\n"));
    let caret_col = diag.index.min(stripped.chars().count());
    out.push_str(&format!("  | {}^", " ".repeat(caret_col)));
    if let Some(help) = &diag.help {
        out.push_str(&format!("\n  = help: {help}"));
    }
    out
}
