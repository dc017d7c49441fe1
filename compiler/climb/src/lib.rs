//! Front-end plumbing for the `climb` binary: settings, bounded line input,
//! JSON reports and the REPL session.

use std::io::BufRead;

use climb_lexer::{strip_whitespace, tokenize_str, LexerConfig, DEFAULT_MAX_NUMBER_DIGITS};
use climb_parser::parser::{render_snippet, Diagnostic, ErrorKind, DEFAULT_MAX_DEPTH};
use climb_parser::{evaluate_with, explain_with, EvalConfig, EvalError};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

/// Longest accepted input line, in characters.
pub const DEFAULT_MAX_INPUT: usize = 256;

/// Limits applied to every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum raw line length in characters
    pub max_input: usize,
    /// Digits kept per number literal
    pub max_digits: usize,
    /// Maximum nesting of subexpressions
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_input: DEFAULT_MAX_INPUT,
            max_digits: DEFAULT_MAX_NUMBER_DIGITS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Settings {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            lexer: LexerConfig::default().with_max_number_digits(self.max_digits),
            max_depth: self.max_depth,
        }
    }

    /// Reject lines longer than `max_input` characters.
    pub fn check_length(&self, input: &str) -> Result<(), InputError> {
        let len = input.chars().count();
        if len > self.max_input {
            return Err(InputError::TooLong {
                len,
                limit: self.max_input,
            });
        }
        Ok(())
    }
}

/// Failures before evaluation starts
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is {len} characters long; the limit is {limit}")]
    TooLong { len: usize, limit: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read one line, drop its line terminator and enforce the length limit.
///
/// End of input before any character yields an empty line.
pub fn read_expression_line<R: BufRead>(
    mut reader: R,
    settings: &Settings,
) -> Result<String, InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    debug!("read {read} bytes of input");
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r').to_string();
    settings.check_length(&line)?;
    Ok(line)
}

/// Render an evaluation error against the stripped form of `input`.
pub fn render_error(err: &EvalError, input: &str) -> String {
    render_snippet(&Diagnostic::from(err), &strip_whitespace(input))
}

/// Display forms of the tokens of `input`.
pub fn token_listing(input: &str, settings: &Settings) -> Result<Vec<String>, EvalError> {
    let tokens = tokenize_str(input, settings.eval_config().lexer)?;
    Ok(tokens.iter().map(ToString::to_string).collect())
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Lexical => "lexical",
        ErrorKind::Structural => "structural",
        ErrorKind::Arithmetic => "arithmetic",
    }
}

/// Machine-readable form of an [`EvalError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl From<&EvalError> for ErrorReport {
    fn from(err: &EvalError) -> Self {
        let diagnostic = Diagnostic::from(err);
        Self {
            kind: kind_label(err.kind()),
            message: diagnostic.message,
            index: diagnostic.index,
            help: diagnostic.help,
        }
    }
}

/// JSON report for one command run over one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub stripped: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Report {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            stripped: strip_whitespace(input).into_string(),
            result: None,
            grouping: None,
            tokens: None,
            error: None,
        }
    }

    pub fn evaluate(input: &str, settings: &Settings) -> Self {
        let mut report = Self::new(input);
        match evaluate_with(input, &settings.eval_config()) {
            Ok(value) => report.result = Some(value),
            Err(err) => report.error = Some(ErrorReport::from(&err)),
        }
        report
    }

    pub fn explain(input: &str, settings: &Settings) -> Self {
        let mut report = Self::new(input);
        match explain_with(input, &settings.eval_config()) {
            Ok(grouping) => report.grouping = Some(grouping),
            Err(err) => report.error = Some(ErrorReport::from(&err)),
        }
        report
    }

    pub fn tokens(input: &str, settings: &Settings) -> Self {
        let mut report = Self::new(input);
        match token_listing(input, settings) {
            Ok(tokens) => report.tokens = Some(tokens),
            Err(err) => report.error = Some(ErrorReport::from(&err)),
        }
        report
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// State of an interactive session. Each line is evaluated on its own.
#[derive(Debug)]
pub struct ReplSession {
    settings: Settings,
    evaluated: usize,
}

impl ReplSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            evaluated: 0,
        }
    }

    pub fn prompt(&self) -> &'static str {
        "climb> "
    }

    /// Number of expressions evaluated so far, successful or not
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Handle one input line. Returns the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        (self.evaluate(trimmed), false)
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));

        match command {
            ":help" => (
                vec![
                    "commands: :help, :quit, :tokens <expr>, :explain <expr>".to_string(),
                    "note: any other line is evaluated as an expression".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => {
                info!("leaving repl after {} expressions", self.evaluated);
                (Vec::new(), true)
            }
            ":tokens" if rest.is_empty() => {
                (vec!["error: usage: :tokens <expr>".to_string()], false)
            }
            ":tokens" | ":explain" if self.settings.check_length(rest).is_err() => {
                (self.length_error(rest), false)
            }
            ":tokens" => {
                let out = match token_listing(rest, &self.settings) {
                    Ok(tokens) => vec![tokens.join(" ")],
                    Err(err) => error_lines(&err, rest),
                };
                (out, false)
            }
            ":explain" if rest.is_empty() => {
                (vec!["error: usage: :explain <expr>".to_string()], false)
            }
            ":explain" => {
                let out = match explain_with(rest, &self.settings.eval_config()) {
                    Ok(grouping) => vec![grouping],
                    Err(err) => error_lines(&err, rest),
                };
                (out, false)
            }
            _ => (vec![format!("error: unknown command '{command}'")], false),
        }
    }

    fn length_error(&self, input: &str) -> Vec<String> {
        match self.settings.check_length(input) {
            Ok(()) => Vec::new(),
            Err(err) => vec![format!("error: {err}")],
        }
    }

    fn evaluate(&mut self, expr: &str) -> Vec<String> {
        if self.settings.check_length(expr).is_err() {
            return self.length_error(expr);
        }
        self.evaluated += 1;
        match evaluate_with(expr, &self.settings.eval_config()) {
            Ok(value) => vec![format!("Result: {value}")],
            Err(err) => error_lines(&err, expr),
        }
    }
}

fn error_lines(err: &EvalError, input: &str) -> Vec<String> {
    render_error(err, input).lines().map(str::to_string).collect()
}
