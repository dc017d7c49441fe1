//! Tokenizer for stripped expression text, built on the `logos` crate
//!
//! Recognizes digits, the six operators and parentheses. Unary and binary
//! minus are told apart here with a one-token lookback, so the evaluator never
//! has to guess.

use log::{trace, warn};
use logos::Logos;

use crate::error::LexError;
use crate::strip::{strip_whitespace, StrippedText};
use crate::token::{Token, TokenKind};

/// Default number of digits kept from a number literal.
pub const DEFAULT_MAX_NUMBER_DIGITS: usize = 10;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex("[0-9]+")]
    Digits,
}

/// Configuration for the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Digits of a number literal kept before the rest of the run is dropped
    pub max_number_digits: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_number_digits: DEFAULT_MAX_NUMBER_DIGITS,
        }
    }
}

impl LexerConfig {
    /// Override the digit limit. Values below one are raised to one.
    pub fn with_max_number_digits(mut self, digits: usize) -> Self {
        self.max_number_digits = digits.max(1);
        self
    }
}

/// Expression lexer over a stripped line.
///
/// Yields tokens in source order and stops for good after the first error.
pub struct Lexer<'source> {
    /// The stripped text being scanned
    source: &'source str,
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, RawToken>,
    config: LexerConfig,
    /// Last token handed out, for the unary minus rule
    previous: Option<Token>,
    failed: bool,
}

impl<'source> Lexer<'source> {
    /// Create a lexer with the default configuration
    pub fn new(source: &'source StrippedText) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a lexer with a custom configuration
    pub fn with_config(source: &'source StrippedText, config: LexerConfig) -> Self {
        let source = source.as_str();
        Self {
            source,
            logos_lexer: RawToken::lexer(source),
            config,
            previous: None,
            failed: false,
        }
    }

    /// Scan the whole input, returning every token or the first error.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }

    fn convert_token(&self, raw: RawToken, offset: usize) -> Token {
        match raw {
            RawToken::Plus => Token::operator(TokenKind::Plus, true, offset),
            RawToken::Star => Token::operator(TokenKind::Mul, true, offset),
            RawToken::Slash => Token::operator(TokenKind::Div, true, offset),
            RawToken::Caret => Token::operator(TokenKind::Exp, true, offset),
            RawToken::Percent => Token::operator(TokenKind::Mod, true, offset),
            RawToken::Minus => {
                let unary = self
                    .previous
                    .map_or(true, |prev| prev.makes_next_minus_unary());
                Token::operator(TokenKind::Minus, !unary, offset)
            }
            RawToken::LParen => Token::paren(TokenKind::OpenParen, offset),
            RawToken::RParen => Token::paren(TokenKind::CloseParen, offset),
            RawToken::Digits => {
                let digits = self.logos_lexer.slice();
                let value = self.number_value(digits, offset);
                Token::number_spanning(value, offset, digits.len())
            }
        }
    }

    /// Interpret a digit run, keeping at most `max_number_digits` digits.
    ///
    /// Magnitudes beyond 32 bits keep their low 32 bits.
    fn number_value(&self, digits: &str, offset: usize) -> i32 {
        let limit = self.config.max_number_digits.max(1);
        let kept = &digits[..digits.len().min(limit)];
        if kept.len() < digits.len() {
            warn!(
                "number at index {offset} has {} digits, keeping the first {limit}",
                digits.len()
            );
        }
        let magnitude = kept.bytes().fold(0i64, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
        });
        magnitude as i32
    }

    fn unexpected_char(&self, byte_offset: usize) -> LexError {
        let rest = self.source.get(byte_offset..).unwrap_or_default();
        let ch = rest.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        let index = self
            .source
            .get(..byte_offset)
            .map_or(byte_offset, |before| before.chars().count());
        LexError::UnexpectedChar { ch, index }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.logos_lexer.next()?;
        // Every accepted token is ASCII, so byte offsets equal character
        // indexes up to the first error.
        let offset = self.logos_lexer.span().start;
        match raw {
            Ok(raw) => {
                let token = self.convert_token(raw, offset);
                trace!("token {token} at index {offset}");
                self.previous = Some(token);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                Some(Err(self.unexpected_char(offset)))
            }
        }
    }
}

/// Tokenize already stripped text with the default configuration.
pub fn tokenize(text: &StrippedText) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}

/// Strip `raw` and tokenize it with `config`.
pub fn tokenize_str(raw: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    let stripped = strip_whitespace(raw);
    Lexer::with_config(&stripped, config).tokenize()
}
