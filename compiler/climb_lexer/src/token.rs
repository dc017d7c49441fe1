//! Token model shared by the lexer and the evaluator.

use std::fmt;

/// The kind of a token.
///
/// `EndOfInput` is never produced by the tokenizer itself; it is the sentinel
/// handed out by token streams once every real token has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`, binary or unary
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`. Named after exponentiation but evaluated as bitwise XOR.
    Exp,
    /// `%`
    Mod,
    /// Decimal literal
    Number,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Past the last token
    EndOfInput,
}

impl TokenKind {
    /// True for the six operator kinds.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Exp
                | TokenKind::Mod
        )
    }

    /// Source symbol of operators and parentheses.
    pub fn symbol(self) -> Option<char> {
        match self {
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Mul => Some('*'),
            TokenKind::Div => Some('/'),
            TokenKind::Exp => Some('^'),
            TokenKind::Mod => Some('%'),
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Number | TokenKind::EndOfInput => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "'{c}'"),
            None if *self == TokenKind::Number => f.write_str("number"),
            None => f.write_str("end of input"),
        }
    }
}

/// A single lexical unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// Magnitude of a `Number`; zero for every other kind
    pub value: i32,
    /// Distinguishes subtraction from negation on `Minus`
    pub is_binary: bool,
    /// Index of the token's first character in the stripped text
    pub offset: usize,
    /// Characters the token covers, dropped digits included
    pub len: usize,
}

impl Token {
    /// A number literal written without leading zeros.
    pub fn number(value: i32, offset: usize) -> Self {
        let len = value.unsigned_abs().to_string().len();
        Self::number_spanning(value, offset, len)
    }

    /// A number literal read from `len` characters of source.
    pub fn number_spanning(value: i32, offset: usize, len: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            value,
            is_binary: false,
            offset,
            len,
        }
    }

    /// An operator. Only `Minus` may be unary; every other operator is binary.
    pub fn operator(kind: TokenKind, is_binary: bool, offset: usize) -> Self {
        debug_assert!(kind.is_operator());
        Self {
            kind,
            value: 0,
            is_binary: is_binary || kind != TokenKind::Minus,
            offset,
            len: 1,
        }
    }

    /// An opening or closing parenthesis.
    pub fn paren(kind: TokenKind, offset: usize) -> Self {
        debug_assert!(matches!(kind, TokenKind::OpenParen | TokenKind::CloseParen));
        Self {
            kind,
            value: 0,
            is_binary: false,
            offset,
            len: 1,
        }
    }

    /// The sentinel returned past the last token.
    pub fn end_of_input(offset: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            value: 0,
            is_binary: false,
            offset,
            len: 0,
        }
    }

    /// Index just past the token's last character.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// A `Minus` that negates the following operand.
    pub fn is_unary_minus(&self) -> bool {
        self.kind == TokenKind::Minus && !self.is_binary
    }

    /// Whether a `-` directly after this token negates instead of subtracting.
    pub fn makes_next_minus_unary(&self) -> bool {
        self.kind.is_operator() || self.kind == TokenKind::OpenParen
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "{}", self.value),
            TokenKind::EndOfInput => f.write_str("<end>"),
            TokenKind::Minus if !self.is_binary => f.write_str("-(unary)"),
            kind => match kind.symbol() {
                Some(c) => write!(f, "{c}"),
                None => f.write_str("?"),
            },
        }
    }
}
