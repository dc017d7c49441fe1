//! climb lexical analyzer
//!
//! Turns a raw expression line into tokens in two steps: the line is first
//! stripped of whitespace ([`strip_whitespace`]), then scanned by the
//! [`Lexer`]. Token offsets and error indexes refer to the stripped text.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod lexer;
pub mod strip;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, tokenize_str, Lexer, LexerConfig, DEFAULT_MAX_NUMBER_DIGITS};
pub use strip::{strip_whitespace, StrippedText};
pub use token::{Token, TokenKind};
