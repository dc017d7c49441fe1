//! Precedence climbing over a token stream.
//!
//! Each call of [`Evaluator::parse_subexpression`] reads one operand (with an
//! optional unary minus, or a parenthesized subexpression), then keeps
//! consuming binary operators whose precedence is at least the threshold it
//! was given, recursing for each right-hand operand. Left-associative
//! operators pass a raised threshold to their right operand, so an equal
//! operator ends it; `^` passes its own precedence and chains to the right.

use climb_lexer::{Token, TokenKind};
use log::trace;

use super::error::{malformed, EvalResult, MalformedKind};
use super::operators::{BinaryOperator, ACCEPT_ANY};
use super::semantics::Semantics;
use super::token_stream::TokenStream;

/// Default limit on nested subexpressions
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A single-use evaluator over one token stream.
pub struct Evaluator<'a, S> {
    stream: TokenStream<'a>,
    semantics: S,
    depth: usize,
    max_depth: usize,
}

impl<'a, S: Semantics> Evaluator<'a, S> {
    pub fn new(stream: TokenStream<'a>, semantics: S) -> Self {
        Self {
            stream,
            semantics,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deeply subexpressions may nest
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluate the whole stream as one expression.
    ///
    /// Every token must be consumed; leftovers such as an unmatched `)` are
    /// reported rather than ignored.
    pub fn evaluate(mut self) -> EvalResult<S::Value> {
        if self.stream.is_empty() {
            return malformed(MalformedKind::Empty, self.stream.peek().offset);
        }

        let value = self.parse_subexpression(ACCEPT_ANY)?;

        let rest = self.stream.peek();
        match rest.kind {
            TokenKind::EndOfInput => Ok(value),
            TokenKind::CloseParen => malformed(MalformedKind::UnmatchedCloseParen, rest.offset),
            found => malformed(MalformedKind::TrailingToken { found }, rest.offset),
        }
    }

    /// Parse an operand followed by every operator whose precedence is at
    /// least `min_precedence`.
    pub fn parse_subexpression(&mut self, min_precedence: u8) -> EvalResult<S::Value> {
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return malformed(MalformedKind::TooDeep { limit }, self.stream.peek().offset);
        }
        self.depth += 1;

        let mut result = self.parse_operand()?;

        loop {
            let op_token = self.stream.peek();
            if matches!(op_token.kind, TokenKind::EndOfInput | TokenKind::CloseParen)
                || !op_token.is_binary
            {
                break;
            }
            let Some(op) = BinaryOperator::from_kind(op_token.kind) else {
                break;
            };
            if op.precedence() < min_precedence {
                break;
            }

            self.stream.next_token();
            let next_min_precedence = op.next_min_precedence();
            trace!(
                "operator {op} at index {}, right operand above {next_min_precedence}",
                op_token.offset
            );

            let rhs = self.parse_subexpression(next_min_precedence)?;
            result = self.semantics.apply(op, result, rhs, &op_token)?;
        }

        self.depth -= 1;
        Ok(result)
    }

    /// An optional unary minus, then a number or a parenthesized expression.
    fn parse_operand(&mut self) -> EvalResult<S::Value> {
        let mut token = self.stream.next_token();
        let negate = token.is_unary_minus();
        if negate {
            token = self.stream.next_token();
        }

        let operand = match token.kind {
            TokenKind::OpenParen => {
                let inner = self.parse_subexpression(ACCEPT_ANY)?;
                self.expect_close_paren(&token)?;
                inner
            }
            TokenKind::Number => self.semantics.number(&token),
            found => return malformed(MalformedKind::MissingOperand { found }, token.offset),
        };

        Ok(if negate {
            self.semantics.negate(operand)
        } else {
            operand
        })
    }

    fn expect_close_paren(&mut self, open: &Token) -> EvalResult<()> {
        let token = self.stream.next_token();
        if token.kind == TokenKind::CloseParen {
            Ok(())
        } else {
            malformed(MalformedKind::UnclosedParen { open: open.offset }, token.offset)
        }
    }
}
