use climb_lexer::Token;

/// A read-only cursor over the tokens of one expression
///
/// The cursor only moves forward. Reading past the last token yields an
/// `EndOfInput` sentinel located at `end_offset`.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    /// The tokens being evaluated
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
    /// Offset reported by the sentinel, normally the stripped text length
    end_offset: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a stream whose sentinel sits just past the last token.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end_offset = tokens.last().map_or(0, Token::end);
        Self::with_end_offset(tokens, end_offset)
    }

    /// Create a stream with an explicit sentinel offset
    pub fn with_end_offset(tokens: &'a [Token], end_offset: usize) -> Self {
        TokenStream {
            tokens,
            position: 0,
            end_offset,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Token {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(|| Token::end_of_input(self.end_offset))
    }

    /// Get the current token and advance past it
    pub fn next_token(&mut self) -> Token {
        let token = self.peek();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Get the remaining tokens as a slice
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position..]
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }
}
