use thiserror::Error;

/// Errors raised while scanning an expression.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the recognised symbol set.
    ///
    /// `index` counts characters of the stripped text, not of the raw line.
    #[error("unexpected symbol '{ch}' at index {index}")]
    UnexpectedChar {
        /// The rejected character
        ch: char,
        /// Where it sits in the stripped text
        index: usize,
    },
}

impl LexError {
    /// Index of the offending character in the stripped text.
    pub fn index(&self) -> usize {
        match self {
            LexError::UnexpectedChar { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LexError::UnexpectedChar { ch: '@', index: 2 }.to_string(),
            "unexpected symbol '@' at index 2"
        );
    }
}
