//! Whitespace stripping
//!
//! The tokenizer never sees whitespace: the raw line is compacted first and
//! every index reported afterwards (token offsets, lexical errors) refers to
//! the compacted text.

use std::fmt;
use std::ops::Deref;

/// An owned, whitespace-free copy of an input line.
///
/// The length is carried by the buffer itself, so nothing downstream relies on
/// a terminator character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StrippedText {
    text: String,
}

impl StrippedText {
    /// Number of characters left after stripping.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the input held nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The compacted text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the wrapper and return the underlying buffer.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for StrippedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for StrippedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StrippedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Returns true for the characters removed by [`strip_whitespace`].
pub fn is_stripped(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Remove spaces, tabs, carriage returns and newlines from `raw`.
///
/// Other characters, including other Unicode whitespace, are kept so that the
/// tokenizer can reject them with a precise index.
pub fn strip_whitespace(raw: &str) -> StrippedText {
    StrippedText {
        text: raw.chars().filter(|&c| !is_stripped(c)).collect(),
    }
}
