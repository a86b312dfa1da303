use std::io;

/// Failure outcome of a token sequence.
///
/// Once a lexer produced one of these, the sequence is over; tokens yielded
/// before it stay valid.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Invalid character '{}' at {line}:{column}", .character.escape_debug())]
    InvalidCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("Unterminated string starting at {line}:{column}")]
    UnterminatedString { line: usize, column: usize },

    #[error("Lexing was cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LexError {
    pub fn invalid_character(character: char, line: usize, column: usize) -> Self {
        Self::InvalidCharacter {
            character,
            line,
            column,
        }
    }

    /// Line and column the error points at, if it has a source position.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LexError::InvalidCharacter { line, column, .. }
            | LexError::UnterminatedString { line, column } => Some((*line, *column)),
            LexError::Cancelled | LexError::Io(_) => None,
        }
    }
}
