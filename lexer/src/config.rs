use std::num::NonZeroUsize;

const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Number of characters read from the source per chunk.
    pub chunk_size: NonZeroUsize,
    /// Restart the column count at 1 after a line feed outside of a string.
    ///
    /// Off by default: columns then keep counting across lines, which is
    /// what existing manifests and fixtures were recorded with.
    pub reset_column_on_newline: bool,
    /// Fail with `UnterminatedString` instead of dropping a string literal
    /// that is still open when the source ends.
    pub reject_unterminated_strings: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            reset_column_on_newline: false,
            reject_unterminated_strings: false,
        }
    }
}

impl LexerConfig {
    pub fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_reset_column_on_newline(mut self, reset: bool) -> Self {
        self.reset_column_on_newline = reset;
        self
    }

    pub fn with_reject_unterminated_strings(mut self, reject: bool) -> Self {
        self.reject_unterminated_strings = reject;
        self
    }
}
