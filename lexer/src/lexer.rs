use crate::cancellation::CancellationToken;
use crate::config::LexerConfig;
use crate::scan_state::ScanState;
use kvscan_base::error::LexError;
use kvscan_base::result::LexResult;
use kvscan_token::{Spanned, Token};
use log::{debug, trace};
use std::io::BufRead;
use utf8_chars::BufReadCharsExt;

/// Pull-based KeyValues tokenizer over a character source.
///
/// Characters are read `chunk_size` at a time into a reusable buffer. A chunk
/// that comes back shorter than the buffer is the last one. The reader is
/// only read from, never closed; pass `&mut reader` to keep ownership.
///
/// After yielding an error or reaching the end, the iterator stays exhausted.
pub struct Lexer<R> {
    reader: R,
    config: LexerConfig,
    cancellation: Option<CancellationToken>,
    state: ScanState,
    buffer: Vec<char>,
    buffer_position: usize,
    buffer_length: usize,
    last_chunk_read: bool,
    finished: bool,
    chunks_read: usize,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R, config: LexerConfig) -> Self {
        Self {
            reader,
            config,
            cancellation: None,
            state: ScanState::new().with_reset_column_on_newline(config.reset_column_on_newline),
            buffer: vec!['\0'; config.chunk_size.get()],
            buffer_position: 0,
            buffer_length: 0,
            last_chunk_read: false,
            finished: false,
            chunks_read: 0,
        }
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Current scan position (line, column) of the next character.
    pub fn position(&self) -> (usize, usize) {
        (self.state.line(), self.state.column())
    }

    /// Produces the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// The first error ends the scan: every later call returns `Ok(None)`.
    pub fn next_token(&mut self) -> LexResult<Option<Spanned<Token>>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.scan_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn scan_next(&mut self) -> LexResult<Option<Spanned<Token>>> {
        self.check_cancelled()?;
        loop {
            while self.buffer_position < self.buffer_length {
                let ch = self.buffer[self.buffer_position];
                self.buffer_position += 1;
                if let Some(token) = self.state.scan_char(ch)? {
                    return Ok(Some(token));
                }
            }
            if self.last_chunk_read {
                self.state.finish(self.config.reject_unterminated_strings)?;
                debug!(
                    "Reached end of input after {} chunk(s) at {}:{}",
                    self.chunks_read,
                    self.state.line(),
                    self.state.column()
                );
                return Ok(None);
            }
            self.read_chunk()?;
        }
    }

    fn read_chunk(&mut self) -> LexResult<()> {
        self.check_cancelled()?;
        let capacity = self.buffer.len();
        let mut length = 0;
        while length < capacity {
            match self.reader.read_char()? {
                Some(ch) => {
                    self.buffer[length] = ch;
                    length += 1;
                }
                None => break,
            }
        }
        self.buffer_position = 0;
        self.buffer_length = length;
        self.last_chunk_read = length < capacity;
        self.chunks_read += 1;
        trace!(
            "Read chunk #{} with {} of {} characters",
            self.chunks_read,
            length,
            capacity
        );
        Ok(())
    }

    fn check_cancelled(&self) -> LexResult<()> {
        match &self.cancellation {
            Some(cancellation) if cancellation.is_cancelled() => Err(LexError::Cancelled),
            _ => Ok(()),
        }
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = LexResult<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<R: BufRead> std::iter::FusedIterator for Lexer<R> {}
