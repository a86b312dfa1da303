//! Streaming tokenizer for Valve KeyValues ("VDF") text documents.
//!
//! The lexer pulls characters from a [`std::io::BufRead`] in fixed-size chunks
//! and yields one [`Spanned<Token>`](kvscan_token::Spanned) per call to
//! [`Iterator::next`], so a consumer can start working before the whole
//! document has been read.

mod cancellation;
mod config;
mod lexer;
mod scan_state;

use kvscan_token::TokenIterator;
use std::io::BufRead;

pub use crate::cancellation::CancellationToken;
pub use crate::config::LexerConfig;
pub use crate::lexer::Lexer;

pub fn tokenize<'a, R: BufRead + 'a>(reader: R) -> TokenIterator<'a> {
    tokenize_with(reader, LexerConfig::default())
}

pub fn tokenize_with<'a, R: BufRead + 'a>(reader: R, config: LexerConfig) -> TokenIterator<'a> {
    Box::new(Lexer::new(reader, config))
}

pub fn tokenize_str(input: &str) -> TokenIterator<'_> {
    tokenize(input.as_bytes())
}
