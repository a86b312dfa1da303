use kvscan_base::error::LexError;
use kvscan_base::result::LexResult;
use kvscan_token::{Spanned, Token};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Could not write token output")]
    Output(#[source] io::Error),
}

impl DumpError {
    /// Context line naming what failed: the input file or the output.
    pub fn context(&self, path: &Path) -> String {
        match self {
            DumpError::Lex(_) => format!("Could not tokenize {}", path.display()),
            DumpError::Output(_) => format!("Could not print tokens of {}", path.display()),
        }
    }
}

/// Writes one line per token, stopping at the first error.
///
/// Tokens before the error are already written when it is returned.
pub fn dump_tokens(
    tokens: impl Iterator<Item = LexResult<Spanned<Token>>>,
    prefix: Option<&str>,
    out: &mut dyn Write,
) -> Result<usize, DumpError> {
    let mut count = 0;
    for token in tokens {
        let token = token?;
        let written = match prefix {
            Some(prefix) => writeln!(out, "{prefix}: {token}"),
            None => writeln!(out, "{token}"),
        };
        written.map_err(DumpError::Output)?;
        count += 1;
    }
    Ok(count)
}

pub fn count_tokens(
    mut tokens: impl Iterator<Item = LexResult<Spanned<Token>>>,
) -> LexResult<usize> {
    tokens.try_fold(0, |count, token| token.map(|_| count + 1))
}
