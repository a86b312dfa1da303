mod spanned;
mod token;

use kvscan_base::result::LexResult;

pub use crate::spanned::Spanned;
pub use crate::token::{Token, TokenKind};

pub type TokenIterator<'a> = Box<dyn Iterator<Item = LexResult<Spanned<Token>>> + 'a>;
