use crate::error::LexError;

pub type LexResult<T> = Result<T, LexError>;
