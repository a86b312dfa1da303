use std::fmt::{Debug, Display};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum TokenKind {
    StartObject,
    EndObject,
    String,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::StartObject => "StartObject",
            TokenKind::EndObject => "EndObject",
            TokenKind::String => "String",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A lexical unit of a KeyValues text document.
///
/// `text` is set for [`TokenKind::String`] only and holds the characters
/// between the quotes verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
}

impl Token {
    pub fn start_object() -> Self {
        Self {
            kind: TokenKind::StartObject,
            text: None,
        }
    }

    pub fn end_object() -> Self {
        Self {
            kind: TokenKind::EndObject,
            text: None,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::String,
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} \"{}\"", self.kind, text),
            None => write!(f, "{}", self.kind),
        }
    }
}
