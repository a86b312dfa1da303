use std::fmt::{Display, Formatter};

/// A value together with the source position it was read from.
///
/// Columns are 1-based and inclusive of both ends for structural tokens;
/// a string token ends at `start_column + 2 + length` (see the lexer).
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Spanned<T> {
    pub value: T,
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl<T> Spanned<T> {
    pub fn new(value: T, line: usize, start_column: usize, end_column: usize) -> Self {
        debug_assert!(start_column <= end_column);
        Self {
            value,
            line,
            start_column,
            end_column,
        }
    }

    /// A span covering a single column.
    pub fn at(value: T, line: usize, column: usize) -> Self {
        Self::new(value, line, column, column)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            line: self.line,
            start_column: self.start_column,
            end_column: self.end_column,
        }
    }

    pub fn as_ref(&self) -> Spanned<&T> {
        Spanned {
            value: &self.value,
            line: self.line,
            start_column: self.start_column,
            end_column: self.end_column,
        }
    }
}

impl<T: Display> Display for Spanned<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}:{}", self.value, self.line, self.start_column)?;
        if self.end_column != self.start_column {
            write!(f, ":{}", self.end_column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Spanned, Token, TokenKind};
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_omits_equal_end_column() {
        let spanned = Spanned::at(Token::start_object(), 1, 4);
        expect!["StartObject: 1:4"].assert_eq(&spanned.to_string());
    }

    #[test]
    fn display_includes_distinct_end_column() {
        let spanned = Spanned::new(Token::string("Demo"), 1, 1, 7);
        expect![[r#"String "Demo": 1:1:7"#]].assert_eq(&spanned.to_string());
    }

    #[test]
    fn map_keeps_position() {
        let spanned = Spanned::new(Token::string("Demo"), 2, 3, 9);
        assert_eq!(
            spanned.as_ref().map(|token| token.kind),
            Spanned::new(TokenKind::String, 2, 3, 9)
        );
        assert_eq!(
            spanned.map(|token| token.text),
            Spanned::new(Some("Demo".to_string()), 2, 3, 9)
        );
    }
}
