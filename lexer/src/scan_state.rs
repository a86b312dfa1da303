use kvscan_base::error::LexError;
use kvscan_base::result::LexResult;
use kvscan_token::{Spanned, Token};
use log::warn;

/// String literal collected so far, positioned at its opening quote.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenString {
    line: usize,
    column: usize,
    text: String,
    length: usize,
}

/// Position and mode of a scan, advanced one character at a time.
///
/// Independent of any I/O: feeding the same characters in any chunking
/// produces the same tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanState {
    line: usize,
    column: usize,
    open_string: Option<OpenString>,
    reset_column_on_newline: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            open_string: None,
            reset_column_on_newline: false,
        }
    }

    pub fn with_reset_column_on_newline(mut self, reset: bool) -> Self {
        self.reset_column_on_newline = reset;
        self
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    #[cfg(test)]
    pub fn in_string(&self) -> bool {
        self.open_string.is_some()
    }

    /// Consumes one character, returning the token it completes, if any.
    ///
    /// On error the state is left untouched at the offending character.
    pub fn scan_char(&mut self, ch: char) -> LexResult<Option<Spanned<Token>>> {
        if let Some(open_string) = &mut self.open_string {
            let token = if ch == '"' {
                self.open_string.take().map(|open_string| {
                    Spanned::new(
                        Token::string(open_string.text),
                        open_string.line,
                        open_string.column,
                        open_string.column + 2 + open_string.length,
                    )
                })
            } else {
                open_string.text.push(ch);
                open_string.length += 1;
                None
            };
            self.column += 1;
            return Ok(token);
        }

        let token = match ch {
            '{' => Some(Spanned::at(Token::start_object(), self.line, self.column)),
            '}' => Some(Spanned::at(Token::end_object(), self.line, self.column)),
            '"' => {
                self.open_string = Some(OpenString {
                    line: self.line,
                    column: self.column,
                    text: String::new(),
                    length: 0,
                });
                None
            }
            ' ' | '\t' | '\r' => None,
            '\n' => {
                self.line += 1;
                if self.reset_column_on_newline {
                    self.column = 1;
                    return Ok(None);
                }
                None
            }
            other => return Err(LexError::invalid_character(other, self.line, self.column)),
        };
        self.column += 1;
        Ok(token)
    }

    /// Resolves the end of the input.
    ///
    /// A string literal that is still open is dropped unless `strict` is set.
    pub fn finish(&mut self, strict: bool) -> LexResult<()> {
        let Some(open_string) = self.open_string.take() else {
            return Ok(());
        };
        if strict {
            return Err(LexError::UnterminatedString {
                line: open_string.line,
                column: open_string.column,
            });
        }
        warn!(
            "Dropping unterminated string starting at {}:{} ({} characters)",
            open_string.line, open_string.column, open_string.length
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scan_state::ScanState;
    use kvscan_base::error::LexError;
    use kvscan_token::{Spanned, Token};
    use pretty_assertions::assert_eq;

    fn scan_all(state: &mut ScanState, input: &str) -> Vec<Spanned<Token>> {
        input
            .chars()
            .filter_map(|ch| state.scan_char(ch).unwrap())
            .collect()
    }

    #[test]
    fn starts_at_first_line_and_column() {
        let state = ScanState::new();
        assert_eq!((state.line(), state.column()), (1, 1));
        assert!(!state.in_string());
    }

    #[test]
    fn string_spans_from_opening_quote() {
        let mut state = ScanState::new();
        let tokens = scan_all(&mut state, "  \"ab\"");
        assert_eq!(tokens, vec![Spanned::new(Token::string("ab"), 1, 3, 7)]);
        assert_eq!(state.column(), 7);
    }

    #[test]
    fn string_state_survives_split_input() {
        let mut state = ScanState::new();
        assert_eq!(scan_all(&mut state, "\"hel"), vec![]);
        assert!(state.in_string());
        assert_eq!(
            scan_all(&mut state, "lo\"{"),
            vec![
                Spanned::new(Token::string("hello"), 1, 1, 8),
                Spanned::at(Token::start_object(), 1, 8),
            ]
        );
    }

    #[test]
    fn string_keeps_braces_and_backslashes() {
        let mut state = ScanState::new();
        let tokens = scan_all(&mut state, r#""{a\b}""#);
        assert_eq!(tokens, vec![Spanned::new(Token::string(r"{a\b}"), 1, 1, 8)]);
    }

    #[test]
    fn string_length_counts_characters() {
        let mut state = ScanState::new();
        let tokens = scan_all(&mut state, "\"äöü\"");
        assert_eq!(tokens, vec![Spanned::new(Token::string("äöü"), 1, 1, 6)]);
    }

    #[test]
    fn newline_keeps_counting_columns_by_default() {
        let mut state = ScanState::new();
        let tokens = scan_all(&mut state, "{\n}");
        assert_eq!(
            tokens,
            vec![
                Spanned::at(Token::start_object(), 1, 1),
                Spanned::at(Token::end_object(), 2, 3),
            ]
        );
    }

    #[test]
    fn newline_resets_column_when_configured() {
        let mut state = ScanState::new().with_reset_column_on_newline(true);
        let tokens = scan_all(&mut state, "{\n  }");
        assert_eq!(
            tokens,
            vec![
                Spanned::at(Token::start_object(), 1, 1),
                Spanned::at(Token::end_object(), 2, 3),
            ]
        );
    }

    #[test]
    fn newline_inside_string_is_text() {
        let mut state = ScanState::new().with_reset_column_on_newline(true);
        let tokens = scan_all(&mut state, "\"a\nb\"");
        assert_eq!(tokens, vec![Spanned::new(Token::string("a\nb"), 1, 1, 6)]);
        assert_eq!(state.line(), 1);
    }

    #[test]
    fn invalid_character_leaves_position() {
        let mut state = ScanState::new();
        scan_all(&mut state, "{ ");
        let error = state.scan_char('x').unwrap_err();
        assert!(matches!(
            error,
            LexError::InvalidCharacter {
                character: 'x',
                line: 1,
                column: 3
            }
        ));
        assert_eq!(state.column(), 3);
    }

    #[test]
    fn finish_drops_open_string_by_default() {
        let mut state = ScanState::new();
        scan_all(&mut state, "\"open");
        state.finish(false).unwrap();
        assert!(!state.in_string());
    }

    #[test]
    fn finish_rejects_open_string_when_strict() {
        let mut state = ScanState::new();
        scan_all(&mut state, "{ \"open");
        let error = state.finish(true).unwrap_err();
        assert!(matches!(
            error,
            LexError::UnterminatedString { line: 1, column: 3 }
        ));
    }

    #[test]
    fn finish_outside_string_is_ok() {
        let mut state = ScanState::new();
        scan_all(&mut state, "{}");
        state.finish(true).unwrap();
    }
}
