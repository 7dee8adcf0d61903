use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of digits. Runs that do not fit in [UInt] lex as
    /// [Error](Self::Error).
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(UInt),

    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("k")]
    Keep,
    #[token("x")]
    Drop,
    #[token("l")]
    Low,
    #[token("h")]
    High,
    #[token("r")]
    Repeat,
    #[token("d")]
    Dice,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer(_) => "<integer>",
            Add => "'+'",
            Sub => "'-'",
            Keep => "'k'",
            Drop => "'x'",
            Low => "'l'",
            High => "'h'",
            Repeat => "'r'",
            Dice => "'d'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character {character:?} in `{source}` at position {position}")]
    UnexpectedCharacter {
        character: char,
        source: String,
        position: usize,
    },
    #[error("integer literal `{literal}` in `{source}` at position {position} is too large")]
    IntegerOverflow {
        literal: String,
        source: String,
        position: usize,
    },
}

impl LexError {
    // An error token either covers a digit run whose value overflowed, or
    // exactly one character the grammar has no use for.
    pub(crate) fn at(source: &str, span: logos::Span) -> Self {
        let position = span.start;
        let slice = &source[span];
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            Self::IntegerOverflow {
                literal: slice.to_string(),
                source: source.to_string(),
                position,
            }
        } else {
            Self::UnexpectedCharacter {
                character: slice.chars().next().unwrap_or('\u{FFFD}'),
                source: source.to_string(),
                position,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_notation() {
        use TokenKind::*;

        assert_eq!(
            kinds("4d6xl1r6"),
            vec![
                Integer(4),
                Dice,
                Integer(6),
                Drop,
                Low,
                Integer(1),
                Repeat,
                Integer(6)
            ],
        );
        assert_eq!(
            kinds("2d20kh1+3"),
            vec![Integer(2), Dice, Integer(20), Keep, High, Integer(1), Add, Integer(3)],
        );
    }

    #[test]
    fn test_lex_skips_whitespace() {
        use TokenKind::*;

        assert_eq!(kinds(" 4 d\t6 "), vec![Integer(4), Dice, Integer(6)]);
    }

    #[test]
    fn test_lex_exhaustion() {
        let mut lexer = TokenKind::lexer("1");
        assert_eq!(lexer.next(), Some(TokenKind::Integer(1)));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_lex_unknown_character() {
        assert_eq!(
            kinds("4z6"),
            vec![TokenKind::Integer(4), TokenKind::Error, TokenKind::Integer(6)],
        );
    }

    #[test]
    fn test_lex_error_classification() {
        assert_eq!(
            LexError::at("4z6", 1..2),
            LexError::UnexpectedCharacter {
                character: 'z',
                source: String::from("4z6"),
                position: 1,
            },
        );
        assert_eq!(
            LexError::at("99999999999d6", 0..11),
            LexError::IntegerOverflow {
                literal: String::from("99999999999"),
                source: String::from("99999999999d6"),
                position: 0,
            },
        );
    }
}
