use super::ast::{DiceRoll, Expression, Modifier, Set};
use super::lexer::{lexer, LexError, Lexer, TokenKind};
use crate::common::*;
use logos_iter::LogosIter;

type PResult<T> = Result<T, ParseError>;

/// Where in the input an error was found: the byte span of the offending
/// token and the text it covered (empty at end of input).
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePosition {
    pub span: logos::Span,
    pub slice: String,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("(at position {}): unexpected token; found {:?}, expected {}", .pos.span.start, .pos.slice, .expected.fmt_expected())]
    UnexpectedToken {
        pos: SourcePosition,
        expected: NonEmpty<String>,
    },
    #[error("(at position {}): dice must have at least one side", .0.span.start)]
    ZeroSides(SourcePosition),
    #[error("(at position {}): repeat count must be at least one", .0.span.start)]
    ZeroRepeat(SourcePosition),
    #[error(transparent)]
    Lex(#[from] LexError),
}

trait FormatExpected {
    fn fmt_expected(&self) -> String;
}

impl FormatExpected for [String] {
    fn fmt_expected(&self) -> String {
        match self {
            [] => unreachable!("NonEmpty cannot be empty"),
            [a] => a.to_owned(),
            [a, b] => format!("{} or {}", a, b),
            s => format!("{}, or {}", s[..s.len() - 1].join(", "), &s[s.len() - 1]),
        }
    }
}

const END_OF_INPUT: &str = "<end of input>";

/// One-token-lookahead recursive descent over the grammar
///
/// ```text
/// expr       := set (REPEAT INTEGER)? EOF
/// set        := roll mod*
/// roll       := INTEGER? DICE INTEGER
/// mod        := keep_drop | add_sub
/// keep_drop  := (KEEP | DROP) (LOW | HIGH) INTEGER
/// add_sub    := (ADD | SUB) INTEGER
/// ```
///
/// The leading count defaults to 1 (`d6` is `1d6`) and the repeat clause
/// defaults to 1. Keep and drop always name a side: `4d6kh3` keeps the three
/// highest, and a bare `k` or `x` with no `l`/`h` is an error. The parser
/// never backtracks.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        let set = self.parse_set()?;
        let repeat = self.parse_repeat()?;
        self.expect_end()?;
        Ok(Expression::new(set, repeat))
    }

    fn peek(&mut self) -> Option<TokenKind> {
        self.lexer.peek().copied()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.unexpected_token(vec1![expected.to_string()])
        }
    }

    // Position of the token most recently consumed from the lexer.
    fn position(&mut self) -> SourcePosition {
        SourcePosition {
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        }
    }

    fn unexpected_token<T>(&mut self, expected: NonEmpty<String>) -> PResult<T> {
        match self.lexer.next() {
            Some(TokenKind::Error) => Err(LexError::at(self.source, self.lexer.span()).into()),
            _ => Err(ParseError::UnexpectedToken {
                pos: self.position(),
                expected,
            }),
        }
    }

    fn expect_end(&mut self) -> PResult<()> {
        if self.peek().is_none() {
            Ok(())
        } else {
            self.unexpected_token(vec1![String::from(END_OF_INPUT)])
        }
    }

    fn parse_integer(&mut self) -> PResult<UInt> {
        match self.peek() {
            Some(TokenKind::Integer(x)) => {
                self.lexer.next();
                Ok(x)
            }
            _ => self.unexpected_token(vec1![String::from("<integer>")]),
        }
    }

    // Like parse_integer, but keeps the token's position for range checks.
    fn parse_integer_spanned(&mut self) -> PResult<(UInt, SourcePosition)> {
        let x = self.parse_integer()?;
        let pos = self.position();
        Ok((x, pos))
    }

    fn parse_set(&mut self) -> PResult<Set> {
        let roll = self.parse_roll()?;
        let mut modifiers = Vec::new();
        loop {
            let modifier = match self.peek() {
                Some(TokenKind::Keep | TokenKind::Drop) => self.parse_keep_drop()?,
                Some(TokenKind::Add | TokenKind::Sub) => self.parse_add_sub()?,
                _ => break,
            };
            modifiers.push(modifier);
        }
        Ok(Set::new(roll, modifiers))
    }

    fn parse_roll(&mut self) -> PResult<DiceRoll> {
        let count = match self.peek() {
            Some(TokenKind::Integer(_)) => self.parse_integer()?,
            _ => 1,
        };
        self.consume(TokenKind::Dice)?;
        let (sides, pos) = self.parse_integer_spanned()?;
        let sides = NonZeroUInt::new(sides).ok_or(ParseError::ZeroSides(pos))?;
        Ok(DiceRoll::new(sides, count))
    }

    fn parse_keep_drop(&mut self) -> PResult<Modifier> {
        let keep = self.matches(TokenKind::Keep);
        self.lexer.next();

        let high = match self.peek() {
            Some(TokenKind::Low) => false,
            Some(TokenKind::High) => true,
            _ => {
                return self.unexpected_token(vec1![
                    TokenKind::Low.to_string(),
                    TokenKind::High.to_string(),
                ])
            }
        };
        self.lexer.next();

        let n = self.parse_integer()?;
        Ok(match (keep, high) {
            (true, true) => Modifier::KeepHigh(n),
            (true, false) => Modifier::KeepLow(n),
            (false, true) => Modifier::DropHigh(n),
            (false, false) => Modifier::DropLow(n),
        })
    }

    fn parse_add_sub(&mut self) -> PResult<Modifier> {
        let add = self.matches(TokenKind::Add);
        self.lexer.next();

        let n = self.parse_integer()?;
        Ok(if add { Modifier::Add(n) } else { Modifier::Sub(n) })
    }

    fn parse_repeat(&mut self) -> PResult<NonZeroUInt> {
        if self.matches(TokenKind::Repeat) {
            self.lexer.next();
            let (n, pos) = self.parse_integer_spanned()?;
            NonZeroUInt::new(n).ok_or(ParseError::ZeroRepeat(pos))
        } else {
            Ok(NonZeroUInt::new(1).unwrap())
        }
    }
}
