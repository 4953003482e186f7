use std::{iter::FusedIterator, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SYMBOL, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Token, TokenKind};

lazy_static! {
    // Both patterns are only tried once the first character has been seen to
    // match, so they always consume at least one character.
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[A-Za-z_][\p{Alphabetic}\p{N}_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Pull-based scanner over a borrowed source string.
///
/// Every call to [`Lexer::next`] consumes the characters of exactly one token.
/// Once the end of input is reached the lexer keeps answering `eof`.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    /// Byte offset of the cursor into the source.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns the next token, consuming its characters.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        while let Some(c) = self.at() {
            let token = match c {
                ' ' | '\t' => {
                    self.advance_n(1);
                    continue;
                }
                '\n' => {
                    self.advance_n(1);
                    MK_TOKEN!(TokenKind::EOS, "")
                }
                '\r' => {
                    // `\r\n` is a single separator
                    let len = if self.peek() == Some('\n') { 2 } else { 1 };
                    self.advance_n(len);
                    MK_TOKEN!(TokenKind::EOS, "")
                }
                'a'..='z' | 'A'..='Z' | '_' => identifier_handler(self),
                '0'..='9' => number_handler(self),
                '"' => string_handler(self),
                '=' => MK_SYMBOL!(self, TokenKind::Assign, "="),
                '(' => MK_SYMBOL!(self, TokenKind::ParenOpen, "("),
                ')' => MK_SYMBOL!(self, TokenKind::ParenClose, ")"),
                ',' => MK_SYMBOL!(self, TokenKind::Comma, ","),
                _ => {
                    self.advance_n(c.len_utf8());
                    MK_TOKEN!(TokenKind::Unknown, c.to_string())
                }
            };

            trace!("Tokenized: {} ending at {}", token, self.pos);
            return token;
        }

        trace!("Reached end of input at {}", self.pos);
        MK_TOKEN!(TokenKind::EOF, "")
    }

    /// The character right after the cursor, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next()?;
        chars.next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Consumes the longest prefix of the remainder matching `pattern`.
    fn eat(&mut self, pattern: &Regex) -> &'a str {
        let rest = self.remainder();
        let matched = pattern.find(rest).map_or("", |m| m.as_str());
        self.advance_n(matched.len());
        matched
    }
}

fn identifier_handler(lexer: &mut Lexer) -> Token {
    let value = lexer.eat(&IDENTIFIER_PATTERN);

    match lookup_keyword(value) {
        Some(kind) => MK_TOKEN!(kind, value),
        None => MK_TOKEN!(TokenKind::Identifier, value),
    }
}

fn number_handler(lexer: &mut Lexer) -> Token {
    let value = lexer.eat(&NUMBER_PATTERN);
    MK_TOKEN!(TokenKind::Number, value)
}

fn string_handler(lexer: &mut Lexer) -> Token {
    // opening quote
    lexer.advance_n(1);

    let rest = lexer.remainder();
    let end = rest.find('"').unwrap_or(rest.len());
    let value = &rest[..end];
    lexer.advance_n(end);

    // closing quote, if the string was terminated at all
    if !lexer.at_eof() {
        lexer.advance_n(1);
    }

    MK_TOKEN!(TokenKind::String, value)
}

/// Lazy token sequence over an owned lexer, ending before `eof`.
///
/// The cursor lives in the lexer, so a drained sequence stays drained.
#[derive(Debug)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
}

impl Tokens<'_> {
    pub fn offset(&self) -> usize {
        self.lexer.offset()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.lexer.next();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Tokens<'_> {}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        Tokens { lexer: self }
    }
}

/// Scans a whole source, rejecting the first character the language does not know.
///
/// On success the returned tokens end with the `eof` token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next();

        if token.is(TokenKind::Unknown) {
            let start = lex.offset() - token.lexeme().len();
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: token.lexeme().to_string(),
                },
                Position(u32::try_from(start).unwrap_or(u32::MAX), file_name),
            ));
        }

        let done = token.is(TokenKind::EOF);
        tokens.push(token);
        if done {
            break;
        }
    }

    debug!("Tokenization complete. Total tokens: {}", tokens.len());
    Ok(tokens)
}
