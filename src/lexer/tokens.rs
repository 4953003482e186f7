use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Reserved words, keyed by their lower-case spelling.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("extern", TokenKind::Extern);
        map.insert("dim", TokenKind::Dim);
        map.insert("as", TokenKind::As);
        map.insert("declare", TokenKind::Declare);
        map.insert("function", TokenKind::Function);
        map
    };
}

/// Looks up a keyword regardless of how it was capitalised in the source.
pub fn lookup_keyword(lexeme: &str) -> Option<TokenKind> {
    KEYWORD_LOOKUP.get(lexeme.to_lowercase().as_str()).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Markers
    Unknown,
    EOF,
    EOS, // end of statement

    // Literals
    Number,
    Identifier,
    String,

    // Reserved
    Extern,
    Dim,
    As,
    Declare,
    Function,

    // Symbols
    Assign, // =
    ParenOpen,
    ParenClose,
    Comma,
}

impl TokenKind {
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Unknown,
        TokenKind::EOF,
        TokenKind::EOS,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Extern,
        TokenKind::Dim,
        TokenKind::As,
        TokenKind::Declare,
        TokenKind::Function,
        TokenKind::Assign,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Comma,
    ];

    /// The name used when dumping a token stream, e.g. `parenOpen`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown",
            TokenKind::EOF => "eof",
            TokenKind::EOS => "eos",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Extern => "extern",
            TokenKind::Dim => "dim",
            TokenKind::As => "as",
            TokenKind::Declare => "declare",
            TokenKind::Function => "function",
            TokenKind::Assign => "assign",
            TokenKind::ParenOpen => "parenOpen",
            TokenKind::ParenClose => "parenClose",
            TokenKind::Comma => "comma",
        }
    }

    /// Symbols render as the character they stand for, everything else by name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Assign => "=",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Comma => ",",
            _ => self.name(),
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Extern
                | TokenKind::Dim
                | TokenKind::As
                | TokenKind::Declare
                | TokenKind::Function
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single classified slice of the source.
///
/// `eos` and `eof` carry an empty lexeme; string tokens carry the text between
/// the quotes; everything else carries the exact characters it was scanned from.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.lexeme)
    }
}
