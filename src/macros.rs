//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SYMBOL!` - Consumes a fixed symbol and creates its token
//!
//! These macros reduce boilerplate in the scanning loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        $crate::lexer::tokens::Token::new($kind, $lexeme)
    };
}

/// Advances the lexer past a fixed symbol and creates its token.
///
/// The lexeme doubles as the number of bytes to consume.
///
/// # Example
///
/// ```ignore
/// '=' => MK_SYMBOL!(self, TokenKind::Assign, "="),
/// ```
#[macro_export]
macro_rules! MK_SYMBOL {
    ($lexer:expr, $kind:expr, $lexeme:literal) => {{
        $lexer.advance_n($lexeme.len());
        $crate::MK_TOKEN!($kind, $lexeme)
    }};
}
