//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for the parser. It handles:
//!
//! - Recognition of keywords (case-insensitively), identifiers and literals
//! - Statement separators (`\n`, `\r`, `\r\n`)
//! - Lazy, pull-based token production through `Lexer::next` or iteration
//! - Strict collection of a whole source with diagnostics for stray characters

pub mod lexer;
pub mod tokens;
