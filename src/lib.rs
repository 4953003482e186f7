#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{tokenize, Lexer, Tokens};
pub use lexer::tokens::{Token, TokenKind};

/// Byte offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line without its terminator and the
/// character column of `position` within it. `\n`, `\r\n` and a lone `\r` all
/// end a line, the same way they end a statement.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let bytes = content.as_bytes();
    let mut start = 0;
    let mut line_number = 1;
    let mut i = 0;

    while i < bytes.len() {
        let terminator = match bytes[i] {
            b'\n' => 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ => 0,
        };

        if terminator == 0 {
            i += 1;
            continue;
        }

        if pos < i + terminator {
            return Some(line_at(content, start, i, pos, line_number));
        }

        i += terminator;
        start = i;
        line_number += 1;
    }

    Some(line_at(content, start, content.len(), pos, line_number))
}

fn line_at(content: &str, start: usize, end: usize, pos: usize, line_number: usize) -> (usize, String, usize) {
    let column = content
        .get(start..pos)
        .map_or(pos - start, |before| before.chars().count());

    (line_number, content[start..end].to_string(), column)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_position_crlf_and_cr() {
        let content = "a\r\nb\rc";

        assert_eq!(super::get_line_at_position(content, 3).unwrap(), (2, "b".to_string(), 0));
        assert_eq!(super::get_line_at_position(content, 5).unwrap(), (3, "c".to_string(), 0));
        // the terminator itself belongs to the line it ends
        assert_eq!(super::get_line_at_position(content, 2).unwrap(), (1, "a".to_string(), 2));
    }

    #[test]
    fn test_get_line_at_position_out_of_range() {
        assert!(super::get_line_at_position("abc", 3).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_get_line_at_position_counts_characters() {
        let content = "Dim é = #";
        let (_, _, column) = super::get_line_at_position(content, 9).unwrap();
        assert_eq!(column, 8);
    }

    #[test]
    fn test_render_error() {
        let content = "Dim a = 1\n  Dim b = #\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "#".to_string(),
            },
            Position(20, Rc::new("test.bas".to_string())),
        );

        let rendered = super::render_error(&error, content);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnrecognisedToken (Unrecognised character `#`, it is not part of the language)"
        );
        assert_eq!(lines[1], "-> test.bas");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | Dim b = #");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_render_error_without_source() {
        let error = Error::new(
            ErrorImpl::Usage {
                message: "expected at most one file".to_string(),
            },
            Position::null(),
        );

        assert_eq!(
            super::render_error(&error, ""),
            "Error: Usage (expected at most one file)\n"
        );
    }
}

/// Formats an error, pointing at the offending character when it has one.
pub fn render_error(error: &Error, content: &str) -> String {
    /*
        Error: message
        -> hello.bas
          |
        2 | Dim b = #
          | --------^
    */

    let mut out = String::new();

    if !error.has_source_position() {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error);
        return out;
    }

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(content, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}
