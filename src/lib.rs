#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{tokenize, tokenize_with, NumberPolicy, Scanner};
pub use lexer::tokens::{ScanState, Token, TokenKind};

/// A 0-based character offset into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// Returns the 1-based line number, the text of that line and the 0-based
/// column of `position`, or `None` if the source is shorter than that.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Formats a caret diagnostic for `error` against the source it came from.
pub fn render_error(error: &Error, source: &str, name: &str) -> String {
    /*
        Error: IllegalCharacter (Unexpected character `@`)
        -> input
          |
        1 | a > @
          | ----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", name);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let leading = line_text.chars().take_while(|c| c.is_whitespace()).count();
    let arrows = line_pos - leading + 1;

    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, line_text.trim());
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}
