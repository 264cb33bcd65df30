//! Lexical analysis for the expression language.
//!
//! This module contains the scanner that converts source text into an
//! ordered sequence of tokens. It handles:
//!
//! - Identifiers (`[a-zA-Z_][a-zA-Z0-9_]*`) and integer literals
//! - Comparison operators `>`, `>=`, `=` and arithmetic `+ - * /`
//! - Whitespace, which separates tokens and is otherwise dropped
//!
//! The scanner is a deterministic automaton that reads each character once.
//! A character that cannot extend the pending token seals it and is then
//! dispatched again from the idle state, so no lookahead is needed.

pub mod lexer;
pub mod tokens;
