//! Error types for lexical analysis.
//!
//! Both errors abort the scan at the first fault. Each carries the
//! offending character, the character offset it was found at and, for
//! malformed numbers, the digits read so far.

pub mod errors;

#[cfg(test)]
mod tests;
