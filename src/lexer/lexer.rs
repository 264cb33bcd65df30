use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{ScanState, Token};

lazy_static! {
    static ref IDENTIFIER_START: Regex = Regex::new("^[a-zA-Z_]$").unwrap();
    static ref IDENTIFIER_CHAR: Regex = Regex::new("^[a-zA-Z0-9_]$").unwrap();
    static ref DIGIT: Regex = Regex::new("^[0-9]$").unwrap();
}

fn in_class(class: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(c.encode_utf8(&mut buf))
}

fn is_identifier_start(c: char) -> bool {
    in_class(&IDENTIFIER_START, c)
}

fn is_identifier_char(c: char) -> bool {
    in_class(&IDENTIFIER_CHAR, c)
}

fn is_digit(c: char) -> bool {
    in_class(&DIGIT, c)
}

/// How a digit run reacts to a letter or `_` directly after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPolicy {
    /// `12a` is rejected with `IllegalNumber`.
    #[default]
    Strict,
    /// `12a` splits into `Number("12")` and `Identifier("a")`.
    Lenient,
}

/// The automaton between two characters: the current state and the lexeme
/// accumulated for it. An idle scanner holds an empty lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scanner {
    state: ScanState,
    lexeme: String,
    policy: NumberPolicy,
}

impl Scanner {
    pub fn new(policy: NumberPolicy) -> Scanner {
        Scanner {
            state: ScanState::Idle,
            lexeme: String::new(),
            policy,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Dispatch from `Idle`: start a token with `c`, stay idle on
    /// whitespace, or reject a character no token can begin with.
    pub fn start(c: char, position: u32, policy: NumberPolicy) -> Result<Scanner, Error> {
        if c.is_whitespace() {
            return Ok(Scanner::new(policy));
        }

        let state = if is_identifier_start(c) {
            ScanState::Identifier
        } else if is_digit(c) {
            ScanState::Number
        } else {
            match c {
                '>' => ScanState::GT,
                '=' => ScanState::EQ,
                '+' => ScanState::Plus,
                '-' => ScanState::Minus,
                '*' => ScanState::Multiply,
                '/' => ScanState::Divide,
                _ => {
                    return Err(Error::new(
                        ErrorImpl::IllegalCharacter { character: c },
                        Position(position),
                    ))
                }
            }
        };

        Ok(Scanner {
            state,
            lexeme: c.to_string(),
            policy,
        })
    }

    /// Feed one character. Returns the next scanner and the token sealed by
    /// this character, if any.
    pub fn step(mut self, c: char, position: u32) -> Result<(Scanner, Option<Token>), Error> {
        let state = self.state;
        match state {
            ScanState::Idle => return Ok((Scanner::start(c, position, self.policy)?, None)),
            ScanState::Identifier if is_identifier_char(c) => {
                self.lexeme.push(c);
                return Ok((self, None));
            }
            ScanState::Number if is_digit(c) => {
                self.lexeme.push(c);
                return Ok((self, None));
            }
            ScanState::Number
                if self.policy == NumberPolicy::Strict && is_identifier_start(c) =>
            {
                return Err(Error::new(
                    ErrorImpl::IllegalNumber {
                        lexeme: self.lexeme,
                        character: c,
                    },
                    Position(position),
                ));
            }
            ScanState::GT if c == '=' => {
                self.lexeme.push(c);
                self.state = ScanState::GE;
                return Ok((self, None));
            }
            _ => {}
        }

        // `c` cannot extend the pending token: seal it, then reclassify `c`.
        let policy = self.policy;
        let sealed = self.seal();
        Ok((Scanner::start(c, position, policy)?, sealed))
    }

    /// End of input: seal whatever is pending.
    pub fn finish(self) -> Option<Token> {
        self.seal()
    }

    fn seal(self) -> Option<Token> {
        let kind = self.state.kind()?;
        trace!("sealed {} {:?}", kind, self.lexeme);
        Some(MK_TOKEN!(kind, self.lexeme))
    }
}

/// Tokenize `source` with the default (strict) number policy.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, NumberPolicy::default())
}

pub fn tokenize_with(source: &str, policy: NumberPolicy) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];
    let mut scanner = Scanner::new(policy);

    for (position, c) in source.chars().enumerate() {
        let (next, sealed) = match scanner.step(c, position as u32) {
            Ok(step) => step,
            Err(error) => {
                debug!("scan aborted: {}", error);
                return Err(error);
            }
        };

        tokens.extend(sealed);
        scanner = next;
    }

    tokens.extend(scanner.finish());
    debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}
