use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at position {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::IllegalNumber { .. } => "IllegalNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } if character.is_control() => ErrorTip::None,
            ErrorImpl::IllegalCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", character))
            }
            ErrorImpl::IllegalNumber { lexeme, character } => ErrorTip::Suggestion(format!(
                "Number `{}` cannot be followed by `{}`, identifiers must not start with a digit",
                lexeme, character
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("illegal number: {lexeme:?} followed by {character:?}")]
    IllegalNumber { lexeme: String, character: char },
}
