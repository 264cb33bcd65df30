use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,

    GT, // >
    GE, // >=
    EQ, // =

    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// States of the scanning automaton.
///
/// Every state except `Idle` owns an in-progress lexeme. `GT` is provisional:
/// it either extends to `GE` on `=` or is sealed as `GT`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Identifier,
    Number,
    GT,
    GE,
    EQ,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl ScanState {
    /// The kind a token sealed in this state gets, `None` for `Idle`.
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            ScanState::Idle => None,
            ScanState::Identifier => Some(TokenKind::Identifier),
            ScanState::Number => Some(TokenKind::Number),
            ScanState::GT => Some(TokenKind::GT),
            ScanState::GE => Some(TokenKind::GE),
            ScanState::EQ => Some(TokenKind::EQ),
            ScanState::Plus => Some(TokenKind::Plus),
            ScanState::Minus => Some(TokenKind::Minus),
            ScanState::Multiply => Some(TokenKind::Multiply),
            ScanState::Divide => Some(TokenKind::Divide),
        }
    }

    /// Terminal states never accept another character.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanState::GE
                | ScanState::EQ
                | ScanState::Plus
                | ScanState::Minus
                | ScanState::Multiply
                | ScanState::Divide
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} {}", self.kind, self.value);
        }
    }
}
