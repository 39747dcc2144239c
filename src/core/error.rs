use std::fmt;

use crate::games::hangman::GameStatus;

pub type Result<T> = std::result::Result<T, HangmanError>;

/// Errors the game engine hands back to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// No candidate words to draw a secret from
    EmptyDictionary,
    /// The game already reached Won or Lost
    GameAlreadyOver { status: GameStatus },
    /// Guess outside the a-z alphabet
    InvalidLetter(char),
    /// Secret word is empty or uses letters outside the alphabet
    InvalidWord(String),
    InvalidConfig(String),
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangmanError::EmptyDictionary => write!(f, "dictionary contains no words"),
            HangmanError::GameAlreadyOver { status } => {
                write!(f, "game is already over ({})", status)
            }
            HangmanError::InvalidLetter(c) => write!(f, "'{}' is not a letter a-z", c),
            HangmanError::InvalidWord(word) => write!(f, "invalid secret word '{}'", word),
            HangmanError::InvalidConfig(reason) => write!(f, "invalid game config: {}", reason),
        }
    }
}

impl std::error::Error for HangmanError {}
