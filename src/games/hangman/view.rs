/// Display snapshot derived from a game state - no game logic, nothing stored
use serde::Serialize;

use super::game::{GameState, GameStatus, ALPHABET};

/// One key of the on-screen letter board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterKey {
    pub letter: char,
    pub enabled: bool,
}

/// Everything a front-end needs to redraw after a guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HangmanView {
    pub spotlight: String,
    pub status_line: String,
    pub message: Option<String>,
    pub lives_left: u8,
    pub status: GameStatus,
    pub letters: Vec<LetterKey>,
}

impl HangmanView {
    pub fn from_state(state: &GameState) -> Self {
        let status = state.status();

        let message = match status {
            GameStatus::Playing => None,
            GameStatus::Won => Some("You win!".to_string()),
            GameStatus::Lost => Some(format!("Chosen word was {}", state.secret_word())),
        };

        // All life markers are cleared once the word is solved
        let lives_left = match status {
            GameStatus::Won => 0,
            _ => state.lives_left(),
        };

        let letters = ALPHABET
            .chars()
            .map(|letter| LetterKey {
                letter,
                enabled: state.is_letter_available(letter),
            })
            .collect();

        Self {
            spotlight: state.masked_word_spaced(),
            status_line: format!("Errors: {} of {}", state.mistakes(), state.max_mistakes()),
            message,
            lives_left,
            status,
            letters,
        }
    }
}

impl From<&GameState> for HangmanView {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
