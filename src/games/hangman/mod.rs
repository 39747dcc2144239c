/// Hangman - word selection, guess rules and the host-facing view
pub mod dictionary;
pub mod game;
pub mod view;

pub use dictionary::Dictionary;
pub use game::{GameEngine, GameState, GameStatus, GuessOutcome, ALPHABET, PLACEHOLDER};
pub use view::{HangmanView, LetterKey};
