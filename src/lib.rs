//! Hangman game engine.
//!
//! The engine owns no process-wide state: a host loads a [`Dictionary`],
//! starts a round with [`GameEngine::new_game`], and threads the returned
//! [`GameState`] through [`GameEngine::apply_guess`], redrawing from a
//! [`HangmanView`] after each step.

pub mod core {
	pub mod config;
	pub mod error;
	pub mod logging;
}

pub mod games;

// Re-export for convenience
pub use crate::core::config::GameConfig;
pub use crate::core::error::{HangmanError, Result};
pub use crate::core::logging::init_tracing;
pub use crate::games::hangman::{
    Dictionary, GameEngine, GameState, GameStatus, GuessOutcome, HangmanView, LetterKey,
};
