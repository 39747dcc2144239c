use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::error::{HangmanError, Result};
use super::dictionary::Dictionary;

/// Letters a player can guess, in keyboard order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Shown in place of letters not yet guessed
pub const PLACEHOLDER: char = '_';

pub(crate) fn is_alphabet_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// A round can't allow more misses than there are letters to guess
pub(crate) fn check_max_mistakes(max_mistakes: u8) -> Result<()> {
    let limit = ALPHABET.len();
    if max_mistakes == 0 || usize::from(max_mistakes) > limit {
        return Err(HangmanError::InvalidConfig(format!(
            "max_mistakes must be between 1 and {}, got {}",
            limit, max_mistakes
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// What a single guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Letter is in the word at `occurrences` positions
    Revealed { letter: char, occurrences: usize },
    /// Letter is not in the word; one mistake counted
    Missed { letter: char },
    /// Letter was guessed before; nothing changed
    AlreadyGuessed { letter: char },
}

impl GuessOutcome {
    pub fn letter(self) -> char {
        match self {
            GuessOutcome::Revealed { letter, .. }
            | GuessOutcome::Missed { letter }
            | GuessOutcome::AlreadyGuessed { letter } => letter,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, GuessOutcome::Revealed { .. })
    }
}

/// One round of hangman. Owned and threaded through the engine by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    secret_word: String,
    guessed: BTreeSet<char>,
    mistakes: u8,
    max_mistakes: u8,
}

/// Wire shape of [`GameState`], checked before it becomes one
#[derive(Deserialize)]
struct RawGameState {
    secret_word: String,
    guessed: BTreeSet<char>,
    mistakes: u8,
    max_mistakes: u8,
}

impl TryFrom<RawGameState> for GameState {
    type Error = HangmanError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let mut state = GameState::with_word(&raw.secret_word, raw.max_mistakes)?;
        if let Some(&bad) = raw.guessed.iter().find(|&&c| !is_alphabet_letter(c)) {
            return Err(HangmanError::InvalidLetter(bad));
        }
        let misses = raw
            .guessed
            .iter()
            .filter(|&&c| !raw.secret_word.contains(c))
            .count();
        if usize::from(raw.mistakes) != misses {
            return Err(HangmanError::InvalidConfig(format!(
                "mistakes is {} but {} wrong letters were guessed",
                raw.mistakes, misses
            )));
        }
        if raw.mistakes > raw.max_mistakes {
            return Err(HangmanError::InvalidConfig(format!(
                "mistakes {} exceeds max_mistakes {}",
                raw.mistakes, raw.max_mistakes
            )));
        }
        state.guessed = raw.guessed;
        state.mistakes = raw.mistakes;
        Ok(state)
    }
}

impl GameState {
    /// Start a round for a known word
    pub fn with_word(word: &str, max_mistakes: u8) -> Result<Self> {
        if word.is_empty() || !word.chars().all(is_alphabet_letter) {
            return Err(HangmanError::InvalidWord(word.to_string()));
        }
        check_max_mistakes(max_mistakes)?;
        Ok(Self {
            secret_word: word.to_string(),
            guessed: BTreeSet::new(),
            mistakes: 0,
            max_mistakes,
        })
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn max_mistakes(&self) -> u8 {
        self.max_mistakes
    }

    pub fn lives_left(&self) -> u8 {
        self.max_mistakes.saturating_sub(self.mistakes)
    }

    /// Guessed letters that are not in the word, alphabetically
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret_word.contains(*c))
            .collect()
    }

    /// Secret word with unguessed positions replaced by `_`
    pub fn masked_word(&self) -> String {
        self.masked_chars().collect()
    }

    /// Masked word with a space between positions, e.g. `c _ t`
    pub fn masked_word_spaced(&self) -> String {
        let chars: Vec<String> = self.masked_chars().map(String::from).collect();
        chars.join(" ")
    }

    fn masked_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.secret_word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { PLACEHOLDER })
    }

    fn is_word_complete(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn status(&self) -> GameStatus {
        if self.is_word_complete() {
            GameStatus::Won
        } else if self.mistakes >= self.max_mistakes {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Whether a letter key should still accept presses
    pub fn is_letter_available(&self, letter: char) -> bool {
        !self.is_over() && !self.guessed.contains(&letter.to_ascii_lowercase())
    }
}

/// Stateless rules for starting rounds and applying guesses.
///
/// The engine only carries configuration; every round lives in a
/// [`GameState`] value that the caller keeps and passes back in.
#[derive(Debug, Clone)]
pub struct GameEngine {
    max_mistakes: u8,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            max_mistakes: crate::core::config::DEFAULT_MAX_MISTAKES,
        }
    }
}

impl GameEngine {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_mistakes: config.max_mistakes,
        })
    }

    pub fn max_mistakes(&self) -> u8 {
        self.max_mistakes
    }

    /// Start a round with a word drawn uniformly from `dictionary`.
    /// Resetting a finished game is just another call to this.
    pub fn new_game(&self, dictionary: &Dictionary) -> Result<GameState> {
        self.new_game_with_rng(dictionary, &mut rand::rng())
    }

    pub fn new_game_with_rng<R: Rng + ?Sized>(
        &self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<GameState> {
        let word = dictionary.choose(rng).ok_or(HangmanError::EmptyDictionary)?;
        let state = GameState::with_word(word, self.max_mistakes)?;
        info!(
            "New game: {} letters, {} mistakes allowed",
            state.secret_word.len(),
            state.max_mistakes
        );
        Ok(state)
    }

    /// Apply one letter guess, returning the next state and what happened.
    /// `state` itself is left untouched.
    pub fn apply_guess(&self, state: &GameState, letter: char) -> Result<(GameState, GuessOutcome)> {
        let status = state.status();
        if status.is_terminal() {
            return Err(HangmanError::GameAlreadyOver { status });
        }

        let letter = letter.to_ascii_lowercase();
        if !is_alphabet_letter(letter) {
            return Err(HangmanError::InvalidLetter(letter));
        }

        if state.guessed.contains(&letter) {
            debug!("Letter '{}' already guessed", letter);
            return Ok((state.clone(), GuessOutcome::AlreadyGuessed { letter }));
        }

        let mut next = state.clone();
        next.guessed.insert(letter);

        let occurrences = next.secret_word.chars().filter(|&c| c == letter).count();
        let outcome = if occurrences > 0 {
            GuessOutcome::Revealed { letter, occurrences }
        } else {
            next.mistakes += 1;
            GuessOutcome::Missed { letter }
        };
        debug!(
            "Guess '{}': {:?}, mask {}, mistakes {}/{}",
            letter,
            outcome,
            next.masked_word(),
            next.mistakes,
            next.max_mistakes
        );

        match next.status() {
            GameStatus::Won => info!("Game won with {} mistakes", next.mistakes),
            GameStatus::Lost => info!("Game lost after {} guesses", next.guessed.len()),
            GameStatus::Playing => {}
        }

        Ok((next, outcome))
    }
}
