use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::HangmanError;
use crate::games::hangman::game::check_max_mistakes;
use crate::games::hangman::Dictionary;

/// Mistakes allowed before the game is lost, as in the classic gallows drawing
pub const DEFAULT_MAX_MISTAKES: u8 = 6;

/// Game settings a host may override from a TOML file.
///
/// ```toml
/// max_mistakes = 6
/// word_list = "assets/words.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_mistakes: u8,
    /// Newline-delimited word list; the bundled list is used when unset
    pub word_list: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_mistakes: DEFAULT_MAX_MISTAKES,
            word_list: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read game config: {:?}", path))?;
        Self::from_toml_str(&contents).context(format!("Invalid game config: {:?}", path))
    }

    pub fn validate(&self) -> std::result::Result<(), HangmanError> {
        check_max_mistakes(self.max_mistakes)
    }

    /// Load the configured word list, or the bundled one
    pub fn dictionary(&self) -> Result<Dictionary> {
        match &self.word_list {
            Some(path) => Dictionary::load(path),
            None => Ok(Dictionary::bundled()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.max_mistakes, 6);
    }

    #[test]
    fn overrides_are_read() {
        let config = GameConfig::from_toml_str("max_mistakes = 8\nword_list = \"words.txt\"").unwrap();
        assert_eq!(config.max_mistakes, 8);
        assert_eq!(config.word_list, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn zero_mistakes_rejected() {
        assert!(GameConfig::from_toml_str("max_mistakes = 0").is_err());
        let config = GameConfig { max_mistakes: 27, word_list: None };
        assert!(matches!(config.validate(), Err(HangmanError::InvalidConfig(_))));
    }

    #[test]
    fn missing_word_list_file_is_reported() {
        let config = GameConfig {
            word_list: Some(PathBuf::from("/definitely/not/here/words.txt")),
            ..GameConfig::default()
        };
        let err = config.dictionary().unwrap_err();
        assert!(format!("{:#}", err).contains("words.txt"));
    }

    #[test]
    fn default_dictionary_is_bundled() {
        let dictionary = GameConfig::default().dictionary().unwrap();
        assert!(!dictionary.is_empty());
    }
}
