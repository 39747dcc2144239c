/// Word list the secret word is drawn from
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, warn};

use super::game::is_alphabet_letter;

const BUNDLED_WORDS: &str = include_str!("../../../dictionary/words.txt");

/// Ordered, immutable list of lowercase candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Normalize in-memory words: trim, lowercase, drop blanks and non a-z words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Parse newline-delimited text, one word per line
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Read one word per line. Lines that aren't valid UTF-8 are skipped;
    /// only I/O failures abort the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line.context(format!("Failed to read word list line {}", idx + 1))?;
            match String::from_utf8(line) {
                Ok(word) => words.push(word),
                Err(e) => warn!("Skipping word list line {}: {}", idx + 1, e),
            }
        }
        Ok(Self::from_words(words))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open word list: {:?}", path))?;
        let dictionary = Self::from_reader(BufReader::new(file))
            .context(format!("Failed to load word list: {:?}", path))?;
        info!("Loaded {} words from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    /// The word list compiled into the crate
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_WORDS)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Uniform draw over the list; duplicates weigh proportionally
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.words.len());
        Some(self.words[idx].as_str())
    }
}

fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }
    if !word.chars().all(is_alphabet_letter) {
        warn!("Skipping word list entry {:?}: only letters a-z are playable", raw.trim());
        return None;
    }
    Some(word)
}
