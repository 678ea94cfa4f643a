//! Word ladder over an implicit single-substitution graph
//!
//! Two words are adjacent when they have the same length and differ in
//! exactly one position. The graph is never materialized: neighbors are
//! synthesized per expansion by trying every alphabet letter at every
//! position and keeping candidates found in the dictionary.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, WaypathError};
use crate::graph::{search_with, NeighborSource, SearchOptions, SearchReport};

/// Default substitution alphabet
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Set of valid words, all of one length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    word_len: Option<usize>,
}

impl Dictionary {
    /// Build from words that must all share one length
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut dictionary = Dictionary::default();
        for word in words {
            let word = word.into();
            let len = char_len(&word);
            match dictionary.word_len {
                Some(expected) if expected != len => {
                    return Err(WaypathError::MixedWordLengths {
                        expected,
                        word,
                        found: len,
                    })
                }
                _ => dictionary.word_len = Some(len),
            }
            dictionary.words.insert(word);
        }
        Ok(dictionary)
    }

    /// Keep only the words of length `len` from a general word list
    pub fn of_length<I, W>(words: I, len: usize) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| char_len(w) == len)
            .collect();
        let word_len = (!words.is_empty()).then_some(len);
        Dictionary { words, word_len }
    }

    /// Split text into whitespace-separated words. Lines starting with `#` are comments.
    pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
        text.lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
    }

    /// Load a word list file, keeping only words of length `len`
    pub fn load_of_length(path: &Path, len: usize) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read dictionary", path.display(), e))?;
        Ok(Self::of_length(Self::tokenize(&content), len))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared length of every word, or `None` for an empty dictionary
    pub fn word_len(&self) -> Option<usize> {
        self.word_len
    }
}

/// Ordered set of letters tried at each position, ascending and de-duplicated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(letters: &str) -> Result<Self> {
        let mut letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
        letters.sort_unstable();
        letters.dedup();
        if letters.is_empty() {
            return Err(WaypathError::invalid_config("alphabet must not be empty"));
        }
        Ok(Alphabet(letters))
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet(DEFAULT_ALPHABET.chars().collect())
    }
}

/// Neighbor source generating single-letter substitutions filtered by a dictionary
#[derive(Debug, Clone, Default)]
pub struct WordSubstitution {
    dictionary: Dictionary,
    alphabet: Alphabet,
}

impl WordSubstitution {
    pub fn new(dictionary: Dictionary, alphabet: Alphabet) -> Self {
        WordSubstitution {
            dictionary,
            alphabet,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find the shortest chain of single-letter changes from `start` to `target`.
    ///
    /// Every intermediate word and the target must be in the dictionary; the
    /// start word need not be. A target outside the dictionary reports
    /// `NotFound` without expanding anything. Length mismatches are
    /// configuration errors.
    #[tracing::instrument(skip(self, opts), fields(words = self.dictionary.len()))]
    pub fn find_ladder(
        &self,
        start: &str,
        target: &str,
        opts: &SearchOptions,
    ) -> Result<SearchReport<String>> {
        let (start_len, target_len) = (char_len(start), char_len(target));
        if start_len != target_len {
            return Err(WaypathError::LengthMismatch {
                start: start.to_string(),
                target: target.to_string(),
                start_len,
                target_len,
            });
        }
        if let Some(dictionary_len) = self.dictionary.word_len() {
            if dictionary_len != start_len {
                return Err(WaypathError::DictionaryLengthMismatch {
                    word: start.to_string(),
                    word_len: start_len,
                    dictionary_len,
                });
            }
        }

        if !self.dictionary.contains(target) {
            tracing::debug!(target_word = target, "target not in dictionary");
            return Ok(SearchReport::short_circuit());
        }

        Ok(search_with(self, &start.to_string(), &target.to_string(), opts))
    }
}

impl NeighborSource for WordSubstitution {
    type State = String;

    fn neighbors(&self, state: &String) -> Vec<String> {
        let mut letters: Vec<char> = state.chars().collect();
        let mut found = Vec::new();

        for position in 0..letters.len() {
            let original = letters[position];
            for &letter in self.alphabet.letters() {
                // The word itself is always in the dictionary; never yield it
                if letter == original {
                    continue;
                }
                letters[position] = letter;
                let candidate: String = letters.iter().collect();
                if self.dictionary.contains(&candidate) {
                    found.push(candidate);
                }
            }
            letters[position] = original;
        }

        found
    }
}

/// Index of the first character that differs between two ladder steps
pub fn changed_position(from: &str, to: &str) -> Option<usize> {
    from.chars().zip(to.chars()).position(|(a, b)| a != b)
}
