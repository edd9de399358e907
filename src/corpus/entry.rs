//! Word entries, length buckets and corpus file parsing

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::io::error::{CrosswordError, Result, WithPath};

/// A corpus word with its candidate clues
///
/// `word` is uppercase ASCII letters and never empty; `clues` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Answer word
    pub word: String,
    /// Clues that may be shown for the word
    pub clues: Vec<String>,
}

impl WordEntry {
    /// Build an entry, normalising the word to uppercase
    ///
    /// # Errors
    ///
    /// Returns the reason when the word is empty or not alphabetic, or when
    /// no clue is given.
    pub fn new(word: &str, clues: Vec<String>) -> std::result::Result<Self, String> {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() {
            return Err("word is empty".to_string());
        }
        if !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!("word '{word}' contains non-letter characters"));
        }
        if clues.is_empty() {
            return Err(format!("word '{word}' has no clues"));
        }
        Ok(Self { word, clues })
    }

    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word has no letters (never true for a validated entry)
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Entry as it appears on disk before validation
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    word: Option<String>,
    clues: Vec<String>,
}

/// Corpus entries grouped by word length
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusBucket {
    /// Two-letter entries
    pub two_letter_words: Vec<WordEntry>,
    /// Three-letter entries
    pub three_letter_words: Vec<WordEntry>,
    /// Four-letter entries
    pub four_letter_words: Vec<WordEntry>,
    /// Five-letter entries
    pub five_letter_words: Vec<WordEntry>,
}

impl CorpusBucket {
    /// Entries for `length`, empty for lengths without a bucket
    pub fn words_of_length(&self, length: usize) -> &[WordEntry] {
        match length {
            2 => &self.two_letter_words,
            3 => &self.three_letter_words,
            4 => &self.four_letter_words,
            5 => &self.five_letter_words,
            _ => &[],
        }
    }

    /// Mutable bucket for `length`, `None` for lengths without a bucket
    pub const fn bucket_mut(&mut self, length: usize) -> Option<&mut Vec<WordEntry>> {
        match length {
            2 => Some(&mut self.two_letter_words),
            3 => Some(&mut self.three_letter_words),
            4 => Some(&mut self.four_letter_words),
            5 => Some(&mut self.five_letter_words),
            _ => None,
        }
    }

    /// Total number of entries across all buckets
    pub fn total_entries(&self) -> usize {
        (2..=5).map(|length| self.words_of_length(length).len()).sum()
    }
}

/// Parse one corpus file's contents
///
/// The document is an object whose sole key maps to an array of
/// `{ word, clues }` objects.
///
/// # Errors
///
/// Returns an error if:
/// - The content is not JSON, or not an object holding exactly one entry array
/// - Any entry lacks a word, has non-array clues, or breaks the entry invariants
pub fn parse_corpus_file(content: &str, path: &Path) -> Result<Vec<WordEntry>> {
    let document: Map<String, Value> = serde_json::from_str(content).with_corpus_path(path)?;

    let mut lists = document.into_iter();
    let (Some((_, list)), None) = (lists.next(), lists.next()) else {
        return Err(CrosswordError::InvalidEntry {
            path: path.to_path_buf(),
            index: 0,
            reason: "expected exactly one words array".to_string(),
        });
    };

    let raw_entries: Vec<RawEntry> = serde_json::from_value(list).with_corpus_path(path)?;

    raw_entries
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let word = raw.word.unwrap_or_default();
            WordEntry::new(&word, raw.clues).map_err(|reason| CrosswordError::InvalidEntry {
                path: path.to_path_buf(),
                index,
                reason,
            })
        })
        .collect()
}
