//! Cached corpus access with a built-in fallback
//!
//! `read_corpus` reports every failure to its caller, while `load` never fails:
//! it logs the problem and serves a tiny fallback corpus so generation always
//! has data. Only a successful read is cached.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, OnceLock};

use log::{debug, info, warn};

use crate::corpus::entry::{CorpusBucket, WordEntry, parse_corpus_file};
use crate::io::configuration::{CORPUS_FILES, DEFAULT_CORPUS_DIR};
use crate::io::error::{Result, WithPath};

fn fallback_entry(word: &str, clues: [&str; 3]) -> WordEntry {
    WordEntry {
        word: word.to_string(),
        clues: clues.iter().map(ToString::to_string).collect(),
    }
}

static FALLBACK_CORPUS: LazyLock<CorpusBucket> = LazyLock::new(|| CorpusBucket {
    two_letter_words: vec![fallback_entry(
        "UP",
        ["Toward the sky", "In a higher position", "Opposite of down"],
    )],
    three_letter_words: vec![fallback_entry(
        "CAT",
        ["Purring pet", "Feline friend", "Whiskers and paws"],
    )],
    four_letter_words: vec![fallback_entry(
        "BOOK",
        ["Written stories", "Reading material", "Library item"],
    )],
    five_letter_words: vec![fallback_entry(
        "HAPPY",
        ["Feeling joy", "Not sad", "Positive emotion"],
    )],
});

/// Corpus served when the corpus files cannot be loaded
pub fn fallback_corpus() -> &'static CorpusBucket {
    &FALLBACK_CORPUS
}

/// Loads the per-length corpus files from a directory and caches the result
///
/// The cache is write-once and read-only afterwards, so a store can be shared
/// by concurrent generators.
#[derive(Debug)]
pub struct WordClueStore {
    directory: PathBuf,
    cache: OnceLock<CorpusBucket>,
}

impl Default for WordClueStore {
    fn default() -> Self {
        Self::new(DEFAULT_CORPUS_DIR)
    }
}

impl WordClueStore {
    /// Create a store reading corpus files from `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            cache: OnceLock::new(),
        }
    }

    /// Create a store that serves `corpus` without touching the file system
    pub fn from_corpus(corpus: CorpusBucket) -> Self {
        Self {
            directory: PathBuf::new(),
            cache: OnceLock::from(corpus),
        }
    }

    /// Directory the corpus files are read from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether a successfully parsed corpus is cached
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Read and validate all corpus files, bypassing the cache
    ///
    /// # Errors
    ///
    /// Returns an error if any corpus file is missing, unreadable, not valid
    /// JSON, or contains an invalid entry.
    pub fn read_corpus(&self) -> Result<CorpusBucket> {
        let mut corpus = CorpusBucket::default();

        for (length, file_name) in CORPUS_FILES {
            let path = self.directory.join(file_name);
            debug!("Reading corpus file: {}", path.display());

            let content = std::fs::read_to_string(&path).with_corpus_path(&path)?;
            let entries = parse_corpus_file(&content, &path)?;

            if let Some(bucket) = corpus.bucket_mut(length) {
                *bucket = entries;
            }
        }

        info!(
            "Loaded crossword corpus: {} two, {} three, {} four, {} five-letter words",
            corpus.two_letter_words.len(),
            corpus.three_letter_words.len(),
            corpus.four_letter_words.len(),
            corpus.five_letter_words.len(),
        );

        Ok(corpus)
    }

    /// Cached corpus, reading it on first use and falling back on failure
    ///
    /// A failed read is not cached, so a later call retries the files.
    pub fn load(&self) -> &CorpusBucket {
        if let Some(corpus) = self.cache.get() {
            return corpus;
        }

        match self.read_corpus() {
            Ok(corpus) => self.cache.get_or_init(|| corpus),
            Err(error) => {
                warn!("Error loading crossword data: {error}");
                warn!("Using fallback data");
                fallback_corpus()
            }
        }
    }
}
