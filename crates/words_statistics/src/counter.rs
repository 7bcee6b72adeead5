use std::cmp::Reverse;
use std::collections::HashMap;

use drill_logging::{drill_debug, drill_trace};
use serde::Serialize;

use crate::error::WordStatsError;
use crate::normalize::normalize_word;

/// One line of a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordFrequency {
    pub count: usize,
    pub word: String,
}

impl WordFrequency {
    pub fn new(count: usize, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }
}

/// Contract shared by every word statistics implementation.
pub trait WordsStatistics {
    /// Count one word. `None` is a contract violation; blank words are ignored.
    fn add_word(&mut self, word: Option<&str>) -> Result<(), WordStatsError>;

    /// Cumulative counts since construction, ascending by normalized word.
    fn statistics(&self) -> Vec<WordFrequency>;
}

/// Hash-map backed word counter.
///
/// Not synchronized; wrap it in a lock if several threads feed one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounter {
    counts: HashMap<String, usize>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one word, accepting either `&str` or `Option<&str>`.
    pub fn add<'a>(&mut self, word: impl Into<Option<&'a str>>) -> Result<(), WordStatsError> {
        let word = word.into().ok_or(WordStatsError::MissingWord)?;
        match normalize_word(word) {
            Some(key) => {
                drill_trace!("counting {word:?} as {key:?}");
                *self.counts.entry(key).or_insert(0) += 1;
            }
            None => drill_trace!("ignoring blank word {word:?}"),
        }
        Ok(())
    }

    /// Add every word in order, stopping at the first absent one.
    ///
    /// Words added before the failure stay counted.
    pub fn add_words<'a, I, W>(&mut self, words: I) -> Result<(), WordStatsError>
    where
        I: IntoIterator<Item = W>,
        W: Into<Option<&'a str>>,
    {
        for word in words {
            self.add(word)?;
        }
        drill_debug!("counter now holds {} distinct words", self.counts.len());
        Ok(())
    }

    /// Frequencies ordered by normalized word, ascending.
    pub fn report(&self) -> Vec<WordFrequency> {
        let mut report = self.entries();
        report.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        report
    }

    /// Frequencies ordered by count descending, ties broken by word ascending.
    pub fn report_by_frequency(&self) -> Vec<WordFrequency> {
        let mut report = self.entries();
        report.sort_unstable_by(|a, b| {
            Reverse(a.count)
                .cmp(&Reverse(b.count))
                .then_with(|| a.word.cmp(&b.word))
        });
        report
    }

    /// How many times `word` has been counted, after normalization.
    pub fn count_of(&self, word: &str) -> usize {
        normalize_word(word)
            .and_then(|key| self.counts.get(&key).copied())
            .unwrap_or(0)
    }

    /// Number of distinct normalized words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn entries(&self) -> Vec<WordFrequency> {
        self.counts
            .iter()
            .map(|(word, &count)| WordFrequency::new(count, word.as_str()))
            .collect()
    }
}

impl WordsStatistics for WordCounter {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), WordStatsError> {
        self.add(word)
    }

    fn statistics(&self) -> Vec<WordFrequency> {
        self.report()
    }
}
