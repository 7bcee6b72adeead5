//! Word frequency counting with case folding and length truncation.
mod counter;
mod error;
mod normalize;

pub use counter::{WordCounter, WordFrequency, WordsStatistics};
pub use error::WordStatsError;
pub use normalize::{normalize_word, MAX_WORD_LEN};
