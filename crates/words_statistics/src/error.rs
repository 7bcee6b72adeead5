use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WordStatsError {
    /// A word was required but none was supplied.
    #[error("word must not be absent")]
    MissingWord,
}
