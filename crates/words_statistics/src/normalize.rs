/// Maximum number of characters kept from a word when it is counted.
pub const MAX_WORD_LEN: usize = 10;

/// Normalize a word into its counting key.
///
/// Blank words (empty or whitespace only) yield `None`. Everything else is
/// lower-cased with Unicode default casing and cut to the first
/// [`MAX_WORD_LEN`] characters of the lower-cased text. Blankness is checked
/// on the raw word, so leading spaces survive truncation.
pub fn normalize_word(word: &str) -> Option<String> {
    if word.trim().is_empty() {
        return None;
    }
    Some(word.to_lowercase().chars().take(MAX_WORD_LEN).collect())
}
