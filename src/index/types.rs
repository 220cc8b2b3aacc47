use serde::Serialize;
use thiserror::Error;

/// Position of a line in read order, used as the posting unit of the index
pub type LineId = u32;

/// Per-word record: total occurrence count plus the postings of the lines
/// the word appeared in, in read order.
///
/// Fusing both tables into one entry makes the key-set invariant structural:
/// a word is present in the frequency table and the line index together, or
/// in neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermEntry {
    pub count: u32,
    pub lines: Vec<LineId>,
}

/// Successful lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult<'a> {
    /// The normalized form that was matched
    pub word: String,
    /// Total occurrences across the whole source
    pub count: u32,
    /// Context lines, verbatim, in read order
    pub contexts: Vec<&'a str>,
}

/// A queried word (after normalization) has no entry in the index.
///
/// This is an expected, recoverable condition: interactive callers report
/// it and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the word {word:?} was not found")]
pub struct WordNotFound {
    /// The normalized form that was searched for
    pub word: String,
}

/// Whole-index counters reported by `concord stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub lines: usize,
    pub total_tokens: u64,
    pub distinct_words: usize,
}
