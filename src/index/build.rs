use crate::index::types::{IndexSummary, LineId, LookupResult, TermEntry, WordNotFound};
use crate::utils::{normalize_word, tokenize};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A concordance over a plain-text source: per-word occurrence counts plus
/// the lines each word occurs in, built in a single pass over the source and
/// read-only afterwards.
///
/// Context lines are tracked per read event: two verbatim-identical lines in
/// the source are two separate entries.
#[derive(Debug)]
pub struct Concordance {
    /// Line store in read order, verbatim (line terminators trimmed)
    lines: Vec<String>,
    /// One entry per distinct normalized word
    terms: HashMap<String, TermEntry>,
    /// Running total of indexed tokens
    token_count: u64,
}

impl Concordance {
    /// Build a concordance from a text file, reading it line-by-line.
    ///
    /// Fails immediately if the file cannot be opened or read; there is no
    /// retry or partial result.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("couldn't open the input file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("couldn't read the input file {}", path.display()))
    }

    /// Build a concordance from any buffered line source.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut concordance = Self::empty();
        for line in reader.lines() {
            concordance.ingest_line(line?);
        }
        Ok(concordance)
    }

    /// Build a concordance from already-decoded lines.
    #[allow(dead_code)]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut concordance = Self::empty();
        for line in lines {
            concordance.ingest_line(line.into());
        }
        concordance
    }

    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            terms: HashMap::new(),
            token_count: 0,
        }
    }

    /// Index one line: bump the count for every token occurrence, and append
    /// the line to each distinct token's postings exactly once. Tokens that
    /// normalize to the empty string are not indexed.
    fn ingest_line(&mut self, mut line: String) {
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        let id = self.lines.len() as LineId;
        for token in tokenize(&line) {
            if token.is_empty() {
                continue;
            }
            self.token_count += 1;
            let entry = self.terms.entry(token).or_default();
            entry.count += 1;
            // Ids are monotonic, so a token repeated within this line sees
            // itself as the last posting and is skipped
            if entry.lines.last() != Some(&id) {
                entry.lines.push(id);
            }
        }
        self.lines.push(line);
    }

    /// Look up a word, applying the same normalization as indexing.
    ///
    /// Returns the normalized word, its total frequency, and every line it
    /// occurs in; a miss carries the normalized form that was searched for.
    pub fn lookup(&self, word: &str) -> Result<LookupResult<'_>, WordNotFound> {
        let word = normalize_word(word);
        match self.terms.get(&word) {
            Some(entry) => Ok(LookupResult {
                count: entry.count,
                contexts: entry
                    .lines
                    .iter()
                    .map(|&id| self.lines[id as usize].as_str())
                    .collect(),
                word,
            }),
            None => Err(WordNotFound { word }),
        }
    }

    /// The `limit` most frequent words with their counts, most frequent
    /// first; ties break alphabetically. `limit` of 0 means unlimited.
    pub fn top_words(&self, limit: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .terms
            .iter()
            .map(|(word, entry)| (word.as_str(), entry.count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        if limit > 0 {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Number of lines read from the source
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of distinct indexed words
    pub fn distinct_words(&self) -> usize {
        self.terms.len()
    }

    /// Total token occurrences across the whole source
    pub fn total_tokens(&self) -> u64 {
        self.token_count
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            lines: self.line_count(),
            total_tokens: self.total_tokens(),
            distinct_words: self.distinct_words(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Concordance {
        Concordance::from_lines(["the cat sat", "the dog sat", "the cat ran"])
    }

    #[test]
    fn test_frequency_and_contexts() {
        let concordance = sample();

        let the = concordance.lookup("the").unwrap();
        assert_eq!(the.count, 3);
        assert_eq!(the.contexts, ["the cat sat", "the dog sat", "the cat ran"]);

        let cat = concordance.lookup("cat").unwrap();
        assert_eq!(cat.count, 2);
        assert_eq!(cat.contexts, ["the cat sat", "the cat ran"]);
    }

    #[test]
    fn test_lookup_miss_carries_normalized_word() {
        let err = sample().lookup("xyz").unwrap_err();
        assert_eq!(err.word, "xyz");

        let err = sample().lookup("Xyz!").unwrap_err();
        assert_eq!(err.word, "xyz");
    }

    #[test]
    fn test_lookup_normalizes_input() {
        let concordance = sample();
        let plain = concordance.lookup("cat").unwrap();
        assert_eq!(concordance.lookup("Cat").unwrap(), plain);
        assert_eq!(concordance.lookup("CAT").unwrap(), plain);
        assert_eq!(concordance.lookup("\"cat,\"").unwrap(), plain);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let concordance = sample();
        assert_eq!(
            concordance.lookup("sat").unwrap(),
            concordance.lookup("sat").unwrap()
        );
    }

    #[test]
    fn test_repeated_word_in_line_dedups_context() {
        let concordance = Concordance::from_lines(["the cat and the other cat"]);
        let the = concordance.lookup("the").unwrap();
        assert_eq!(the.count, 2);
        assert_eq!(the.contexts.len(), 1);
    }

    #[test]
    fn test_duplicate_lines_are_separate_read_events() {
        let concordance = Concordance::from_lines(["the cat sat", "the cat sat"]);
        let cat = concordance.lookup("cat").unwrap();
        assert_eq!(cat.count, 2);
        assert_eq!(cat.contexts, ["the cat sat", "the cat sat"]);
    }

    #[test]
    fn test_count_at_least_context_lines() {
        let concordance = Concordance::from_lines([
            "It is a truth universally acknowledged, that a single man in",
            "possession of a good fortune, must be in want of a wife.",
            "a man, a plan, a canal",
        ]);
        for (word, count) in concordance.top_words(0) {
            let result = concordance.lookup(word).unwrap();
            assert_eq!(result.count, count);
            assert!(result.count as usize >= result.contexts.len());
        }
    }

    #[test]
    fn test_empty_tokens_are_not_indexed() {
        let concordance = Concordance::from_lines(["stop -- go", "-- ?! 42"]);
        assert_eq!(concordance.distinct_words(), 2);
        assert_eq!(concordance.total_tokens(), 2);
        assert_eq!(concordance.lookup("--").unwrap_err().word, "");
    }

    #[test]
    fn test_line_terminators_trimmed() {
        let concordance = Concordance::from_lines(["the cat sat\r\n"]);
        let cat = concordance.lookup("cat").unwrap();
        assert_eq!(cat.contexts, ["the cat sat"]);
    }

    #[test]
    fn test_top_words_ranking() {
        let concordance = sample();
        assert_eq!(concordance.top_words(1), [("the", 3)]);
        // Ties break alphabetically
        assert_eq!(
            concordance.top_words(3),
            [("the", 3), ("cat", 2), ("sat", 2)]
        );
        // limit 0 lists everything
        assert_eq!(concordance.top_words(0).len(), 5);
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample().summary();
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.total_tokens, 9);
        assert_eq!(summary.distinct_words, 5);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Concordance::from_path(Path::new("/nonexistent/pp_ch1.txt")).unwrap_err();
        assert!(err.to_string().contains("couldn't open"));
    }
}
