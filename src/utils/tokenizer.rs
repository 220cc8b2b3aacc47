/// Return the normalized form of a whitespace-delimited fragment.
///
/// Lowercases the fragment and keeps only ASCII letters and apostrophes;
/// every other character is stripped. A fragment with no qualifying
/// characters normalizes to the empty string.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|&ch| ch.is_ascii_alphabetic() || ch == '\'')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Tokenize a line: split on whitespace, then normalize each fragment.
///
/// Fragments that normalize to the empty string (a lone `--`, a bare
/// punctuation mark) are still yielded; dropping them is the caller's
/// policy, not the tokenizer's.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(normalize_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens: Vec<String> = tokenize(r#"This is a "bunch" of text."#).collect();
        assert_eq!(tokens, ["this", "is", "a", "bunch", "of", "text"]);
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize_word("she"), normalize_word("SHE"));
        assert_eq!(normalize_word("she"), normalize_word("ShE"));
    }

    #[test]
    fn test_normalize_keeps_apostrophes() {
        assert_eq!(normalize_word("Don't!"), "don't");
        // Curly quotes are not ASCII apostrophes and get stripped
        assert_eq!(normalize_word("don\u{2019}t"), "dont");
    }

    #[test]
    fn test_normalize_empty_fragment() {
        assert_eq!(normalize_word("--"), "");
        assert_eq!(normalize_word("1234"), "");
    }

    #[test]
    fn test_tokenize_yields_empty_tokens() {
        // Pure-punctuation fragments come through as empty strings
        let tokens: Vec<String> = tokenize("stop -- go").collect();
        assert_eq!(tokens, ["stop", "", "go"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \t  ").count(), 0);
    }
}
