use rustc_hash::FxHashSet;

/// Character at `offset`, counting characters rather than bytes so that
/// multi-byte words line up with slot offsets.
pub(crate) fn char_at(word: &str, offset: usize) -> Option<char> {
    word.chars().nth(offset)
}

/// Parse a word list, one word per line. Words are upper-cased and
/// deduplicated; blank lines are skipped.
pub fn parse_word_list(input: &str) -> FxHashSet<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_word_list;

    #[test]
    fn parse_word_list_works() {
        let vocabulary = parse_word_list("cat\nDOG\n\n  dog  \n");

        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("CAT"));
        assert!(vocabulary.contains("DOG"));
    }
}
