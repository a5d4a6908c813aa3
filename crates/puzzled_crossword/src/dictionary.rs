use std::collections::HashMap;

/// One line of a dictionary source: a word and its optional quality rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub word: String,
    pub rating: Option<u32>,
}

/// A read-only, indexed corpus of rated words.
///
/// Built once per process and shared by reference across any number of
/// [`Matcher`](crate::Matcher)s or concurrent autofill runs. Entries are kept
/// grouped by length so that a single-entry lookup or an autofill inner loop
/// never has to skip past words of the wrong length.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: HashMap<usize, Vec<DictEntry>>,
}

impl Dictionary {
    /// Parses one or more source lists and deduplicates across them.
    ///
    /// Each line is `WORD` or `WORD;RATING`. A rating that fails to parse as
    /// a base-10 integer is treated as absent rather than rejecting the
    /// line. Lines that are blank or start with `#` are skipped. Words are
    /// uppercased. When the same word appears more than once (within a
    /// source or across sources), the entry kept is the one with the
    /// highest rating seen; the merged entry is unranked only if every
    /// occurrence was unranked.
    pub fn from_sources<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: HashMap<String, Option<u32>> = HashMap::new();

        for source in sources {
            for line in source.lines() {
                let Some((word, rating)) = parse_line(line) else {
                    continue;
                };

                best.entry(word)
                    .and_modify(|existing| *existing = merge_ratings(*existing, rating))
                    .or_insert(rating);
            }
        }

        let mut by_length: HashMap<usize, Vec<DictEntry>> = HashMap::new();
        for (word, rating) in best {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push(DictEntry { word, rating });
        }

        Self { by_length }
    }

    pub fn words_of_length(&self, len: usize) -> &[DictEntry] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_ratings(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn parse_line(line: &str) -> Option<(String, Option<u32>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (word, rating) = match line.split_once(';') {
        Some((word, rating)) => (word, rating.trim().parse().ok()),
        None => (line, None),
    };

    let word = word.trim().to_uppercase();
    if word.is_empty() {
        return None;
    }

    Some((word, rating))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(5), Some(9), Some(9))]
    #[case(Some(5), None, Some(5))]
    #[case(None, Some(5), Some(5))]
    #[case(None, None, None)]
    fn merge_ratings_keeps_the_higher_rating(#[case] a: Option<u32>, #[case] b: Option<u32>, #[case] expected: Option<u32>) {
        assert_eq!(merge_ratings(a, b), expected);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let dict = Dictionary::from_sources(["# comment\n\nCAT;5\n"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn dedup_keeps_the_maximum_rating() {
        let dict = Dictionary::from_sources(["CAT;5\nCAT;9\nCAT\n"]);
        let entries = dict.words_of_length(3);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rating, Some(9));
    }

    #[test]
    fn unparseable_rating_is_treated_as_absent() {
        let dict = Dictionary::from_sources(["CAT;oops\n"]);
        assert_eq!(dict.words_of_length(3)[0].rating, None);
    }

    #[test]
    fn absent_only_if_every_occurrence_was_absent() {
        let dict = Dictionary::from_sources(["CAT\nCAT;3\n"]);
        assert_eq!(dict.words_of_length(3)[0].rating, Some(3));
    }
}
