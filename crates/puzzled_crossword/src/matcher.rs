use crate::{DictEntry, Dictionary, Pattern};

/// An inclusive `[min, max]` rating bound. Unranked entries are excluded
/// whenever either bound is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingFilter {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl RatingFilter {
    pub const ANY: Self = Self { min: None, max: None };

    fn admits(&self, rating: Option<u32>) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }

        match rating {
            None => false,
            Some(r) => {
                self.min.is_none_or(|min| r >= min) && self.max.is_none_or(|max| r <= max)
            }
        }
    }
}

/// How [`Matcher::candidates`] orders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ranked words first (highest rating first), unranked after; ties
    /// broken alphabetically. The ordering autofill searches candidates in.
    #[default]
    RatingDesc,
    /// Strict lexicographic order, ignoring rating.
    Alphabetical,
}

/// Looks up dictionary entries matching a [`Pattern`], grouped and sorted as
/// needed by a single suggestion or by the autofill search's inner loop.
///
/// Matching is a plain early-exit character compare against the
/// length-bucketed dictionary; there is no regex engine; for dictionaries up
/// to the hundreds of thousands of entries this already runs fast enough
/// that the length bucketing, not cleverer matching, is what keeps this from
/// being the search's bottleneck.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Matcher<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn candidates(&self, pattern: &Pattern, rating_filter: RatingFilter, sort: SortOrder) -> Vec<&'a DictEntry> {
        let mut matches: Vec<&DictEntry> = self
            .dictionary
            .words_of_length(pattern.len())
            .iter()
            .filter(|entry| pattern.matches(&entry.word) && rating_filter.admits(entry.rating))
            .collect();

        match sort {
            SortOrder::RatingDesc => {
                matches.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.word.cmp(&b.word)));
            }
            SortOrder::Alphabetical => matches.sort_by(|a, b| a.word.cmp(&b.word)),
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_sources(["ANT;1\nART;2\nBAT\nCAT;3\n"])
    }

    #[test]
    fn pattern_filters_by_fixed_letters() {
        let dict = dict();
        let matcher = Matcher::new(&dict);
        let pattern = Pattern::try_from("A.T").unwrap();

        let mut words: Vec<&str> = matcher
            .candidates(&pattern, RatingFilter::ANY, SortOrder::Alphabetical)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        words.sort();

        assert_eq!(words, vec!["ANT", "ART"]);
    }

    #[test]
    fn alphabetical_sort_is_strict_lexicographic_order() {
        let dict = Dictionary::from_sources(["CAT;9\nBAT;1\nART;5\n"]);
        let matcher = Matcher::new(&dict);
        let pattern = Pattern::try_from("...").unwrap();

        let words: Vec<&str> = matcher
            .candidates(&pattern, RatingFilter::ANY, SortOrder::Alphabetical)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();

        assert_eq!(words, vec!["ART", "BAT", "CAT"]);
    }

    #[test]
    fn rating_filter_excludes_unranked_when_bounded() {
        let dict = dict();
        let matcher = Matcher::new(&dict);
        let pattern = Pattern::try_from("B.T").unwrap();

        let words = matcher.candidates(&pattern, RatingFilter { min: Some(0), max: None }, SortOrder::Alphabetical);
        assert!(words.is_empty());
    }

    #[test]
    fn rating_desc_breaks_ties_alphabetically() {
        let dict = Dictionary::from_sources(["ZAP;5\nCAP;5\nGAP\n"]);
        let matcher = Matcher::new(&dict);
        let pattern = Pattern::try_from("...").unwrap();

        let words: Vec<&str> = matcher
            .candidates(&pattern, RatingFilter::ANY, SortOrder::RatingDesc)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();

        assert_eq!(words, vec!["CAP", "ZAP", "GAP"]);
    }
}
