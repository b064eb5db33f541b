use std::collections::HashMap;

/// Token → occurrence count, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `token`, inserting it at the end if unseen.
    pub fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.to_owned(), self.entries.len());
                self.entries.push((token.to_owned(), 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tokens recorded.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(t, n)| (t.as_str(), *n))
    }
}

/// Count pre-split tokens.
pub fn count<I, S>(tokens: I) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = WordCounts::new();
    for token in tokens {
        counts.record(token.as_ref());
    }
    counts
}

/// Most frequent token.
///
/// A later token only replaces the current best when its count is strictly
/// greater, so ties go to the token seen first. `None` for empty counts.
pub fn mode(counts: &WordCounts) -> Option<(&str, u64)> {
    let mut best: Option<(&str, u64)> = None;
    for (token, n) in counts.iter() {
        match best {
            Some((_, max)) if n <= max => {}
            _ => best = Some((token, n)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_of_nothing_is_empty() {
        let counts = count(Vec::<String>::new());
        assert!(counts.is_empty());
        assert_eq!(mode(&counts), None);
    }

    #[test]
    fn counts_repeated_tokens() {
        let counts = count(["the", "cat", "the", "hat", "the"]);
        assert_eq!(counts.get("the"), Some(3));
        assert_eq!(counts.get("cat"), Some(1));
        assert_eq!(counts.get("dog"), None);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 5);
        assert_eq!(mode(&counts), Some(("the", 3)));
    }

    #[test]
    fn tie_goes_to_first_seen_not_smallest() {
        let counts = count(["zebra", "apple", "apple", "zebra"]);
        assert_eq!(mode(&counts), Some(("zebra", 2)));
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let counts = count(["Word", "word", "word"]);
        assert_eq!(counts.get("Word"), Some(1));
        assert_eq!(mode(&counts), Some(("word", 2)));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let counts = count(["b", "a", "b", "c"]);
        let order: Vec<_> = counts.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: mode has the maximal count and is the first such token.
            #[test]
            fn mode_is_first_maximal_token(tokens in proptest::collection::vec("[a-d]{1,2}", 0..50)) {
                let counts = count(&tokens);
                match mode(&counts) {
                    None => prop_assert!(tokens.is_empty()),
                    Some((token, n)) => {
                        let max = counts.iter().map(|(_, c)| c).max().unwrap();
                        prop_assert_eq!(n, max);
                        let first = counts.iter().find(|(_, c)| *c == max).unwrap().0;
                        prop_assert_eq!(token, first);
                    }
                }
            }

            /// Property: the counts add up to the number of tokens.
            #[test]
            fn total_matches_token_count(tokens in proptest::collection::vec("[a-z]{1,3}", 0..100)) {
                let counts = count(&tokens);
                prop_assert_eq!(counts.total(), tokens.len() as u64);
            }
        }
    }
}
