//! Letter-multiset counting.
//!
//! Answers "how many disjoint copies of a word can be spelled from the
//! characters of an input string". Characters not in the word are ignored and
//! the order of the input never matters.

use std::collections::BTreeMap;

pub const TARGET_WORD: &str = "flight";

/// Number of complete copies of "flight" that can be assembled from `input`.
///
/// ```rust
/// use flight_finder::counter::count_flight;
///
/// assert_eq!(count_flight("fflliigghhtt"), 2);
/// assert_eq!(count_flight("abc"), 0);
/// ```
#[must_use]
pub fn count_flight(input: &str) -> u32 {
    count_word(input, TARGET_WORD)
}

/// Number of complete copies of `word` that can be assembled from `input`.
///
/// A letter that appears `k` times in `word` consumes `k` occurrences per copy.
/// An empty `word` yields 0.
#[must_use]
pub fn count_word(input: &str, word: &str) -> u32 {
    let mut needed: BTreeMap<char, u32> = BTreeMap::new();
    for c in word.chars() {
        *needed.entry(c).or_insert(0) += 1;
    }

    if needed.is_empty() {
        return 0;
    }

    let mut tally: BTreeMap<char, u32> = needed.keys().map(|&c| (c, 0)).collect();
    for c in input.chars() {
        if let Some(n) = tally.get_mut(&c) {
            *n += 1;
        }
    }

    needed
        .iter()
        .map(|(c, per_copy)| tally.get(c).copied().unwrap_or(0) / per_copy)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_flight_examples() {
        assert_eq!(count_flight("flight"), 1);
        assert_eq!(count_flight("flightflight"), 2);
        assert_eq!(count_flight("fflliigghhtt"), 2);
        assert_eq!(count_flight("lightfabc"), 1);
    }

    #[test]
    fn test_count_flight_empty_is_zero() {
        assert_eq!(count_flight(""), 0);
    }

    #[test]
    fn test_count_flight_missing_letters() {
        assert_eq!(count_flight("abc"), 0);
        assert_eq!(count_flight("light"), 0);
        assert_eq!(count_flight("fligh"), 0);
    }

    #[test]
    fn test_count_flight_order_independent() {
        assert_eq!(count_flight("tghilf"), 1);
        assert_eq!(count_flight("tghilf"), count_flight("flight"));
    }

    #[test]
    fn test_count_flight_bottleneck() {
        // only one 'f'
        assert_eq!(count_flight("fllliiiggghhhttt"), 1);
    }

    #[test]
    fn test_count_word_repeated_letters() {
        assert_eq!(count_word("balloonballoon", "balloon"), 2);
        assert_eq!(count_word("balon", "balloon"), 0);
        assert_eq!(count_word("anything", ""), 0);
    }

    fn naive_min(s: &str) -> u32 {
        TARGET_WORD
            .chars()
            .map(|t| u32::try_from(s.chars().filter(|&c| c == t).count()).unwrap())
            .min()
            .unwrap()
    }

    proptest! {
        #[test]
        fn count_flight_is_min_of_letter_tallies(s in "[a-z]{0,100}") {
            prop_assert_eq!(count_flight(&s), naive_min(&s));
        }

        #[test]
        fn count_flight_ignores_order(s in "[a-z]{0,100}") {
            let reversed: String = s.chars().rev().collect();
            prop_assert_eq!(count_flight(&s), count_flight(&reversed));
        }
    }
}
