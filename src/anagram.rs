//! Anagrams

use crate::pool::solve;
use crate::prelude::*;
use crate::search::Search;

/// Every multi-word anagram of `phrase` that can be made from `words`.
///
/// `phrase` must be uppercase letters only, see [`sanitize`](crate::phrase::sanitize).
/// Each line is the words of one anagram, separated by single spaces.
/// Lines come back in no particular order.
///
/// A found anagram is repeated once for every combination of alternate
/// spellings of its words, so dictionaries with many anagram pairs can
/// produce a very large result.
pub fn anagrams<S: AsRef<str>>(phrase: &str, words: &[S], config: &Config) -> Vec<String> {
    let candidates = Candidates::new(words, phrase, config);
    anagrams_of_candidates(phrase, &candidates, config)
}

/// Like [`anagrams`], but with the dictionary already filtered.
pub fn anagrams_of_candidates(phrase: &str, candidates: &Candidates, config: &Config) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let phrase_map = FrequencyMap::build(phrase);
    let search = Search::new(&phrase_map, candidates, config);
    let ret = solve(&search, config.parallelism);
    info!("{} anagrams of {}", ret.len(), phrase);
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn config(max_words: usize, parallelism: usize) -> Config {
        Config { min_word_len: 0, max_word_len: 0, max_words, parallelism }
    }

    fn set(lines: &[String]) -> BTreeSet<String> {
        lines.iter().cloned().collect()
    }

    fn sorted_letters(s: &str) -> Vec<u8> {
        let mut v: Vec<u8> = s.bytes().filter(|b| *b != b' ').collect();
        v.sort_unstable();
        v
    }

    const DICT: &[&str] = &[
        "a", "ab", "ba", "abc", "acb", "b", "c", "bc", "cb", "d", "ad", "da", "bad", "dab", "cab",
        "cad", "dc", "x", "xyz", "abcd", "dcba",
    ];

    #[test]
    fn single_word_scenario() {
        let got = anagrams("CAT", &["CAT", "ACT", "TAC", "DOG"], &config(1, 2));
        let want: BTreeSet<String> = ["CAT", "ACT", "TAC"].iter().map(|s| s.to_string()).collect();
        assert_eq!(got.len(), 3);
        assert_eq!(set(&got), want);
    }

    #[test]
    fn multi_word_scenario() {
        let got = set(&anagrams("ABC", &["A", "BC", "AB", "C", "ABC"], &config(3, 2)));
        assert!(got.contains("ABC"));
        assert!(got.contains("A BC"));
        assert!(got.contains("C AB"));
    }

    #[test]
    fn depth_limit_scenario() {
        let got = anagrams("ABC", &["A", "BC", "AB", "C"], &config(1, 2));
        assert!(got.is_empty());
    }

    #[test]
    fn no_candidates() {
        assert!(anagrams("QQQ", DICT, &config(4, 2)).is_empty());
        assert!(anagrams::<&str>("ABC", &[], &config(4, 2)).is_empty());
    }

    #[test]
    fn permutation_and_word_count() {
        let phrase = "ABCDAB";
        for max_words in [1, 2, 3, 4] {
            let got = anagrams(phrase, DICT, &config(max_words, 3));
            for line in &got {
                assert_eq!(sorted_letters(line), sorted_letters(phrase), "{line}");
                assert!(line.split(' ').count() <= max_words, "{line}");
            }
        }
    }

    #[test]
    fn only_subset_words_appear() {
        let phrase = "ABCD";
        let phrase_map = FrequencyMap::build(phrase);
        for line in anagrams(phrase, DICT, &config(4, 2)) {
            for word in line.split(' ') {
                assert!(phrase_map.contains_word(word), "{word}");
                assert_ne!(word, "XYZ");
            }
        }
    }

    #[test]
    fn alternates_are_complete() {
        let phrase = "ABCDAB";
        let got = set(&anagrams(phrase, DICT, &config(4, 4)));
        assert!(!got.is_empty());
        let pairs = [("AB", "BA"), ("BAD", "DAB"), ("ABCD", "DCBA"), ("AD", "DA")];
        for line in &got {
            let words: Vec<&str> = line.split(' ').collect();
            for (pos, w) in words.iter().enumerate() {
                for (x, y) in pairs {
                    let other = if *w == x {
                        y
                    } else if *w == y {
                        x
                    } else {
                        continue;
                    };
                    let mut swapped = words.clone();
                    swapped[pos] = other;
                    assert!(got.contains(&swapped.join(" ")), "{line} without {other}");
                }
            }
        }
    }

    #[test]
    fn parallelism_invariance() {
        let one = set(&anagrams("ABCDABC", DICT, &config(5, 1)));
        assert!(!one.is_empty());
        for n in [2, 3, 8] {
            assert_eq!(one, set(&anagrams("ABCDABC", DICT, &config(5, n))));
        }
    }

    #[test]
    fn no_duplicates_within_a_run() {
        let got = anagrams("ABCDAB", DICT, &config(4, 4));
        assert_eq!(got.len(), set(&got).len());
    }
}
