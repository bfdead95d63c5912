//! The recursive anagram search
//!
//! Words are chosen in candidate order only, so each combination of words is
//! visited once, never once per ordering. Candidates are sorted shortest
//! first, which lets a branch stop scanning at the first word that is too
//! long.

use crate::expand::expand;
use crate::pool::Task;
use crate::prelude::*;

/// A partial anagram : the words chosen so far and their total length.
///
/// Extending a `Base` makes a new one, so sibling branches never see each
/// other's words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base<'a> {
    words: Vec<&'a str>,
    len: usize,
}

impl<'a> Base<'a> {
    /// A base holding a single word
    pub fn new(word: &'a str) -> Self {
        Self { words: vec![word], len: word.len() }
    }

    /// A copy of this base with `word` appended
    #[must_use]
    pub fn with(&self, word: &'a str) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(&self.words);
        words.push(word);
        Self { words, len: self.len + word.len() }
    }

    /// the chosen words
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// total letters in all words
    pub const fn len(&self) -> usize {
        self.len
    }

    /// true if no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// number of words
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Read-only state shared by every branch of every task.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    phrase_map: &'a FrequencyMap,
    phrase_len: usize,
    candidates: &'a Candidates,
    max_words: usize,
}

impl<'a> Search<'a> {
    /// new search over `candidates` for the letters in `phrase_map`
    pub fn new(phrase_map: &'a FrequencyMap, candidates: &'a Candidates, config: &Config) -> Self {
        Self {
            phrase_map,
            phrase_len: phrase_map.len(),
            candidates,
            max_words: config.max_words,
        }
    }

    /// the candidate words, shortest first
    pub fn candidates(&self) -> &'a [String] {
        &self.candidates.words
    }

    /// Every anagram, searched on this thread.
    pub fn run_all(&self) -> Vec<String> {
        Task::all(self.candidates()).flat_map(|task| self.run_task(task)).collect()
    }

    /// All anagrams that start with `base` and continue with words from
    /// `remaining`, fully expanded with alternates.
    pub fn run(&self, base: Base<'a>, remaining: &'a [String]) -> Vec<String> {
        if base.len() > self.phrase_len {
            return Vec::new();
        }
        if self.max_words != 0 && base.count() > self.max_words {
            trace!("too many words {:?}", base.words());
            return Vec::new();
        }

        if base.len() < self.phrase_len {
            if !self.phrase_map.contains(base.words()) {
                trace!("not in phrase {:?}", base.words());
                return Vec::new();
            }
            let mut ret = Vec::new();
            for (i, w) in remaining.iter().enumerate() {
                // everything after this is at least as long
                if base.len() + w.len() > self.phrase_len {
                    break;
                }
                ret.extend(self.run(base.with(w), &remaining[i + 1..]));
            }
            return ret;
        }

        if !self.phrase_map.equals(&FrequencyMap::build_all(base.words())) {
            return Vec::new();
        }
        let ret = expand(base.words(), &self.candidates.alternates);
        debug!("found {:?}, {} with alternates", base.words(), ret.len());
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(phrase: &str, words: &[&str], max_words: usize) -> Vec<String> {
        let config = Config { min_word_len: 0, max_word_len: 0, max_words, parallelism: 1 };
        let cand = Candidates::new(words, phrase, &config);
        let map = FrequencyMap::build(phrase);
        let mut ret = Search::new(&map, &cand, &config).run_all();
        ret.sort();
        ret
    }

    #[test]
    fn base_with_copies() {
        let a = Base::new("AB");
        let b = a.with("C");
        let c = a.with("DE");
        assert_eq!(a.words(), ["AB"]);
        assert_eq!(b.words(), ["AB", "C"]);
        assert_eq!(c.words(), ["AB", "DE"]);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert_eq!(c.len(), 4);
        assert_eq!(c.count(), 2);
        assert!(Base::default().is_empty());
    }

    #[test]
    fn single_word_with_alternates() {
        assert_eq!(run("CAT", &["CAT", "ACT", "TAC", "DOG"], 1), ["ACT", "CAT", "TAC"]);
    }

    #[test]
    fn multi_word() {
        let got = run("ABC", &["A", "BC", "AB", "C", "ABC"], 3);
        assert_eq!(got, ["A BC", "ABC", "C AB"]);
    }

    #[test]
    fn depth_limit() {
        assert!(run("ABC", &["A", "BC", "AB", "C"], 1).is_empty());
        assert_eq!(run("ABC", &["A", "B", "C"], 3), ["A B C"]);
        assert!(run("ABC", &["A", "B", "C"], 2).is_empty());
        assert_eq!(run("ABC", &["A", "B", "C"], 0), ["A B C"]);
    }

    #[test]
    fn no_permutation_duplicates() {
        let got = run("ABCD", &["AB", "CD", "A", "B", "C", "D"], 4);
        let mut uniq = got.clone();
        uniq.dedup();
        assert_eq!(got, uniq);
        assert!(got.contains(&"AB CD".to_string()));
        assert!(!got.contains(&"CD AB".to_string()));
    }

    #[test]
    fn repeated_letters() {
        assert_eq!(run("AAB", &["A", "AB"], 3), ["A AB"]);
        // each candidate is used at most once per line
        assert!(run("AAB", &["A", "B"], 3).is_empty());
    }

    #[test]
    fn no_candidates() {
        assert!(run("XYZ", &["CAT", "DOG"], 3).is_empty());
        assert!(run("XYZ", &[], 3).is_empty());
    }

    #[test]
    fn overlong_base() {
        let config = Config { min_word_len: 0, max_word_len: 0, max_words: 0, parallelism: 1 };
        let cand = Candidates::new(&["AB"], "AB", &config);
        let map = FrequencyMap::build("AB");
        let search = Search::new(&map, &cand, &config);
        assert!(search.run(Base::new("ABC"), &[]).is_empty());
        assert!(search.run(Base::new("XY"), &[]).is_empty());
        assert_eq!(search.run(Base::new("AB"), &[]), ["AB"]);
    }
}
