//! Dictionary filtering
//!
//! Turns a raw word list into the words that can take part in an anagram of
//! the phrase. Words that are anagrams of each other collapse into one
//! candidate, and the rest of the group is remembered as alternates.

use crate::prelude::*;
use fnv::FnvHashMap;
use std::fmt;

/// The key shared by every anagram of a word : its letters, sorted.
pub fn letter_key(word: &str) -> String {
    let mut bytes = word.as_bytes().to_vec();
    bytes.sort_unstable();
    // sorting ASCII bytes keeps them ASCII
    String::from_utf8(bytes).unwrap_or_default()
}

/// Words with the same letters, representative first.
pub type AlternateMap = FnvHashMap<String, Vec<String>>;

/// Candidate words, plus their alternate spellings
#[derive(Default, Clone)]
pub struct Candidates {
    /// One representative per letter key, shortest first.
    pub words: Vec<String>,
    /// All words for each letter key.
    pub alternates: AlternateMap,
}

impl fmt::Debug for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidates {} words, {} groups", self.words.len(), self.alternates.len())
    }
}

/// uppercase the word, or None if it has anything but letters
fn normalize(word: &str) -> Option<String> {
    let upper = word.to_ascii_uppercase();
    if upper.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(upper)
    } else {
        None
    }
}

impl Candidates {
    /// Filter `words` down to those that fit inside `phrase`.
    ///
    /// `phrase` must already be sanitized : uppercase letters only.
    pub fn new<S: AsRef<str>>(words: &[S], phrase: &str, config: &Config) -> Self {
        let phrase_map = FrequencyMap::build(phrase);
        let phrase_len = phrase_map.len();
        let mut ret = Self::default();

        for raw in words {
            let raw = raw.as_ref();
            if raw.is_empty() || raw.len() > phrase_len || !config.len_ok(raw.len()) {
                continue;
            }
            let Some(word) = normalize(raw) else {
                continue;
            };
            if !phrase_map.contains_word(&word) {
                continue;
            }
            ret.add(word);
        }

        // stable, so equal lengths keep dictionary order
        ret.words.sort_by_key(String::len);
        info!("{} candidate words, {} with alternates", ret.words.len(), ret.num_forked());
        ret
    }

    fn add(&mut self, word: String) {
        let key = letter_key(&word);
        if let Some(group) = self.alternates.get_mut(&key) {
            if !group.contains(&word) {
                trace!("{} is an alternate of {}", word, group[0]);
                group.push(word);
            }
        } else {
            self.words.push(word.clone());
            self.alternates.insert(key, vec![word]);
        }
    }

    /// The alternate group for a candidate, including the word itself.
    pub fn alternates_of(&self, word: &str) -> Option<&[String]> {
        self.alternates.get(&letter_key(word)).map(Vec::as_slice)
    }

    /// number of candidates
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// true if no candidates
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// number of groups with more than one word
    pub fn num_forked(&self) -> usize {
        self.alternates.values().filter(|g| g.len() > 1).count()
    }
}
