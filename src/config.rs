//! Search settings

use crate::prelude::*;

/// Settings for one anagram run.
/// For the three limits, zero means no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// reject candidate words shorter than this
    pub min_word_len: usize,
    /// reject candidate words longer than this
    pub max_word_len: usize,
    /// most words allowed in one anagram
    pub max_words: usize,
    /// number of worker threads
    pub parallelism: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_word_len: 1,
            max_word_len: 64,
            max_words: 16,
            parallelism: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Config {
    /// new default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject settings the search can't honor.
    pub fn validate(&self) -> Result<()> {
        if self.parallelism == 0 {
            return err!("Parallelism must be at least one");
        }
        if self.max_word_len != 0 && self.min_word_len > self.max_word_len {
            return err!(
                "Minimum word length {} is greater than maximum word length {}",
                self.min_word_len,
                self.max_word_len
            );
        }
        Ok(())
    }

    /// true if a word of `len` letters passes the length bounds
    pub const fn len_ok(&self, len: usize) -> bool {
        (self.min_word_len == 0 || len >= self.min_word_len)
            && (self.max_word_len == 0 || len <= self.max_word_len)
    }

    /// true if a line of `count` words is within the word limit
    pub const fn count_ok(&self, count: usize) -> bool {
        self.max_words == 0 || count <= self.max_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = Config::new();
        assert!(c.validate().is_ok());
        assert!(c.parallelism >= 1);
        assert_eq!(c.max_words, 16);
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let c = Config { parallelism: 0, ..Config::default() };
        assert!(c.validate().is_err());
        let c = Config { min_word_len: 5, max_word_len: 4, ..Config::default() };
        assert!(c.validate().is_err());
        let c = Config { min_word_len: 5, max_word_len: 0, ..Config::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_means_unbounded() {
        let c = Config { min_word_len: 0, max_word_len: 0, max_words: 0, parallelism: 1 };
        assert!(c.len_ok(0));
        assert!(c.len_ok(1000));
        assert!(c.count_ok(1000));
        let c = Config { min_word_len: 2, max_word_len: 3, max_words: 2, parallelism: 1 };
        assert!(!c.len_ok(1));
        assert!(c.len_ok(2));
        assert!(c.len_ok(3));
        assert!(!c.len_ok(4));
        assert!(c.count_ok(2));
        assert!(!c.count_ok(3));
    }
}
