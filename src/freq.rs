//! Letter frequency maps
//!
//! A [`FrequencyMap`] is a multiset over the 26 letters `A` to `Z`.
//! Anything else in the source text is ignored.

/// Number of letters in the uppercase ASCII alphabet.
pub const ALPHABET: usize = 26;

/// Letter counts, indexed by `letter - b'A'`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrequencyMap {
    counts: [u32; ALPHABET],
}

/// index of an uppercase letter, or None for anything else
#[inline]
const fn slot(b: u8) -> Option<usize> {
    if b.is_ascii_uppercase() {
        Some((b - b'A') as usize)
    } else {
        None
    }
}

impl FrequencyMap {
    /// Empty map
    pub const fn new() -> Self {
        Self { counts: [0; ALPHABET] }
    }

    /// Count the letters of `word`. Non-letters are skipped.
    pub fn build(word: &str) -> Self {
        let mut m = Self::new();
        m.add(word);
        m
    }

    /// Count the letters of every word in `words`.
    pub fn build_all<S: AsRef<str>>(words: &[S]) -> Self {
        let mut m = Self::new();
        for w in words {
            m.add(w.as_ref());
        }
        m
    }

    /// Add the letters of `word` to this map.
    pub fn add(&mut self, word: &str) {
        for b in word.bytes() {
            if let Some(i) = slot(b) {
                self.counts[i] += 1;
            }
        }
    }

    /// count for one letter
    pub fn get(&self, letter: u8) -> u32 {
        slot(letter).map_or(0, |i| self.counts[i])
    }

    /// total number of letters
    pub fn len(&self) -> usize {
        self.counts.iter().map(|c| *c as usize).sum()
    }

    /// true if no letters
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    /// True if every letter in `words` can be drawn from `self`
    /// without any count going negative.
    ///
    /// `self` is never copied. Each slot is pulled into a local overlay the
    /// first time its letter shows up, and only the overlay is decremented.
    pub fn contains<S: AsRef<str>>(&self, words: &[S]) -> bool {
        let mut overlay = [0u32; ALPHABET];
        let mut loaded: u32 = 0;
        for w in words {
            for b in w.as_ref().bytes() {
                let Some(i) = slot(b) else {
                    continue;
                };
                let bit = 1u32 << i;
                if loaded & bit == 0 {
                    overlay[i] = self.counts[i];
                    loaded |= bit;
                }
                if overlay[i] == 0 {
                    return false;
                }
                overlay[i] -= 1;
            }
        }
        true
    }

    /// Single word version of [`contains`](Self::contains)
    pub fn contains_word(&self, word: &str) -> bool {
        self.contains(&[word])
    }

    /// True if all 26 slots match.
    pub fn equals(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}
