//! Alternate spellings of a found anagram
//!
//! Each word in a found anagram stands for its whole alternate group, so one
//! anagram becomes one line per combination of alternates. The number of
//! lines is the product of the group sizes, and there is no cap on it.

use crate::candidate::{letter_key, AlternateMap};

/// Every line that can be made from `words` by swapping in alternates.
/// The first line is `words` itself.
pub fn expand<'a>(words: &[&'a str], alternates: &'a AlternateMap) -> Vec<String> {
    let mut lines: Vec<Vec<&'a str>> = vec![words.to_vec()];
    for (pos, word) in words.iter().enumerate() {
        let Some(group) = alternates.get(&letter_key(word)) else {
            continue;
        };
        let mut forks = Vec::with_capacity(lines.len() * group.len().saturating_sub(1));
        for line in &lines {
            for alt in group.iter().filter(|a| a.as_str() != *word) {
                let mut fork = line.clone();
                fork[pos] = alt.as_str();
                forks.push(fork);
            }
        }
        lines.append(&mut forks);
    }
    lines.into_iter().map(|line| line.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(list: &[&[&str]]) -> AlternateMap {
        let mut m = AlternateMap::default();
        for g in list {
            m.insert(letter_key(g[0]), g.iter().map(|s| s.to_string()).collect());
        }
        m
    }

    #[test]
    fn no_alternates() {
        let alt = groups(&[&["AB"], &["C"]]);
        assert_eq!(expand(&["AB", "C"], &alt), ["AB C"]);
    }

    #[test]
    fn unknown_word_passes_through() {
        assert_eq!(expand(&["XYZ"], &AlternateMap::default()), ["XYZ"]);
    }

    #[test]
    fn forks_multiply() {
        let alt = groups(&[&["ACT", "CAT", "TAC"], &["GOD", "DOG"], &["I"]]);
        let mut got = expand(&["ACT", "I", "GOD"], &alt);
        assert_eq!(got.len(), 3 * 2);
        assert_eq!(got[0], "ACT I GOD");
        got.sort();
        assert_eq!(
            got,
            ["ACT I DOG", "ACT I GOD", "CAT I DOG", "CAT I GOD", "TAC I DOG", "TAC I GOD"]
        );
    }

    #[test]
    fn same_group_twice() {
        let alt = groups(&[&["AB", "BA"]]);
        let mut got = expand(&["AB", "AB"], &alt);
        got.sort();
        assert_eq!(got, ["AB AB", "AB BA", "BA AB", "BA BA"]);
    }
}
