//! Sorting and printing results

use crate::prelude::*;

/// Sort the words within each line.
pub fn sort_words(lines: &mut [String]) {
    for line in lines.iter_mut() {
        let mut words: Vec<&str> = line.split(' ').collect();
        words.sort_unstable();
        *line = words.join(" ");
    }
}

/// Sort the lines.
pub fn sort_lines(lines: &mut [String]) {
    lines.sort_unstable();
}

/// Write one line per result.
pub fn write_lines(w: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Write each candidate, followed by its alternates, one group per line.
pub fn write_candidates(w: &mut impl Write, candidates: &Candidates) -> Result<()> {
    for word in &candidates.words {
        match candidates.alternates_of(word) {
            Some(group) => w.write_all(group.join(" ").as_bytes())?,
            None => w.write_all(word.as_bytes())?,
        }
        w.write_all(b"\n")?;
    }
    Ok(())
}
