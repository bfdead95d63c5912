//! Reading word lists

use crate::prelude::*;
use memchr::memchr_iter;

/// Split `data` into lines, dropping line endings and blank lines.
fn split_words(data: &[u8]) -> Result<Vec<String>> {
    let mut ret = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', data).chain(std::iter::once(data.len())) {
        let line = chomp(&data[start..end]);
        start = end + 1;
        if line.is_empty() {
            continue;
        }
        ret.push(String::from_utf8(line.to_vec())?);
    }
    Ok(ret)
}

/// Read a dictionary, one word per line.
///
/// `name` is anything [`get_reader`] accepts. Words are returned as written;
/// the candidate filter does the case folding and rejects non-letters.
pub fn read_dict(name: &str) -> Result<Vec<String>> {
    let mut file = get_reader(name)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    let words = split_words(&data)?;
    if words.is_empty() {
        warn!("dictionary {} has no words", name);
    }
    info!("read {} words from {}", words.len(), name);
    Ok(words)
}
