//! Cleaning up the phrase to be anagrammed

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NOT_LETTER: Regex = Regex::new("[^A-Z]+").unwrap();
}

/// Uppercase `s` and drop everything that isn't `A` through `Z`.
pub fn sanitize(s: &str) -> String {
    NOT_LETTER.replace_all(&s.to_uppercase(), "").into_owned()
}

/// Sanitize each argument, and glue them together.
pub fn sanitize_args<S: AsRef<str>>(args: &[S]) -> String {
    let mut ret = String::new();
    for a in args {
        ret.push_str(&sanitize(a.as_ref()));
    }
    ret
}
