//! The command line tool `anagrammer` finds every way to rearrange the
//! letters of a phrase into a sequence of dictionary words.
//! The library does the same for callers that already have a word list.
//!
//! ```
//! use anagrammer::{anagrams, Config};
//!
//! let config = Config { min_word_len: 0, max_word_len: 0, max_words: 2, parallelism: 2 };
//! let mut got = anagrams("DUSTYROOM", &["dormitory", "dusty", "room", "moor"], &config);
//! got.sort();
//! assert_eq!(got, ["MOOR DUSTY", "ROOM DUSTY"]);
//! ```

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::restriction,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod anagram;
pub mod candidate;
pub mod config;
pub mod dict;
pub mod expand;
pub mod freq;
pub mod output;
pub mod phrase;
pub mod pool;
pub mod prelude;
pub mod search;
pub mod util;

pub use anagram::{anagrams, anagrams_of_candidates};
pub use config::Config;
pub use util::{Error, Result};
