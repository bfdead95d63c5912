use anagrammer::prelude::*;
use anagrammer::{anagrams_of_candidates, dict, output, phrase};
use env_logger::Env;
use std::env;

pub mod args;
use crate::args::ArgSpec;

fn main() {
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

/// Everything the command line can change
#[derive(Debug, Clone)]
struct Settings {
    dict: String,
    output: String,
    config: Config,
    candidates_only: bool,
    silent: bool,
    sort_lines: bool,
    sort_words: bool,
    verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dict: "words.txt".to_string(),
            output: "-".to_string(),
            config: Config::default(),
            candidates_only: false,
            silent: false,
            sort_lines: false,
            sort_words: true,
            verbose: false,
        }
    }
}

const A: [ArgSpec; 11] = [
    arg! {"dict", "d", "File", "Dictionary, one word per line. Default 'words.txt'"},
    arg! {"min-len", "l", "Number", "Minimum word length, 0 for none. Default 1"},
    arg! {"max-len", "L", "Number", "Maximum word length, 0 for none. Default 64"},
    arg! {"max-words", "w", "Number", "Maximum words per anagram, 0 for none. Default 16"},
    arg! {"jobs", "j", "Number", "Number of worker threads. Default is one per CPU"},
    arg! {"candidates", "c", "", "Just show candidate words, don't anagram"},
    arg! {"silent", "s", "", "Don't print results"},
    arg! {"sort-lines", "", "", "Sort the output lines"},
    arg! {"no-sort-words", "", "", "Don't sort the words within each line"},
    arg! {"output", "o", "File", "Write results here. Default '-' for stdout"},
    arg! {"verbose", "v", "", "Log progress to stderr"},
];

impl Settings {
    fn consume(&mut self, args: &[args::ArgValue]) -> Result<()> {
        for x in args {
            if x.name == "dict" {
                self.dict = x.value.clone();
            } else if x.name == "min-len" {
                self.config.min_word_len = args::to_usize(&x.value, "minimum word length")?;
            } else if x.name == "max-len" {
                self.config.max_word_len = args::to_usize(&x.value, "maximum word length")?;
            } else if x.name == "max-words" {
                self.config.max_words = args::to_usize(&x.value, "maximum number of words")?;
            } else if x.name == "jobs" {
                self.config.parallelism = args::to_usize(&x.value, "number of jobs")?;
            } else if x.name == "candidates" {
                self.candidates_only = true;
            } else if x.name == "silent" {
                self.silent = true;
            } else if x.name == "sort-lines" {
                self.sort_lines = true;
            } else if x.name == "no-sort-words" {
                self.sort_words = false;
            } else if x.name == "output" {
                self.output = x.value.clone();
            } else if x.name == "verbose" {
                self.verbose = true;
            } else {
                unreachable!();
            }
        }
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    // a second init, e.g. from a test harness, is harmless
    drop(env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init());
}

fn inner_main(argv: Vec<String>) -> Result<()> {
    let prog = args::ProgSpec::new("Find every multi-word anagram of a phrase.");
    let (args, words) = args::parse(&prog, &A, &argv)?;
    let mut settings = Settings::default();
    settings.consume(&args)?;
    init_logging(settings.verbose);
    settings.config.validate()?;

    let phrase = phrase::sanitize_args(&words);
    if phrase.is_empty() {
        return err!("Phrase must contain at least one letter");
    }
    debug!("anagramming {} with {:?}", phrase, settings.config);

    let dictionary = dict::read_dict(&settings.dict)?;
    let candidates = Candidates::new(&dictionary, &phrase, &settings.config);

    let mut w = get_writer(&settings.output)?;
    if settings.candidates_only {
        output::write_candidates(&mut w, &candidates)?;
        w.flush()?;
        return Ok(());
    }

    let mut lines = anagrams_of_candidates(&phrase, &candidates, &settings.config);
    if settings.silent {
        return Ok(());
    }
    if settings.sort_words {
        output::sort_words(&mut lines);
    }
    if settings.sort_lines {
        output::sort_lines(&mut lines);
    }
    output::write_lines(&mut w, &lines)?;
    w.flush()?;
    Ok(())
}
