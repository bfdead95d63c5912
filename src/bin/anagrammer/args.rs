use anagrammer::prelude::*;
use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        $crate::args::ArgSpec { name: $a, short: $b, value: $c, help: $d }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, author: "avjewe@gmail.com", version: env!("CARGO_PKG_VERSION") }
    }
}

/// One command line option. An empty `value` means a flag.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let (Some(vals), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) else {
        return;
    };
    for (val, i) in vals.zip(ind) {
        if x.value.is_empty() {
            v.push(ArgValue::new(x.name, "", i));
        } else {
            v.push(ArgValue::new(x.name, val, i));
        }
    }
}

/// Parse `argv` against `spec`.
/// Returns the options in command line order, and the words of the phrase.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
) -> Result<(Vec<ArgValue>, Vec<String>)> {
    let mut a = clap::Command::new("anagrammer")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help);

    for x in spec {
        a = add_arg(a, x);
    }
    a = a.arg(
        clap::Arg::new("phrase")
            .value_name("PHRASE")
            .help("Words to anagram")
            .required(true)
            .action(ArgAction::Append),
    );
    let m = a.get_matches_from(argv);

    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let phrase: Vec<String> = match m.get_many::<String>("phrase") {
        Some(words) => words.cloned().collect(),
        None => return err!("No phrase given"),
    };
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok((v, phrase))
}

/// Parse a whole number, with `what` in the error
pub fn to_usize(value: &str, what: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) => Ok(n),
        Err(_) => err!("Invalid {} : '{}'", what, value),
    }
}
