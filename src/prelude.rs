//! The prelude

#[doc(inline)]
pub use crate::candidate::Candidates;
#[doc(inline)]
pub use crate::config::Config;
#[doc(inline)]
pub use crate::freq::FrequencyMap;
#[doc(inline)]
pub use crate::util::{chomp, err, get_reader, get_writer, Error, Infile, Outfile, Result};

#[doc(inline)]
pub use log::{debug, info, trace, warn};
#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
