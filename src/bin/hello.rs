//! Minimal walkthrough of the `solidlab` API.
//!
//! Usage: `hello [SEPARATOR]`. The first character of the first argument is
//! used as the join separator (default `-`). `SOLIDLAB_LOG` sets the log level.

use std::ffi::OsString;

use solidlab::logging::{default_log_level, init_logging};
use solidlab::{NoteList, SolidLabError};

const DEFAULT_HELLO_SEPARATOR: char = '-';

#[derive(Debug)]
struct HelloConfig {
    separator: char,
    log_level: String,
}

impl HelloConfig {
    fn from_env() -> Self {
        let mut config = Self::from_args(std::env::args_os().skip(1));
        if let Ok(level) = std::env::var("SOLIDLAB_LOG") {
            config.log_level = level;
        }
        config
    }

    /// Builds the config from the arguments following the program name.
    ///
    /// Arguments are not validated. Non-UTF-8 input is decoded lossily, so an
    /// invalid leading byte yields `U+FFFD`.
    fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let separator = args
            .into_iter()
            .next()
            .and_then(|arg| arg.to_string_lossy().chars().next())
            .unwrap_or(DEFAULT_HELLO_SEPARATOR);

        Self {
            separator,
            log_level: default_log_level().to_string(),
        }
    }
}

fn main() {
    let config = HelloConfig::from_env();
    if let Err(err) = init_logging(&config.log_level) {
        eprintln!("warning: logging disabled: {err}");
    }

    println!("SolidLab v{}", NoteList::version());

    let mut lab = NoteList::new();
    lab.add_note("alpha");
    lab.add_note("beta");
    lab.add_note("gamma");

    println!("Notes count: {}", lab.size());
    if let Ok(first) = lab.note(0) {
        println!("First note: {first}");
    }

    println!("Joined: {}", lab.join_with(config.separator));

    // Bounds checking.
    match lab.note(999) {
        Err(SolidLabError::OutOfRange { .. }) => println!("Caught out_of_range"),
        Err(err) => println!("Unexpected error: {err}"),
        Ok(note) => println!("Unexpected note: {note}"),
    }
}
