//! Error definitions.
//!
//! The cycle path of the core is infallible: unknown encodings retire as no-ops and
//! division by zero yields zero. Errors only arise at the edges of a run:
//! 1. **Configuration:** Reading, parsing and validating a `Config`.
//! 2. **Loading:** Reading and parsing a hex-word program file.
//! 3. **Driving:** The umbrella type reported by the command-line front-end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config {path}: {source}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text was not valid JSON for the `Config` schema.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the hardware model cannot represent.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field, e.g. `cache.l1_d.sets`.
        field: String,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

/// Errors raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program {path}: {source}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line did not contain a 32-bit hexadecimal word.
    #[error("line {line}: `{text}` is not a 32-bit hex word")]
    BadWord {
        /// One-based line number.
        line: usize,
        /// Offending text with surrounding whitespace removed.
        text: String,
    },

    /// The program does not fit in the text segment.
    #[error("program has {words} words but the text segment holds {capacity}")]
    TooLarge {
        /// Number of words in the program.
        words: usize,
        /// Number of words the text segment can hold.
        capacity: usize,
    },
}

/// Top-level error for a simulation session.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration could not be established.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The cycle limit elapsed before the program halted.
    #[error("no halt after {cycles} cycles")]
    CycleLimit {
        /// Cycles simulated before giving up.
        cycles: u64,
    },
}
