//! Program Loader.
//!
//! Programs are plain text: one 32-bit hexadecimal instruction word per line,
//! with or without a `0x` prefix. Blank lines are ignored, as is anything after
//! a `#`. Words are placed consecutively from the start of the text segment.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Parses program text into instruction words.
///
/// # Errors
///
/// Returns [`LoadError::BadWord`] for the first line that is not a hex word.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_program;
///
/// let words = parse_program("2402000a  # li $v0, 10\n\n0x0000000C\n").unwrap();
/// assert_eq!(words, vec![0x2402_000A, 0x0000_000C]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::BadWord {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any error from
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}
