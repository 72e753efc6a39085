//! Program Loader Tests.

use std::io::Write;

use mipsim_core::common::LoadError;
use mipsim_core::sim::loader::{load_program, parse_program};
use pretty_assertions::assert_eq;

#[test]
fn accepts_prefixed_and_bare_words() {
    let words = parse_program("0x2402000A\n0000000c\n0X00000000\n").unwrap();
    assert_eq!(words, vec![0x2402_000A, 0x0000_000C, 0]);
}

#[test]
fn skips_blank_lines_and_comments() {
    let text = "# header\n\n   2402000a   # li $v0, 10\n\t\n0000000c\n";
    assert_eq!(parse_program(text).unwrap(), vec![0x2402_000A, 0x0000_000C]);
}

#[test]
fn rejects_non_hex_with_line_number() {
    match parse_program("2402000a\nhello\n") {
        Err(LoadError::BadWord { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "hello");
        }
        other => panic!("expected BadWord, got {other:?}"),
    }
}

#[test]
fn rejects_words_wider_than_32_bits() {
    assert!(matches!(
        parse_program("123456789"),
        Err(LoadError::BadWord { line: 1, .. })
    ));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2402000a").unwrap();
    writeln!(file, "0000000c").unwrap();
    assert_eq!(
        load_program(file.path()).unwrap(),
        vec![0x2402_000A, 0x0000_000C]
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_program(dir.path().join("nope.x")),
        Err(LoadError::Io { .. })
    ));
}
