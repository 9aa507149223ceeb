// dotload: .env file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Cursor;

use super::{Entry, Lines, ParsedLine, parse_line, parse_str};

fn entry(key: &str, value: &str) -> ParsedLine {
    ParsedLine::Entry(Entry::new(key, value))
}

#[test]
fn test_parse_line_basic() {
    assert_eq!(parse_line("NAME=Arthur"), entry("NAME", "Arthur"));
    assert_eq!(parse_line("  PORT =  8080  "), entry("PORT", "8080"));
    assert_eq!(parse_line("EMPTY="), entry("EMPTY", ""));
}

#[test]
fn test_parse_line_keeps_later_separators() {
    assert_eq!(
        parse_line("DSN=postgres://u:p@h/db?sslmode=require"),
        entry("DSN", "postgres://u:p@h/db?sslmode=require")
    );
    assert_eq!(parse_line("A==b"), entry("A", "=b"));
}

#[test]
fn test_parse_line_null() {
    assert_eq!(parse_line("TEST=null"), entry("TEST", ""));
    assert_eq!(parse_line("TEST =  null "), entry("TEST", ""));
    // case-sensitive
    assert_eq!(parse_line("TEST=NULL"), entry("TEST", "NULL"));
    assert_eq!(parse_line("TEST=nullable"), entry("TEST", "nullable"));
}

#[test]
fn test_parse_line_skipped() {
    assert_eq!(parse_line(""), ParsedLine::Blank);
    assert_eq!(parse_line("                  "), ParsedLine::Blank);
    assert_eq!(parse_line("\t \t"), ParsedLine::Blank);
    assert_eq!(parse_line("#COMMENT=yes"), ParsedLine::Comment);
    assert_eq!(parse_line("   # indented=comment"), ParsedLine::Comment);
    assert_eq!(parse_line("JUSTATOKEN"), ParsedLine::Malformed);
}

#[test]
fn test_parse_line_hash_inside_value_is_kept() {
    assert_eq!(parse_line("COLOR=#ff0000"), entry("COLOR", "#ff0000"));
}

#[test]
fn test_parse_line_empty_key() {
    // produced as an entry; sinks reject the empty key
    assert_eq!(parse_line(" = orphan"), entry("", "orphan"));
}

#[test]
fn test_parse_str_scenario() {
    let entries = parse_str("NAME=Arthur\n\nSPACE=true\n#COMMENT=yes\nAPP=env\n");
    insta::assert_json_snapshot!(entries, @r#"
    [
      {
        "key": "NAME",
        "value": "Arthur"
      },
      {
        "key": "SPACE",
        "value": "true"
      },
      {
        "key": "APP",
        "value": "env"
      }
    ]
    "#);
}

#[test]
fn test_lines_numbers_and_terminators() {
    let input = "A=1\r\n\r\n# note\nbroken\nB = two";
    let lines: Vec<_> = Lines::new(Cursor::new(input))
        .collect::<std::io::Result<_>>()
        .unwrap();

    assert_eq!(
        lines,
        vec![
            (1, entry("A", "1")),
            (2, ParsedLine::Blank),
            (3, ParsedLine::Comment),
            (4, ParsedLine::Malformed),
            (5, entry("B", "two")),
        ]
    );
}

#[test]
fn test_lines_invalid_utf8_is_error() {
    let input: &[u8] = b"OK=1\nBAD=\xff\xfe\n";
    let mut lines = Lines::new(Cursor::new(input));

    assert!(matches!(lines.next(), Some(Ok((1, _)))));
    let err = lines.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(lines.line_number(), 2);
}

#[test]
fn test_lines_empty_input() {
    let mut lines = Lines::new(Cursor::new(""));
    assert!(lines.next().is_none());
    assert_eq!(lines.line_number(), 0);
}

#[test]
fn test_line_number_stops_at_end_of_input() {
    let mut lines = Lines::new(Cursor::new("A=1\n"));
    assert_eq!(lines.line_number(), 0);

    assert!(matches!(lines.next(), Some(Ok((1, _)))));
    assert!(lines.next().is_none());
    assert!(lines.next().is_none());
    assert_eq!(lines.line_number(), 1);
}
