//! Protocol Tests
//!
//! Tests for atom tokenization, status-line parsing, command rendering,
//! and the `.`-terminated data-block readers.

use std::io::Cursor;

use dictc::protocol::{
    quote_atom, quote_atom_always, read_data_block, read_line, read_status, read_text_block,
    split_atoms, split_first_atom, Command, Status,
};
use dictc::DatabaseSelector;

// =============================================================================
// Atom Tokenization Tests
// =============================================================================

#[test]
fn test_split_atoms_simple() {
    assert_eq!(split_atoms("foo bar baz"), vec!["foo", "bar", "baz"]);
}

#[test]
fn test_split_atoms_collapses_whitespace() {
    assert_eq!(split_atoms("  foo\t bar  "), vec!["foo", "bar"]);
}

#[test]
fn test_split_atoms_quoted_span_is_one_atom() {
    assert_eq!(
        split_atoms("foo \"Foo Dictionary\""),
        vec!["foo", "Foo Dictionary"]
    );
}

#[test]
fn test_split_atoms_quoted_span_mid_line() {
    assert_eq!(
        split_atoms("151 \"cat\" foo \"Foo Dictionary\""),
        vec!["151", "cat", "foo", "Foo Dictionary"]
    );
}

#[test]
fn test_split_atoms_escape_inside_quotes() {
    assert_eq!(split_atoms(r#""a \"b\" c""#), vec![r#"a "b" c"#]);
}

#[test]
fn test_split_atoms_empty_quoted_atom() {
    assert_eq!(split_atoms(r#"x """#), vec!["x", ""]);
}

#[test]
fn test_split_atoms_empty_line() {
    assert!(split_atoms("").is_empty());
    assert!(split_atoms("   ").is_empty());
}

#[test]
fn test_quote_atom_plain_passthrough() {
    assert_eq!(quote_atom("exact"), "exact");
    assert_eq!(quote_atom("*"), "*");
    assert_eq!(quote_atom("!"), "!");
}

#[test]
fn test_quote_atom_spaces() {
    assert_eq!(quote_atom("two words"), "\"two words\"");
}

#[test]
fn test_quote_atom_empty() {
    assert_eq!(quote_atom(""), "\"\"");
}

#[test]
fn test_quote_atom_always_escapes() {
    assert_eq!(quote_atom_always(r#"say "hi""#), r#""say \"hi\"""#);
    assert_eq!(quote_atom_always("cat"), "\"cat\"");
}

#[test]
fn test_split_round_trips_quoted_atom() {
    let atoms = split_atoms(&format!("x {}", quote_atom_always("a \"b\" c")));
    assert_eq!(atoms, vec!["x", "a \"b\" c"]);
}

#[test]
fn test_split_first_atom_plain() {
    assert_eq!(
        split_first_atom("foo Foo Dictionary"),
        Some(("foo".to_string(), "Foo Dictionary"))
    );
}

#[test]
fn test_split_first_atom_keeps_remainder_verbatim() {
    assert_eq!(
        split_first_atom("foo  Foo  Dictionary "),
        Some(("foo".to_string(), "Foo  Dictionary "))
    );
}

#[test]
fn test_split_first_atom_quoted() {
    assert_eq!(
        split_first_atom("\"two words\" rest of line"),
        Some(("two words".to_string(), "rest of line"))
    );
}

#[test]
fn test_split_first_atom_sole_atom() {
    assert_eq!(split_first_atom("foo"), Some(("foo".to_string(), "")));
}

#[test]
fn test_split_first_atom_blank_line() {
    assert_eq!(split_first_atom(""), None);
    assert_eq!(split_first_atom("   "), None);
}

// =============================================================================
// Status-Line Tests
// =============================================================================

#[test]
fn test_status_parse_code_and_message() {
    let status = Status::parse("220 dict.org ready").unwrap();
    assert_eq!(status.code, 220);
    assert_eq!(status.message, "dict.org ready");
}

#[test]
fn test_status_parse_code_only() {
    let status = Status::parse("250").unwrap();
    assert_eq!(status.code, 250);
    assert!(status.message.is_empty());
}

#[test]
fn test_status_parse_rejects_non_numeric() {
    assert!(Status::parse("ready 220").is_err());
    assert!(Status::parse("2x0 hello").is_err());
}

#[test]
fn test_status_parse_rejects_wrong_width() {
    assert!(Status::parse("22 hello").is_err());
    assert!(Status::parse("2200 hello").is_err());
}

#[test]
fn test_status_parse_rejects_empty_line() {
    assert!(Status::parse("").is_err());
}

#[test]
fn test_status_message_atoms_honor_quotes() {
    let status = Status::parse("151 \"cat\" foo \"Foo Dictionary\"").unwrap();
    assert_eq!(status.message_atoms(), vec!["cat", "foo", "Foo Dictionary"]);
}

#[test]
fn test_status_leading_count() {
    let status = Status::parse("150 3 definitions retrieved").unwrap();
    assert_eq!(status.leading_count(), Some(3));

    let status = Status::parse("150 definitions retrieved").unwrap();
    assert_eq!(status.leading_count(), None);
}

// =============================================================================
// Command Rendering Tests
// =============================================================================

#[test]
fn test_command_show_lines() {
    assert_eq!(Command::ShowDatabases.line(), "SHOW DB");
    assert_eq!(Command::ShowStrategies.line(), "SHOW STRATEGIES");
    assert_eq!(Command::Quit.line(), "QUIT");
}

#[test]
fn test_command_match_always_quotes_word() {
    let cmd = Command::Match {
        database: DatabaseSelector::All,
        strategy: "exact".to_string(),
        word: "cat".to_string(),
    };
    assert_eq!(cmd.line(), "MATCH * exact \"cat\"");
}

#[test]
fn test_command_match_first_selector_passes_through() {
    let cmd = Command::Match {
        database: DatabaseSelector::First,
        strategy: "prefix".to_string(),
        word: "ca".to_string(),
    };
    assert_eq!(cmd.line(), "MATCH ! prefix \"ca\"");
}

#[test]
fn test_command_define_plain_word_unquoted() {
    let cmd = Command::Define {
        database: DatabaseSelector::Named("wn".to_string()),
        word: "cat".to_string(),
    };
    assert_eq!(cmd.line(), "DEFINE wn cat");
}

#[test]
fn test_command_define_quotes_word_with_spaces() {
    let cmd = Command::Define {
        database: DatabaseSelector::All,
        word: "hot dog".to_string(),
    };
    assert_eq!(cmd.line(), "DEFINE * \"hot dog\"");
}

// =============================================================================
// Line Codec Tests
// =============================================================================

#[test]
fn test_read_line_strips_crlf_and_lf() {
    let mut cursor = Cursor::new(b"first\r\nsecond\nthird".to_vec());
    assert_eq!(read_line(&mut cursor).unwrap(), Some("first".to_string()));
    assert_eq!(read_line(&mut cursor).unwrap(), Some("second".to_string()));
    assert_eq!(read_line(&mut cursor).unwrap(), Some("third".to_string()));
    assert_eq!(read_line(&mut cursor).unwrap(), None);
}

#[test]
fn test_read_status_from_stream() {
    let mut cursor = Cursor::new(b"110 2 databases present\r\n".to_vec());
    let status = read_status(&mut cursor).unwrap();
    assert_eq!(status.code, 110);
    assert_eq!(status.message, "2 databases present");
}

#[test]
fn test_read_status_at_eof_is_protocol_error() {
    let mut cursor = Cursor::new(Vec::new());
    let err = read_status(&mut cursor).unwrap_err();
    assert!(err.to_string().contains("Protocol error"));
}

#[test]
fn test_read_data_block_builds_one_record_per_line() {
    let mut cursor = Cursor::new(b"foo \"Foo Dictionary\"\r\nbar \"Bar Dictionary\"\r\n.\r\n".to_vec());
    let records = read_data_block(&mut cursor, |_, atoms| Ok(atoms.to_vec())).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], vec!["foo", "Foo Dictionary"]);
    assert_eq!(records[1], vec!["bar", "Bar Dictionary"]);
}

#[test]
fn test_read_data_block_consumes_terminator() {
    let mut cursor = Cursor::new(b"a 1\r\n.\r\n220 next\r\n".to_vec());
    let records = read_data_block(&mut cursor, |_, atoms| Ok(atoms.to_vec())).unwrap();
    assert_eq!(records.len(), 1);

    // The terminator is gone; the next read sees the following line
    let status = read_status(&mut cursor).unwrap();
    assert_eq!(status.code, 220);
}

#[test]
fn test_read_data_block_passes_raw_line() {
    let mut cursor = Cursor::new(b"foo  Foo  Dictionary\r\n.\r\n".to_vec());
    let records = read_data_block(&mut cursor, |line, _| Ok(line.to_string())).unwrap();
    assert_eq!(records, vec!["foo  Foo  Dictionary"]);
}

#[test]
fn test_read_data_block_empty() {
    let mut cursor = Cursor::new(b".\r\n".to_vec());
    let records = read_data_block(&mut cursor, |_, atoms| Ok(atoms.to_vec())).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_read_data_block_eof_before_terminator() {
    let mut cursor = Cursor::new(b"foo \"Foo Dictionary\"\r\n".to_vec());
    let result = read_data_block(&mut cursor, |_, atoms| Ok(atoms.to_vec()));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("closed by server mid-response"));
}

#[test]
fn test_read_text_block_joins_lines() {
    let mut cursor = Cursor::new(b"A small feline.\r\nAlso a pet.\r\n.\r\n".to_vec());
    let text = read_text_block(&mut cursor).unwrap();
    assert_eq!(text, "A small feline.\nAlso a pet.");
}

#[test]
fn test_read_text_block_eof_before_terminator() {
    let mut cursor = Cursor::new(b"A small feline.\r\n".to_vec());
    assert!(read_text_block(&mut cursor).is_err());
}
