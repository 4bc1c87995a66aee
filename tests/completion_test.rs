use localcomplete::{
    Buffer, CompleteError, Config, Cursor, KeywordChars, MatchResult, Workspace,
    complete_all_buffer_matches, complete_dictionary_matches, complete_local_matches,
    findstart_local_matches, locate_start,
};
use std::io::Write;

fn words(result: &[MatchResult]) -> Vec<&str> {
    result.iter().map(|m| m.word.as_str()).collect()
}

fn single_buffer(lines: &[&str], cursor: Cursor) -> Workspace {
    Workspace::new(vec![Buffer::from_lines(1, lines)], 0, cursor)
}

/// Test that the local search honours the configured line order end to end
#[test]
fn test_local_matches_in_centered_order() {
    let ws = single_buffer(
        &["priory", "prize", "none", "prized", "none", "primary"],
        Cursor { line: 2, idx: 0 },
    );
    let config = Config {
        match_result_order: 3,
        show_origin_note: false,
        ..Config::default()
    };

    let result = complete_local_matches(&ws, &config, "pri").unwrap();
    assert_eq!(words(&result), vec!["prize", "prized", "priory", "primary"]);
    assert!(result.iter().all(|m| m.menu.is_none()));
}

/// Test that the whole-file label is used when the window is unbounded
#[test]
fn test_local_origin_note() {
    let ws = single_buffer(&["priory prize"], Cursor::default());

    let result = complete_local_matches(&ws, &Config::default(), "pri").unwrap();
    assert_eq!(result[0].menu.as_deref(), Some("<< whole-file"));

    let bounded = Config {
        lines_above: 3,
        lines_below: 3,
        ..Config::default()
    };
    let result = complete_local_matches(&ws, &bounded, "pri").unwrap();
    assert_eq!(result[0].menu.as_deref(), Some("<< localcomplete"));
}

/// Test that a bad order selector aborts the request
#[test]
fn test_misconfigured_order_is_an_error() {
    let ws = single_buffer(&["priory"], Cursor::default());
    let config = Config {
        match_result_order: 9,
        ..Config::default()
    };

    let err = complete_local_matches(&ws, &config, "pri").unwrap_err();
    assert!(matches!(err, CompleteError::InvalidOrder(9)));
    assert!(err.to_string().contains("result order misconfigured"));
}

/// Test that a prefix below the minimum length never scans
#[test]
fn test_min_prefix_length_short_circuits() {
    let ws = single_buffer(&["priory prize"], Cursor::default());
    let config = Config {
        local_min_prefix_length: 4,
        all_buffer_min_prefix_length: 4,
        ..Config::default()
    };

    assert!(complete_local_matches(&ws, &config, "pri").unwrap().is_empty());
    assert!(complete_all_buffer_matches(&ws, &config, "pri").unwrap().is_empty());
    assert_eq!(complete_local_matches(&ws, &config, "prio").unwrap().len(), 1);
}

/// Test that all-buffer search starts at the current buffer and works outwards
#[test]
fn test_all_buffer_matches_order() {
    let buffers = vec![
        Buffer::from_lines(3, &["word3"]),
        Buffer::from_lines(4, &["word4"]),
        Buffer::from_lines(5, &["word5"]),
        Buffer::from_lines(6, &["word6"]),
        Buffer::from_lines(7, &["word7"]),
    ];
    let ws = Workspace::new(buffers, 2, Cursor::default());

    let result = complete_all_buffer_matches(&ws, &Config::default(), "wor").unwrap();
    assert_eq!(words(&result), vec!["word5", "word4", "word6", "word3", "word7"]);
    assert!(result.iter().all(|m| m.menu.as_deref() == Some("<+ all-buffers")));
}

/// Test dictionary lookup through a real file
#[test]
fn test_dictionary_matches_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "priory\nunpri\nprize\nPriority").unwrap();

    let ws = Workspace::new(Vec::new(), 0, Cursor::default());
    let mut config = Config::default();
    config.editor.dictionary = Some(file.path().to_path_buf());

    let result = complete_dictionary_matches(&ws, &config, "pri").unwrap();
    assert_eq!(words(&result), vec!["priory", "prize"]);
    assert_eq!(result[0].menu.as_deref(), Some("<* dict"));
}

/// Test that a missing dictionary still answers, with the error reported
#[test]
fn test_dictionary_read_failure_is_recovered() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::new(Vec::new(), 0, Cursor::default());
    let mut config = Config::default();
    config.editor.dictionary = Some(dir.path().join("nope.txt"));

    let result = complete_dictionary_matches(&ws, &config, "pri").unwrap();
    assert!(result.is_empty());
    assert_eq!(ws.take_errors().len(), 1);
}

/// Test the findstart column for a word and for a trailing space
#[test]
fn test_findstart() {
    let config = Config::default();

    let ws = single_buffer(&["ab b"], Cursor { line: 0, idx: 4 });
    assert_eq!(findstart_local_matches(&ws, &config).unwrap(), 3);

    let ws = single_buffer(&["ab b "], Cursor { line: 0, idx: 5 });
    assert_eq!(findstart_local_matches(&ws, &config).unwrap(), 5);
}

/// Test that the findstart offset slices back to the word under completion
#[test]
fn test_findstart_offset_round_trip() {
    let line = "\u{fc}\u{fc}\u{fc}ber \u{fc}berfu\u{df} tail";
    let cursor = Cursor { line: 0, idx: line.find(" tail").unwrap() };
    let ws = single_buffer(&[line], cursor);
    let config = Config::default();

    let start = findstart_local_matches(&ws, &config).unwrap();
    assert_eq!(start, 10);
    assert_eq!(&line[start..cursor.idx], "\u{fc}berfu\u{df}");
}

fn with_encoding(name: &str) -> Config {
    let mut config = Config::default();
    config.editor.encoding = name.to_string();
    config
}

/// Test that a Latin-1 host's cursor and findstart offset agree
#[test]
fn test_findstart_latin1_host() {
    let config = with_encoding("latin1");

    let ws = single_buffer(&["\u{fc} "], Cursor { line: 0, idx: 2 });
    assert_eq!(findstart_local_matches(&ws, &config).unwrap(), 2);

    let line = "\u{fc}\u{fc}\u{fc}ber \u{fc}berfu\u{df} tail";
    let ws = single_buffer(&[line], Cursor { line: 0, idx: 14 });
    assert_eq!(findstart_local_matches(&ws, &config).unwrap(), 7);
}

/// Test that a UTF-16 host's cursor and findstart offset agree
#[test]
fn test_findstart_utf16_host() {
    let config = with_encoding("utf-16");

    let ws = single_buffer(&["\u{fc} "], Cursor { line: 0, idx: 4 });
    assert_eq!(findstart_local_matches(&ws, &config).unwrap(), 4);

    let line = "\u{fc}\u{fc}\u{fc}ber \u{fc}berfu\u{df} tail";
    let ws = single_buffer(&[line], Cursor { line: 0, idx: 28 });
    let start = locate_start(&ws, &config).unwrap();
    assert_eq!(start.char_index, 7);
    assert_eq!(start.byte_offset, 14);
}

/// Test that findstart respects extra keyword characters and the cursor column
#[test]
fn test_findstart_with_keyword_chars_mid_line() {
    let ws = single_buffer(&["abba y:u@hu rest"], Cursor { line: 0, idx: 11 });
    let config = Config {
        keyword_chars: KeywordChars::Explicit(":@".to_string()),
        ..Config::default()
    };

    let start = locate_start(&ws, &config).unwrap();
    assert_eq!(start.char_index, 5);
    assert_eq!(start.byte_offset, 5);
}

/// Test case inference across the local search
#[test]
fn test_infercase_reshapes_matches() {
    let ws = single_buffer(&["priory Prize"], Cursor::default());
    let mut config = Config {
        ignore_case: 1,
        ..Config::default()
    };
    config.editor.ignorecase = true;
    config.editor.infercase = true;

    let result = complete_local_matches(&ws, &config, "PrI").unwrap();
    assert_eq!(words(&result), vec!["PrIory", "PrIze"]);
}
