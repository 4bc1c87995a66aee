//! Where the word being completed starts.

use crate::config::TextEncoding;
use crate::error::CompleteResult;
use crate::keyword::KeywordClass;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartColumn {
    /// Character index into the line.
    pub char_index: usize,
    /// Byte offset in the host's encoding.
    pub byte_offset: usize,
    /// Screen column, for hosts that place popups by cell.
    pub display_column: usize,
}

/// Character index where the trailing word of `line_start` begins, or
/// `None` when it does not end in a word character.
pub fn trailing_keyword_index(class: &KeywordClass, line_start: &str) -> CompleteResult<Option<usize>> {
    let found = class.trailing_pattern()?.find(line_start);
    Ok(found.map(|m| line_start[..m.start()].chars().count()))
}

/// Character index the completion replaces from. Falls back to the end of
/// `line_start`, which is where the cursor sits.
pub fn starting_column_index(class: &KeywordClass, line_start: &str) -> CompleteResult<usize> {
    Ok(trailing_keyword_index(class, line_start)?.unwrap_or_else(|| line_start.chars().count()))
}

fn char_prefix(line_start: &str, column_index: usize) -> &str {
    let end = line_start
        .char_indices()
        .nth(column_index)
        .map(|(i, _)| i)
        .unwrap_or(line_start.len());
    &line_start[..end]
}

/// Byte length of the first `column_index` characters once encoded.
pub fn translate_to_byte_index(line_start: &str, column_index: usize, encoding: TextEncoding) -> usize {
    encoding.encoded_len(char_prefix(line_start, column_index))
}

pub fn locate(
    class: &KeywordClass,
    line_start: &str,
    encoding: TextEncoding,
) -> CompleteResult<StartColumn> {
    let char_index = starting_column_index(class, line_start)?;
    let before = char_prefix(line_start, char_index);
    Ok(StartColumn {
        char_index,
        byte_offset: encoding.encoded_len(before),
        display_column: before.width(),
    })
}
