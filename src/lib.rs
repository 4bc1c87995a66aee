//! Word completion for text editors: scan buffer lines (or a dictionary
//! file) for words beginning with the typed prefix, and find the column
//! the completed word starts at.

pub mod autocomplete;
pub mod buffer;
pub mod config;
pub mod error;
pub mod findstart;
pub mod keyword;
pub mod logging;
pub mod order;

pub use autocomplete::{MatchResult, Origin, Source};
pub use buffer::{Buffer, Cursor, Host, Workspace};
pub use config::{Config, KeywordChars, Settings};
pub use error::{CompleteError, CompleteResult};
pub use findstart::StartColumn;

use autocomplete::{complete_with, get_autocomplete_engine};

/// Run one completion source for `prefix`. Configuration is resolved
/// afresh on every call.
pub fn complete(
    source: Source,
    host: &dyn Host,
    config: &Config,
    prefix: &str,
) -> CompleteResult<Vec<MatchResult>> {
    let settings = config.resolve()?;
    complete_with(get_autocomplete_engine(source).as_ref(), host, prefix, &settings)
}

/// Words around the cursor in the current buffer.
pub fn complete_local_matches(
    host: &dyn Host,
    config: &Config,
    prefix: &str,
) -> CompleteResult<Vec<MatchResult>> {
    complete(Source::Local, host, config, prefix)
}

/// Words in every open buffer.
pub fn complete_all_buffer_matches(
    host: &dyn Host,
    config: &Config,
    prefix: &str,
) -> CompleteResult<Vec<MatchResult>> {
    complete(Source::AllBuffers, host, config, prefix)
}

/// Words from the configured dictionary file.
pub fn complete_dictionary_matches(
    host: &dyn Host,
    config: &Config,
    prefix: &str,
) -> CompleteResult<Vec<MatchResult>> {
    complete(Source::Dictionary, host, config, prefix)
}

pub fn locate_start(host: &dyn Host, config: &Config) -> CompleteResult<StartColumn> {
    let settings = config.resolve()?;
    findstart::locate(
        &settings.keyword_class,
        host.line_up_to_cursor(settings.encoding),
        settings.encoding,
    )
}

/// Byte offset in the cursor line where the word being typed begins.
pub fn findstart_local_matches(host: &dyn Host, config: &Config) -> CompleteResult<usize> {
    Ok(locate_start(host, config)?.byte_offset)
}
