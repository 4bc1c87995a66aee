//! Completion sources. Each one scans its own haystack for words starting
//! with the typed prefix and hands them back in scan order.

use crate::buffer::Host;
use crate::config::Settings;
use crate::error::CompleteResult;
use serde::Serialize;

pub trait AutoComplete {
    // Candidates for `prefix`, in the order they were found. No sorting
    // and no de-duplication happens afterwards.
    fn get_candidates(
        &self,
        host: &dyn Host,
        prefix: &str,
        settings: &Settings,
    ) -> CompleteResult<Vec<String>>;
    fn origin(&self, settings: &Settings) -> Origin;
    fn display_str(&self) -> &str;
}

/// Which search produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Local,
    WholeFile,
    AllBuffers,
    Dictionary,
}

impl Origin {
    pub fn note(self, settings: &Settings) -> &str {
        let notes = &settings.origin_notes;
        match self {
            Origin::Local => notes.local.as_str(),
            Origin::WholeFile => notes.whole_file.as_str(),
            Origin::AllBuffers => notes.all_buffers.as_str(),
            Origin::Dictionary => notes.dictionary.as_str(),
        }
    }
}

/// One completion item as the host receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

pub fn produce_result_value(matches: Vec<String>, origin_note: &str, settings: &Settings) -> Vec<MatchResult> {
    matches
        .into_iter()
        .map(|word| MatchResult {
            word,
            menu: settings.show_origin_note.then(|| origin_note.to_string()),
        })
        .collect()
}

pub fn complete_with(
    engine: &dyn AutoComplete,
    host: &dyn Host,
    prefix: &str,
    settings: &Settings,
) -> CompleteResult<Vec<MatchResult>> {
    let found = engine.get_candidates(host, prefix, settings)?;
    tracing::debug!(source = engine.display_str(), prefix, count = found.len(), "completion done");
    let origin = engine.origin(settings);
    Ok(produce_result_value(found, origin.note(settings), settings))
}

pub mod local;
pub use local::*;

pub mod buffers;
pub use buffers::*;

pub mod dictionary;
pub use dictionary::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Local,
    AllBuffers,
    Dictionary,
}

pub fn get_autocomplete_engine(source: Source) -> Box<dyn AutoComplete> {
    match source {
        Source::Local => Box::new(LOCAL),
        Source::AllBuffers => Box::new(ALL_BUFFERS),
        Source::Dictionary => Box::new(DICTIONARY),
    }
}
