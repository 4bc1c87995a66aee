//! Dictionary autocomplete.
//! Only words at the start of a dictionary line are offered; the word
//! boundary rule of the buffer searches does not apply here.

use crate::autocomplete::{AutoComplete, Origin};
use crate::buffer::Host;
use crate::config::Settings;
use crate::error::CompleteResult;
use crate::keyword::infer_case_all;
use regex::RegexBuilder;
use std::{fs, io, path::Path};

pub struct Dictionary {}
pub const DICTIONARY: Dictionary = Dictionary {};

pub fn read_file_contents(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

impl AutoComplete for Dictionary {
    fn get_candidates(
        &self,
        host: &dyn Host,
        prefix: &str,
        settings: &Settings,
    ) -> CompleteResult<Vec<String>> {
        let Some(path) = settings
            .dictionary
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
        else {
            return Ok(Vec::new());
        };

        let needle = RegexBuilder::new(&format!(r"^{}\w+", regex::escape(prefix)))
            .multi_line(true)
            .case_insensitive(settings.dictionary_case.ignores_case())
            .build()?;

        let haystack = match read_file_contents(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "dictionary unreadable");
                host.report_error(&format!("Error reading dictionary: {err}"));
                String::new()
            }
        };

        let found: Vec<String> = needle
            .find_iter(&haystack)
            .map(|m| m.as_str().to_string())
            .collect();
        if settings.infer_case {
            Ok(infer_case_all(prefix, found))
        } else {
            Ok(found)
        }
    }

    fn origin(&self, _settings: &Settings) -> Origin {
        Origin::Dictionary
    }

    fn display_str(&self) -> &str {
        "dictionary"
    }
}
