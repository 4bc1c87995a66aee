//! All-buffer autocomplete.
//! Searches every open buffer, the current one first, then its
//! neighbours in the buffer list.

use crate::autocomplete::{AutoComplete, Origin};
use crate::buffer::Host;
use crate::config::Settings;
use crate::error::CompleteResult;
use crate::keyword::{Needle, infer_case_all};
use crate::order::all_buffer_lines;

pub struct AllBuffers {}
pub const ALL_BUFFERS: AllBuffers = AllBuffers {};

impl AutoComplete for AllBuffers {
    fn get_candidates(
        &self,
        host: &dyn Host,
        prefix: &str,
        settings: &Settings,
    ) -> CompleteResult<Vec<String>> {
        if prefix.chars().count() < settings.all_buffer_min_prefix_length {
            return Ok(Vec::new());
        }
        tracing::debug!(
            buffers = host.buffers().len(),
            current = host.current_buffer_index(),
            "all-buffer search"
        );
        let needle = Needle::new(prefix, &settings.keyword_class, settings.case)?;
        let found = needle.find_all(all_buffer_lines(host.buffers(), host.current_buffer_index()));
        if settings.infer_case {
            Ok(infer_case_all(prefix, found))
        } else {
            Ok(found)
        }
    }

    fn origin(&self, _settings: &Settings) -> Origin {
        Origin::AllBuffers
    }

    fn display_str(&self) -> &str {
        "all-buffers"
    }
}
