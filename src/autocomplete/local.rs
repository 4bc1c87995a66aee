//! Local autocomplete.
//! Searches a window of lines around the cursor in the current buffer.

use crate::autocomplete::{AutoComplete, Origin};
use crate::buffer::Host;
use crate::config::Settings;
use crate::error::CompleteResult;
use crate::keyword::{Needle, infer_case_all};
use crate::order::{LineRanges, ordered_lines};

pub struct Local {}
pub const LOCAL: Local = Local {};

impl AutoComplete for Local {
    fn get_candidates(
        &self,
        host: &dyn Host,
        prefix: &str,
        settings: &Settings,
    ) -> CompleteResult<Vec<String>> {
        if prefix.chars().count() < settings.local_min_prefix_length {
            return Ok(Vec::new());
        }
        let buffer = host.current_buffer();
        let ranges = LineRanges::select(host.cursor().line, buffer.line_count(), settings.window);
        tracing::debug!(
            first = ranges.first(),
            current = ranges.current,
            last = ranges.last(),
            order = ?settings.order,
            "local search window"
        );

        let needle = Needle::new(prefix, &settings.keyword_class, settings.case)?;
        let mut found = needle.find_all(ordered_lines(buffer, &ranges, settings.order));
        if settings.infer_case {
            found = infer_case_all(prefix, found);
        }

        if settings.debug {
            found.push((ranges.first() + 1).to_string());
            found.push((ranges.current + 1).to_string());
            found.push((ranges.last() + 1).to_string());
            found.push(prefix.to_string());
            let haystack: Vec<&str> = ordered_lines(buffer, &ranges, settings.order).collect();
            found.push(haystack.join("\n"));
        }
        Ok(found)
    }

    fn origin(&self, settings: &Settings) -> Origin {
        if settings.window.is_whole_file() {
            Origin::WholeFile
        } else {
            Origin::Local
        }
    }

    fn display_str(&self) -> &str {
        "local"
    }
}
