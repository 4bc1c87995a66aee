pub mod error;

pub use error::{ConfigError, ConfigResult};

use crate::error::{CompleteError, CompleteResult};
use crate::keyword::KeywordClass;
use crate::order::{MatchOrder, SearchWindow};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Sentinel asking for the extra keyword characters to be taken from the
/// editor's own keyword specification.
pub const SPECIAL_VALUE_SELECT_VIM_KEYWORDS: &str = "&iskeyword";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum KeywordChars {
    Explicit(String),
    #[default]
    DeriveFromHost,
}

impl From<String> for KeywordChars {
    fn from(s: String) -> Self {
        if s == SPECIAL_VALUE_SELECT_VIM_KEYWORDS {
            KeywordChars::DeriveFromHost
        } else {
            KeywordChars::Explicit(s)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    MatchCase,
    IgnoreCase,
}

impl TryFrom<i64> for CaseMode {
    type Error = CompleteError;

    fn try_from(selector: i64) -> CompleteResult<Self> {
        match selector {
            0 => Ok(CaseMode::MatchCase),
            1 => Ok(CaseMode::IgnoreCase),
            n => Err(CompleteError::InvalidCaseSelector(n)),
        }
    }
}

impl CaseMode {
    pub fn ignores_case(self) -> bool {
        self == CaseMode::IgnoreCase
    }
}

/// How the host counts bytes in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Utf16,
}

impl TextEncoding {
    pub fn from_name(name: &str) -> CompleteResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "utf-16" | "utf16" | "utf-16le" | "ucs-2" => Ok(TextEncoding::Utf16),
            _ => Err(CompleteError::UnknownEncoding(name.to_string())),
        }
    }

    pub fn char_len(self, c: char) -> usize {
        match self {
            TextEncoding::Utf8 => c.len_utf8(),
            TextEncoding::Latin1 => 1,
            TextEncoding::Utf16 => c.len_utf16() * 2,
        }
    }

    /// Number of bytes `s` takes up once encoded.
    pub fn encoded_len(self, s: &str) -> usize {
        match self {
            TextEncoding::Utf8 => s.len(),
            _ => s.chars().map(|c| self.char_len(c)).sum(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OriginNotes {
    pub local: String,
    pub whole_file: String,
    pub all_buffers: String,
    pub dictionary: String,
}

impl Default for OriginNotes {
    fn default() -> Self {
        Self {
            local: "<< localcomplete".to_string(),
            whole_file: "<< whole-file".to_string(),
            all_buffers: "<+ all-buffers".to_string(),
            dictionary: "<* dict".to_string(),
        }
    }
}

/// Options owned by the editor rather than by this plugin.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EditorOptions {
    pub ignorecase: bool,
    pub infercase: bool,
    pub iskeyword: String,
    pub encoding: String,
    pub dictionary: Option<PathBuf>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            ignorecase: false,
            infercase: false,
            iskeyword: "@,48-57,_,192-255".to_string(),
            encoding: "utf-8".to_string(),
            dictionary: None,
        }
    }
}

/// Raw configuration as the host hands it over. Selectors stay integers
/// until [`Config::resolve`] checks them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Lines above the cursor to search, negative for all of them.
    pub lines_above: i64,
    /// Lines below the cursor to search, negative for all of them.
    pub lines_below: i64,
    pub match_result_order: i64,
    pub ignore_case: i64,
    pub dictionary_ignore_case: i64,
    pub local_min_prefix_length: usize,
    pub all_buffer_min_prefix_length: usize,
    pub keyword_chars: KeywordChars,
    pub show_origin_note: bool,
    pub origin_notes: OriginNotes,
    pub editor: EditorOptions,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lines_above: -1,
            lines_below: -1,
            match_result_order: 0,
            ignore_case: 0,
            dictionary_ignore_case: 0,
            local_min_prefix_length: 1,
            all_buffer_min_prefix_length: 1,
            keyword_chars: KeywordChars::default(),
            show_origin_note: true,
            origin_notes: OriginNotes::default(),
            editor: EditorOptions::default(),
            debug: false,
        }
    }
}

/// Typed view of [`Config`] for a single request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub window: SearchWindow,
    pub order: MatchOrder,
    pub case: CaseMode,
    pub dictionary_case: CaseMode,
    pub local_min_prefix_length: usize,
    pub all_buffer_min_prefix_length: usize,
    pub keyword_class: KeywordClass,
    pub show_origin_note: bool,
    pub origin_notes: OriginNotes,
    /// Both the editor's ignorecase and infercase are on.
    pub infer_case: bool,
    pub encoding: TextEncoding,
    pub dictionary: Option<PathBuf>,
    pub debug: bool,
}

impl Config {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `~/.config/localcomplete/config.toml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()?;
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("localcomplete");
        path.push("config.toml");
        Some(path)
    }

    pub fn extra_keyword_chars(&self) -> String {
        match &self.keyword_chars {
            KeywordChars::Explicit(chars) => chars.clone(),
            KeywordChars::DeriveFromHost => {
                crate::keyword::extra_chars_from_keyword_spec(&self.editor.iskeyword)
            }
        }
    }

    pub fn resolve(&self) -> CompleteResult<Settings> {
        Ok(Settings {
            window: SearchWindow {
                above: self.lines_above,
                below: self.lines_below,
            },
            order: MatchOrder::try_from(self.match_result_order)?,
            case: CaseMode::try_from(self.ignore_case)?,
            dictionary_case: CaseMode::try_from(self.dictionary_ignore_case)?,
            local_min_prefix_length: self.local_min_prefix_length,
            all_buffer_min_prefix_length: self.all_buffer_min_prefix_length,
            keyword_class: KeywordClass::new(&self.extra_keyword_chars()),
            show_origin_note: self.show_origin_note,
            origin_notes: self.origin_notes.clone(),
            infer_case: self.editor.ignorecase && self.editor.infercase,
            encoding: TextEncoding::from_name(&self.editor.encoding)?,
            dictionary: self.editor.dictionary.clone(),
            debug: self.debug,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
