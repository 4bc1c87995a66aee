//! Word characters and prefix matching.
//! A word is a maximal run of letters, digits, underscores and any
//! configured extra characters.

use crate::config::CaseMode;
use crate::error::CompleteResult;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordClass {
    extra: String,
}

impl KeywordClass {
    pub fn new(extra: &str) -> Self {
        KeywordClass {
            extra: extra.to_string(),
        }
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Body of a regex character class matching one word character.
    fn class_body(&self) -> String {
        let mut body = String::from(r"\w");
        for ch in self.extra.chars() {
            body.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
        }
        body
    }

    /// Maximal runs of word characters.
    pub fn word_pattern(&self) -> CompleteResult<Regex> {
        Ok(Regex::new(&format!("[{}]+", self.class_body()))?)
    }

    /// A run of word characters ending the text.
    pub fn trailing_pattern(&self) -> CompleteResult<Regex> {
        Ok(Regex::new(&format!("[{}]+$", self.class_body()))?)
    }
}

/// Pull the single punctuation characters out of an editor keyword spec
/// such as `@,48-57,_,192-255`.
pub fn extra_chars_from_keyword_spec(spec: &str) -> String {
    spec.split(',')
        .filter_map(|part| {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_punctuation() => Some(c),
                _ => None,
            }
        })
        .collect()
}

/// Finds words starting with a typed prefix.
pub struct Needle {
    words: Regex,
    prefix: Regex,
}

impl Needle {
    pub fn new(prefix: &str, class: &KeywordClass, case: CaseMode) -> CompleteResult<Self> {
        let prefix = RegexBuilder::new(&format!("^{}", regex::escape(prefix)))
            .case_insensitive(case.ignores_case())
            .build()?;
        Ok(Needle {
            words: class.word_pattern()?,
            prefix,
        })
    }

    /// Words in `line` that begin with the prefix and continue past it,
    /// left to right.
    pub fn find_iter<'l>(&'l self, line: &'l str) -> impl Iterator<Item = &'l str> + 'l {
        self.words.find_iter(line).filter_map(move |word| {
            let word = word.as_str();
            match self.prefix.find(word) {
                Some(m) if m.end() < word.len() => Some(word),
                _ => None,
            }
        })
    }

    pub fn find_all<'l, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut found = Vec::new();
        for line in lines {
            found.extend(self.find_iter(line).map(str::to_string));
        }
        found
    }
}

/// Replace the first `prefix`-length characters of `word` with `prefix`.
pub fn infer_case(prefix: &str, word: &str) -> String {
    let skip = prefix.chars().count();
    let mut inferred = String::with_capacity(word.len());
    inferred.push_str(prefix);
    inferred.extend(word.chars().skip(skip));
    inferred
}

pub fn infer_case_all(prefix: &str, words: Vec<String>) -> Vec<String> {
    words.iter().map(|w| infer_case(prefix, w)).collect()
}
