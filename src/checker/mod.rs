pub mod code;
pub mod dictionary;
pub mod tokenizer;
pub mod words;

pub use code::{CodeChecker, CodeSpellSettings};
pub use dictionary::Dictionary;
pub use words::WordChecker;

use crate::Hit;
use anyhow::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerKind {
    /// Prose in markdown documents.
    Words,
    /// Comments and strings in files selected by code globs.
    Code,
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerKind::Words => write!(f, "words"),
            CheckerKind::Code => write!(f, "code"),
        }
    }
}

/// Finds suspicious words in a document.
///
/// Hits carry character offsets into `text` and come back in ascending
/// offset order.
pub trait Checker: Send + Sync {
    fn kind(&self) -> CheckerKind;
    fn check(&self, text: &str, path: &str) -> Result<Vec<Hit>>;
}

/// Converts byte offsets into character offsets for one document.
pub(crate) struct CharOffsets {
    starts: Vec<usize>,
}

impl CharOffsets {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(i, _)| i).collect(),
        }
    }

    pub(crate) fn char_index(&self, byte: usize) -> usize {
        self.starts.partition_point(|&start| start < byte)
    }
}

/// Dictionary lookup that tolerates case and a trailing possessive.
pub(crate) fn is_known(dictionary: &Dictionary, word: &str) -> bool {
    let lower = word.to_lowercase();
    if dictionary.contains(&lower) {
        return true;
    }

    let trimmed = lower.trim_matches(|c| c == '\'' || c == '’');
    if trimmed != lower && dictionary.contains(trimmed) {
        return true;
    }

    ["'s", "’s"].iter().any(|suffix| {
        trimmed
            .strip_suffix(suffix)
            .is_some_and(|stem| dictionary.contains(stem))
    })
}
