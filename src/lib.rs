pub mod checker;
pub mod cli;
pub mod config;
pub mod context;
pub mod filter;
pub mod parser;
pub mod paths;
pub mod report;
pub mod review;
pub mod settings;
pub mod source;

pub use checker::{Checker, CheckerKind};
pub use config::{Config, SpellcheckOptions};
pub use review::{run, Checkers, ReviewContext};
pub use settings::IgnorePolicy;

use serde::Serialize;

/// A single flagged word as reported by a checker.
///
/// `offset` is a 0-based character index into the text that was checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub word: String,
    pub offset: usize,
}

impl Hit {
    pub fn new(word: impl Into<String>, offset: usize) -> Self {
        Self {
            word: word.into(),
            offset,
        }
    }

    /// Span length in characters.
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextualizedHit {
    pub excerpt_markup: String,
    pub line_number: usize,
}
