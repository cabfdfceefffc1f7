use crate::Hit;
use regex::Regex;
use std::collections::HashSet;

/// Marks an ignore entry as a regular expression rather than a word.
pub const PATTERN_SENTINEL: char = '/';

/// One entry of an `ignore` list, classified once when the policy is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreEntry {
    Literal(String),
    Pattern(String),
}

impl IgnoreEntry {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(PATTERN_SENTINEL) {
            Some(pattern) => IgnoreEntry::Pattern(pattern.to_string()),
            None => IgnoreEntry::Literal(raw.to_lowercase()),
        }
    }
}

/// Drops hits the ignore policy says should not be reported.
pub struct ErrorFilter {
    words: HashSet<String>,
    patterns: Vec<Regex>,
}

impl ErrorFilter {
    /// `words` must already be lowercase. Patterns that fail to compile are
    /// logged and skipped.
    pub fn new(words: HashSet<String>, patterns: &[String]) -> Self {
        let mut compiled = Vec::new();
        for pattern in patterns {
            match Regex::new(pattern) {
                Ok(re) => compiled.push(re),
                Err(e) => log::warn!("Invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Self {
            words,
            patterns: compiled,
        }
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        if self.words.contains(&word.to_lowercase()) {
            return true;
        }

        self.patterns.iter().any(|re| re.is_match(word))
    }

    /// Keep the hits that survive the policy, in their original order.
    pub fn filter(&self, hits: &[Hit]) -> Vec<Hit> {
        hits.iter()
            .filter(|hit| !self.is_ignored(&hit.word))
            .cloned()
            .collect()
    }
}
