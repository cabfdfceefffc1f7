use super::{is_known, CharOffsets, Checker, CheckerKind, Dictionary};
use crate::{parser, Hit};
use anyhow::Result;
use std::sync::Arc;

/// Checks the prose of markdown documents against a dictionary.
pub struct WordChecker {
    dictionary: Arc<Dictionary>,
    ignore_numbers: bool,
    ignore_acronyms: bool,
}

impl WordChecker {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            ignore_numbers: true,
            ignore_acronyms: true,
        }
    }

    pub fn ignore_numbers(mut self, ignore: bool) -> Self {
        self.ignore_numbers = ignore;
        self
    }

    pub fn ignore_acronyms(mut self, ignore: bool) -> Self {
        self.ignore_acronyms = ignore;
        self
    }

    fn is_misspelled(&self, word: &str) -> bool {
        if self.ignore_numbers && word.chars().any(|c| c.is_numeric()) {
            return false;
        }

        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
        if self.ignore_acronyms && letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
            return false;
        }

        !is_known(&self.dictionary, word)
    }
}

impl Checker for WordChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::Words
    }

    fn check(&self, text: &str, _path: &str) -> Result<Vec<Hit>> {
        let offsets = CharOffsets::new(text);

        Ok(parser::markdown::parse(text)
            .into_iter()
            .filter(|span| self.is_misspelled(&span.text))
            .map(|span| Hit::new(span.text, offsets.char_index(span.start)))
            .collect())
    }
}
