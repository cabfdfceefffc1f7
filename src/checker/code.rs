use super::tokenizer::{extract_words, split_compound_word};
use super::{is_known, CharOffsets, Checker, CheckerKind, Dictionary};
use crate::parser::{source_code, SourceLang};
use crate::Hit;
use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

fn default_min_word_length() -> usize {
    4
}

/// Overrides for the code checker, given as `codeSpellSettings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSpellSettings {
    /// Extra words to accept.
    #[serde(default)]
    pub words: Vec<String>,

    /// Regexes whose matches in the file are not checked.
    #[serde(default, rename = "ignoreRegExpList")]
    pub ignore_regexp_list: Vec<String>,

    /// Words (after compound splitting) shorter than this are skipped.
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
}

impl Default for CodeSpellSettings {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            ignore_regexp_list: Vec::new(),
            min_word_length: default_min_word_length(),
        }
    }
}

impl CodeSpellSettings {
    pub fn merge(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self.ignore_regexp_list.extend(other.ignore_regexp_list);
        if other.min_word_length != default_min_word_length() {
            self.min_word_length = other.min_word_length;
        }
        self
    }
}

/// Checks comments and string literals of source files, splitting
/// identifiers like `getUserName` into their parts.
pub struct CodeChecker {
    dictionary: Arc<Dictionary>,
    extra_words: HashSet<String>,
    ignore_regexps: Vec<Regex>,
    min_word_length: usize,
}

impl CodeChecker {
    pub fn new(dictionary: Arc<Dictionary>, settings: CodeSpellSettings) -> Self {
        let mut ignore_regexps = Vec::new();
        for pattern in &settings.ignore_regexp_list {
            match Regex::new(pattern) {
                Ok(re) => ignore_regexps.push(re),
                Err(e) => log::warn!("Invalid ignoreRegExpList pattern '{}': {}", pattern, e),
            }
        }

        Self {
            dictionary,
            extra_words: settings.words.iter().map(|w| w.to_lowercase()).collect(),
            ignore_regexps,
            min_word_length: settings.min_word_length,
        }
    }

    fn is_misspelled(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_length {
            return false;
        }
        if self.extra_words.contains(&word.to_lowercase()) {
            return false;
        }
        !is_known(&self.dictionary, word)
    }

    /// Byte ranges of the document worth checking for this file type.
    fn regions(text: &str, path: &str) -> Vec<Range<usize>> {
        match SourceLang::from_path(path) {
            Some(lang) => source_code::regions(text, lang),
            None => vec![0..text.len()],
        }
    }
}

impl Checker for CodeChecker {
    fn kind(&self) -> CheckerKind {
        CheckerKind::Code
    }

    fn check(&self, text: &str, path: &str) -> Result<Vec<Hit>> {
        let offsets = CharOffsets::new(text);
        let masked: Vec<Range<usize>> = self
            .ignore_regexps
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.range()))
            .collect();

        let mut hits = Vec::new();
        for region in Self::regions(text, path) {
            for (word_start, word) in extract_words(&text[region.clone()]) {
                for (part_start, part) in split_compound_word(word) {
                    let start = region.start + word_start + part_start;
                    if masked.iter().any(|m| m.contains(&start)) {
                        continue;
                    }
                    if self.is_misspelled(part) {
                        hits.push(Hit::new(part, offsets.char_index(start)));
                    }
                }
            }
        }

        hits.sort_by_key(|hit| hit.offset);
        hits.dedup();
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(words: &[&str], settings: CodeSpellSettings) -> CodeChecker {
        CodeChecker::new(Arc::new(Dictionary::from_words(words).unwrap()), settings)
    }

    fn words(hits: Vec<Hit>) -> Vec<String> {
        hits.into_iter().map(|h| h.word).collect()
    }

    #[test]
    fn test_short_words_are_skipped() {
        let hits = checker(&[], CodeSpellSettings::default())
            .check("i aslo raed", "filename.md")
            .unwrap();
        assert_eq!(hits, vec![Hit::new("aslo", 2), Hit::new("raed", 7)]);
    }

    #[test]
    fn test_comments_and_strings_only() {
        let text = "fn mian() {\n    // the vaule is wrong\n    let x = \"some mesage\";\n}\n";
        let hits = checker(&["the", "value", "wrong", "some", "message"], CodeSpellSettings::default())
            .check(text, "src/main.rs")
            .unwrap();
        assert_eq!(words(hits.clone()), vec!["vaule", "mesage"]);

        let chars: Vec<char> = text.chars().collect();
        for hit in hits {
            let found: String = chars[hit.offset..hit.offset + hit.char_len()].iter().collect();
            assert_eq!(found, hit.word);
        }
    }

    #[test]
    fn test_compound_identifiers_in_comments() {
        let text = "// calls getUserNmae before saving\n";
        let hits = checker(&["calls", "user", "before", "saving"], CodeSpellSettings::default())
            .check(text, "app.ts")
            .unwrap();
        assert_eq!(words(hits), vec!["Nmae"]);
    }

    #[test]
    fn test_settings_words_and_regexps() {
        let settings = CodeSpellSettings {
            words: vec!["Tokio".to_string()],
            ignore_regexp_list: vec![r"0x[0-9a-zA-Z]+".to_string(), "(".to_string()],
            min_word_length: 3,
        };
        let text = "# tokio runs on 0xdeadbeef nodes with foo\n";
        let hits = checker(&["runs", "on", "nodes", "with"], settings)
            .check(text, "deploy.sh")
            .unwrap();
        assert_eq!(words(hits), vec!["foo"]);
    }

    #[test]
    fn test_settings_merge() {
        let base = CodeSpellSettings {
            words: vec!["tokio".to_string()],
            ..Default::default()
        };
        let over = CodeSpellSettings {
            words: vec!["serde".to_string()],
            min_word_length: 2,
            ..Default::default()
        };
        let merged = base.merge(over);
        assert_eq!(merged.words, vec!["tokio".to_string(), "serde".to_string()]);
        assert_eq!(merged.min_word_length, 2);
    }

    #[test]
    fn test_settings_from_json() {
        let settings: CodeSpellSettings =
            serde_json::from_str(r#"{"words": ["peril"], "ignoreRegExpList": ["\\d+"]}"#).unwrap();
        assert_eq!(settings.words, vec!["peril".to_string()]);
        assert_eq!(settings.ignore_regexp_list, vec![r"\d+".to_string()]);
        assert_eq!(settings.min_word_length, 4);
    }
}
