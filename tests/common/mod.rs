#![allow(dead_code)]

use reviewspell::checker::{Checker, CheckerKind};
use reviewspell::source::{ContentSource, FetchError, Location};
use reviewspell::{Checkers, Hit, ReviewContext};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Files of the repository under review plus files of other repositories.
#[derive(Default)]
pub struct MemorySource {
    pub local: HashMap<String, String>,
    pub remote: HashMap<String, String>,
    pub failing: HashSet<String>,
    pub requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.local.insert(path.to_string(), content.to_string());
        self
    }

    /// `key` is `owner/repo@path`.
    pub fn with_remote(mut self, key: &str, content: &str) -> Self {
        self.remote.insert(key.to_string(), content.to_string());
        self
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }
}

impl ContentSource for MemorySource {
    fn fetch(&self, path: &str, location: &Location<'_>) -> Result<Option<String>, FetchError> {
        let key = match location.repo {
            Some(repo) => format!("{}@{}", repo, path),
            None => path.to_string(),
        };
        self.requests.lock().unwrap().push(key.clone());

        if self.failing.contains(&key) {
            return Err(FetchError::Transport {
                path: key,
                message: "connection reset".to_string(),
            });
        }

        let files = if location.repo.is_some() {
            &self.remote
        } else {
            &self.local
        };
        Ok(files.get(&key).cloned())
    }
}

/// Shares a `MemorySource` between the context and the test body.
pub struct Shared(pub Arc<MemorySource>);

impl ContentSource for Shared {
    fn fetch(&self, path: &str, location: &Location<'_>) -> Result<Option<String>, FetchError> {
        self.0.fetch(path, location)
    }
}

/// Flags every whitespace-separated word that is not in `known`.
pub struct WordListChecker {
    pub kind: CheckerKind,
    pub known: HashSet<String>,
    pub seen: Mutex<Vec<String>>,
}

impl WordListChecker {
    pub fn new(kind: CheckerKind, known: &[&str]) -> Self {
        Self {
            kind,
            known: known.iter().map(|w| w.to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl Checker for WordListChecker {
    fn kind(&self) -> CheckerKind {
        self.kind
    }

    fn check(&self, text: &str, path: &str) -> anyhow::Result<Vec<Hit>> {
        self.seen.lock().unwrap().push(path.to_string());
        if path.contains("broken") {
            anyhow::bail!("checker crashed on {}", path);
        }

        let mut hits = Vec::new();
        let mut word = String::new();
        let mut start = 0;
        for (i, ch) in text.chars().chain(std::iter::once(' ')).enumerate() {
            if ch.is_whitespace() {
                if !word.is_empty() && !self.known.contains(&word) {
                    hits.push(Hit::new(word.clone(), start));
                }
                word.clear();
            } else {
                if word.is_empty() {
                    start = i;
                }
                word.push(ch);
            }
        }
        Ok(hits)
    }
}

/// Lets a test inspect a checker after handing it to `Checkers`.
pub struct SharedChecker(pub Arc<WordListChecker>);

impl Checker for SharedChecker {
    fn kind(&self) -> CheckerKind {
        self.0.kind()
    }

    fn check(&self, text: &str, path: &str) -> anyhow::Result<Vec<Hit>> {
        self.0.check(text, path)
    }
}

pub fn checkers(known: &[&str]) -> (Checkers, Arc<WordListChecker>, Arc<WordListChecker>) {
    let words = Arc::new(WordListChecker::new(CheckerKind::Words, known));
    let code = Arc::new(WordListChecker::new(CheckerKind::Code, known));
    let checkers = Checkers {
        words: Box::new(SharedChecker(words.clone())),
        code: Box::new(SharedChecker(code.clone())),
    };
    (checkers, words, code)
}

pub fn context(source: Arc<MemorySource>, changed: &[&str]) -> ReviewContext {
    ReviewContext {
        changed_files: changed.iter().map(|f| f.to_string()).collect(),
        repo: None,
        head_ref: Some("branch".to_string()),
        source: Box::new(Shared(source)),
    }
}
