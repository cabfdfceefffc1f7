use ignore::overrides::{Override, OverrideBuilder};
use std::collections::HashSet;

/// Matches repository-relative paths against exact paths and gitignore-style globs.
pub struct PathMatcher {
    exact: HashSet<String>,
    globs: Override,
}

impl PathMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut exact = HashSet::new();
        let mut builder = OverrideBuilder::new(".");

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            // Plain paths name exactly one file, relative to the repository root.
            if !is_glob(pattern) {
                exact.insert(normalize(pattern).to_string());
                continue;
            }
            if let Err(e) = builder.add(pattern) {
                log::warn!("Invalid glob '{}': {}", pattern, e);
            }
        }

        let globs = builder.build().unwrap_or_else(|e| {
            log::warn!("Failed to build globs: {}", e);
            Override::empty()
        });

        Self { exact, globs }
    }

    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize(path);
        self.exact.contains(path) || self.globs.matched(path, false).is_whitelist()
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches("./")
}
