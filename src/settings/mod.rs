pub mod document;
pub mod reference;

pub use document::{normalize, NormalizedSettings};
pub use reference::{SettingsReference, SettingsReferenceError};

use crate::filter::{ErrorFilter, IgnoreEntry};
use crate::report::ReportSink;
use crate::source::Location;
use crate::{ReviewContext, SpellcheckOptions};
use std::collections::HashSet;

/// Well-known settings file read from the root of the repository under review.
pub const LOCAL_SETTINGS_FILE: &str = "spellcheck.json";

/// Everything that decides which hits and files are skipped in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePolicy {
    pub ignore_words: HashSet<String>,
    pub ignore_patterns: Vec<String>,
    pub ignore_files: Vec<String>,
    pub has_local_settings: bool,
    pub global_settings: Option<SettingsReference>,
}

impl IgnorePolicy {
    /// Build a policy from raw `ignore` entries and ignore-file entries.
    pub fn from_entries<I, F>(ignore: I, ignore_files: F) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut policy = IgnorePolicy::default();

        for raw in ignore {
            match IgnoreEntry::parse(raw.as_ref()) {
                IgnoreEntry::Literal(word) => {
                    policy.ignore_words.insert(word);
                }
                IgnoreEntry::Pattern(pattern) => {
                    if !policy.ignore_patterns.contains(&pattern) {
                        policy.ignore_patterns.push(pattern);
                    }
                }
            }
        }

        for file in ignore_files {
            let file = file.into();
            if !policy.ignore_files.contains(&file) {
                policy.ignore_files.push(file);
            }
        }

        policy
    }

    pub fn error_filter(&self) -> ErrorFilter {
        ErrorFilter::new(self.ignore_words.clone(), &self.ignore_patterns)
    }
}

/// Merge global settings, local settings and inline options into one policy.
///
/// Problems with an explicitly referenced global settings file are reported
/// to `sink` as warnings; the run continues with whatever was resolved.
pub fn resolve(
    context: &ReviewContext,
    options: &SpellcheckOptions,
    sink: &mut dyn ReportSink,
) -> IgnorePolicy {
    let mut ignore: Vec<String> = Vec::new();
    let mut ignore_files: Vec<String> = Vec::new();
    let mut global_settings = None;

    if let Some(raw) = options.settings.as_deref() {
        match raw.parse::<SettingsReference>() {
            Ok(reference) => {
                let global = fetch_global(context, &reference, sink);
                ignore.extend(global.ignore);
                ignore_files.extend(global.ignore_files);
                global_settings = Some(reference);
            }
            Err(e) => sink.warn(&format!("`reviewspell`: {}", e)),
        }
    }

    let location = Location {
        repo: None,
        git_ref: context.head_ref.as_deref(),
    };
    let local_content = match context.source.fetch(LOCAL_SETTINGS_FILE, &location) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("Treating {} as absent: {}", LOCAL_SETTINGS_FILE, e);
            None
        }
    };
    let has_local_settings = local_content
        .as_deref()
        .is_some_and(|content| !content.trim().is_empty());
    let local = normalize(local_content.as_deref());
    ignore.extend(local.ignore);
    ignore_files.extend(local.ignore_files);

    ignore.extend(options.ignore.iter().cloned());
    ignore_files.extend(options.ignore_files.iter().cloned());

    let mut policy = IgnorePolicy::from_entries(ignore, ignore_files);
    policy.has_local_settings = has_local_settings;
    policy.global_settings = global_settings;

    log::debug!(
        "Resolved ignore policy: {} words, {} patterns, {} files, local settings: {}",
        policy.ignore_words.len(),
        policy.ignore_patterns.len(),
        policy.ignore_files.len(),
        policy.has_local_settings
    );

    policy
}

fn fetch_global(
    context: &ReviewContext,
    reference: &SettingsReference,
    sink: &mut dyn ReportSink,
) -> NormalizedSettings {
    let location = Location {
        repo: Some(&reference.repo),
        git_ref: None,
    };

    match context.source.fetch(&reference.path, &location) {
        Ok(Some(content)) => {
            let settings = normalize(Some(&content));
            if settings.is_empty() {
                log::debug!("Global settings {} have nothing to ignore", reference);
            }
            settings
        }
        Ok(None) => {
            log::debug!("Global settings {} not found", reference);
            NormalizedSettings::default()
        }
        Err(e) => {
            sink.warn(&format!(
                "`reviewspell`: could not load settings from `{}`: {}",
                reference, e
            ));
            NormalizedSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_partitions_and_lowercases() {
        let policy = IgnorePolicy::from_entries(
            ["Danger", "/r.*d", "danger", "/r.*d"],
            ["a.md", "a.md", "b.md"],
        );

        assert_eq!(policy.ignore_words.len(), 1);
        assert!(policy.ignore_words.contains("danger"));
        assert_eq!(policy.ignore_patterns, vec!["r.*d".to_string()]);
        assert_eq!(policy.ignore_files, vec!["a.md".to_string(), "b.md".to_string()]);
        assert!(!policy.has_local_settings);
    }

    #[test]
    fn test_error_filter_uses_policy() {
        let policy = IgnorePolicy::from_entries(["HLELO", "/^Xx"], Vec::<String>::new());
        let filter = policy.error_filter();
        assert!(filter.is_ignored("hleLo"));
        assert!(filter.is_ignored("Xxyz"));
        assert!(!filter.is_ignored("xxyz"));
    }
}
