//! Settings documents come in two historical shapes. The legacy shape names
//! its file list `whitelistFiles`; the current one calls it `ignoreFiles`.
//! Both are read once and folded into [`NormalizedSettings`].

use crate::filter::PATTERN_SENTINEL;
use serde::Deserialize;
use serde_json::Value;

const LEGACY_FILES_KEY: &str = "whitelistFiles";
const CURRENT_FILES_KEY: &str = "ignoreFiles";

#[derive(Debug, Default, Deserialize)]
struct LegacySettings {
    #[serde(default)]
    ignore: Option<Vec<String>>,
    #[serde(default, rename = "cSpell.words")]
    cspell_words: Option<Vec<String>>,
    #[serde(default, rename = "whitelistFiles")]
    whitelist_files: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentSettings {
    #[serde(default)]
    ignore: Option<Vec<String>>,
    #[serde(default, rename = "cSpell.words")]
    cspell_words: Option<Vec<String>>,
    #[serde(default, rename = "ignoreFiles")]
    ignore_files: Vec<String>,
}

#[derive(Debug)]
enum SettingsDocument {
    Legacy(LegacySettings),
    Current(CurrentSettings),
}

impl SettingsDocument {
    fn parse(content: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Settings document is not valid JSON: {}", e);
                return None;
            }
        };

        let object = value.as_object()?;
        // `ignoreFiles` wins when a document carries both keys.
        let legacy = !object.contains_key(CURRENT_FILES_KEY) && object.contains_key(LEGACY_FILES_KEY);

        let parsed = if legacy {
            serde_json::from_value(value).map(SettingsDocument::Legacy)
        } else {
            serde_json::from_value(value).map(SettingsDocument::Current)
        };

        match parsed {
            Ok(document) => Some(document),
            Err(e) => {
                log::debug!("Settings document has an unexpected shape: {}", e);
                None
            }
        }
    }

    fn into_normalized(self) -> NormalizedSettings {
        let (ignore, cspell_words, ignore_files) = match self {
            SettingsDocument::Legacy(s) => (s.ignore, s.cspell_words, s.whitelist_files),
            SettingsDocument::Current(s) => (s.ignore, s.cspell_words, s.ignore_files),
        };

        let words = match ignore {
            Some(words) if !words.is_empty() => words,
            _ => cspell_words.unwrap_or_default(),
        };

        NormalizedSettings {
            ignore: words.iter().map(|w| fold_case(w)).collect(),
            ignore_files,
        }
    }
}

/// The canonical shape every settings document is reduced to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSettings {
    pub ignore: Vec<String>,
    pub ignore_files: Vec<String>,
}

impl NormalizedSettings {
    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.ignore_files.is_empty()
    }
}

/// Normalize raw settings content. Missing or malformed input yields empty
/// settings; this never fails.
pub fn normalize(content: Option<&str>) -> NormalizedSettings {
    match content.map(str::trim) {
        Some(text) if !text.is_empty() => SettingsDocument::parse(text)
            .map(SettingsDocument::into_normalized)
            .unwrap_or_default(),
        _ => NormalizedSettings::default(),
    }
}

// Patterns keep their case; they are matched case-sensitively.
fn fold_case(word: &str) -> String {
    if word.starts_with(PATTERN_SENTINEL) {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}
