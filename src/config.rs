use crate::checker::CodeSpellSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Options a caller passes to one spellcheck run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellcheckOptions {
    /// Shared settings file, `owner/repo@path`.
    #[serde(default)]
    pub settings: Option<String>,

    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub ignore_files: Vec<String>,

    /// Globs selecting files for the code checker.
    #[serde(default)]
    pub code_spell_check: Vec<String>,

    #[serde(default)]
    pub code_spell_settings: Option<CodeSpellSettings>,
}

impl SpellcheckOptions {
    /// True when the caller configured nothing at all.
    pub fn is_empty(&self) -> bool {
        self.settings.is_none()
            && self.ignore.is_empty()
            && self.ignore_files.is_empty()
            && self.code_spell_check.is_empty()
            && self.code_spell_settings.is_none()
    }

    /// Lists are appended; `other`'s settings reference wins when set.
    pub fn merge(mut self, other: Self) -> Self {
        if other.settings.is_some() {
            self.settings = other.settings;
        }
        self.ignore.extend(other.ignore);
        self.ignore_files.extend(other.ignore_files);
        self.code_spell_check.extend(other.code_spell_check);
        self.code_spell_settings = match (self.code_spell_settings, other.code_spell_settings) {
            (Some(base), Some(over)) => Some(base.merge(over)),
            (base, over) => over.or(base),
        };
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,

    /// Word list or FST dictionary to use instead of the installed one.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub options: SpellcheckOptions,
}

fn default_language() -> String {
    "en_US".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            options: SpellcheckOptions::default(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = ".reviewspell.toml";

    /// Load configuration with priority: CLI args > config file > defaults.
    ///
    /// An explicit `config_path` must exist; the default `.reviewspell.toml`
    /// under `root` is optional.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        language: Option<String>,
        dictionary: Option<PathBuf>,
        cli_options: SpellcheckOptions,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = root.join(Self::FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(language) = language {
            config.language = language;
        }
        if let Some(dictionary) = dictionary {
            config.dictionary = Some(dictionary);
        }
        config.options = config.options.merge(cli_options);

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "reviewspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
