use anyhow::{Context, Result};
use fst::Set;
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Bootstrap list used when no dictionary is installed.
const BASIC_WORDS: &str = "
a about above after again against all also am an and any are as at back be because been
before being below between both but by can could day did do does doing down during each
even few first for from further get give go good had has have he her here hers him his
how i if in into is it its just know like look make many me more most my new no nor not
now of off on once one only or other our out over own people same say see she should so
some such take than that the their them then there these they think this those through
time to too two under until up us use very want was way we well were what when where
which while who why will with work would year you your
add api app argument array async await boolean branch bug build cache callback change
changelog class cli code commit compile config configuration const debug default deploy
dependency directory docs documentation error example exception export false file fix
function import install integer key library license list method module null number
object option parameter path promise readme release repository request response return
run script server setting string test true type update url user value variable version
";

/// A set of known words, stored lowercase.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the installed dictionary for a language, falling back to the
    /// system word list and then to a small built-in list.
    pub fn load(language: &str) -> Result<Self> {
        if let Some(path) = Self::installed_path(language) {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        let system = Path::new(SYSTEM_WORD_LIST);
        if system.exists() {
            log::debug!("Using system word list {}", system.display());
            return Self::load_from_path(system);
        }

        log::warn!(
            "No dictionary installed for {}; using the built-in word list",
            language
        );
        Self::from_words(BASIC_WORDS.split_whitespace())
    }

    /// Load an FST dictionary (`.dict`/`.fst`) or a plain word list, one word per line.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let is_fst = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("dict") | Some("fst")
        );

        if is_fst {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;
            let set = Set::new(bytes)
                .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;
            return Ok(Self { set });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list: {}", path.display()))?;
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Build an in-memory dictionary from words in any order or casing.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        sorted.sort();
        sorted.dedup();

        let set = Set::from_iter(sorted).context("Failed to build dictionary")?;
        Ok(Self { set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn installed_path(language: &str) -> Option<PathBuf> {
        crate::config::Config::data_dir().map(|dir| dir.join(format!("{}.dict", language)))
    }
}
