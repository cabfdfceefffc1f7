pub mod markdown;
pub mod source_code;

use std::path::Path;

/// Language families that differ in comment and string literal syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLang {
    /// Rust, C, C++, Java, Kotlin, Swift, C#
    CLike,
    Go,
    /// JavaScript and TypeScript, including JSX/TSX
    JavaScript,
    Python,
    /// Shell, Ruby, YAML, TOML and other `#`-comment languages
    Hash,
}

impl SourceLang {
    /// Detect the language family from a file extension. Files with no
    /// known syntax (markdown, plain text, data) return `None` and are
    /// checked as a whole.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();

        let lang = match ext.as_str() {
            "rs" | "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "hh" | "java" | "kt" | "kts"
            | "swift" | "cs" | "scala" => SourceLang::CLike,
            "go" => SourceLang::Go,
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" => SourceLang::JavaScript,
            "py" | "pyw" | "pyi" => SourceLang::Python,
            "sh" | "bash" | "zsh" | "rb" | "pl" | "yml" | "yaml" | "toml" | "r" => SourceLang::Hash,
            _ => return None,
        };
        Some(lang)
    }
}

/// A word found in a document. `start` is a byte offset into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub start: usize,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }
}
