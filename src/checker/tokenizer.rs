use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // URLs and email addresses are never prose
    static ref UNCHECKABLE: Regex = Regex::new(
        r"(?:https?|ftp)://\S+|www\.\S+|[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    )
    .unwrap();
}

/// Split text into words with their byte offsets.
///
/// Words are Unicode word segments containing at least one letter, further
/// split on `.` so `config.toml` yields two words. URLs and email addresses
/// are skipped.
pub fn extract_words(text: &str) -> Vec<(usize, &str)> {
    let masked: Vec<Range<usize>> = UNCHECKABLE.find_iter(text).map(|m| m.range()).collect();

    let mut words = Vec::new();
    for (start, segment) in text.unicode_word_indices() {
        if masked.iter().any(|r| r.contains(&start)) {
            continue;
        }

        let mut offset = start;
        for part in segment.split('.') {
            if part.chars().any(char::is_alphabetic) {
                words.push((offset, part));
            }
            offset += part.len() + 1;
        }
    }

    words
}

/// Split camelCase, PascalCase, snake_case and kebab-case words into parts,
/// keeping the original casing and the byte offset of each part.
pub fn split_compound_word(word: &str) -> Vec<(usize, &str)> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start: Option<usize> = None;

    for (k, &(i, ch)) in chars.iter().enumerate() {
        if !ch.is_alphabetic() && ch != '\'' {
            if let Some(s) = start.take() {
                parts.push((s, &word[s..i]));
            }
            continue;
        }

        match start {
            None => start = Some(i),
            Some(s) => {
                let prev = chars[k - 1].1;
                let next_is_lower = chars.get(k + 1).is_some_and(|&(_, c)| c.is_lowercase());
                // "camelCase" -> "camel|Case", "HTTPServer" -> "HTTP|Server"
                let boundary = ch.is_uppercase()
                    && (prev.is_lowercase() || (prev.is_uppercase() && next_is_lower));
                if boundary {
                    parts.push((s, &word[s..i]));
                    start = Some(i);
                }
            }
        }
    }

    if let Some(s) = start {
        parts.push((s, &word[s..]));
    }

    parts
}
