use crate::parser::SourceLang;
use std::ops::Range;

/// Comment and string syntax of a language family.
struct Syntax {
    line_comment: &'static [u8],
    block_comment: Option<(&'static [u8], &'static [u8])>,
    single_quote_strings: bool,
    backtick_strings: bool,
    triple_quote_strings: bool,
}

const C_STYLE: Syntax = Syntax {
    line_comment: b"//",
    block_comment: Some((b"/*".as_slice(), b"*/".as_slice())),
    single_quote_strings: false,
    backtick_strings: false,
    triple_quote_strings: false,
};

fn syntax(lang: SourceLang) -> Syntax {
    match lang {
        SourceLang::Python => Syntax {
            line_comment: b"#",
            block_comment: None,
            single_quote_strings: true,
            backtick_strings: false,
            triple_quote_strings: true,
        },
        SourceLang::Hash => Syntax {
            line_comment: b"#",
            block_comment: None,
            single_quote_strings: true,
            ..C_STYLE
        },
        SourceLang::JavaScript => Syntax {
            single_quote_strings: true,
            backtick_strings: true,
            ..C_STYLE
        },
        SourceLang::Go => Syntax {
            backtick_strings: true,
            ..C_STYLE
        },
        // Single quotes are lifetimes or char literals here.
        SourceLang::CLike => C_STYLE,
    }
}

/// Byte ranges of comment bodies and string literal contents, in order.
pub fn regions(content: &str, lang: SourceLang) -> Vec<Range<usize>> {
    let syntax = syntax(lang);
    let bytes = content.as_bytes();
    let mut regions = Vec::new();
    let mut i = 0;

    // Markers are ASCII, so every range boundary lands on a char boundary.
    while i < bytes.len() {
        let rest = &bytes[i..];

        if rest.starts_with(syntax.line_comment) {
            let body = i + syntax.line_comment.len();
            let end = find(bytes, body, b"\n").unwrap_or(bytes.len());
            regions.push(body..end);
            i = end;
            continue;
        }

        if let Some((open, close)) = syntax.block_comment {
            if rest.starts_with(open) {
                let body = i + open.len();
                let end = find(bytes, body, close).unwrap_or(bytes.len());
                regions.push(body..end);
                i = (end + close.len()).min(bytes.len());
                continue;
            }
        }

        if syntax.triple_quote_strings && (rest.starts_with(b"\"\"\"") || rest.starts_with(b"'''")) {
            let quote = &rest[..3];
            let body = i + 3;
            let end = find(bytes, body, quote).unwrap_or(bytes.len());
            regions.push(body..end);
            i = (end + 3).min(bytes.len());
            continue;
        }

        let quote = bytes[i];
        let is_string = quote == b'"'
            || (quote == b'\'' && syntax.single_quote_strings)
            || (quote == b'`' && syntax.backtick_strings);

        if is_string {
            let body = i + 1;
            let mut j = body;
            while j < bytes.len() {
                match bytes[j] {
                    b'\\' => j += 2,
                    c if c == quote => break,
                    // only template/raw strings span lines
                    b'\n' if quote != b'`' => break,
                    _ => j += 1,
                }
            }
            let end = j.min(bytes.len());
            regions.push(body..end);
            i = end + 1;
            continue;
        }

        i += 1;
    }

    regions
}

fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_texts(content: &str, lang: SourceLang) -> Vec<&str> {
        regions(content, lang)
            .into_iter()
            .map(|r| &content[r])
            .collect()
    }

    #[test]
    fn test_c_style_comments() {
        let content = r#"
// This is a comment with words
fn main() {
    println!("A string with text");
}
"#;

        let found = region_texts(content, SourceLang::CLike);
        assert_eq!(found, vec![" This is a comment with words", "A string with text"]);
    }

    #[test]
    fn test_block_comments_span_lines() {
        let content = "/* first line\n * second line */ let x = 1;";
        assert_eq!(
            region_texts(content, SourceLang::CLike),
            vec![" first line\n * second line "]
        );
    }

    #[test]
    fn test_comment_marker_inside_string() {
        let content = "let url = \"http://example.com\"; // real comment\n";
        assert_eq!(
            region_texts(content, SourceLang::CLike),
            vec!["http://example.com", " real comment"]
        );
    }

    #[test]
    fn test_escaped_quotes() {
        let content = r#"say("she said \"hi\" twice")"#;
        assert_eq!(
            region_texts(content, SourceLang::JavaScript),
            vec![r#"she said \"hi\" twice"#]
        );
    }

    #[test]
    fn test_rust_lifetimes_are_not_strings() {
        let content = "fn f<'a>(x: &'a str) {} // trailing note\n";
        assert_eq!(region_texts(content, SourceLang::CLike), vec![" trailing note"]);
    }

    #[test]
    fn test_python_comments_and_docstrings() {
        let content = r#"
# This is a Python comment
def main():
    """Docstring text"""
    print('single quoted')
"#;

        let found = region_texts(content, SourceLang::Python);
        assert_eq!(
            found,
            vec![" This is a Python comment", "Docstring text", "single quoted"]
        );
    }

    #[test]
    fn test_template_strings() {
        let content = "const s = `multi\nline`;";
        assert_eq!(
            region_texts(content, SourceLang::JavaScript),
            vec!["multi\nline"]
        );
    }

    #[test]
    fn test_unterminated_input() {
        let content = "/* never closed";
        assert_eq!(region_texts(content, SourceLang::Go), vec![" never closed"]);

        let content = "x = \"dangling\\";
        assert_eq!(region_texts(content, SourceLang::Python), vec!["dangling\\"]);
    }

    #[test]
    fn test_hash_comments_and_quotes() {
        let content = "# deploy step\necho 'hello there' # trailing\n";
        assert_eq!(
            region_texts(content, SourceLang::Hash),
            vec![" deploy step", "hello there", " trailing"]
        );
    }
}
