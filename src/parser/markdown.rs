use crate::checker::tokenizer::extract_words;
use crate::parser::TextSpan;
use pulldown_cmark::{Event, LinkType, Parser, Tag, TagEnd};

/// Parse markdown and extract checkable words (skip code blocks, inline code, autolinks)
pub fn parse(content: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut in_code_block = false;
    let mut in_autolink = false;

    for (event, range) in Parser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Start(Tag::Link { link_type, .. }) => {
                in_autolink = matches!(link_type, LinkType::Autolink | LinkType::Email);
            }
            Event::End(TagEnd::Link) => in_autolink = false,
            Event::Text(_) if !in_code_block && !in_autolink => {
                // Tokenize the source slice so positions stay exact even when
                // the parsed text differs (entities, escapes).
                let Some(source) = content.get(range.clone()) else {
                    continue;
                };
                for (offset, word) in extract_words(source) {
                    spans.push(TextSpan::new(word, range.start + offset));
                }
            }
            _ => {}
        }
    }

    spans
}
