use crate::ContextualizedHit;

/// Characters of context kept on each side of a flagged span.
pub const CONTEXT_WINDOW: usize = 30;

const EMPHASIS: &str = "**";

/// The line enclosing a character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    pub line: String,
    pub column: usize,
    pub line_number: usize,
}

/// Line layout of one document, built once and shared by all of its hits.
pub struct LineIndex {
    chars: Vec<char>,
    /// Char index of every `\n`, ascending.
    breaks: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let breaks = chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == '\n')
            .map(|(i, _)| i)
            .collect();

        Self { chars, breaks }
    }

    /// Find the line that contains `offset` (a character index).
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn locate(&self, offset: usize) -> LineContext {
        let (start, end, column, line_number) = self.bounds(offset);

        LineContext {
            line: self.chars[start..end].iter().collect(),
            column,
            line_number,
        }
    }

    /// Turn a hit position into a markdown excerpt with the span emphasized.
    pub fn contextualize(&self, offset: usize, length: usize) -> ContextualizedHit {
        let (start, end, column, line_number) = self.bounds(offset);
        let line = &self.chars[start..end];

        let span_end = (column + length).min(line.len());
        let left = column.saturating_sub(CONTEXT_WINDOW);
        let right = if line.len() - span_end > CONTEXT_WINDOW {
            span_end + CONTEXT_WINDOW
        } else {
            line.len()
        };

        let mut excerpt_markup = escape(&line[left..column]);
        excerpt_markup.push_str(EMPHASIS);
        excerpt_markup.push_str(&escape(&line[column..span_end]));
        excerpt_markup.push_str(EMPHASIS);
        excerpt_markup.push_str(&escape(&line[span_end..right]));

        ContextualizedHit {
            excerpt_markup,
            line_number,
        }
    }

    /// Returns `(line_start, line_end, column, line_number)` for an offset.
    fn bounds(&self, offset: usize) -> (usize, usize, usize, usize) {
        let offset = offset.min(self.chars.len());
        // Line breaks strictly before the offset.
        let before = self.breaks.partition_point(|&b| b < offset);

        let line_start = match before {
            0 => 0,
            n => self.breaks[n - 1] + 1,
        };
        let mut line_end = self
            .breaks
            .get(before)
            .copied()
            .unwrap_or(self.chars.len());

        // CRLF files: the carriage return belongs to the line break.
        if line_end > offset && self.chars[line_end - 1] == '\r' {
            line_end -= 1;
        }

        (line_start, line_end, offset - line_start, before + 1)
    }
}

/// One-off [`LineIndex::locate`]. Build a [`LineIndex`] when resolving many
/// offsets in the same text.
pub fn locate(text: &str, offset: usize) -> LineContext {
    LineIndex::new(text).locate(offset)
}

/// One-off [`LineIndex::contextualize`].
pub fn contextualize(text: &str, offset: usize, length: usize) -> ContextualizedHit {
    LineIndex::new(text).contextualize(offset, length)
}

fn escape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    for &ch in chars {
        match ch {
            '[' => out.push_str("&#91;"),
            '|' => out.push_str("&#124;"),
            other => out.push(other),
        }
    }
    out
}
