/// Pairs of symbol characters that lex as one two-character operator when
/// written next to each other.
const FUSING_PAIRS: [(char, char); 6] = [
    (':', '='),
    ('<', '<'),
    ('<', '='),
    ('>', '='),
    ('=', '='),
    ('!', '='),
];

/// Cleaned source text plus the source line of every cleaned line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSource {
    text: String,
    source_lines: Vec<u32>,
}

impl CleanSource {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.source_lines.len()
    }

    /// Maps a 1-based cleaned line to the 1-based line of the original file.
    pub fn source_line(&self, clean_line: u32) -> u32 {
        match clean_line
            .checked_sub(1)
            .and_then(|index| self.source_lines.get(index as usize))
        {
            Some(line) => *line,
            None => self.source_lines.last().copied().unwrap_or(clean_line),
        }
    }

    /// Returns the cleaned text of the given original line, if it survived
    /// normalization.
    pub fn source_line_text(&self, source_line: u32) -> Option<&str> {
        let index = self
            .source_lines
            .iter()
            .position(|line| *line == source_line)?;
        self.text.split('\n').nth(index)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

fn needs_separator(previous: Option<char>, next: char) -> bool {
    match previous {
        Some(previous) => {
            (is_word_char(previous) && is_word_char(next))
                || FUSING_PAIRS.contains(&(previous, next))
        }
        None => false,
    }
}

fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && needs_separator(out.chars().last(), c) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);

        if c == '"' {
            // String literals are copied as written, up to the closing quote.
            // Carriage returns are line-ending noise and are dropped even here.
            for inner in chars.by_ref() {
                if inner == '\r' {
                    continue;
                }
                out.push(inner);
                if inner == '"' {
                    break;
                }
            }
        }
    }

    out
}

/// Strips insignificant whitespace and blank lines from `source`.
///
/// Normalizing already-normalized text returns it unchanged.
pub fn normalize(source: &str) -> CleanSource {
    let mut lines = Vec::new();
    let mut source_lines = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            continue;
        }

        lines.push(cleaned);
        source_lines.push(index as u32 + 1);
    }

    CleanSource {
        text: lines.join("\n"),
        source_lines,
    }
}
