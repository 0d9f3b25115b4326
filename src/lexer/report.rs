use super::tokens::{Token, TokenCategory};

/// One line of the reserved-word and symbol report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub lexeme: String,
    pub category: TokenCategory,
}

/// The reserved words, operators and delimiters of `tokens`, in source order.
pub fn reserved_and_symbols(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens
        .iter()
        .filter(|token| token.kind.is_reserved() || token.kind.is_symbol())
}

pub fn token_report(tokens: &[Token]) -> Vec<ReportEntry> {
    reserved_and_symbols(tokens)
        .map(|token| ReportEntry {
            lexeme: token.value.clone(),
            category: token.category(),
        })
        .collect()
}

/// Renders one `lexeme<TAB>Category` pair per line.
pub fn render_token_report(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.lexeme);
        out.push('\t');
        out.push_str(&entry.category.to_string());
        out.push('\n');
    }
    out
}
