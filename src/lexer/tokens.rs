use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("integer", TokenKind::Integer);
        map.insert("double", TokenKind::Double);
        map.insert("If", TokenKind::If);
        map.insert("output", TokenKind::Output);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Unknown,
    Identifier,
    IntegerLiteral,
    DoubleLiteral,
    StringLiteral,

    OpenParen,
    CloseParen,
    Semicolon,

    Colon,       // :
    ColonEquals, // :=
    LessLess,    // <<

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,    // ==
    NotEquals, // !=

    Plus,
    Dash,

    // Reserved
    Integer,
    Double,
    If,
    Output,
}

/// The coarse classification reported to users and artifact writers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    ReservedWord,
    Identifier,
    IntegerLiteral,
    DoubleLiteral,
    StringLiteral,
    AssignOp,
    ColonOp,
    RelOp,
    ArithOp,
    OutputOp,
    LParen,
    RParen,
    Semicolon,
    Unknown,
    End,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::EOF => TokenCategory::End,
            TokenKind::Unknown => TokenCategory::Unknown,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::IntegerLiteral => TokenCategory::IntegerLiteral,
            TokenKind::DoubleLiteral => TokenCategory::DoubleLiteral,
            TokenKind::StringLiteral => TokenCategory::StringLiteral,
            TokenKind::OpenParen => TokenCategory::LParen,
            TokenKind::CloseParen => TokenCategory::RParen,
            TokenKind::Semicolon => TokenCategory::Semicolon,
            TokenKind::Colon => TokenCategory::ColonOp,
            TokenKind::ColonEquals => TokenCategory::AssignOp,
            TokenKind::LessLess => TokenCategory::OutputOp,
            TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals
            | TokenKind::Equals
            | TokenKind::NotEquals => TokenCategory::RelOp,
            TokenKind::Plus | TokenKind::Dash => TokenCategory::ArithOp,
            TokenKind::Integer | TokenKind::Double | TokenKind::If | TokenKind::Output => {
                TokenCategory::ReservedWord
            }
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.category() == TokenCategory::ReservedWord
    }

    /// Operators and delimiters.
    pub fn is_symbol(&self) -> bool {
        !matches!(
            self.category(),
            TokenCategory::ReservedWord
                | TokenCategory::Identifier
                | TokenCategory::IntegerLiteral
                | TokenCategory::DoubleLiteral
                | TokenCategory::StringLiteral
                | TokenCategory::Unknown
                | TokenCategory::End
        )
    }

    pub fn is_relational(&self) -> bool {
        self.category() == TokenCategory::RelOp
    }

    /// How the kind is named in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Unknown => "an unrecognised token",
            TokenKind::Identifier => "an identifier",
            TokenKind::IntegerLiteral => "an integer literal",
            TokenKind::DoubleLiteral => "a double literal",
            TokenKind::StringLiteral => "a string literal",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::ColonEquals => "`:=`",
            TokenKind::LessLess => "`<<`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Integer => "`integer`",
            TokenKind::Double => "`double`",
            TokenKind::If => "`If`",
            TokenKind::Output => "`output`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }
}
