use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('=', TokenKind::Eq);
        map.insert('+', TokenKind::Plus);
        map.insert('"', TokenKind::Quote);
        map.insert('{', TokenKind::BraceOpen);
        map.insert('}', TokenKind::BraceClose);
        map.insert('(', TokenKind::ParenOpen);
        map.insert(')', TokenKind::ParenClose);
        map.insert(',', TokenKind::Comma);
        map.insert(';', TokenKind::Semicolon);
        map.insert('.', TokenKind::Dot);
        map.insert(':', TokenKind::Colon);
        map
    };
}

/// Classifies a single character into a token category.
///
/// Total and pure: any character outside the lookup table is a `Symbol`.
/// The scanner consults this at arbitrary positions, including mid-run,
/// so letters, digits, underscores, tabs and anything else unlisted all
/// land in the `Symbol` catch-all.
pub fn classify(c: char) -> TokenKind {
    *CHAR_LOOKUP.get(&c).unwrap_or(&TokenKind::Symbol)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Symbol,

    Eq,        // =
    EqEq,      // ==
    Colon,     // : (never produced alone, refined to ColonColon or rejected)
    ColonColon,
    Plus,

    Quote,

    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    Comma,
    Semicolon,
    Dot,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical token: a borrowed view into the source buffer.
///
/// `text` is exactly the bytes of `span` and carries no leading
/// whitespace; the token never outlives the buffer it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

impl Token<'_> {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn debug(&self) {
        println!("{} ({})", self.kind, self.text);
    }
}
