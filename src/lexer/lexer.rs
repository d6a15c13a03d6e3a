use crate::{
    errors::errors::{LexError, LexErrorKind},
    Span, MK_TOKEN,
};

use super::tokens::{classify, Token, TokenKind};

/// Scans the next token starting at byte offset `pos`.
///
/// Skips any run of spaces and newlines first (only those two; a tab is
/// ordinary Symbol material), classifies the first remaining byte and
/// consumes according to its category:
///
/// - `"` consumes through the closing quote, both quotes included;
/// - `=` becomes `==` when a second `=` follows, `===` lexes as `==` `=`;
/// - `:` must be followed by a second `:`, a bare colon is a syntax error;
/// - Symbol runs greedily until the first whitespace or operator/punctuation
///   byte, which is left for the next call;
/// - every other category is a single byte.
///
/// Returns the token together with the advanced cursor. At end of buffer
/// the token is a zero-length `Eof` and the cursor does not advance.
///
/// Bytes are treated as single-byte characters; no encoding validation.
pub fn next_token<'src>(
    source: &'src str,
    mut pos: usize,
) -> Result<(Token<'src>, usize), LexError> {
    let bytes = source.as_bytes();

    while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\n') {
        pos += 1;
    }
    let start = pos;

    if pos >= bytes.len() {
        let span = Span { start, end: start };
        return Ok((MK_TOKEN!(TokenKind::Eof, "", span), start));
    }

    let mut kind = classify(bytes[pos] as char);
    pos += 1;

    match kind {
        TokenKind::Quote => loop {
            if pos >= bytes.len() {
                return Err(LexError::new(LexErrorKind::UnterminatedQuote, start));
            }
            let c = bytes[pos];
            pos += 1;
            if c == b'"' {
                break;
            }
        },
        TokenKind::Eq => {
            if pos < bytes.len() && bytes[pos] == b'=' {
                pos += 1;
                kind = TokenKind::EqEq;
            }
        }
        TokenKind::Colon => {
            if pos < bytes.len() && bytes[pos] == b':' {
                pos += 1;
                kind = TokenKind::ColonColon;
            } else {
                return Err(LexError::new(LexErrorKind::ExpectedDoubleColon, start));
            }
        }
        TokenKind::Symbol => {
            while pos < bytes.len() {
                let c = bytes[pos] as char;
                if c == ' ' || c == '\n' || classify(c) != TokenKind::Symbol {
                    break;
                }
                pos += 1;
            }
        }
        // remaining categories are single-byte tokens, already consumed
        _ => {}
    }

    let span = Span { start, end: pos };
    Ok((MK_TOKEN!(kind, &source[start..pos], span), pos))
}

/// Tokenizes a whole buffer, appending a terminal `Eof` token.
///
/// Stops at the first lexical error; there is no recovery or
/// resynchronization past a malformed token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = vec![];
    let mut pos = 0;

    loop {
        let (token, next) = next_token(source, pos)?;
        pos = next;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(tokens)
}
