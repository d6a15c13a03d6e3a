//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation and tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's borrowed text slice
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Symbol, "foo", span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}
