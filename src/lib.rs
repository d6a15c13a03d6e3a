#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

/// Half-open byte-offset range into the source buffer.
///
/// `start <= end` and both offsets lie within the buffer the span was
/// produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
