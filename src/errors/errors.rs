use std::fmt::Display;

use thiserror::Error;

pub const EXIT_SOURCE_NOT_GIVEN: i32 = 2;
pub const EXIT_SOURCE_NOT_FOUND: i32 = 3;
pub const EXIT_SOURCE_READ_FAIL: i32 = 4;

const BRED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Diagnostic severity. `Fatal` and `General` belong to the driver
/// (argument and file problems); `Syntax` belongs to the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    General,
    Syntax,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal error"),
            Severity::General => write!(f, "error"),
            Severity::Syntax => write!(f, "syntax error"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("expected ::, found :")]
    ExpectedDoubleColon,
}

/// A lexical error: the rule that was violated plus the byte offset of
/// the token start it was detected at.
///
/// The scanner performs no recovery; the caller decides whether to abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    kind: LexErrorKind,
    position: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: usize) -> Self {
        LexError { kind, position }
    }

    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn severity(&self) -> Severity {
        Severity::Syntax
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for LexError {}

/// Formats one diagnostic line: `<program>: <severity>: <message>`,
/// with the severity rendered bold red.
pub fn format_report(program: &str, severity: Severity, message: impl Display) -> String {
    format!("{program}: {BRED}{severity}: {RESET}{message}")
}

/// Prints a diagnostic line to stderr.
pub fn report(program: &str, severity: Severity, message: impl Display) {
    eprintln!("{}", format_report(program, severity, message));
}

/// Prints the termination notice and exits with `code`.
pub fn compile_exit(code: i32) -> ! {
    eprintln!("compilation terminated.");
    std::process::exit(code);
}
