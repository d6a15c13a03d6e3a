//! Error types and error reporting for the compiler driver.
//!
//! This module defines the error types used by the lexer and the driver
//! around it. It includes:
//!
//! - The severity taxonomy shared by driver and lexer diagnostics
//! - Lexical error values carrying a kind and a byte offset
//! - The severity-tagged log-line formatter
//! - Exit codes for the driver's failure paths

pub mod errors;
