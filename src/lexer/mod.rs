//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for inspection. It handles:
//!
//! - Single-character classification of token categories
//! - Scanning of symbol runs, quoted literals, and the `==`/`::` operators
//! - Whitespace skipping between tokens
//! - Token byte-offset tracking for error reporting

pub mod lexer;
pub mod tokens;
