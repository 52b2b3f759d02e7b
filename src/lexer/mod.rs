//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into
//! tokens for the parser. It handles:
//!
//! - On-demand tokenization, one token per call
//! - Recognition of keywords, identifiers, integers and operators
//! - Degrading unknown characters to `Illegal` tokens instead of failing

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
