#![allow(clippy::module_inception)]

//! Front end for the Arcane language: source text in, syntax tree out.
//!
//! ```ignore
//! let (parser, program) = arcane::parser::parser::parse("let x = 1 + 2 * 3;".to_string());
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
