//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser records. It includes:
//!
//! - Error structures carrying the offending token
//! - Specific error variants for structural, prefix and literal failures
//! - Helpful suggestions for the shell to print

pub mod errors;

#[cfg(test)]
mod tests;
