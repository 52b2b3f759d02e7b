//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level
//! parsing loop. Expressions are parsed Pratt-style with NUD/LED handlers,
//! statements through a statement table.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Operator precedences
//!
//! Tokens are pulled from the tokenizer lazily, with exactly one token of
//! lookahead buffered in `peek_token`.

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How deep expressions may nest before the parser gives up on them.
///
/// Counts every level of the resulting tree, including each link of a
/// left-associative chain, so neither parsing nor rendering can exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Errors never abort a parse. They are collected in order and the parser
/// resumes at the next statement boundary.
pub struct Parser {
    /// Source of tokens, read one at a time
    tokenizer: Tokenizer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix operator precedences
    precedence_lookup: PrecedenceLookup,
    /// Expression levels currently open
    nesting_depth: usize,
    /// Set once the limit is hit, so one runaway expression reports one error
    nesting_reported: bool,
    /// `{` minus `}` seen so far, up to and including the current token
    brace_depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `tokenizer`.
    ///
    /// All lookup tables are registered and the current and peek tokens are
    /// primed, so the parser is ready for [`Parser::parse_program`].
    pub fn new(mut tokenizer: Tokenizer) -> Self {
        let current_token = tokenizer.next_token();
        let peek_token = tokenizer.next_token();

        let mut parser = Parser {
            tokenizer,
            current_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            nesting_depth: 0,
            nesting_reported: false,
            brace_depth: 0,
        };
        parser.track_braces();
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Moves the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.tokenizer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
        self.track_braces();
    }

    fn track_braces(&mut self) {
        match self.current_token.kind {
            TokenKind::OpenCurly => self.brace_depth += 1,
            TokenKind::CloseCurly => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Number of blocks open at the current token.
    pub fn brace_depth(&self) -> usize {
        self.brace_depth
    }

    pub fn nesting_depth(&self) -> usize {
        self.nesting_depth
    }

    /// Opens one more expression level.
    ///
    /// Returns `false` when the limit is already reached. The first refusal
    /// within an outermost expression records a `NestingTooDeep` error.
    pub fn enter_nesting(&mut self) -> bool {
        if self.nesting_depth < MAX_NESTING_DEPTH {
            self.nesting_depth += 1;
            return true;
        }

        if !self.nesting_reported {
            self.nesting_reported = true;
            let token = self.current_token.clone();
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                token,
            );
        }
        false
    }

    pub fn restore_nesting(&mut self, depth: usize) {
        self.nesting_depth = depth;
        if depth == 0 {
            self.nesting_reported = false;
        }
    }

    /// Advances if the lookahead is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an `UnexpectedToken`
    /// error. The parser does not move in that case.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek_token.kind == expected_kind {
            self.advance();
            Some(self.current_token.clone())
        } else {
            let token = self.peek_token.clone();
            self.push_error(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: token.kind,
                },
                token,
            );
            None
        }
    }

    pub fn push_error(&mut self, error_impl: ErrorImpl, token: Token) {
        debug!("parse error: {}", error_impl);
        self.errors.push(Error::new(error_impl, token));
    }

    /// Returns the recorded error messages, in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Returns the recorded errors with their offending tokens.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly this operator binds
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Skips to the next statement boundary after a statement could not be built.
    ///
    /// Stops on a `;`, before a `}` so an enclosing block can close, or at EOF.
    /// Blocks opened while skipping are skipped whole, along with the `;`
    /// and `}` inside them. A `}` that was already current when the skip
    /// began belongs to an enclosing block and is left in place.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        loop {
            match self.current_token.kind {
                TokenKind::EOF => return,
                TokenKind::Semicolon | TokenKind::CloseCurly if depth == 0 => return,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly => depth -= 1,
                _ => {}
            }

            if depth == 0 && self.peek_token.kind == TokenKind::CloseCurly {
                return;
            }
            self.advance();
        }
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program. Check [`Parser::errors`] to see whether it
    /// is complete.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token.kind != TokenKind::EOF {
            match parse_stmt(self) {
                Some(stmt) => program.statements.push(stmt),
                None => self.synchronize(),
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It wires a tokenizer into a
/// fresh parser and parses until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding any recorded errors
/// - The parsed Program
pub fn parse(source: String) -> (Parser, Program) {
    let mut parser = Parser::new(Tokenizer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
