use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    Comparison,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr, Precedence) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.led(TokenKind::Equals, Precedence::Equals, parse_binary_expr);
    parser.led(TokenKind::NotEquals, Precedence::Equals, parse_binary_expr);
    parser.led(TokenKind::Less, Precedence::Comparison, parse_binary_expr);
    parser.led(TokenKind::Greater, Precedence::Comparison, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, Precedence::Sum, parse_binary_expr);
    parser.led(TokenKind::Dash, Precedence::Sum, parse_binary_expr);
    parser.led(TokenKind::Star, Precedence::Product, parse_binary_expr);
    parser.led(TokenKind::Slash, Precedence::Product, parse_binary_expr);
    parser.led(TokenKind::Percent, Precedence::Product, parse_binary_expr);

    parser.led(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Number, parse_integer_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_fn_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
