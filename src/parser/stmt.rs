use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    trace!("parse_stmt at {}", parser.current_token().debug());

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let name = parser.expect_peek(TokenKind::Identifier)?.value;
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let depth = parser.brace_depth();
    let value = parse_expr(parser, Precedence::Lowest);
    if !finish_value_stmt(parser, value.is_some(), depth) {
        return None;
    }

    Some(Stmt::Let(LetStmt {
        name: IdentifierExpr { name },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    parser.advance();

    let depth = parser.brace_depth();
    let value = parse_expr(parser, Precedence::Lowest);
    if !finish_value_stmt(parser, value.is_some(), depth) {
        return None;
    }

    Some(Stmt::Return(ReturnStmt { value }))
}

/// Consumes the `;` that ends a `let` or `return`.
///
/// A value that failed on the `;` itself keeps the statement with a hole.
/// One that failed anywhere else leaves the parser inside the broken
/// expression, so the statement is dropped and the caller resynchronizes.
/// `depth` is the brace depth the value started at.
fn finish_value_stmt(parser: &mut Parser, parsed: bool, depth: usize) -> bool {
    if parser.current_token_kind() == TokenKind::Semicolon {
        return true;
    }
    if !parsed {
        return false;
    }
    // The value ran into the enclosing block's `}`; its hole is already reported
    if parser.brace_depth() < depth {
        return true;
    }

    // A missing `;` alone is reported but the statement is kept
    parser.expect_peek(TokenKind::Semicolon);
    true
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    trace!("parse_expression_stmt");
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { expression }))
}

/// Parses the statements of a block. Expects to start on the `{` and stops on
/// the closing `}`, or at EOF if the block is never closed.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    trace!("parse_block_stmt");
    let mut body = vec![];
    let depth = parser.brace_depth();

    parser.advance();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        match parse_stmt(parser) {
            Some(stmt) => body.push(stmt),
            None => parser.synchronize(),
        }

        // A statement that broke off on this block's `}` leaves it current
        if parser.brace_depth() < depth {
            break;
        }
        parser.advance();
    }

    BlockStmt { body }
}
