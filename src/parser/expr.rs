use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FnExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression that binds tighter than `precedence`.
///
/// Handlers start on the first token of their construct and leave the parser
/// on its last token, so the loop always inspects the lookahead.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    let depth = parser.nesting_depth();
    let expr = if parser.enter_nesting() {
        parse_nested_expr(parser, precedence)
    } else {
        None
    };
    parser.restore_nesting(depth);

    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    trace!("parse_expr {:?} at {}", precedence, parser.current_token().debug());

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.current_token().clone();
        let name = if token.value.is_empty() {
            token.kind.to_string()
        } else {
            token.value.clone()
        };
        parser.push_error(ErrorImpl::NoPrefixHandler { token: name }, token);
        return None;
    };

    let mut left = nud(parser)?;

    // Same-precedence operators stop the loop, which makes them left-associative
    while parser.peek_token_kind() != TokenKind::Semicolon && precedence < parser.peek_precedence()
    {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Some(left);
        };

        // Each infix wraps `left` one level deeper
        if !parser.enter_nesting() {
            return None;
        }

        parser.advance();
        let operator_precedence = parser.current_precedence();
        left = led(parser, left, operator_precedence)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Identifier(IdentifierExpr {
        name: parser.current_token().value.clone(),
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    trace!("parse_integer_expr");
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerExpr { value })),
        Err(_) => {
            parser.push_error(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token,
            );
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(BooleanExpr {
        value: parser.current_token_kind() == TokenKind::True,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    trace!("parse_prefix_expr");
    let operator = parser.current_token().value.clone();
    parser.advance();

    let operand = parse_expr(parser, Precedence::Prefix).map(Box::new);

    Some(Expr::Prefix(PrefixExpr { operator, operand }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, precedence: Precedence) -> Option<Expr> {
    trace!("parse_binary_expr {:?}", precedence);
    let operator = parser.current_token().value.clone();
    parser.advance();

    let right = parse_expr(parser, precedence).map(Box::new);

    Some(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _precedence: Precedence) -> Option<Expr> {
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(args)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    trace!("parse_if_expr");
    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();

    let condition = parse_expr(parser, Precedence::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<Expr> {
    trace!("parse_fn_expr");
    parser.expect_peek(TokenKind::OpenParen)?;

    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;

    let body = parse_block_stmt(parser);

    Some(Expr::Fn(FnExpr { parameters, body }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(parameters);
    }

    let name = parser.expect_peek(TokenKind::Identifier)?.value;
    parameters.push(IdentifierExpr { name });

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        let name = parser.expect_peek(TokenKind::Identifier)?.value;
        parameters.push(IdentifierExpr { name });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}
