//! Unit tests for AST rendering.
//!
//! Trees here are built by hand so the canonical form can be checked
//! independently of the parser.

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{
        BooleanExpr, CallExpr, FnExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        name: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr { value })
}

fn block(body: Vec<Stmt>) -> BlockStmt {
    BlockStmt { body }
}

fn expr_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt { expression })
}

#[test]
fn test_let_statement_to_text() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            name: ident("myVar"),
            value: Some(Expr::Identifier(ident("anotherVar"))),
        })],
    };

    assert_eq!(program.to_text(), "let myVar = anotherVar;");
}

#[test]
fn test_return_statement_to_text() {
    let stmt = ReturnStmt {
        value: Some(Expr::Boolean(BooleanExpr { value: true })),
    };

    assert_eq!(stmt.to_text(), "return true;");
}

#[test]
fn test_prefix_and_infix_to_text() {
    let expr = Expr::Infix(InfixExpr {
        left: Box::new(Expr::Prefix(PrefixExpr {
            operator: "-".to_string(),
            operand: Some(Box::new(Expr::Identifier(ident("a")))),
        })),
        operator: "*".to_string(),
        right: Some(Box::new(Expr::Identifier(ident("b")))),
    });

    assert_eq!(expr.to_text(), "((-a) * b)");
}

#[test]
fn test_if_expression_to_text() {
    let condition = Expr::Infix(InfixExpr {
        left: Box::new(Expr::Identifier(ident("x"))),
        operator: "<".to_string(),
        right: Some(Box::new(Expr::Identifier(ident("y")))),
    });

    let mut expr = IfExpr {
        condition: Box::new(condition),
        consequence: block(vec![expr_stmt(Expr::Identifier(ident("x")))]),
        alternative: None,
    };
    assert_eq!(expr.to_text(), "if (x < y) x");

    expr.alternative = Some(block(vec![expr_stmt(Expr::Identifier(ident("y")))]));
    assert_eq!(expr.to_text(), "if (x < y) x else y");
}

#[test]
fn test_function_literal_to_text() {
    let body = block(vec![expr_stmt(Expr::Infix(InfixExpr {
        left: Box::new(Expr::Identifier(ident("x"))),
        operator: "+".to_string(),
        right: Some(Box::new(Expr::Identifier(ident("y")))),
    }))]);

    let expr = FnExpr {
        parameters: vec![ident("x"), ident("y")],
        body,
    };
    assert_eq!(expr.to_text(), "fn(x, y) (x + y)");

    let empty = FnExpr {
        parameters: vec![],
        body: BlockStmt::default(),
    };
    assert_eq!(empty.to_text(), "fn() ");
}

#[test]
fn test_call_expression_to_text() {
    let expr = CallExpr {
        callee: Box::new(Expr::Identifier(ident("add"))),
        arguments: vec![int(1), Expr::Identifier(ident("b"))],
    };

    assert_eq!(expr.to_text(), "add(1, b)");
}

#[test]
fn test_missing_children_render_empty() {
    let program = Program {
        statements: vec![
            Stmt::Let(LetStmt {
                name: ident("x"),
                value: None,
            }),
            Stmt::Return(ReturnStmt { value: None }),
            expr_stmt(Expr::Infix(InfixExpr {
                left: Box::new(int(5)),
                operator: "+".to_string(),
                right: None,
            })),
            expr_stmt(Expr::Prefix(PrefixExpr {
                operator: "!".to_string(),
                operand: None,
            })),
        ],
    };

    assert_eq!(program.to_text(), "let x = ;return ;(5 + )(!)");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![expr_stmt(int(1)), Stmt::Block(block(vec![expr_stmt(int(2))]))],
    };

    assert_eq!(program.to_text(), "12");
    assert_eq!(Program::default().to_text(), "");
}
