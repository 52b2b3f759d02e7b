use std::fmt::Display;

use super::{
    ast::{write_optional, Expr, Node, Stmt},
    expressions::IdentifierExpr,
};

/// Let Statement
/// `let name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: IdentifierExpr,
    pub value: Option<Expr>,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = ", self.name)?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

impl Node for LetStmt {}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return ")?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

impl Node for ReturnStmt {}

/// Expression Statement
/// An expression used in statement position. The trailing `;` is optional and not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl Node for ExpressionStmt {}

/// Block Statement
/// The braced body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl Node for BlockStmt {}
