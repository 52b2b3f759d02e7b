use std::fmt::Display;

use super::{
    ast::{write_optional, Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// Represents a bare name. Also used for `let` targets and function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Node for IdentifierExpr {}

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for IntegerExpr {}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for BooleanExpr {}

// OPERATORS

/// Prefix Expression
/// `!x` or `-x`. Rendered as `(!x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub operand: Option<Box<Expr>>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.operator)?;
        write_optional(f, &self.operand)?;
        write!(f, ")")
    }
}

impl Node for PrefixExpr {}

/// Infix Expression
/// Any binary operator. Rendered as `(left op right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        write_optional(f, &self.right)?;
        write!(f, ")")
    }
}

impl Node for InfixExpr {}

// CONTROL FLOW AND FUNCTIONS

/// If Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

impl Node for IfExpr {}

/// Function Literal
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub parameters: Vec<IdentifierExpr>,
    pub body: BlockStmt,
}

impl Display for FnExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "fn({}) {}", parameters, self.body)
    }
}

impl Node for FnExpr {}

/// Call Expression
/// Function application, `callee(arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "{}({})", self.callee, arguments)
    }
}

impl Node for CallExpr {}
