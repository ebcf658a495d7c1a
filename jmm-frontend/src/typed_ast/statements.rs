//! Typed statements
//!
//! This module defines typed statements produced by semantic analysis.

use super::expressions::TypedExpr;
use serde::{Deserialize, Serialize};

/// Typed statement - produced by semantic analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypedStmt {
    /// `{ ... }`
    Block { statements: Vec<TypedStmt> },

    /// If statement; the else branch may be empty
    If {
        condition: TypedExpr,
        then_stmt: Box<TypedStmt>,
        else_stmt: Option<Box<TypedStmt>>,
    },

    /// While loop
    While {
        condition: TypedExpr,
        body: Box<TypedStmt>,
    },

    /// `target = value;` where target is an identifier or array element
    Assign { target: TypedExpr, value: TypedExpr },

    /// Return statement
    Return { value: Option<TypedExpr> },

    /// Expression evaluated for its side effects
    Expression { expr: TypedExpr },
}

impl TypedStmt {
    pub fn assign(target: TypedExpr, value: TypedExpr) -> Self {
        TypedStmt::Assign { target, value }
    }

    pub fn block(statements: Vec<TypedStmt>) -> Self {
        TypedStmt::Block { statements }
    }

    pub fn expr(expr: TypedExpr) -> Self {
        TypedStmt::Expression { expr }
    }

    pub fn ret(value: Option<TypedExpr>) -> Self {
        TypedStmt::Return { value }
    }
}
