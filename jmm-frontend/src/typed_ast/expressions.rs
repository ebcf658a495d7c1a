//! Typed expressions
//!
//! This module defines the expression nodes produced by semantic analysis.

use jmm_common::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators of the source language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "&&")]
    And,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::And => "&&",
        };
        write!(f, "{symbol}")
    }
}

/// Typed expression - produced by semantic analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypedExpr {
    /// Integer literal
    IntLiteral { value: i32 },

    /// `true` / `false`
    BoolLiteral { value: bool },

    /// Local, parameter, field or class name
    Identifier { name: String, expr_type: Type },

    /// `this`
    This { expr_type: Type },

    /// `array[index]`
    ArrayAccess {
        array: Box<TypedExpr>,
        index: Box<TypedExpr>,
        expr_type: Type,
    },

    /// `( inner )`
    Parentheses { inner: Box<TypedExpr> },

    /// `!operand`
    Not { operand: Box<TypedExpr> },

    /// `new int[size]`
    NewArray { size: Box<TypedExpr> },

    /// `new ClassName()`
    NewObject { class_name: String },

    /// `[e1, e2, ...]`
    ArrayInit { elements: Vec<TypedExpr> },

    /// Arithmetic, relational or logical operation
    Binary {
        op: BinaryOp,
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
        expr_type: Type,
    },

    /// `receiver.method(arguments...)`, including the `length` pseudo-method
    MethodCall {
        receiver: Box<TypedExpr>,
        method: String,
        arguments: Vec<TypedExpr>,
        expr_type: Type,
    },
}

impl TypedExpr {
    /// Get the type of this expression
    pub fn get_type(&self) -> Type {
        match self {
            TypedExpr::IntLiteral { .. } => Type::int(),
            TypedExpr::BoolLiteral { .. } | TypedExpr::Not { .. } => Type::boolean(),
            TypedExpr::NewArray { .. } | TypedExpr::ArrayInit { .. } => Type::int_array(),
            TypedExpr::NewObject { class_name } => Type::object(class_name.clone()),
            TypedExpr::Parentheses { inner } => inner.get_type(),
            TypedExpr::Identifier { expr_type, .. }
            | TypedExpr::This { expr_type }
            | TypedExpr::ArrayAccess { expr_type, .. }
            | TypedExpr::Binary { expr_type, .. }
            | TypedExpr::MethodCall { expr_type, .. } => expr_type.clone(),
        }
    }

    /// Short name of the node kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypedExpr::IntLiteral { .. } => "IntLiteral",
            TypedExpr::BoolLiteral { .. } => "BoolLiteral",
            TypedExpr::Identifier { .. } => "Identifier",
            TypedExpr::This { .. } => "This",
            TypedExpr::ArrayAccess { .. } => "ArrayAccess",
            TypedExpr::Parentheses { .. } => "Parentheses",
            TypedExpr::Not { .. } => "Not",
            TypedExpr::NewArray { .. } => "NewArray",
            TypedExpr::NewObject { .. } => "NewObject",
            TypedExpr::ArrayInit { .. } => "ArrayInit",
            TypedExpr::Binary { .. } => "Binary",
            TypedExpr::MethodCall { .. } => "MethodCall",
        }
    }

    /// Strip any number of enclosing parentheses
    pub fn unparenthesized(&self) -> &TypedExpr {
        match self {
            TypedExpr::Parentheses { inner } => inner.unparenthesized(),
            other => other,
        }
    }

    // Convenience constructors, mostly for tests and tools.

    pub fn int(value: i32) -> Self {
        TypedExpr::IntLiteral { value }
    }

    pub fn boolean(value: bool) -> Self {
        TypedExpr::BoolLiteral { value }
    }

    pub fn ident(name: impl Into<String>, expr_type: Type) -> Self {
        TypedExpr::Identifier {
            name: name.into(),
            expr_type,
        }
    }

    pub fn binary(op: BinaryOp, left: TypedExpr, right: TypedExpr) -> Self {
        let expr_type = match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => Type::int(),
            _ => Type::boolean(),
        };
        TypedExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            expr_type,
        }
    }

    pub fn call(receiver: TypedExpr, method: impl Into<String>, arguments: Vec<TypedExpr>, expr_type: Type) -> Self {
        TypedExpr::MethodCall {
            receiver: Box::new(receiver),
            method: method.into(),
            arguments,
            expr_type,
        }
    }

    pub fn index(array: TypedExpr, index: TypedExpr) -> Self {
        let expr_type = array.get_type().element();
        TypedExpr::ArrayAccess {
            array: Box::new(array),
            index: Box::new(index),
            expr_type,
        }
    }
}
