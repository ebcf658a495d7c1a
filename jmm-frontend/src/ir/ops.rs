//! IR Operations
//!
//! Defines binary and unary operations used in IR instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operations in IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrBinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    Le,
    Ge,

    // Logical (both operands already evaluated)
    And,
}

impl IrBinaryOp {
    pub fn is_comparison(&self) -> bool {
        matches!(self, IrBinaryOp::Lt | IrBinaryOp::Gt | IrBinaryOp::Le | IrBinaryOp::Ge)
    }
}

/// Unary operations in IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrUnaryOp {
    Not,
}

impl fmt::Display for IrBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrBinaryOp::Add => write!(f, "+"),
            IrBinaryOp::Sub => write!(f, "-"),
            IrBinaryOp::Mul => write!(f, "*"),
            IrBinaryOp::Div => write!(f, "/"),
            IrBinaryOp::Lt => write!(f, "<"),
            IrBinaryOp::Gt => write!(f, ">"),
            IrBinaryOp::Le => write!(f, "<="),
            IrBinaryOp::Ge => write!(f, ">="),
            IrBinaryOp::And => write!(f, "&&"),
        }
    }
}

impl fmt::Display for IrUnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrUnaryOp::Not => write!(f, "!"),
        }
    }
}
