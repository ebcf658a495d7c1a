//! Typed AST representation
//!
//! This module defines the fully type-annotated tree handed over by semantic
//! analysis. Every expression node carries its resolved type, so lowering
//! never has to infer one.

mod expressions;
mod statements;
mod program;
mod symbols;

// Re-export main types
pub use expressions::{BinaryOp, TypedExpr};
pub use statements::TypedStmt;
pub use program::{TypedClass, TypedMethod, TypedProgram};
pub use symbols::build_symbol_table;
