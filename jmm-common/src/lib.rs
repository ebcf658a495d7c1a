//! J-- Compiler Backend - Common Types and Utilities
//!
//! This crate contains shared types, error definitions, and the symbol table
//! consumed by both the IR lowering stage and the bytecode emission stage.

pub mod error;
pub mod types;
pub mod symbol_table;

pub use error::{CompilerError, SymbolKind};
pub use types::*;
pub use symbol_table::{MethodSignature, SymbolTable};
