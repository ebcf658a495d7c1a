//! Three-address Intermediate Representation
//!
//! This module defines the IR produced by lowering the typed AST and consumed
//! by bytecode emission. Every type renders to the line-oriented textual form
//! through `Display`.
//!
//! ## Architecture
//!
//! The module is structured as follows:
//! - `types` - IR types (`.i32`, `.bool`, `.array.i32`, ...)
//! - `operands` - literals, variables, array elements, `this`, class names
//! - `ops` - binary and unary operations
//! - `instructions` - IR instructions, branch conditions and labels
//! - `method` - methods and their parameters
//! - `class_unit` - the whole compilation unit

// Public exports - clean API surface
pub use self::types::IrType;
pub use self::operands::Operand;
pub use self::ops::{IrBinaryOp, IrUnaryOp};
pub use self::instructions::{CallKind, Condition, Instruction, Label, LabelKind};
pub use self::method::{Method, Parameter};
pub use self::class_unit::{ClassUnit, Field};

// Internal modules
mod types;
mod operands;
mod ops;
mod instructions;
mod method;
mod class_unit;

#[cfg(test)]
mod tests;
