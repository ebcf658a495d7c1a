//! J-- Compiler Backend - Bytecode Emission
//!
//! This crate turns an IR class unit into Jasmin assembly text. It assigns
//! frame slots, selects JVM instructions for every IR instruction and sizes
//! each method's operand stack from the final instruction list.

pub mod context;
pub mod frame;
pub mod naming;
pub mod instr;
pub mod lower;

pub use context::{ClassContext, OBJECT_CLASS};
pub use frame::Frame;
pub use lower::lower_class;

use jmm_common::CompilerError;
use jmm_frontend::ir::ClassUnit;

/// Options for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Superclass of units that do not extend anything
    pub default_super: String,
    /// Indentation of instructions inside method blocks
    pub indent: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            default_super: OBJECT_CLASS.to_string(),
            indent: "    ".to_string(),
        }
    }
}

/// Emit Jasmin assembly for one class unit
pub fn generate_jasmin(unit: &ClassUnit, options: &EmitOptions) -> Result<String, CompilerError> {
    lower_class(unit, options)
}

#[cfg(test)]
mod tests;
