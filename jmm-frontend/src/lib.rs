//! J-- Compiler Backend - Frontend
//!
//! This crate provides the first code generation stage:
//! - Typed AST: the fully type-annotated tree handed over by semantic analysis
//! - IR: the three-address intermediate representation and its textual form
//! - Codegen: lowering of the typed AST into IR

pub mod typed_ast;
pub mod ir;
pub mod codegen;

pub use typed_ast::{build_symbol_table, TypedExpr, TypedProgram, TypedStmt};
pub use codegen::{LoweringOptions, TypedCodeGenerator};
pub use ir::ClassUnit;

use jmm_common::{CompilerError, SymbolTable};

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Lower a typed program into one IR unit
    pub fn lower_program(
        program: &TypedProgram,
        symbols: &SymbolTable,
        options: LoweringOptions,
    ) -> Result<ClassUnit, CompilerError> {
        let mut codegen = TypedCodeGenerator::new(options);
        codegen.generate(program, symbols)
    }

    /// Build the symbol table and lower with default options
    pub fn compile_to_ir(program: &TypedProgram) -> Result<ClassUnit, CompilerError> {
        let symbols = build_symbol_table(program);
        Self::lower_program(program, &symbols, LoweringOptions::default())
    }

    /// Read a typed program from JSON and lower it
    pub fn compile_json(source: &str) -> Result<ClassUnit, CompilerError> {
        let program = TypedProgram::from_json(source)?;
        Self::compile_to_ir(&program)
    }
}
