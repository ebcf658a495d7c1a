//! Miscellaneous statement code generation (expression statements, blocks)

use super::TypedStatementGenerator;
use crate::codegen::ExprContext;
use crate::ir::Instruction;
use crate::typed_ast::{TypedExpr, TypedStmt};
use jmm_common::CompilerError;

/// Lower an expression for its side effects; a bare operand is dropped
pub fn generate_expression_stmt(
    gen: &mut TypedStatementGenerator,
    expr: &TypedExpr,
) -> Result<Vec<Instruction>, CompilerError> {
    let mut expr_gen = gen.create_expression_generator();
    let result = expr_gen.generate(expr, ExprContext::Discard)?;

    let mut instructions = result.computation;
    if !matches!(result.value, Instruction::SingleOp(_)) {
        instructions.push(result.value);
    }
    Ok(instructions)
}

pub fn generate_block(
    gen: &mut TypedStatementGenerator,
    statements: &[TypedStmt],
) -> Result<Vec<Instruction>, CompilerError> {
    let mut instructions = Vec::new();
    for stmt in statements {
        instructions.extend(gen.generate(stmt)?);
    }
    Ok(instructions)
}
