//! Return statement code generation

use super::TypedStatementGenerator;
use crate::ir::{Instruction, IrType};
use crate::typed_ast::TypedExpr;
use jmm_common::CompilerError;

/// The return instruction is typed with the method's declared return type
pub fn generate_return(
    gen: &mut TypedStatementGenerator,
    expr: Option<&TypedExpr>,
) -> Result<Vec<Instruction>, CompilerError> {
    let ty = IrType::from_type(&gen.method.return_type);

    let Some(ret_expr) = expr else {
        return Ok(vec![Instruction::Return { value: None, ty }]);
    };

    let mut expr_gen = gen.create_expression_generator();
    let (value, mut instructions) = expr_gen.generate_operand(ret_expr)?;
    instructions.push(Instruction::Return { value: Some(value), ty });
    Ok(instructions)
}
