//! Boolean operators: `!` and short-circuit `&&`

use super::{ExprContext, ExprResult, TypedExpressionGenerator};
use crate::ir::{Instruction, IrType, IrUnaryOp, Operand};
use crate::typed_ast::TypedExpr;
use jmm_common::CompilerError;
use log::trace;

pub fn generate_not(
    gen: &mut TypedExpressionGenerator,
    operand: &TypedExpr,
    ctx: ExprContext,
) -> Result<ExprResult, CompilerError> {
    let (value, computation) = gen.generate_operand(operand)?;
    let not = Instruction::UnaryOp {
        op: IrUnaryOp::Not,
        operand: value,
        ty: IrType::Boolean,
    };
    Ok(gen.finish(not, computation, ctx == ExprContext::AssignRhs))
}

/// Lower `left && right` so that `right` only runs when `left` holds:
///
/// ```text
///     <left>
///     if (left) goto ifbody_N;
///     tmp.bool :=.bool 0.bool;
///     goto endif_N;
/// ifbody_N:
///     <right>
///     tmp.bool :=.bool right;
/// endif_N:
/// ```
pub fn generate_logical_and(
    gen: &mut TypedExpressionGenerator,
    left: &TypedExpr,
    right: &TypedExpr,
) -> Result<ExprResult, CompilerError> {
    let (condition, mut computation) = gen.generate_condition(left)?;
    let (body, end) = gen.allocator.new_if_labels();
    let result = gen.new_temp(IrType::Boolean);
    trace!("short-circuit && on {body}/{end} into {result}");

    computation.push(Instruction::Branch { condition, target: body });
    computation.push(Instruction::Assign {
        dest: result.clone(),
        ty: IrType::Boolean,
        rhs: Box::new(Instruction::SingleOp(Operand::boolean(false))),
    });
    computation.push(Instruction::Goto(end));
    computation.push(Instruction::Label(body));

    let (right_value, right_computation) = gen.generate_operand(right)?;
    computation.extend(right_computation);
    computation.push(Instruction::Assign {
        dest: result.clone(),
        ty: IrType::Boolean,
        rhs: Box::new(Instruction::SingleOp(right_value)),
    });
    computation.push(Instruction::Label(end));

    Ok(ExprResult::new(Instruction::SingleOp(result), computation))
}
