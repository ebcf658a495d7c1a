//! Binary operation code generation

use super::{ExprContext, ExprResult, TypedExpressionGenerator};
use crate::ir::{Instruction, IrBinaryOp, IrType};
use crate::typed_ast::{BinaryOp, TypedExpr};
use jmm_common::{CompilerError, Type};

pub fn generate_binary_operation(
    gen: &mut TypedExpressionGenerator,
    op: BinaryOp,
    left: &TypedExpr,
    right: &TypedExpr,
    result_type: &Type,
    ctx: ExprContext,
) -> Result<ExprResult, CompilerError> {
    let ir_op = match op {
        BinaryOp::Add => IrBinaryOp::Add,
        BinaryOp::Sub => IrBinaryOp::Sub,
        BinaryOp::Mul => IrBinaryOp::Mul,
        BinaryOp::Div => IrBinaryOp::Div,
        BinaryOp::Less => IrBinaryOp::Lt,
        BinaryOp::Greater => IrBinaryOp::Gt,
        BinaryOp::LessEqual => IrBinaryOp::Le,
        BinaryOp::GreaterEqual => IrBinaryOp::Ge,
        BinaryOp::And => return super::logical::generate_logical_and(gen, left, right),
    };

    let (lhs, mut computation) = gen.generate_operand(left)?;
    let (rhs, right_computation) = gen.generate_operand(right)?;
    computation.extend(right_computation);

    let value = Instruction::BinaryOp {
        op: ir_op,
        lhs,
        rhs,
        ty: IrType::from_type(result_type),
    };

    let fold = match ctx {
        ExprContext::AssignRhs => true,
        ExprContext::Condition => ir_op.is_comparison(),
        ExprContext::Value | ExprContext::Discard => false,
    };
    Ok(gen.finish(value, computation, fold))
}
