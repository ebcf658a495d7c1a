//! Branch instruction lowering
//!
//! A single-operand condition jumps when the value is non-zero; a binary
//! condition compares two ints directly.

use super::{load_operand, MethodEmitter};
use jmm_codegen::{Comparison, JvmInst};
use jmm_common::CompilerError;
use jmm_frontend::ir::{Condition, IrBinaryOp, Label};
use log::trace;

/// Map a relational IR operator onto the jump comparison
pub fn comparison(op: IrBinaryOp) -> Result<Comparison, CompilerError> {
    match op {
        IrBinaryOp::Lt => Ok(Comparison::Lt),
        IrBinaryOp::Gt => Ok(Comparison::Gt),
        IrBinaryOp::Le => Ok(Comparison::Le),
        IrBinaryOp::Ge => Ok(Comparison::Ge),
        other => Err(CompilerError::unsupported(format!("'{other}' as a branch comparison"))),
    }
}

/// Lower a conditional branch to assembly instructions
pub fn lower_branch_cond(
    em: &mut MethodEmitter,
    condition: &Condition,
    target: &Label,
) -> Result<Vec<JvmInst>, CompilerError> {
    trace!("lower_branch_cond: if ({condition}) goto {target}");

    match condition {
        Condition::Single(operand) => {
            let mut insts = load_operand(em, operand)?;
            insts.push(JvmInst::If(Comparison::Ne, target.to_string()));
            Ok(insts)
        }
        Condition::Compare { op, lhs, rhs } => {
            let cmp = comparison(*op)?;
            let mut insts = load_operand(em, lhs)?;
            insts.extend(load_operand(em, rhs)?);
            insts.push(JvmInst::IfIcmp(cmp, target.to_string()));
            Ok(insts)
        }
    }
}
