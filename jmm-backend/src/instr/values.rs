//! Value-producing instruction lowering
//!
//! Lowers an IR instruction used as an expression (the right-hand side of an
//! assignment) so that it leaves exactly one value on the operand stack.

use super::branch::comparison;
use super::{calls, fields, load_operand, MethodEmitter};
use jmm_codegen::{push_int, JvmInst};
use jmm_common::CompilerError;
use jmm_frontend::ir::{Instruction, IrBinaryOp, IrUnaryOp, Operand};
use log::debug;

/// Push the value of `instr`
pub fn lower_value(em: &mut MethodEmitter, instr: &Instruction) -> Result<Vec<JvmInst>, CompilerError> {
    match instr {
        Instruction::SingleOp(operand) => load_operand(em, operand),

        Instruction::BinaryOp { op, lhs, rhs, .. } => lower_binary(em, *op, lhs, rhs),

        Instruction::UnaryOp { op: IrUnaryOp::Not, operand, .. } => {
            let mut insts = load_operand(em, operand)?;
            insts.push(push_int(1));
            insts.push(JvmInst::Ixor);
            Ok(insts)
        }

        Instruction::GetField { object, field, ty } => fields::lower_getfield(em, object, field, ty),

        Instruction::Call { .. } => calls::lower_call_value(em, instr),

        Instruction::Assign { .. }
        | Instruction::Return { .. }
        | Instruction::PutField { .. }
        | Instruction::Branch { .. }
        | Instruction::Goto(_)
        | Instruction::Label(_) => Err(CompilerError::unsupported(format!("'{instr}' used as a value"))),
    }
}

/// Lower a binary operation to assembly instructions
///
/// Arithmetic and `&&` map to one opcode. A comparison becomes a
/// compare-and-branch that pushes 0 or 1:
///
/// ```text
///     if_icmp<op> cmp_N_true
///     iconst_0
///     goto cmp_N_end
/// cmp_N_true:
///     iconst_1
/// cmp_N_end:
/// ```
pub fn lower_binary(
    em: &mut MethodEmitter,
    op: IrBinaryOp,
    lhs: &Operand,
    rhs: &Operand,
) -> Result<Vec<JvmInst>, CompilerError> {
    debug!("lower_binary: {lhs} {op} {rhs}");

    let mut insts = load_operand(em, lhs)?;
    insts.extend(load_operand(em, rhs)?);

    let opcode = match op {
        IrBinaryOp::Add => JvmInst::Iadd,
        IrBinaryOp::Sub => JvmInst::Isub,
        IrBinaryOp::Mul => JvmInst::Imul,
        IrBinaryOp::Div => JvmInst::Idiv,
        // both sides are already evaluated booleans
        IrBinaryOp::And => JvmInst::Iand,
        IrBinaryOp::Lt | IrBinaryOp::Gt | IrBinaryOp::Le | IrBinaryOp::Ge => {
            let cmp = comparison(op)?;
            let (true_label, end_label) = em.naming.comparison_labels();
            insts.push(JvmInst::IfIcmp(cmp, true_label.clone()));
            insts.push(push_int(0));
            insts.push(JvmInst::Goto(end_label.clone()));
            insts.push(JvmInst::Label(true_label));
            insts.push(push_int(1));
            insts.push(JvmInst::Label(end_label));
            return Ok(insts);
        }
    };

    insts.push(opcode);
    Ok(insts)
}
