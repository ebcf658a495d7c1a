//! Assignment lowering
//!
//! The right-hand side pushes one value which is then stored into a local
//! slot or an array element.

use super::{array_store, load_operand, lower_value, slot_kind, MethodEmitter};
use jmm_codegen::{load, store, JvmInst, SlotKind};
use jmm_common::CompilerError;
use jmm_frontend::ir::{CallKind, Instruction, Operand};
use log::trace;

pub fn lower_assign(em: &mut MethodEmitter, dest: &Operand, rhs: &Instruction) -> Result<Vec<JvmInst>, CompilerError> {
    trace!("lower_assign: {dest} := {rhs}");

    match dest {
        Operand::Variable { name, ty } => {
            let slot = em.slot(name)?;
            match rhs {
                // `new C; dup` keeps a reference for the `<init>` call that follows
                Instruction::Call { kind: CallKind::New, receiver, return_type, .. } if !return_type.is_array() => {
                    let class = em.class.class_of(receiver)?;
                    em.mark_pending_init(name);
                    Ok(vec![JvmInst::New(class), JvmInst::Dup, store(SlotKind::Reference, slot)])
                }
                _ => {
                    let mut insts = lower_value(em, rhs)?;
                    insts.push(store(slot_kind(ty)?, slot));
                    Ok(insts)
                }
            }
        }

        Operand::ArrayElement { array, index, ty } => {
            let element_store = array_store(ty)?;
            let mut insts = vec![load(SlotKind::Reference, em.slot(array)?)];
            insts.extend(load_operand(em, index)?);
            insts.extend(lower_value(em, rhs)?);
            insts.push(element_store);
            Ok(insts)
        }

        Operand::Literal { .. } | Operand::This { .. } | Operand::Class { .. } => {
            Err(CompilerError::unsupported(format!("assignment to {dest}")))
        }
    }
}
