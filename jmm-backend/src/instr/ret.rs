//! Return instruction lowering

use super::{load_operand, slot_kind, MethodEmitter};
use jmm_codegen::{JvmInst, SlotKind};
use jmm_common::CompilerError;
use jmm_frontend::ir::{IrType, Operand};

pub fn lower_return(
    em: &MethodEmitter,
    value: Option<&Operand>,
    ty: &IrType,
) -> Result<Vec<JvmInst>, CompilerError> {
    let Some(value) = value else {
        return Ok(vec![JvmInst::Return]);
    };
    if ty.is_void() {
        return Err(CompilerError::unsupported(format!("returning {value} from void method '{}'", em.method.name)));
    }

    let mut insts = load_operand(em, value)?;
    insts.push(match slot_kind(ty)? {
        SlotKind::Int => JvmInst::Ireturn,
        SlotKind::Reference => JvmInst::Areturn,
    });
    Ok(insts)
}
