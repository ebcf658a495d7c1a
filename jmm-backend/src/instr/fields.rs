//! Field access lowering

use super::{load_operand, MethodEmitter};
use jmm_codegen::JvmInst;
use jmm_common::CompilerError;
use jmm_frontend::ir::{IrType, Operand};

/// `getfield Class/name descriptor` on the object operand
pub fn lower_getfield(
    em: &MethodEmitter,
    object: &Operand,
    field: &str,
    ty: &IrType,
) -> Result<Vec<JvmInst>, CompilerError> {
    let field_ref = em.class.field_ref(object, field, ty)?;
    let mut insts = load_operand(em, object)?;
    insts.push(JvmInst::Getfield(field_ref));
    Ok(insts)
}

/// `putfield Class/name descriptor` with object and value pushed in order
pub fn lower_putfield(
    em: &MethodEmitter,
    object: &Operand,
    field: &str,
    ty: &IrType,
    value: &Operand,
) -> Result<Vec<JvmInst>, CompilerError> {
    let field_ref = em.class.field_ref(object, field, ty)?;
    let mut insts = load_operand(em, object)?;
    insts.extend(load_operand(em, value)?);
    insts.push(JvmInst::Putfield(field_ref));
    Ok(insts)
}
